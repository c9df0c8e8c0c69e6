//! End-to-end behavior of the screen coordinator against the mock provider.

mod common;

use common::{assert_list_xor_error, mock_coordinator, select_and_settle};
use datadeck::coordinator::Lifecycle;
use datadeck::models::{Category, UserRecord};
use datadeck::state::ContentView;

#[tokio::test]
async fn test_every_category_ends_with_list_or_error() {
    let (mut coordinator, provider) = mock_coordinator();

    for category in Category::ALL {
        let state = select_and_settle(&mut coordinator, category).await;
        assert!(!state.is_loading());
        assert!(!state.results().is_empty_for(category));
        assert_eq!(state.error_message(), None);
        assert_list_xor_error(&state);
    }

    provider.set_error("Test error");
    for category in Category::ALL {
        let state = select_and_settle(&mut coordinator, category).await;
        assert!(!state.is_loading());
        assert_eq!(state.error_message(), Some("Test error"));
        assert!(state.results().is_empty_for(category));
        assert_list_xor_error(&state);
    }
}

#[tokio::test]
async fn test_at_most_one_list_after_each_fetch() {
    let (mut coordinator, _) = mock_coordinator();
    let order = [
        Category::Users,
        Category::Statistics,
        Category::Products,
        Category::News,
        Category::Users,
        Category::News,
    ];

    for category in order {
        let state = select_and_settle(&mut coordinator, category).await;
        assert_eq!(state.results().non_empty_count(), 1);
    }
}

#[tokio::test]
async fn test_initialize_loads_john_doe() {
    let (mut coordinator, _) = mock_coordinator();

    coordinator.initialize();
    let loading = coordinator.snapshot();
    assert!(loading.is_loading());
    assert_eq!(loading.current_category(), Category::Users);
    assert!(matches!(loading.content(), ContentView::Loading { .. }));

    coordinator.settle().await;
    let state = coordinator.snapshot();
    assert!(!state.is_loading());
    assert_eq!(state.users().len(), 3);
    assert!(state.users()[0].name().contains("John Doe"));
    assert!(matches!(state.content(), ContentView::Users(users) if users.len() == 3));
}

#[tokio::test]
async fn test_products_after_users_hides_users() {
    let (mut coordinator, _) = mock_coordinator();

    select_and_settle(&mut coordinator, Category::Users).await;
    let state = select_and_settle(&mut coordinator, Category::Products).await;

    assert_eq!(state.current_category(), Category::Products);
    assert_eq!(state.products().len(), 3);
    assert!(state.users().is_empty());
    match state.content() {
        ContentView::Lines { category, lines } => {
            assert_eq!(category, Category::Products);
            assert!(lines[0].contains("MacBook Pro"));
        }
        other => panic!("expected product lines, got {:?}", other),
    }
}

#[tokio::test]
async fn test_previous_list_kept_while_loading() {
    let (mut coordinator, provider) = mock_coordinator();
    select_and_settle(&mut coordinator, Category::Users).await;

    provider.set_delay(std::time::Duration::from_secs(30));
    coordinator.select(Category::News);

    let state = coordinator.snapshot();
    assert!(state.is_loading());
    assert_eq!(state.users().len(), 3);
    assert!(matches!(state.content(), ContentView::Loading { category: Category::News }));
}

#[tokio::test]
async fn test_network_failure_scenario() {
    let (mut coordinator, provider) = mock_coordinator();
    provider.set_error("Network connection failed");

    let state = select_and_settle(&mut coordinator, Category::Users).await;

    assert!(!state.is_loading());
    assert_eq!(state.error_message(), Some("Network connection failed"));
    assert!(state.users().is_empty());
    match state.content() {
        ContentView::Error { message, .. } => assert_eq!(message, "Network connection failed"),
        other => panic!("expected error view, got {:?}", other),
    }
    assert!(state.content().offers_retry());
}

#[tokio::test]
async fn test_failure_without_message_shows_unknown_error() {
    let (mut coordinator, provider) = mock_coordinator();
    provider.set_error_without_message();

    let state = select_and_settle(&mut coordinator, Category::Statistics).await;

    assert_eq!(state.error_message(), Some("Unknown error"));
}

#[tokio::test]
async fn test_failure_clears_stale_list_of_same_category() {
    let (mut coordinator, provider) = mock_coordinator();
    select_and_settle(&mut coordinator, Category::News).await;

    provider.set_error("Timeout");
    let state = select_and_settle(&mut coordinator, Category::News).await;

    assert_eq!(state.error_message(), Some("Timeout"));
    assert!(state.news().is_empty());
    assert_list_xor_error(&state);
}

#[tokio::test]
async fn test_retry_after_failure_repopulates() {
    let (mut coordinator, provider) = mock_coordinator();
    provider.set_error("Network connection failed");
    select_and_settle(&mut coordinator, Category::Products).await;

    provider.clear_error();
    coordinator.retry();
    let pending = coordinator.snapshot();
    assert!(pending.is_loading());
    assert_eq!(pending.error_message(), None);

    coordinator.settle().await;
    let state = coordinator.snapshot();
    assert_eq!(state.current_category(), Category::Products);
    assert_eq!(state.error_message(), None);
    assert_eq!(state.products().len(), 3);
    assert_eq!(provider.call_count(Category::Products), 2);
}

#[tokio::test]
async fn test_selecting_another_category_clears_error() {
    let (mut coordinator, provider) = mock_coordinator();
    provider.set_error("boom");
    select_and_settle(&mut coordinator, Category::Users).await;

    provider.clear_error();
    coordinator.select(Category::News);
    assert_eq!(coordinator.snapshot().error_message(), None);

    coordinator.settle().await;
    assert_eq!(coordinator.snapshot().news().len(), 3);
}

#[tokio::test]
async fn test_substituted_data_is_shown() {
    let (mut coordinator, provider) = mock_coordinator();
    provider.set_users(vec![UserRecord::new(
        42,
        "Ada Lovelace",
        "ada@example.com",
        "Research",
        true,
    )]);
    provider.set_statistics(vec!["only line".to_string()]);

    let users = select_and_settle(&mut coordinator, Category::Users).await;
    assert_eq!(users.users()[0].id(), 42);

    let stats = select_and_settle(&mut coordinator, Category::Statistics).await;
    assert_eq!(stats.statistics(), ["only line".to_string()]);
}

#[tokio::test]
async fn test_empty_result_shows_empty_state() {
    let (mut coordinator, provider) = mock_coordinator();
    provider.set_empty_data();

    let state = select_and_settle(&mut coordinator, Category::News).await;

    assert!(!state.is_loading());
    assert_eq!(state.error_message(), None);
    assert_eq!(
        state.content(),
        ContentView::Empty {
            category: Category::News
        }
    );
}

#[tokio::test]
async fn test_reset_restores_defaults() {
    let (mut coordinator, provider) = mock_coordinator();
    provider.set_empty_data();
    provider.set_error("x");
    provider.reset();

    let state = select_and_settle(&mut coordinator, Category::Users).await;
    assert_eq!(state.users().len(), 3);
}

#[tokio::test]
async fn test_subscriber_observes_loading_then_result() {
    let (mut coordinator, _) = mock_coordinator();
    let mut rx = coordinator.subscribe();

    coordinator.select(Category::Products);
    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().is_loading());

    coordinator.settle().await;
    rx.changed().await.unwrap();
    let state = rx.borrow_and_update().clone();
    assert!(!state.is_loading());
    assert_eq!(state.products().len(), 3);
}

#[tokio::test]
async fn test_dispose_stops_the_screen() {
    let (mut coordinator, provider) = mock_coordinator();
    provider.set_delay(std::time::Duration::from_secs(30));
    coordinator.initialize();
    assert!(coordinator.snapshot().is_loading());

    coordinator.dispose();

    assert_eq!(coordinator.lifecycle(), Lifecycle::Disposed);
    assert!(!coordinator.snapshot().is_loading());
    assert!(coordinator.select(Category::News).is_none());
    assert_eq!(coordinator.snapshot().current_category(), Category::Users);
}
