//! Common test utilities for integration tests.
//!
//! Reusable fixtures and helpers for driving the coordinator and app with a
//! [`MockDataProvider`] and inspecting rendered output.

#![allow(dead_code)]

use std::sync::Arc;

use datadeck::adapters::mock::MockDataProvider;
use datadeck::app::App;
use datadeck::config::AppConfig;
use datadeck::coordinator::ScreenCoordinator;
use datadeck::models::Category;
use datadeck::state::ScreenState;
use datadeck::ui;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// Coordinator wired to a fresh mock; the mock handle shares its config.
pub fn mock_coordinator() -> (ScreenCoordinator, MockDataProvider) {
    let provider = MockDataProvider::new();
    let coordinator = ScreenCoordinator::new(Arc::new(provider.clone()));
    (coordinator, provider)
}

/// App wired to a fresh mock.
pub fn mock_app() -> (App, MockDataProvider) {
    let provider = MockDataProvider::new();
    let app = App::with_provider(AppConfig::default(), Arc::new(provider.clone()));
    (app, provider)
}

/// Select `category` and wait until its fetch resolves.
pub async fn select_and_settle(coordinator: &mut ScreenCoordinator, category: Category) -> ScreenState {
    coordinator.select(category);
    coordinator.settle().await;
    coordinator.snapshot()
}

/// Check the "list or error, never both" rule for the current category.
pub fn assert_list_xor_error(state: &ScreenState) {
    let has_list = !state.results().is_empty_for(state.current_category());
    let has_error = state.error_message().is_some();
    assert!(
        !(has_list && has_error),
        "{:?} shows both a list and an error",
        state.current_category()
    );
}

/// Concatenate the buffer's cell symbols, one line per row.
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

/// Render `state` into a test terminal and return its text.
pub fn render_text(state: &ScreenState, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::render(f, state, 0)).unwrap();
    buffer_text(terminal.backend().buffer())
}

/// Render the app's current state with its scroll offset, as the event loop does.
pub fn render_app_text(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    let state = app.screen_state();
    let tick = app.tick_count;
    terminal
        .draw(|f| ui::render_scrolled(f, &state, tick, &mut app.scroll))
        .unwrap();
    buffer_text(terminal.backend().buffer())
}
