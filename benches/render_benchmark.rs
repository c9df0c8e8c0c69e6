//! Performance benchmarks for screen rendering
//!
//! Measures a full frame for each content state and for growing user lists.
//! Run with: cargo bench

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use datadeck::adapters::mock::MockDataProvider;
use datadeck::coordinator::ScreenCoordinator;
use datadeck::models::{Category, UserRecord};
use datadeck::state::ScreenState;
use datadeck::ui;
use ratatui::{backend::TestBackend, Terminal};

/// Drive a mock-backed coordinator to the state after fetching `category`.
fn settled_state(provider: MockDataProvider, category: Category) -> ScreenState {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("runtime");
    runtime.block_on(async {
        let mut coordinator = ScreenCoordinator::new(Arc::new(provider));
        coordinator.select(category);
        coordinator.settle().await;
        coordinator.snapshot()
    })
}

fn generate_users(count: u32) -> Vec<UserRecord> {
    (1..=count)
        .map(|id| {
            UserRecord::new(
                id,
                format!("User {}", id),
                format!("user{}@company.com", id),
                "Engineering",
                id % 3 != 0,
            )
        })
        .collect()
}

/// Benchmark one frame per content state
fn bench_render_states(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_state");

    let failing = MockDataProvider::new();
    failing.set_error("Network connection failed");
    let empty = MockDataProvider::new();
    empty.set_empty_data();

    let states = [
        ("idle", ScreenState::default()),
        ("users", settled_state(MockDataProvider::new(), Category::Users)),
        ("statistics", settled_state(MockDataProvider::new(), Category::Statistics)),
        ("error", settled_state(failing, Category::News)),
        ("empty", settled_state(empty, Category::Products)),
    ];

    for (name, state) in states.iter() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("terminal");
        group.bench_with_input(BenchmarkId::from_parameter(name), state, |b, state| {
            b.iter(|| {
                terminal
                    .draw(|f| ui::render(f, black_box(state), 0))
                    .expect("draw");
            });
        });
    }

    group.finish();
}

/// Benchmark user card rendering as the list grows
fn bench_render_user_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_user_list");

    for size in [10, 100, 1_000].iter() {
        let provider = MockDataProvider::new();
        provider.set_users(generate_users(*size));
        let state = settled_state(provider, Category::Users);
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("terminal");

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_users", size)),
            &state,
            |b, state| {
                b.iter(|| {
                    terminal
                        .draw(|f| ui::render(f, black_box(state), 0))
                        .expect("draw");
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_render_states, bench_render_user_list);
criterion_main!(benches);
