//! Application state and logic for the TUI.
//!
//! [`App`] is the embedding shell around the [`ScreenCoordinator`]. It owns
//! the keybindings, the redraw flag, the tick counter and the content scroll
//! offset, and forwards
//! commands and fetch completions to the coordinator.

mod handlers;

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::adapters::LocalDataProvider;
use crate::config::AppConfig;
use crate::coordinator::{FetchCompletion, ScreenCoordinator};
use crate::input::KeybindingConfig;
use crate::state::{ContentScroll, ScreenState};
use crate::traits::DataProvider;

/// Represents the state of the running application.
pub struct App {
    /// Owner of the screen state
    pub coordinator: ScreenCoordinator,
    /// Key to command mapping
    pub keybindings: KeybindingConfig,
    /// Settings the app was started with
    pub config: AppConfig,
    /// Set when the event loop should exit
    pub should_quit: bool,
    /// Flag indicating the UI needs to be redrawn
    pub needs_redraw: bool,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    /// Content area scroll, reset on every selection
    pub scroll: ContentScroll,
    state_rx: watch::Receiver<ScreenState>,
}

impl App {
    /// Create an app backed by the local simulated provider.
    pub fn new(config: AppConfig) -> Self {
        let provider = Arc::new(LocalDataProvider::from_config(&config));
        Self::with_provider(config, provider)
    }

    /// Create an app backed by any provider.
    pub fn with_provider(config: AppConfig, provider: Arc<dyn DataProvider>) -> Self {
        let coordinator = ScreenCoordinator::with_initial_category(provider, config.initial_category);
        let state_rx = coordinator.subscribe();

        Self {
            coordinator,
            keybindings: KeybindingConfig::new(),
            config,
            should_quit: false,
            needs_redraw: true, // Start with redraw needed
            tick_count: 0,
            scroll: ContentScroll::new(),
            state_rx,
        }
    }

    /// Start the screen (first fetch). Must run inside a Tokio runtime.
    pub fn initialize(&mut self) {
        self.coordinator.initialize();
        self.scroll.reset();
        self.mark_dirty();
    }

    /// Tear the screen down before exit.
    pub fn dispose(&mut self) {
        self.coordinator.dispose();
    }

    /// Take the completion receiver so the event loop can select on it.
    pub fn take_completion_receiver(&mut self) -> Option<mpsc::UnboundedReceiver<FetchCompletion>> {
        self.coordinator.take_completion_receiver()
    }

    /// Snapshot of the state to render.
    pub fn screen_state(&self) -> ScreenState {
        self.coordinator.snapshot()
    }

    /// Advance the tick counter.
    ///
    /// Redraws are requested while a fetch is loading (spinner) and whenever
    /// the observed state changed since the last tick.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self.state_rx.has_changed().unwrap_or(false) {
            self.state_rx.borrow_and_update();
            self.mark_dirty();
        }
        if self.coordinator.state().is_loading() {
            self.mark_dirty();
        }
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockDataProvider;
    use crate::models::Category;

    fn test_app() -> (App, MockDataProvider) {
        let provider = MockDataProvider::new();
        let app = App::with_provider(AppConfig::default(), Arc::new(provider.clone()));
        (app, provider)
    }

    #[test]
    fn test_new_app_needs_redraw() {
        let (app, _) = test_app();
        assert!(app.needs_redraw);
        assert!(!app.should_quit);
        assert_eq!(app.tick_count, 0);
    }

    #[tokio::test]
    async fn test_tick_marks_dirty_while_loading() {
        let (mut app, provider) = test_app();
        provider.set_delay(std::time::Duration::from_secs(60));
        app.initialize();
        app.needs_redraw = false;

        app.tick();

        assert_eq!(app.tick_count, 1);
        assert!(app.needs_redraw);
    }

    #[tokio::test]
    async fn test_tick_is_quiet_when_idle() {
        let (mut app, _) = test_app();
        app.tick();
        app.needs_redraw = false;

        app.tick();

        assert!(!app.needs_redraw);
    }

    #[tokio::test]
    async fn test_initial_category_comes_from_config() {
        let provider = MockDataProvider::new();
        let config = AppConfig::default().with_initial_category(Category::News);
        let mut app = App::with_provider(config, Arc::new(provider.clone()));

        app.initialize();

        assert_eq!(app.screen_state().current_category(), Category::News);
        assert!(app.screen_state().is_loading());
    }
}
