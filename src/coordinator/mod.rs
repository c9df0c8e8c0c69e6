//! Screen state coordinator.
//!
//! [`ScreenCoordinator`] owns the [`ScreenState`] and mediates between
//! category selections and the [`DataProvider`]:
//!
//! 1. `select(category)` makes the category current, sets loading, clears the
//!    error and spawns the provider call on the Tokio runtime.
//! 2. The spawned task posts a [`FetchCompletion`] on an unbounded channel.
//! 3. `handle_completion` applies the result if its tag is still the latest
//!    request, or discards it as stale.
//!
//! Every state change is published on a `watch` channel, so any number of
//! observers can [`subscribe`](ScreenCoordinator::subscribe).
//!
//! Fetches are never cancelled on reselection. Only
//! [`dispose`](ScreenCoordinator::dispose) aborts work still in flight.

mod messages;

pub use messages::{FetchCompletion, FetchTag, RequestId};

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::models::Category;
use crate::state::ScreenState;
use crate::traits::DataProvider;

/// Where the coordinator is in its explicit lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Built, no fetch issued yet
    Created,
    /// `initialize` ran or a selection was made
    Active,
    /// Torn down; selections are ignored
    Disposed,
}

/// Owner of the screen state and the only place it is mutated.
pub struct ScreenCoordinator {
    provider: Arc<dyn DataProvider>,
    state: watch::Sender<ScreenState>,
    completion_tx: mpsc::UnboundedSender<FetchCompletion>,
    completion_rx: Option<mpsc::UnboundedReceiver<FetchCompletion>>,
    next_request_id: RequestId,
    current_request: Option<FetchTag>,
    in_flight: Vec<JoinHandle<()>>,
    initial_category: Category,
    lifecycle: Lifecycle,
}

impl ScreenCoordinator {
    /// Create a coordinator whose first fetch will be Users.
    pub fn new(provider: Arc<dyn DataProvider>) -> Self {
        Self::with_initial_category(provider, Category::Users)
    }

    /// Create a coordinator whose first fetch will be `category`.
    pub fn with_initial_category(provider: Arc<dyn DataProvider>, category: Category) -> Self {
        let (state, _) = watch::channel(ScreenState::new(category));
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();

        Self {
            provider,
            state,
            completion_tx,
            completion_rx: Some(completion_rx),
            next_request_id: 0,
            current_request: None,
            in_flight: Vec::new(),
            initial_category: category,
            lifecycle: Lifecycle::Created,
        }
    }

    /// Run the initial selection. Calling it again is a no-op.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn initialize(&mut self) -> Option<FetchTag> {
        if self.lifecycle != Lifecycle::Created {
            tracing::debug!(lifecycle = ?self.lifecycle, "initialize ignored");
            return None;
        }
        tracing::info!(category = %self.initial_category, "Initializing screen");
        self.select(self.initial_category)
    }

    /// Select `category` and start fetching it.
    ///
    /// Returns the tag of the issued fetch, or `None` once disposed. Must be
    /// called from within a Tokio runtime.
    pub fn select(&mut self, category: Category) -> Option<FetchTag> {
        if self.lifecycle == Lifecycle::Disposed {
            tracing::warn!(category = %category, "select after dispose ignored");
            return None;
        }
        self.lifecycle = Lifecycle::Active;

        self.next_request_id += 1;
        let tag = FetchTag {
            request_id: self.next_request_id,
            category,
        };
        if let Some(previous) = self.current_request.replace(tag) {
            tracing::debug!(
                superseded = previous.request_id,
                superseded_category = %previous.category,
                "Selection supersedes in-flight fetch"
            );
        }

        self.state.send_modify(|state| state.begin_fetch(category));
        tracing::info!(category = %category, request_id = tag.request_id, "Fetch started");

        self.in_flight.retain(|handle| !handle.is_finished());
        let provider = Arc::clone(&self.provider);
        let tx = self.completion_tx.clone();
        let handle = tokio::spawn(async move {
            let started = tokio::time::Instant::now();
            let result = provider.fetch(category).await;
            let completion = FetchCompletion {
                tag,
                result,
                elapsed: started.elapsed(),
            };
            // Receiver is gone only after dispose.
            let _ = tx.send(completion);
        });
        self.in_flight.push(handle);

        Some(tag)
    }

    /// Re-run the selection of the current category.
    pub fn retry(&mut self) -> Option<FetchTag> {
        let category = self.state.borrow().current_category();
        tracing::info!(category = %category, "Retry requested");
        self.select(category)
    }

    /// Apply a completed fetch. Returns `false` if it was stale and dropped.
    pub fn handle_completion(&mut self, completion: FetchCompletion) -> bool {
        let FetchCompletion {
            tag,
            result,
            elapsed,
        } = completion;

        if self.current_request != Some(tag) {
            tracing::debug!(
                category = %tag.category,
                request_id = tag.request_id,
                current = ?self.current_request.map(|t| t.request_id),
                "Discarding stale response"
            );
            return false;
        }
        self.current_request = None;

        let elapsed_ms = elapsed.as_millis() as u64;
        match result {
            Ok(data) => {
                tracing::info!(
                    category = %tag.category,
                    request_id = tag.request_id,
                    items = data.len(),
                    elapsed_ms,
                    "Fetch completed"
                );
                self.state.send_modify(|state| state.complete_success(data));
            }
            Err(err) => {
                tracing::warn!(
                    category = %tag.category,
                    request_id = tag.request_id,
                    elapsed_ms,
                    error = %err,
                    "Fetch failed"
                );
                self.state.send_modify(|state| state.complete_failure(&err));
            }
        }
        true
    }

    /// Hand the completion receiver to an event loop that selects over it.
    ///
    /// After this, [`next_completion`](Self::next_completion) and
    /// [`settle`](Self::settle) no longer receive anything.
    pub fn take_completion_receiver(&mut self) -> Option<mpsc::UnboundedReceiver<FetchCompletion>> {
        self.completion_rx.take()
    }

    /// Wait for the next completion on the coordinator's own receiver.
    pub async fn next_completion(&mut self) -> Option<FetchCompletion> {
        match self.completion_rx.as_mut() {
            Some(rx) => rx.recv().await,
            None => None,
        }
    }

    /// Receive and apply one completion. Returns whether it was applied.
    pub async fn process_next(&mut self) -> bool {
        match self.next_completion().await {
            Some(completion) => self.handle_completion(completion),
            None => false,
        }
    }

    /// Process completions until the latest request has resolved.
    pub async fn settle(&mut self) {
        while self.current_request.is_some() {
            match self.next_completion().await {
                Some(completion) => {
                    self.handle_completion(completion);
                }
                None => break,
            }
        }
    }

    /// Tear down: abort outstanding fetches and ignore further selections.
    pub fn dispose(&mut self) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }
        let mut aborted = 0usize;
        for handle in self.in_flight.drain(..) {
            if !handle.is_finished() {
                handle.abort();
                aborted += 1;
            }
        }
        tracing::info!(aborted, "Disposing screen");

        self.lifecycle = Lifecycle::Disposed;
        self.current_request = None;
        self.completion_rx = None;
        self.state.send_modify(|state| state.abandon_loading());
    }

    /// Observe state changes.
    pub fn subscribe(&self) -> watch::Receiver<ScreenState> {
        self.state.subscribe()
    }

    /// Borrow the current state.
    ///
    /// Holding the returned guard blocks state updates; drop it quickly.
    pub fn state(&self) -> watch::Ref<'_, ScreenState> {
        self.state.borrow()
    }

    /// Clone the current state.
    pub fn snapshot(&self) -> ScreenState {
        self.state.borrow().clone()
    }

    /// The fetch whose result will be applied next, if any.
    pub fn current_request(&self) -> Option<FetchTag> {
        self.current_request
    }

    pub fn is_fetch_in_flight(&self) -> bool {
        self.current_request.is_some()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }
}

impl Drop for ScreenCoordinator {
    fn drop(&mut self) {
        for handle in self.in_flight.drain(..) {
            handle.abort();
        }
    }
}
