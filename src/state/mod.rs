//! Screen state owned by the coordinator.
//!
//! - [`ScreenState`] - current category, loading flag, error and result lists
//! - [`CategoryResults`] - the four per-category result lists
//! - [`ContentView`] - what the content area should show, derived from state
//! - [`ContentScroll`] - the content area's scroll offset, owned by the shell

mod content;
mod screen;
mod scroll;

pub use content::ContentView;
pub use screen::{CategoryResults, ScreenState};
pub use scroll::ContentScroll;
