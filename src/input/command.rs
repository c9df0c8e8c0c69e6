//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum decouples key bindings from their effects.

use crate::models::Category;

/// Represents all commands that can be triggered by keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select a category directly (1-4)
    Select(Category),
    /// Move to the next category button (Tab, Right)
    NextCategory,
    /// Move to the previous category button (Shift+Tab, Left)
    PreviousCategory,
    /// Re-run the fetch for the current category (r)
    Retry,
    /// Scroll the content up one row (Up, k)
    ScrollUp,
    /// Scroll the content down one row (Down, j)
    ScrollDown,
    /// Scroll the content up one page (PageUp)
    PageUp,
    /// Scroll the content down one page (PageDown)
    PageDown,
    /// Quit the application (q, Esc, Ctrl+C)
    Quit,
}

impl Command {
    /// Short description shown in the footer hints.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Select(_) => "select",
            Command::NextCategory => "next",
            Command::PreviousCategory => "prev",
            Command::Retry => "retry",
            Command::ScrollUp | Command::ScrollDown => "scroll",
            Command::PageUp | Command::PageDown => "page",
            Command::Quit => "quit",
        }
    }

    /// Resolve the category this command would select, given the current one.
    pub fn target_category(&self, current: Category) -> Option<Category> {
        match self {
            Command::Select(category) => Some(*category),
            Command::NextCategory => Some(current.next()),
            Command::PreviousCategory => Some(current.previous()),
            _ => None,
        }
    }
}
