//! Derived content for the content area.

use crate::models::{Category, UserRecord};

/// What the content area should display.
///
/// Produced by [`ScreenState::content`](super::ScreenState::content); the UI
/// renders it without consulting any other state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentView<'a> {
    /// A fetch for `category` is outstanding.
    Loading { category: Category },
    /// The latest fetch for `category` failed.
    Error {
        category: Category,
        message: &'a str,
    },
    /// User cards.
    Users(&'a [UserRecord]),
    /// Plain text cards for Products, News or Statistics.
    Lines {
        category: Category,
        lines: &'a [String],
    },
    /// Nothing to show for `category`.
    Empty { category: Category },
}

impl ContentView<'_> {
    /// The category this view belongs to.
    pub fn category(&self) -> Category {
        match self {
            ContentView::Loading { category }
            | ContentView::Error { category, .. }
            | ContentView::Lines { category, .. }
            | ContentView::Empty { category } => *category,
            ContentView::Users(_) => Category::Users,
        }
    }

    /// Whether a retry action should be offered.
    pub fn offers_retry(&self) -> bool {
        matches!(self, ContentView::Error { .. })
    }
}
