//! UI rendering for the Data Sources screen
//!
//! The screen is laid out top to bottom:
//! - Title
//! - Category buttons (two rows of two)
//! - Content area
//! - Keybind hints
//!
//! Everything drawn here is derived from a [`ScreenState`] snapshot plus a
//! tick counter for the spinner. Rendering never mutates the screen state; it
//! only clamps the content scroll to what the frame can show.

mod buttons;
mod content;
mod theme;

pub use buttons::{button_label, BUTTON_ROW_HEIGHT};
pub use content::{loading_text, spinner_frame, EMPTY_TEXT, SPINNER_FRAMES};
pub use theme::{
    COLOR_ACCENT, COLOR_BADGE_ACTIVE, COLOR_BADGE_INACTIVE, COLOR_BORDER, COLOR_BUTTON_FILL,
    COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_LOADING,
};

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::input::Command;
use crate::models::Category;
use crate::state::{ContentScroll, ScreenState};
use buttons::render_buttons;
use content::render_content;

pub const TITLE: &str = "Data Sources";

/// Footer hints: the key to show and the command it runs.
const FOOTER_HINTS: [(&str, Command); 6] = [
    ("1-4", Command::Select(Category::Users)),
    ("Tab", Command::NextCategory),
    ("Shift+Tab", Command::PreviousCategory),
    ("↑↓", Command::ScrollDown),
    ("r", Command::Retry),
    ("q", Command::Quit),
];

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen with the content scrolled to the top.
pub fn render(frame: &mut Frame, state: &ScreenState, tick: u64) {
    render_scrolled(frame, state, tick, &mut ContentScroll::new());
}

/// Render the whole screen, scrolling the content area by `scroll`.
///
/// `scroll` is clamped to what this frame can show and keeps the bounds for
/// the next scroll command.
pub fn render_scrolled(frame: &mut Frame, state: &ScreenState, tick: u64, scroll: &mut ContentScroll) {
    let [title_area, buttons_area, content_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(BUTTON_ROW_HEIGHT * 2),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_title(frame, title_area);
    render_buttons(frame, buttons_area, state.current_category());
    render_content(frame, content_area, &state.content(), tick, scroll);
    render_footer(frame, footer_area, state);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::styled(
        TITLE,
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn render_footer(frame: &mut Frame, area: Rect, state: &ScreenState) {
    let key = Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(COLOR_DIM);

    let mut spans = Vec::with_capacity(FOOTER_HINTS.len() * 2 + 1);
    for (i, (keys, command)) in FOOTER_HINTS.iter().enumerate() {
        let gap = if i + 1 < FOOTER_HINTS.len() { "  " } else { "" };
        spans.push(Span::styled(*keys, key));
        spans.push(Span::styled(format!(" {}{}", command.description(), gap), text));
    }
    if state.is_loading() {
        spans.push(Span::styled("  · fetching", Style::default().fg(COLOR_LOADING)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
