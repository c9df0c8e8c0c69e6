//! Content area
//!
//! Renders a [`ContentView`]: loading, error, user cards, text cards or the
//! empty state.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::models::UserRecord;
use crate::state::{ContentScroll, ContentView};
use crate::ui::theme::{
    COLOR_BADGE_ACTIVE, COLOR_BADGE_INACTIVE, COLOR_BORDER, COLOR_CARD, COLOR_DIM, COLOR_ERROR,
    COLOR_HEADER, COLOR_LOADING,
};

/// Spinner animation frames
pub const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

pub const EMPTY_TEXT: &str = "No data available";

/// Get the spinner frame for a tick count.
pub fn spinner_frame(tick: u64) -> char {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}

/// `Loading users...`
pub fn loading_text(view: &ContentView<'_>) -> String {
    format!("Loading {}...", view.category().name())
}

/// Render `view` inside a bordered block titled with its category.
///
/// List views scroll by `scroll`, which is clamped to this frame's content
/// height. Every other view is drawn from the top.
pub fn render_content(
    frame: &mut Frame,
    area: Rect,
    view: &ContentView<'_>,
    tick: u64,
    scroll: &mut ContentScroll,
) {
    let category = view.category();
    let title = match view {
        ContentView::Users(users) => format!(" {} · {} ", category.button_text(), users.len()),
        ContentView::Lines { lines, .. } => {
            format!(" {} · {} ", category.button_text(), lines.len())
        }
        _ => format!(" {} ", category.button_text()),
    };
    let block = Block::bordered()
        .title(title)
        .border_style(Style::default().fg(COLOR_BORDER));

    let paragraph = match view {
        ContentView::Loading { .. } => Paragraph::new(vec![
            Line::raw(""),
            Line::from(vec![
                Span::styled(
                    spinner_frame(tick).to_string(),
                    Style::default().fg(COLOR_LOADING),
                ),
                Span::raw(" "),
                Span::raw(loading_text(view)),
            ]),
        ])
        .alignment(Alignment::Center),
        ContentView::Error { message, .. } => Paragraph::new(vec![
            Line::raw(""),
            Line::styled(
                format!("❌ Error: {}", message),
                Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::styled("🔄 Retry (press r)", Style::default().fg(COLOR_HEADER)),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true }),
        ContentView::Users(users) => scrolled(user_cards(users), &block, area, scroll),
        ContentView::Lines { lines, .. } => scrolled(line_cards(lines), &block, area, scroll),
        ContentView::Empty { .. } => Paragraph::new(vec![
            Line::raw(""),
            Line::styled(EMPTY_TEXT, Style::default().fg(COLOR_DIM)),
        ])
        .alignment(Alignment::Center),
    };

    if !matches!(view, ContentView::Users(_) | ContentView::Lines { .. }) {
        scroll.set_bounds(0, block.inner(area).height);
    }

    frame.render_widget(paragraph.block(block), area);
}

/// Cards never wrap, so each line is one row.
fn scrolled<'a>(
    lines: Vec<Line<'a>>,
    block: &Block<'_>,
    area: Rect,
    scroll: &mut ContentScroll,
) -> Paragraph<'a> {
    let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    scroll.set_bounds(total, block.inner(area).height);
    Paragraph::new(lines).scroll((scroll.offset(), 0))
}

fn user_cards(users: &[UserRecord]) -> Vec<Line<'_>> {
    let mut lines = Vec::with_capacity(users.len() * 5);
    for user in users {
        let badge_color = if user.is_active() {
            COLOR_BADGE_ACTIVE
        } else {
            COLOR_BADGE_INACTIVE
        };
        lines.push(Line::from(vec![
            Span::styled(
                user.name(),
                Style::default()
                    .fg(COLOR_HEADER)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", user.status_label()),
                Style::default().fg(badge_color),
            ),
        ]));
        lines.push(Line::raw(format!("  📧 {}", user.email())));
        lines.push(Line::raw(format!("  🏢 {}", user.department())));
        lines.push(Line::styled(
            format!("  🆔 ID: {}", user.id()),
            Style::default().fg(COLOR_DIM),
        ));
        lines.push(Line::raw(""));
    }
    lines
}

fn line_cards(items: &[String]) -> Vec<Line<'_>> {
    items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled("│ ", Style::default().fg(COLOR_CARD)),
                Span::raw(item.as_str()),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_frame(0), '◐');
        assert_eq!(spinner_frame(1), '◓');
        assert_eq!(spinner_frame(4), '◐');
    }

    #[test]
    fn test_loading_text_uses_lowercase_name() {
        let view = ContentView::Loading {
            category: Category::Statistics,
        };
        assert_eq!(loading_text(&view), "Loading statistics...");
    }

    #[test]
    fn test_user_card_has_five_lines_per_user() {
        let users = vec![
            UserRecord::new(1, "A", "a@example.com", "Ops", true),
            UserRecord::new(2, "B", "b@example.com", "Ops", false),
        ];
        let lines = user_cards(&users);
        assert_eq!(lines.len(), 10);
        assert!(lines[0].to_string().contains("[Active]"));
        assert!(lines[5].to_string().contains("[Inactive]"));
        assert!(lines[3].to_string().contains("ID: 1"));
    }

    #[test]
    fn test_line_cards_one_per_item() {
        let items = vec!["one".to_string(), "two".to_string()];
        let lines = line_cards(&items);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].to_string().ends_with("two"));
    }
}
