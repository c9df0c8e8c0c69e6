//! Category buttons
//!
//! Four buttons in a two-by-two grid. The current category is drawn filled,
//! the others outlined.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use crate::models::Category;
use crate::ui::theme::{COLOR_BUTTON_FILL, COLOR_BUTTON_OUTLINE, COLOR_BUTTON_TEXT};

/// Height of one button row, borders included.
pub const BUTTON_ROW_HEIGHT: u16 = 3;

/// Text drawn inside a button: `[1] 👥 Users`.
pub fn button_label(category: Category) -> String {
    format!("[{}] {}", category.index() + 1, category.button_text())
}

/// Render the button grid into `area` (expects two rows of [`BUTTON_ROW_HEIGHT`]).
pub fn render_buttons(frame: &mut Frame, area: Rect, current: Category) {
    let rows = Layout::vertical([
        Constraint::Length(BUTTON_ROW_HEIGHT),
        Constraint::Length(BUTTON_ROW_HEIGHT),
    ])
    .split(area);

    for (row_area, pair) in rows.iter().zip(Category::ALL.chunks(2)) {
        let cells = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .spacing(1)
            .split(*row_area);
        for (cell, category) in cells.iter().zip(pair) {
            render_button(frame, *cell, *category, *category == current);
        }
    }
}

fn render_button(frame: &mut Frame, area: Rect, category: Category, selected: bool) {
    let (block, text_style) = if selected {
        (
            Block::bordered()
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(COLOR_BUTTON_FILL))
                .style(Style::default().bg(COLOR_BUTTON_FILL)),
            Style::default()
                .fg(COLOR_BUTTON_TEXT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(COLOR_BUTTON_OUTLINE)),
            Style::default().fg(COLOR_BUTTON_OUTLINE),
        )
    };

    let button = Paragraph::new(Line::styled(button_label(category), text_style))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(button, area);
}
