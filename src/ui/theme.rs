//! Color theme constants for the datadeck UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color - white for the title
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

// ============================================================================
// Category Buttons
// ============================================================================

/// Fill for the selected category button - blue #007ACC
pub const COLOR_BUTTON_FILL: Color = Color::Rgb(0, 122, 204);

/// Text on the filled button
pub const COLOR_BUTTON_TEXT: Color = Color::White;

/// Outline of the unselected buttons
pub const COLOR_BUTTON_OUTLINE: Color = Color::Rgb(0, 122, 204);

// ============================================================================
// Content States
// ============================================================================

/// Loading spinner - bright green
pub const COLOR_LOADING: Color = Color::LightGreen;

/// Error text - red
pub const COLOR_ERROR: Color = Color::Red;

/// Active user badge - green #04B575
pub const COLOR_BADGE_ACTIVE: Color = Color::Rgb(4, 181, 117);

/// Inactive user badge - gray
pub const COLOR_BADGE_INACTIVE: Color = Color::Rgb(128, 128, 128);

/// Card border for list entries
pub const COLOR_CARD: Color = Color::Gray;
