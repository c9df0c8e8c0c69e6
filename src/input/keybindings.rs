//! Default keybindings for the application.
//!
//! This module defines the default key bindings that map key combinations
//! to commands.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use crate::models::Category;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    /// Creates a new key combo with the given code and modifiers.
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Creates a key combo with Shift modifier.
    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

impl From<&KeyEvent> for KeyCombo {
    fn from(event: &KeyEvent) -> Self {
        Self::new(event.code, event.modifiers)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    bindings: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut bindings = HashMap::new();

        for category in Category::ALL {
            let digit = char::from(b'1' + category.index() as u8);
            bindings.insert(KeyCombo::plain(KeyCode::Char(digit)), Command::Select(category));
        }

        bindings.insert(KeyCombo::plain(KeyCode::Tab), Command::NextCategory);
        bindings.insert(KeyCombo::plain(KeyCode::Right), Command::NextCategory);
        // Terminals report Shift+Tab as BackTab, with or without the modifier
        bindings.insert(KeyCombo::plain(KeyCode::BackTab), Command::PreviousCategory);
        bindings.insert(KeyCombo::shift(KeyCode::BackTab), Command::PreviousCategory);
        bindings.insert(KeyCombo::plain(KeyCode::Left), Command::PreviousCategory);

        bindings.insert(KeyCombo::plain(KeyCode::Up), Command::ScrollUp);
        bindings.insert(KeyCombo::plain(KeyCode::Char('k')), Command::ScrollUp);
        bindings.insert(KeyCombo::plain(KeyCode::Down), Command::ScrollDown);
        bindings.insert(KeyCombo::plain(KeyCode::Char('j')), Command::ScrollDown);
        bindings.insert(KeyCombo::plain(KeyCode::PageUp), Command::PageUp);
        bindings.insert(KeyCombo::plain(KeyCode::PageDown), Command::PageDown);

        bindings.insert(KeyCombo::plain(KeyCode::Char('r')), Command::Retry);

        bindings.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        bindings.insert(KeyCombo::plain(KeyCode::Esc), Command::Quit);
        bindings.insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);

        Self { bindings }
    }

    /// Maps a key event to a command.
    ///
    /// Release events are ignored. A combo carrying only SHIFT falls back to
    /// the plain binding, since some terminals report `R` as Shift+`R`.
    pub fn resolve(&self, event: &KeyEvent) -> Option<Command> {
        if event.kind == KeyEventKind::Release {
            return None;
        }

        let combo = KeyCombo::from(event);
        if let Some(command) = self.bindings.get(&combo) {
            return Some(*command);
        }

        if combo.modifiers == KeyModifiers::SHIFT {
            let code = match combo.code {
                KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
                other => other,
            };
            return self.bindings.get(&KeyCombo::plain(code)).copied();
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_key_combo_plain() {
        let combo = KeyCombo::plain(KeyCode::Enter);
        assert_eq!(combo.code, KeyCode::Enter);
        assert_eq!(combo.modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn test_key_combo_ctrl() {
        let combo = KeyCombo::ctrl(KeyCode::Char('c'));
        assert_eq!(combo.code, KeyCode::Char('c'));
        assert_eq!(combo.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_number_keys_select_categories() {
        let config = KeybindingConfig::new();
        for (digit, category) in ['1', '2', '3', '4'].into_iter().zip(Category::ALL) {
            assert_eq!(
                config.resolve(&key(KeyCode::Char(digit), KeyModifiers::NONE)),
                Some(Command::Select(category))
            );
        }
        assert_eq!(
            config.resolve(&key(KeyCode::Char('5'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_cycling_keys() {
        let config = KeybindingConfig::new();
        assert_eq!(
            config.resolve(&key(KeyCode::Tab, KeyModifiers::NONE)),
            Some(Command::NextCategory)
        );
        assert_eq!(
            config.resolve(&key(KeyCode::Right, KeyModifiers::NONE)),
            Some(Command::NextCategory)
        );
        assert_eq!(
            config.resolve(&key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(Command::PreviousCategory)
        );
        assert_eq!(
            config.resolve(&key(KeyCode::Left, KeyModifiers::NONE)),
            Some(Command::PreviousCategory)
        );
    }

    #[test]
    fn test_quit_keys() {
        let config = KeybindingConfig::new();
        for event in [
            key(KeyCode::Char('q'), KeyModifiers::NONE),
            key(KeyCode::Esc, KeyModifiers::NONE),
            key(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            assert_eq!(config.resolve(&event), Some(Command::Quit));
        }
    }

    #[test]
    fn test_shift_falls_back_to_plain() {
        let config = KeybindingConfig::new();
        assert_eq!(
            config.resolve(&key(KeyCode::Char('R'), KeyModifiers::SHIFT)),
            Some(Command::Retry)
        );
    }

    #[test]
    fn test_plain_c_is_unbound() {
        let config = KeybindingConfig::new();
        assert_eq!(
            config.resolve(&key(KeyCode::Char('c'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_release_events_ignored() {
        let config = KeybindingConfig::new();
        let mut event = key(KeyCode::Char('q'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(config.resolve(&event), None);
    }

    #[test]
    fn test_scroll_keys() {
        let config = KeybindingConfig::new();
        for (code, command) in [
            (KeyCode::Up, Command::ScrollUp),
            (KeyCode::Char('k'), Command::ScrollUp),
            (KeyCode::Down, Command::ScrollDown),
            (KeyCode::Char('j'), Command::ScrollDown),
            (KeyCode::PageUp, Command::PageUp),
            (KeyCode::PageDown, Command::PageDown),
        ] {
            assert_eq!(config.resolve(&key(code, KeyModifiers::NONE)), Some(command));
        }
    }
}
