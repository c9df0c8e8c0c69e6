//! Input handling module for keyboard and command processing.
//!
//! All key handling goes through one translation step:
//!
//! ```text
//! KeyEvent -> KeybindingConfig::resolve() -> Command -> App::execute()
//! ```
//!
//! # Example
//!
//! ```
//! use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
//! use datadeck::input::{Command, KeybindingConfig};
//!
//! let bindings = KeybindingConfig::new();
//! let event = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
//! assert_eq!(bindings.resolve(&event), Some(Command::Retry));
//! ```

pub mod command;
pub mod keybindings;

pub use command::Command;
pub use keybindings::{KeyCombo, KeybindingConfig};
