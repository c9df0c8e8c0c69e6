//! Key and message handlers for [`App`].

use crossterm::event::KeyEvent;

use super::App;
use crate::coordinator::FetchCompletion;
use crate::input::Command;

impl App {
    /// Translate a key press and execute it. Returns the command, if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        let command = self.keybindings.resolve(&key)?;
        tracing::debug!(?command, code = ?key.code, "Key command");
        self.execute(command);
        Some(command)
    }

    /// Execute a command against the coordinator.
    pub fn execute(&mut self, command: Command) {
        let current = self.coordinator.state().current_category();
        match command {
            Command::Quit => self.quit(),
            Command::Retry => {
                self.coordinator.retry();
                self.scroll.reset();
            }
            Command::Select(_) | Command::NextCategory | Command::PreviousCategory => {
                if let Some(category) = command.target_category(current) {
                    self.coordinator.select(category);
                    self.scroll.reset();
                }
            }
            Command::ScrollUp => self.scroll.scroll_up(1),
            Command::ScrollDown => self.scroll.scroll_down(1),
            Command::PageUp => self.scroll.page_up(),
            Command::PageDown => self.scroll.page_down(),
        }
        self.mark_dirty();
    }

    /// Forward a fetch completion. Redraws only if it was applied.
    pub fn handle_completion(&mut self, completion: FetchCompletion) {
        if self.coordinator.handle_completion(completion) {
            self.mark_dirty();
        }
    }
}
