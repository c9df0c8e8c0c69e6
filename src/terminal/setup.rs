//! Entering and leaving TUI mode.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter the alternate screen, preserving the user's scrollback.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen)
}

/// Leave raw mode and the alternate screen, then show the cursor.
///
/// Errors are ignored so this is safe to call from drop and panic paths,
/// and safe to call more than once.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Restore stdout from any state. Used by the panic hook.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
