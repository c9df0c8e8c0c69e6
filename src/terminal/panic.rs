//! Panic hook that puts the terminal back before the panic report prints.
//!
//! datadeck only switches on raw mode and the alternate screen (no mouse
//! capture, no keyboard enhancement flags), so restoring means leaving both
//! and showing the cursor again. See [`emergency_restore`].

use super::setup::emergency_restore;
use std::panic;

/// Install the terminal-restoring hook in front of the current one.
///
/// `main` calls this after `color_eyre::install()`, so color-eyre's report
/// is what prints, on the primary screen and outside raw mode.
pub fn setup_panic_hook() {
    chain_before_current_hook(emergency_restore);
}

fn chain_before_current_hook(restore: fn()) {
    let report = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore();
        report(info);
    }));
}
