//! CLI module for datadeck.
//!
//! Parses command-line flags before the TUI starts:
//!
//! ```ignore
//! use datadeck::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args())? {
//!     CliCommand::Version => print_version(),
//!     CliCommand::Help => print_help(),
//!     CliCommand::Run(options) => { /* start the TUI */ }
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, usage, CliCommand, CliOptions};
pub use version::{print_version, version_line, VERSION};

/// Print usage to stdout.
pub fn print_help() {
    println!("{}", usage());
}
