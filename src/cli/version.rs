//! Version display for the datadeck CLI.

/// The current version of datadeck, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `datadeck <version>`
pub fn version_line() -> String {
    format!("datadeck {}", VERSION)
}

/// Handle the --version flag.
pub fn print_version() {
    println!("{}", version_line());
}
