//! File-based tracing setup.
//!
//! The TUI owns stdout, so log output goes to a file instead:
//! `<cache dir>/datadeck/datadeck.log` unless `--log-file` says otherwise.
//! The filter is read from `DATADECK_LOG` and defaults to [`DEFAULT_FILTER`].

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub const ENV_LOG: &str = "DATADECK_LOG";
pub const DEFAULT_FILTER: &str = "datadeck=info";

/// Default log location, `None` when the platform has no cache directory.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("datadeck").join("datadeck.log"))
}

/// Build the filter from a directive string, falling back to the default
/// when it is missing or does not parse.
pub fn build_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber.
///
/// Returns the path being written to. Logging stays disabled (and `None` is
/// returned) if no path is available or the file cannot be opened.
pub fn init_logging(path: Option<&Path>) -> Option<PathBuf> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_log_path()?,
    };
    let file = open_log_file(&path).ok()?;
    let directive = std::env::var(ENV_LOG).ok();

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directive.as_deref()))
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .ok()?;

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_log_path_ends_with_file_name() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("datadeck/datadeck.log"));
        }
    }

    #[test]
    fn test_build_filter_defaults() {
        assert_eq!(build_filter(None).to_string(), DEFAULT_FILTER);
        assert_eq!(build_filter(Some("  ")).to_string(), DEFAULT_FILTER);
    }

    #[test]
    fn test_build_filter_uses_directive() {
        assert_eq!(build_filter(Some("debug")).to_string(), "debug");
    }

    #[test]
    fn test_open_log_file_creates_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("app.log");

        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "hello").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_open_log_file_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }
}
