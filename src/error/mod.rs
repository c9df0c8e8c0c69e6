//! Error types for datadeck.
//!
//! Two error families exist:
//!
//! - [`FetchError`]: the single failure kind a data provider can report. It is
//!   converted into the screen's error message at the coordinator boundary and
//!   never escapes as a crash.
//! - [`ConfigError`]: invalid command-line arguments or environment values,
//!   reported by the binary before the terminal is touched.
//!
//! # Example
//!
//! ```
//! use datadeck::error::{FetchError, FetchResult};
//!
//! fn load() -> FetchResult<Vec<String>> {
//!     Err(FetchError::failed("Network connection failed"))
//! }
//!
//! let err = load().unwrap_err();
//! assert_eq!(err.user_message(), "Network connection failed");
//! ```

mod config;
mod fetch;
mod result;

pub use config::ConfigError;
pub use fetch::{FetchError, UNKNOWN_ERROR_MESSAGE};
pub use result::FetchResult;
