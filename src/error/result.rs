//! Result type alias for provider operations.

use super::fetch::FetchError;

/// Type alias for Results returned by data provider operations.
///
/// # Example
///
/// ```
/// use datadeck::error::FetchResult;
///
/// fn headlines() -> FetchResult<Vec<String>> {
///     Ok(vec!["🚀 Launch".to_string()])
/// }
///
/// assert_eq!(headlines().unwrap().len(), 1);
/// ```
pub type FetchResult<T> = Result<T, FetchError>;
