//! Fetch completions posted back to the coordinator.

use std::time::Duration;

use crate::error::FetchResult;
use crate::models::{Category, CategoryData};

/// Monotonically increasing id of a fetch request.
pub type RequestId = u64;

/// Identifies one issued fetch: which request, for which category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTag {
    pub request_id: RequestId,
    pub category: Category,
}

/// Result of a spawned fetch, delivered over the coordinator's channel.
#[derive(Debug, Clone)]
pub struct FetchCompletion {
    /// The request this result answers
    pub tag: FetchTag,
    /// Provider result
    pub result: FetchResult<CategoryData>,
    /// Time spent inside the provider
    pub elapsed: Duration,
}
