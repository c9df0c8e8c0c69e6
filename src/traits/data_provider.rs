//! Data provider trait abstraction.
//!
//! The screen only ever talks to its data through this trait. The production
//! implementation simulates latency over static lists; tests substitute
//! [`MockDataProvider`](crate::adapters::mock::MockDataProvider).

use async_trait::async_trait;

use crate::error::FetchResult;
use crate::models::{Category, CategoryData, UserRecord};

/// Asynchronous retrieval of the four data categories.
///
/// Every operation takes no input and resolves to a display-ready list or a
/// [`FetchError`](crate::error::FetchError). Implementations must not block
/// the calling thread while waiting.
///
/// # Example
///
/// ```
/// use datadeck::adapters::mock::MockDataProvider;
/// use datadeck::models::Category;
/// use datadeck::traits::DataProvider;
///
/// # tokio_test_block(async {
/// let provider = MockDataProvider::new();
/// let data = provider.fetch(Category::News).await.unwrap();
/// assert_eq!(data.category(), Category::News);
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Runtime::new().unwrap().block_on(f)
/// # }
/// ```
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Fetch the user records.
    async fn fetch_users(&self) -> FetchResult<Vec<UserRecord>>;

    /// Fetch the product lines.
    async fn fetch_products(&self) -> FetchResult<Vec<String>>;

    /// Fetch the news headlines.
    async fn fetch_news(&self) -> FetchResult<Vec<String>>;

    /// Fetch the statistics lines.
    async fn fetch_statistics(&self) -> FetchResult<Vec<String>>;

    /// Fetch whichever category is asked for, tagging the result.
    async fn fetch(&self, category: Category) -> FetchResult<CategoryData> {
        match category {
            Category::Users => self.fetch_users().await.map(CategoryData::Users),
            Category::Products => self.fetch_products().await.map(CategoryData::Products),
            Category::News => self.fetch_news().await.map(CategoryData::News),
            Category::Statistics => self.fetch_statistics().await.map(CategoryData::Statistics),
        }
    }
}
