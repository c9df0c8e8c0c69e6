//! Configurable data provider for testing.
//!
//! Mirrors the production provider's contract while letting tests swap the
//! data per category, force failures, stage slow responses and count calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::error::{FetchError, FetchResult};
use crate::models::{Category, UserRecord};
use crate::traits::DataProvider;

/// Mock data provider for testing.
///
/// The provider is cheaply cloneable; clones share the same configuration,
/// so a test can keep a handle after passing one into the coordinator.
///
/// The outcome of a fetch (data or failure) is captured when the fetch is
/// issued. The configured delay is then awaited before it resolves.
///
/// # Example
///
/// ```
/// use datadeck::adapters::mock::MockDataProvider;
///
/// let provider = MockDataProvider::new();
/// provider.set_error("Network connection failed");
/// provider.reset();
/// assert_eq!(provider.users().len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockDataProvider {
    state: Arc<Mutex<MockState>>,
}

#[derive(Debug)]
struct MockState {
    users: Vec<UserRecord>,
    products: Vec<String>,
    news: Vec<String>,
    statistics: Vec<String>,
    failure: Option<FetchError>,
    delay: Duration,
    category_delays: HashMap<Category, Duration>,
    calls: HashMap<Category, usize>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            users: MockDataProvider::default_users(),
            products: MockDataProvider::default_products(),
            news: MockDataProvider::default_news(),
            statistics: MockDataProvider::default_statistics(),
            failure: None,
            delay: Duration::ZERO,
            category_delays: HashMap::new(),
            calls: HashMap::new(),
        }
    }
}

impl MockDataProvider {
    /// Create a provider serving the default fixtures with no delay.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut MockState) -> R) -> R {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }

    /// Replace the users returned by `fetch_users`.
    pub fn set_users(&self, users: Vec<UserRecord>) {
        self.with_state(|s| s.users = users);
    }

    /// Replace the lines returned by `fetch_products`.
    pub fn set_products(&self, products: Vec<String>) {
        self.with_state(|s| s.products = products);
    }

    /// Replace the lines returned by `fetch_news`.
    pub fn set_news(&self, news: Vec<String>) {
        self.with_state(|s| s.news = news);
    }

    /// Replace the lines returned by `fetch_statistics`.
    pub fn set_statistics(&self, statistics: Vec<String>) {
        self.with_state(|s| s.statistics = statistics);
    }

    /// Make every fetch fail with `message`.
    pub fn set_error(&self, message: impl Into<String>) {
        let failure = FetchError::failed(message);
        self.with_state(|s| s.failure = Some(failure));
    }

    /// Make every fetch fail without a message.
    pub fn set_error_without_message(&self) {
        self.with_state(|s| s.failure = Some(FetchError::Unspecified));
    }

    /// Stop forcing failures.
    pub fn clear_error(&self) {
        self.with_state(|s| s.failure = None);
    }

    /// Make every category return an empty list.
    pub fn set_empty_data(&self) {
        self.with_state(|s| {
            s.users.clear();
            s.products.clear();
            s.news.clear();
            s.statistics.clear();
        });
    }

    /// Delay applied to every fetch without a per-category override.
    pub fn set_delay(&self, delay: Duration) {
        self.with_state(|s| s.delay = delay);
    }

    /// Delay applied to fetches of one category.
    pub fn set_category_delay(&self, category: Category, delay: Duration) {
        self.with_state(|s| {
            s.category_delays.insert(category, delay);
        });
    }

    /// Restore default data, clear failures and delays, and zero the call counts.
    pub fn reset(&self) {
        self.with_state(|s| *s = MockState::default());
    }

    /// How many times `category` has been fetched.
    pub fn call_count(&self, category: Category) -> usize {
        self.with_state(|s| s.calls.get(&category).copied().unwrap_or(0))
    }

    /// Total number of fetches across all categories.
    pub fn total_calls(&self) -> usize {
        self.with_state(|s| s.calls.values().sum())
    }

    /// The users currently configured.
    pub fn users(&self) -> Vec<UserRecord> {
        self.with_state(|s| s.users.clone())
    }

    /// Default user fixtures.
    pub fn default_users() -> Vec<UserRecord> {
        vec![
            UserRecord::new(1, "👨‍💻 John Doe", "john.doe@company.com", "Engineering", true),
            UserRecord::new(2, "👩‍💼 Jane Smith", "jane.smith@company.com", "Marketing", true),
            UserRecord::new(3, "👩‍🎨 Mike Johnson", "mike.johnson@company.com", "Design", false),
        ]
    }

    /// Default product fixtures.
    pub fn default_products() -> Vec<String> {
        vec![
            "💻 MacBook Pro M3 - $2,499".to_string(),
            "📱 iPhone 15 Pro - $1,199".to_string(),
            "⌚ Apple Watch Series 9 - $399".to_string(),
        ]
    }

    /// Default news fixtures.
    pub fn default_news() -> Vec<String> {
        vec![
            "🚀 SpaceX Successfully Launches New Satellite Mission".to_string(),
            "💡 Breakthrough in Quantum Computing Achieved by Tech Giants".to_string(),
            "🌱 New Renewable Energy Project Reduces Carbon Emissions by 40%".to_string(),
        ]
    }

    /// Default statistics fixtures.
    pub fn default_statistics() -> Vec<String> {
        vec![
            "💰 Monthly Revenue: $75,000".to_string(),
            "👥 Active Users: 25,000".to_string(),
            "📈 Growth Rate: 15.5%".to_string(),
        ]
    }

    /// Record the call and capture its outcome and delay.
    fn begin_call<T>(
        &self,
        category: Category,
        pick: impl FnOnce(&MockState) -> T,
    ) -> (FetchResult<T>, Duration) {
        self.with_state(|s| {
            *s.calls.entry(category).or_insert(0) += 1;
            let delay = s.category_delays.get(&category).copied().unwrap_or(s.delay);
            let outcome = match &s.failure {
                Some(err) => Err(err.clone()),
                None => Ok(pick(&*s)),
            };
            (outcome, delay)
        })
    }

    async fn respond<T>(outcome: FetchResult<T>, delay: Duration) -> FetchResult<T> {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        outcome
    }
}

#[async_trait]
impl DataProvider for MockDataProvider {
    async fn fetch_users(&self) -> FetchResult<Vec<UserRecord>> {
        let (outcome, delay) = self.begin_call(Category::Users, |s| s.users.clone());
        Self::respond(outcome, delay).await
    }

    async fn fetch_products(&self) -> FetchResult<Vec<String>> {
        let (outcome, delay) = self.begin_call(Category::Products, |s| s.products.clone());
        Self::respond(outcome, delay).await
    }

    async fn fetch_news(&self) -> FetchResult<Vec<String>> {
        let (outcome, delay) = self.begin_call(Category::News, |s| s.news.clone());
        Self::respond(outcome, delay).await
    }

    async fn fetch_statistics(&self) -> FetchResult<Vec<String>> {
        let (outcome, delay) = self.begin_call(Category::Statistics, |s| s.statistics.clone());
        Self::respond(outcome, delay).await
    }
}
