//! Local data provider with simulated latency.
//!
//! Serves fixed user, product and news lists and freshly generated
//! statistics. Each operation sleeps for its category's simulated delay
//! (scaled by `delay_scale`) before returning. It never fails.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use super::random::StdRandomSource;
use crate::config::AppConfig;
use crate::error::FetchResult;
use crate::models::{Category, StatisticsSnapshot, UserRecord};
use crate::traits::{DataProvider, RandomSource};

/// Provider backed by static lists and an injected random source.
pub struct LocalDataProvider {
    delay_scale: f64,
    random: Mutex<Box<dyn RandomSource>>,
}

impl LocalDataProvider {
    /// A provider with real delays and entropy-seeded statistics.
    pub fn new() -> Self {
        Self::with_random_source(StdRandomSource::from_entropy())
    }

    /// A provider drawing statistics from `random`.
    pub fn with_random_source(random: impl RandomSource + 'static) -> Self {
        Self {
            delay_scale: 1.0,
            random: Mutex::new(Box::new(random)),
        }
    }

    /// Build a provider from the application configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_random_source(StdRandomSource::from_seed_option(config.seed))
            .with_delay_scale(config.delay_scale)
    }

    /// Scale every simulated delay; `0.0` makes fetches resolve immediately.
    ///
    /// Negative or non-finite scales are treated as `0.0`.
    pub fn with_delay_scale(mut self, scale: f64) -> Self {
        self.delay_scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            0.0
        };
        self
    }

    /// The delay a fetch for `category` waits before resolving.
    pub fn delay_for(&self, category: Category) -> Duration {
        category.simulated_delay().mul_f64(self.delay_scale)
    }

    async fn simulate_latency(&self, category: Category) {
        let delay = self.delay_for(category);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for LocalDataProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataProvider for LocalDataProvider {
    async fn fetch_users(&self) -> FetchResult<Vec<UserRecord>> {
        self.simulate_latency(Category::Users).await;
        Ok(default_users())
    }

    async fn fetch_products(&self) -> FetchResult<Vec<String>> {
        self.simulate_latency(Category::Products).await;
        Ok(to_lines(DEFAULT_PRODUCTS))
    }

    async fn fetch_news(&self) -> FetchResult<Vec<String>> {
        self.simulate_latency(Category::News).await;
        Ok(to_lines(DEFAULT_NEWS))
    }

    async fn fetch_statistics(&self) -> FetchResult<Vec<String>> {
        self.simulate_latency(Category::Statistics).await;
        let mut random = self.random.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(StatisticsSnapshot::generate(random.as_mut()).to_lines())
    }
}

const DEFAULT_PRODUCTS: &[&str] = &[
    "💻 MacBook Pro M3 - $2,499",
    "📱 iPhone 15 Pro - $1,199",
    "⌚ Apple Watch Series 9 - $399",
    "🎧 AirPods Pro 2 - $249",
    "📺 Samsung 55\" OLED TV - $1,299",
    "🎮 PlayStation 5 - $499",
    "📷 Canon EOS R5 - $3,899",
    "💾 Samsung 2TB SSD - $199",
    "🖥️ Dell UltraSharp Monitor - $599",
    "⌨️ Mechanical Keyboard - $159",
];

const DEFAULT_NEWS: &[&str] = &[
    "🚀 SpaceX Successfully Launches New Satellite Mission",
    "💡 Breakthrough in Quantum Computing Achieved by Tech Giants",
    "🌱 New Renewable Energy Project Reduces Carbon Emissions by 40%",
    "🏥 Revolutionary Gene Therapy Shows Promise in Clinical Trials",
    "🤖 AI Assistant Helps Doctors Diagnose Rare Diseases",
    "🌍 Global Climate Summit Reaches Historic Agreement",
    "📊 Stock Market Reaches All-Time High Amid Tech Rally",
    "🎓 University Develops New Method for Ocean Plastic Cleanup",
    "🚗 Electric Vehicle Sales Surpass Traditional Cars for First Time",
    "🔬 Scientists Discover New Species in Deep Ocean Exploration",
];

fn to_lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The ten users served by the local provider.
pub fn default_users() -> Vec<UserRecord> {
    vec![
        UserRecord::new(1, "👨‍💻 John Doe", "john.doe@company.com", "Engineering", true),
        UserRecord::new(2, "👩‍💼 Jane Smith", "jane.smith@company.com", "Marketing", true),
        UserRecord::new(3, "👨‍🎨 Mike Johnson", "mike.johnson@company.com", "Design", false),
        UserRecord::new(4, "👩‍🔬 Sarah Wilson", "sarah.wilson@company.com", "Research", true),
        UserRecord::new(5, "👨‍💼 David Brown", "david.brown@company.com", "Sales", true),
        UserRecord::new(6, "👩‍🏫 Lisa Davis", "lisa.davis@company.com", "Training", false),
        UserRecord::new(7, "👨‍🔧 Tom Miller", "tom.miller@company.com", "Support", true),
        UserRecord::new(8, "👩‍⚕️ Emma Garcia", "emma.garcia@company.com", "Health", true),
        UserRecord::new(9, "👨‍🍳 Chris Martinez", "chris.martinez@company.com", "Operations", false),
        UserRecord::new(10, "👩‍🎤 Amy Taylor", "amy.taylor@company.com", "Communications", true),
    ]
}

/// The ten product lines served by the local provider.
pub fn default_products() -> Vec<String> {
    to_lines(DEFAULT_PRODUCTS)
}

/// The ten headlines served by the local provider.
pub fn default_news() -> Vec<String> {
    to_lines(DEFAULT_NEWS)
}
