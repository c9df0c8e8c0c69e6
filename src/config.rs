//! Application configuration.
//!
//! Settings come from three layers, later ones winning:
//! defaults, environment variables, then command-line flags.
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `DATADECK_DELAY_SCALE` | Multiplier for simulated fetch delays (`0` = instant) |
//! | `DATADECK_SEED` | Seed for the statistics random source |
//! | `DATADECK_LOG` | `tracing` filter directive (read by [`crate::logging`]) |

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::CliOptions;
use crate::error::ConfigError;
use crate::models::Category;

pub const ENV_DELAY_SCALE: &str = "DATADECK_DELAY_SCALE";
pub const ENV_SEED: &str = "DATADECK_SEED";

/// Configuration for the application shell and local provider.
///
/// Use the builder methods to customize it.
///
/// # Example
///
/// ```
/// use datadeck::config::AppConfig;
///
/// let config = AppConfig::default()
///     .with_delay_scale(0.0)
///     .with_seed(Some(42));
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Multiplier applied to every simulated delay
    pub delay_scale: f64,
    /// Seed for statistics generation (entropy when `None`)
    pub seed: Option<u64>,
    /// Log file override (default lives in the user cache directory)
    pub log_file: Option<PathBuf>,
    /// Interval between UI ticks (spinner animation)
    pub tick_rate: Duration,
    /// Category fetched when the screen initializes
    pub initial_category: Category,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            delay_scale: 1.0,
            seed: None,
            log_file: None,
            tick_rate: Duration::from_millis(80),
            initial_category: Category::Users,
        }
    }
}

impl AppConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delay multiplier.
    pub fn with_delay_scale(mut self, scale: f64) -> Self {
        self.delay_scale = scale;
        self
    }

    /// Set the statistics seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Set the log file path.
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Set the UI tick interval.
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Set the category loaded on startup.
    pub fn with_initial_category(mut self, category: Category) -> Self {
        self.initial_category = category;
        self
    }

    /// Build a config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_DELAY_SCALE) {
            config.delay_scale = parse_delay_scale(ENV_DELAY_SCALE, &raw)?;
        }
        if let Some(raw) = lookup(ENV_SEED) {
            config.seed = Some(parse_seed(ENV_SEED, &raw)?);
        }

        Ok(config)
    }

    /// Overlay command-line options on top of this config.
    pub fn apply_cli(mut self, options: &CliOptions) -> Self {
        if let Some(scale) = options.delay_scale {
            self.delay_scale = scale;
        }
        if options.instant {
            self.delay_scale = 0.0;
        }
        if options.seed.is_some() {
            self.seed = options.seed;
        }
        if let Some(ref path) = options.log_file {
            self.log_file = Some(path.clone());
        }
        if let Some(category) = options.category {
            self.initial_category = category;
        }
        self
    }
}

/// Parse a delay multiplier: finite and not negative.
pub fn parse_delay_scale(key: &str, raw: &str) -> Result<f64, ConfigError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::invalid(key, raw, "expected a number"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::invalid(key, raw, "must be zero or positive"));
    }
    Ok(value)
}

/// Parse a `u64` seed.
pub fn parse_seed(key: &str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::invalid(key, raw, "expected an unsigned integer"))
}
