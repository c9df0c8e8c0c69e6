//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockDataProvider`] - provider with substitutable data and forced failures
//! - [`FixedRandomSource`] - random source that always lands at a fixed point

pub mod provider;
pub mod random;

pub use provider::MockDataProvider;
pub use random::FixedRandomSource;
