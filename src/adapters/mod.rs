//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`LocalDataProvider`] - static lists behind a simulated network delay
//! - [`StdRandomSource`] - `rand`-backed randomness, optionally seeded
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockDataProvider`] - substitutable data, forced failures, call counts
//! - [`mock::FixedRandomSource`] - deterministic "random" values

pub mod local;
pub mod mock;
pub mod random;

pub use local::LocalDataProvider;
pub use mock::{FixedRandomSource, MockDataProvider};
pub use random::StdRandomSource;
