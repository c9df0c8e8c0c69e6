//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`DataProvider`] - the four asynchronous category fetches
//! - [`RandomSource`] - randomness behind the statistics figures

pub mod data_provider;
pub mod random;

pub use data_provider::DataProvider;
pub use random::RandomSource;
