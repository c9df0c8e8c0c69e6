//! Random number source trait abstraction.

use std::ops::Range;

/// Source of uniformly distributed values in half-open ranges.
///
/// Injected into the local provider so statistics can be generated from a
/// seeded or fixed source in tests. Ranges passed in are never empty.
pub trait RandomSource: Send {
    /// A value in `range.start..range.end`.
    fn int_in(&mut self, range: Range<u32>) -> u32;

    /// A value in `range.start..range.end`.
    fn float_in(&mut self, range: Range<f64>) -> f64;
}
