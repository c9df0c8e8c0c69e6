//! Deterministic random source for tests.

use std::ops::Range;

use crate::traits::RandomSource;

/// Random source that always returns the same relative position in a range.
///
/// A fraction of `0.0` yields the lower bound; values close to `1.0` approach
/// (but never reach) the exclusive upper bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRandomSource {
    fraction: f64,
}

impl FixedRandomSource {
    /// A source at `fraction` of every range, clamped to `[0.0, 1.0)`.
    pub fn new(fraction: f64) -> Self {
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 0.999_999)
        } else {
            0.0
        };
        Self { fraction }
    }

    /// Always the lower bound.
    pub fn lower_bound() -> Self {
        Self::new(0.0)
    }

    /// Always the midpoint.
    pub fn midpoint() -> Self {
        Self::new(0.5)
    }
}

impl RandomSource for FixedRandomSource {
    fn int_in(&mut self, range: Range<u32>) -> u32 {
        let span = range.end.saturating_sub(range.start);
        let offset = (f64::from(span) * self.fraction) as u32;
        range.start + offset.min(span.saturating_sub(1))
    }

    fn float_in(&mut self, range: Range<f64>) -> f64 {
        range.start + (range.end - range.start) * self.fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_bound() {
        let mut random = FixedRandomSource::lower_bound();
        assert_eq!(random.int_in(50..200), 50);
        assert_eq!(random.float_in(5.0..25.0), 5.0);
    }

    #[test]
    fn test_midpoint() {
        let mut random = FixedRandomSource::midpoint();
        assert_eq!(random.int_in(100..500), 300);
        assert_eq!(random.float_in(60.0..80.0), 70.0);
    }

    #[test]
    fn test_upper_fraction_stays_exclusive() {
        let mut random = FixedRandomSource::new(5.0);
        assert!(random.int_in(25..50) < 50);
        assert!(random.float_in(2.0..8.0) < 8.0);
    }
}
