//! Inclusive neighbour-count interval.

use crate::core::{EngineError, EngineRng, Result};

/// Inclusive `min..=max` range of live-neighbour counts.
///
/// `min <= max` always holds; there is no way to build an empty interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    min: u16,
    max: u16,
}

impl Interval {
    /// Create an interval, failing when `min > max`.
    pub fn new(min: u16, max: u16) -> Result<Self> {
        Self::checked("interval", min, max)
    }

    /// Same as [`Interval::new`], reporting failures against `field`.
    pub(crate) fn checked(field: &'static str, min: u16, max: u16) -> Result<Self> {
        if min > max {
            return Err(EngineError::validation(
                field,
                format!("min {min} is greater than max {max}"),
            ));
        }
        Ok(Self { min, max })
    }

    /// Draw `min` uniformly from the whole domain, then `max` from `min..=u16::MAX`.
    pub(crate) fn random(rng: &mut EngineRng) -> Self {
        let min = rng.gen_range(0..=u16::MAX);
        let max = rng.gen_range(min..=u16::MAX);
        Self { min, max }
    }

    #[must_use]
    pub const fn min(self) -> u16 {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> u16 {
        self.max
    }

    /// Is `count` inside the interval (both ends inclusive)?
    #[inline]
    #[must_use]
    pub fn contains(self, count: u32) -> bool {
        u32::from(self.min) <= count && count <= u32::from(self.max)
    }
}

impl From<Interval> for (u16, u16) {
    fn from(interval: Interval) -> Self {
        (interval.min, interval.max)
    }
}

impl TryFrom<(u16, u16)> for Interval {
    type Error = EngineError;

    fn try_from((min, max): (u16, u16)) -> Result<Self> {
        Self::new(min, max)
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ordered() {
        let interval = Interval::new(2, 3).unwrap();
        assert_eq!(interval.min(), 2);
        assert_eq!(interval.max(), 3);
        assert!(Interval::new(5, 5).is_ok());
    }

    #[test]
    fn test_new_rejects_reversed() {
        let err = Interval::new(4, 3).unwrap_err();
        assert!(matches!(err, EngineError::Validation { field: "interval", .. }));
    }

    #[test]
    fn test_checked_reports_field() {
        let err = Interval::checked("birthInterval", 9, 1).unwrap_err();
        assert!(matches!(err, EngineError::Validation { field: "birthInterval", .. }));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let interval = Interval::new(2, 3).unwrap();
        assert!(!interval.contains(1));
        assert!(interval.contains(2));
        assert!(interval.contains(3));
        assert!(!interval.contains(4));
    }

    #[test]
    fn test_contains_full_domain() {
        let interval = Interval::new(0, u16::MAX).unwrap();
        assert!(interval.contains(0));
        assert!(interval.contains(65_535));
        assert!(!interval.contains(65_536));
    }

    #[test]
    fn test_random_is_ordered() {
        let mut rng = EngineRng::new(1);
        for _ in 0..1000 {
            let interval = Interval::random(&mut rng);
            assert!(interval.min() <= interval.max());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::new(2, 3).unwrap().to_string(), "2..3");
    }
}
