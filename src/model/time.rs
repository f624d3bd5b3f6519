//! Timestamp type, with the ordering and arithmetic the merge algorithm
//! needs.

use std::fmt;
use std::time::Duration;

/// A point in time at the source system's native resolution (whole seconds,
/// matching CVS/RCS timestamps).
///
/// A caller whose source system has finer resolution can still use this
/// type — construct it from whatever epoch makes comparisons correct for
/// their data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    #[must_use]
    pub const fn from_unix_seconds(seconds: i64) -> Self {
        Self(seconds)
    }

    #[must_use]
    pub const fn unix_seconds(self) -> i64 {
        self.0
    }

    /// Absolute difference between two timestamps, saturating at `i64::MAX`.
    #[must_use]
    pub fn abs_diff(self, other: Self) -> Duration {
        Duration::from_secs(self.0.abs_diff(other.0))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Timestamp {
    fn from(seconds: i64) -> Self {
        Self(seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_matches_seconds() {
        assert!(Timestamp::from(100) < Timestamp::from(200));
        assert!(Timestamp::from(200) > Timestamp::from(100));
        assert_eq!(Timestamp::from(100), Timestamp::from(100));
    }

    #[test]
    fn abs_diff_is_symmetric() {
        let a = Timestamp::from(100);
        let b = Timestamp::from(300);
        assert_eq!(a.abs_diff(b), b.abs_diff(a));
        assert_eq!(a.abs_diff(b), Duration::from_secs(200));
    }
}
