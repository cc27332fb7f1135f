//! The chip pair a caller is looking for.

use std::fmt;

use crate::Chip;

/// An unordered pair of chip values.
///
/// Always stored as `(low, high)` so `TargetPair::new(61, 17)` and
/// `TargetPair::new(17, 61)` compare equal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetPair {
    low:  Chip,
    high: Chip,
}

impl TargetPair {
    pub fn new(a: Chip, b: Chip) -> Self {
        Self { low: a.min(b), high: a.max(b) }
    }

    #[inline]
    pub fn low(self) -> Chip {
        self.low
    }

    #[inline]
    pub fn high(self) -> Chip {
        self.high
    }

    /// `true` if `chips` holds exactly these two values, in either order.
    pub fn matches(self, chips: &[Chip]) -> bool {
        match *chips {
            [a, b] => Self::new(a, b) == self,
            _ => false,
        }
    }
}

impl fmt::Display for TargetPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}
