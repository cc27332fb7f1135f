//! Strongly typed identifier wrappers.
//!
//! Bot and output ids come straight from the instruction text and are not
//! necessarily contiguous, so they are used as map keys rather than `Vec`
//! indices.  Both are `Copy + Ord + Hash`.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// A chip value.  Puzzle inputs only carry small non-negative integers.
pub type Chip = u32;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) => $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, " {}"), self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;
            fn from_str(s: &str) -> Result<$name, Self::Err> {
                s.parse::<$inner>().map($name)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(n: $inner) -> $name {
                $name(n)
            }
        }
    };
}

typed_id! {
    /// Identity of a bot, as written in the instruction text.
    pub struct BotId(u32) => "bot";
}

typed_id! {
    /// Identity of an output bin.
    pub struct OutputId(u32) => "output";
}
