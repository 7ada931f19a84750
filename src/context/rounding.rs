// ============================================================================
// Rounding Modes
// The six rounding policies a Context can select
// ============================================================================

use crate::numeric::{DecimalError, DecimalResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Determines how a decimal is rounded once digits must be discarded.
///
/// The ordinal of each variant is stable and is what a `Context` stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum RoundingMode {
    /// IEEE 754-2008 roundTiesToEven
    #[default]
    ToNearestEven = 0,
    /// IEEE 754-2008 roundTiesToAway
    ToNearestAway = 1,
    /// IEEE 754-2008 roundTowardZero
    ToZero = 2,
    /// No IEEE 754-2008 equivalent
    AwayFromZero = 3,
    /// IEEE 754-2008 roundTowardNegative
    ToNegativeInf = 4,
    /// IEEE 754-2008 roundTowardPositive
    ToPositiveInf = 5,
}

impl RoundingMode {
    /// All modes in ordinal order.
    pub const ALL: [RoundingMode; 6] = [
        RoundingMode::ToNearestEven,
        RoundingMode::ToNearestAway,
        RoundingMode::ToZero,
        RoundingMode::AwayFromZero,
        RoundingMode::ToNegativeInf,
        RoundingMode::ToPositiveInf,
    ];

    /// The raw ordinal stored by a `Context`.
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for RoundingMode {
    type Error = DecimalError;

    fn try_from(raw: u8) -> DecimalResult<Self> {
        RoundingMode::ALL
            .get(usize::from(raw))
            .copied()
            .ok_or(DecimalError::InvalidRoundingMode(raw))
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundingMode::ToNearestEven => "ToNearestEven",
            RoundingMode::ToNearestAway => "ToNearestAway",
            RoundingMode::ToZero => "ToZero",
            RoundingMode::AwayFromZero => "AwayFromZero",
            RoundingMode::ToNegativeInf => "ToNegativeInf",
            RoundingMode::ToPositiveInf => "ToPositiveInf",
        };
        f.write_str(name)
    }
}

impl FromStr for RoundingMode {
    type Err = DecimalError;

    /// Parses either the variant name or the GDA name of a mode.
    ///
    /// # Examples
    /// - "ToNearestEven", "half_even" -> ToNearestEven
    /// - "ceiling" -> ToPositiveInf
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mode = match s.trim() {
            "ToNearestEven" | "half_even" => RoundingMode::ToNearestEven,
            "ToNearestAway" | "half_up" => RoundingMode::ToNearestAway,
            "ToZero" | "down" => RoundingMode::ToZero,
            "AwayFromZero" | "up" => RoundingMode::AwayFromZero,
            "ToNegativeInf" | "floor" => RoundingMode::ToNegativeInf,
            "ToPositiveInf" | "ceiling" => RoundingMode::ToPositiveInf,
            other => return Err(DecimalError::UnknownRoundingMode(other.to_string())),
        };
        Ok(mode)
    }
}
