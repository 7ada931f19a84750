// ============================================================================
// Coefficient
// Decimal digit magnitude with a native fast path and a BigUint fallback
// ============================================================================

use crate::interfaces::Representation;
use num_bigint::BigUint;
use std::cmp::Ordering;
use std::fmt;

/// Unsigned magnitude of a decimal's digits.
///
/// Values that fit a `u64` are always stored compact. The representation is
/// private so the only way in is through the `From` impls, which normalize.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coefficient(Repr);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Repr {
    /// Fast path: native machine integer
    Compact(u64),
    /// General path: strictly greater than `u64::MAX`
    Big(BigUint),
}

/// Result of discarding low-order digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shifted {
    /// Retained digits
    pub quotient: Coefficient,
    /// Discarded portion compared to half a unit in the last retained place
    pub remainder: Ordering,
    /// Whether any discarded digit was non-zero
    pub inexact: bool,
}

impl Coefficient {
    /// Zero
    pub const ZERO: Self = Coefficient(Repr::Compact(0));

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        matches!(self.0, Repr::Compact(0))
    }

    /// Number of decimal digits; zero has one digit.
    pub fn digits(&self) -> u64 {
        match &self.0 {
            Repr::Compact(0) => 1,
            Repr::Compact(v) => u64::from(v.ilog10()) + 1,
            Repr::Big(big) => big.to_str_radix(10).len() as u64,
        }
    }

    /// Drops the `n` least significant digits.
    pub fn shift_right(&self, n: u32) -> Shifted {
        if n == 0 {
            return Shifted {
                quotient: self.clone(),
                remainder: Ordering::Less,
                inexact: false,
            };
        }

        match &self.0 {
            Repr::Compact(v) => match 10u64.checked_pow(n) {
                Some(divisor) => {
                    let rem = v % divisor;
                    Shifted {
                        quotient: Coefficient(Repr::Compact(v / divisor)),
                        remainder: rem.cmp(&(divisor / 2)),
                        inexact: rem != 0,
                    }
                }
                // 10^n > u64::MAX, so v is below half of 10^n.
                None => Shifted {
                    quotient: Coefficient::ZERO,
                    remainder: Ordering::Less,
                    inexact: *v != 0,
                },
            },
            Repr::Big(big) => {
                let divisor = BigUint::from(10u32).pow(n);
                let rem = big % &divisor;
                let half = &divisor >> 1u32;
                Shifted {
                    quotient: Coefficient::from(big / &divisor),
                    remainder: rem.cmp(&half),
                    inexact: rem.bits() != 0,
                }
            }
        }
    }

    /// Adds one unit in the last place, promoting to the general path on
    /// overflow.
    pub fn increment(self) -> Self {
        match self.0 {
            Repr::Compact(v) => match v.checked_add(1) {
                Some(next) => Coefficient(Repr::Compact(next)),
                None => Coefficient(Repr::Big(BigUint::from(v) + 1u32)),
            },
            Repr::Big(big) => Coefficient(Repr::Big(big + 1u32)),
        }
    }

    /// Convert to `u128` when it fits.
    pub fn to_u128(&self) -> Option<u128> {
        match &self.0 {
            Repr::Compact(v) => Some(u128::from(*v)),
            Repr::Big(big) => u128::try_from(big).ok(),
        }
    }
}

impl Default for Coefficient {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u64> for Coefficient {
    #[inline]
    fn from(v: u64) -> Self {
        Coefficient(Repr::Compact(v))
    }
}

impl From<u128> for Coefficient {
    fn from(v: u128) -> Self {
        match u64::try_from(v) {
            Ok(compact) => Coefficient(Repr::Compact(compact)),
            Err(_) => Coefficient(Repr::Big(BigUint::from(v))),
        }
    }
}

impl From<BigUint> for Coefficient {
    fn from(big: BigUint) -> Self {
        match u64::try_from(&big) {
            Ok(compact) => Coefficient(Repr::Compact(compact)),
            Err(_) => Coefficient(Repr::Big(big)),
        }
    }
}

impl Representation for Coefficient {
    #[inline]
    fn is_compact(&self) -> bool {
        matches!(self.0, Repr::Compact(_))
    }

    #[inline]
    fn compact(&self) -> u64 {
        match &self.0 {
            Repr::Compact(v) => *v,
            Repr::Big(_) => 0,
        }
    }

    #[inline]
    fn unscaled(&self) -> Option<&BigUint> {
        match &self.0 {
            Repr::Compact(_) => None,
            Repr::Big(big) => Some(big),
        }
    }
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Compact(v) => write!(f, "{}", v),
            Repr::Big(big) => write!(f, "{}", big),
        }
    }
}
