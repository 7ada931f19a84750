// ============================================================================
// Operating Modes
// Idiomatic vs. GDA-strict behavior, consulted at every mode-dependent step
// ============================================================================

use super::condition::Condition;
use super::precision::Precision;
use crate::numeric::{DecimalError, DecimalResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dictates how a decimal approaches non-numeric concerns: signaling,
/// rounding of exact operations, assignment and string forms of specials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperatingMode {
    /// Typical Rust idioms:
    /// - panics on states that would need a NaN result
    /// - lossless (unrounded) addition, subtraction and multiplication
    /// - traps are ignored; neither `err` nor `conditions` are set
    /// - qNaN, sNaN, +Inf and -Inf print as "NaN", "NaN", "+Inf", "-Inf"
    /// - assignment is a plain copy
    #[default]
    Idiomatic,

    /// General Decimal Arithmetic Specification 1.70:
    /// - never panics
    /// - every arithmetic result is rounded to the context precision
    /// - traps promote conditions into `err`; `conditions` always recorded
    /// - qNaN, sNaN, +Inf and -Inf print as "NaN", "sNaN", "Infinity",
    ///   "-Infinity"
    /// - assignment rounds when the precisions differ
    Strict,
}

/// How an arithmetic operation produced its raw result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    /// Addition, subtraction, multiplication: the raw result is exact.
    Exact,
    /// Division, roots and the like: the raw result may already be
    /// approximate.
    Inexact,
}

/// Non-finite values with mode-dependent string forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Special {
    QuietNaN,
    SignalingNaN,
    PositiveInfinity,
    NegativeInfinity,
}

impl OperatingMode {
    /// Whether raised conditions are recorded in the context.
    #[inline]
    pub const fn records_conditions(self) -> bool {
        matches!(self, OperatingMode::Strict)
    }

    /// Whether raising `condition` aborts instead of being recorded.
    #[inline]
    pub fn panics_on(self, condition: Condition) -> bool {
        matches!(self, OperatingMode::Idiomatic)
            && condition.intersects(Condition::PANICS_IN_IDIOMATIC)
    }

    /// Whether a raw result of the given kind is rounded to the context
    /// precision.
    #[inline]
    pub const fn rounds(self, kind: ResultKind) -> bool {
        match self {
            OperatingMode::Strict => true,
            OperatingMode::Idiomatic => matches!(kind, ResultKind::Inexact),
        }
    }

    /// Whether assigning a value built under `source` precision into a value
    /// with `destination` precision rounds.
    #[inline]
    pub fn rounds_on_assignment(self, source: Precision, destination: Precision) -> bool {
        match self {
            OperatingMode::Strict => source != destination,
            OperatingMode::Idiomatic => false,
        }
    }

    /// String form of a special value.
    pub const fn special_str(self, special: Special) -> &'static str {
        match (self, special) {
            (_, Special::QuietNaN) => "NaN",
            (OperatingMode::Idiomatic, Special::SignalingNaN) => "NaN",
            (OperatingMode::Idiomatic, Special::PositiveInfinity) => "+Inf",
            (OperatingMode::Idiomatic, Special::NegativeInfinity) => "-Inf",
            (OperatingMode::Strict, Special::SignalingNaN) => "sNaN",
            (OperatingMode::Strict, Special::PositiveInfinity) => "Infinity",
            (OperatingMode::Strict, Special::NegativeInfinity) => "-Infinity",
        }
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatingMode::Idiomatic => f.write_str("idiomatic"),
            OperatingMode::Strict => f.write_str("strict"),
        }
    }
}

impl FromStr for OperatingMode {
    type Err = DecimalError;

    fn from_str(s: &str) -> DecimalResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "idiomatic" | "go" => Ok(OperatingMode::Idiomatic),
            "strict" | "gda" => Ok(OperatingMode::Strict),
            other => Err(DecimalError::UnknownOperatingMode(other.to_string())),
        }
    }
}
