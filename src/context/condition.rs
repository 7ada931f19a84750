// ============================================================================
// Conditions
// Composable exceptional-condition flags raised by decimal operations
// ============================================================================

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// A set of exceptional conditions raised during or after an operation.
    ///
    /// Any subset of bits is a valid value, including bits with no name.
    /// For example, dividing a non-zero value by zero raises
    /// `DIVISION_BY_ZERO` in the value's `Context`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Condition: u32 {
        /// The scale was modified to fit the constraints of the representation.
        const CLAMPED = 1 << 0;
        /// A string did not have valid decimal syntax.
        const CONVERSION_SYNTAX = 1 << 1;
        /// Division of a finite, non-zero dividend by zero.
        const DIVISION_BY_ZERO = 1 << 2;
        /// The result of integer division would need more digits than the
        /// precision allows.
        const DIVISION_IMPOSSIBLE = 1 << 3;
        /// Division where both dividend and divisor are zero.
        const DIVISION_UNDEFINED = 1 << 4;
        /// The result is not exact, or Overflow/Underflow occurred.
        const INEXACT = 1 << 5;
        /// Not enough memory to store the value.
        const INSUFFICIENT_STORAGE = 1 << 6;
        /// The context itself is invalid, e.g. an unknown rounding mode.
        const INVALID_CONTEXT = 1 << 7;
        /// An operand is a signaling NaN, or the operation has no defined
        /// result (Inf - Inf, 0 * Inf, sqrt of a negative, ...).
        const INVALID_OPERATION = 1 << 8;
        /// The adjusted scale after rounding would exceed `MAX_SCALE`.
        /// Inexact and Rounded are raised with it.
        const OVERFLOW = 1 << 9;
        /// Digits were discarded, or Overflow/Underflow occurred.
        const ROUNDED = 1 << 10;
        /// The adjusted scale is below `MIN_SCALE` before rounding.
        const SUBNORMAL = 1 << 11;
        /// The result is inexact and its adjusted scale would be below
        /// `MIN_SCALE`.
        const UNDERFLOW = 1 << 12;
    }
}

impl Condition {
    /// Conditions that describe a state idiomatic mode treats as impossible:
    /// both would require producing a NaN result.
    pub const PANICS_IN_IDIOMATIC: Self = Self::INVALID_OPERATION.union(Self::DIVISION_UNDEFINED);

    /// Traps used by the IEEE 754 presets: every named condition except
    /// Inexact, Rounded and Subnormal.
    pub const IEEE_TRAPS: Self = Self::all().difference(
        Self::INEXACT
            .union(Self::ROUNDED)
            .union(Self::SUBNORMAL),
    );

    /// Returns the lowercase name of a single named bit.
    pub fn name(self) -> Option<&'static str> {
        NAMES
            .iter()
            .find(|(bit, _)| *bit == self)
            .map(|(_, name)| *name)
    }

    /// Walks the raw bits from least to most significant, yielding each set
    /// bit once. Unnamed bits are included.
    pub fn single_bits(self) -> impl Iterator<Item = Condition> {
        let mut rest = self.bits();
        std::iter::from_fn(move || {
            if rest == 0 {
                return None;
            }
            let bit = rest & rest.wrapping_neg();
            rest ^= bit;
            Some(Condition::from_bits_retain(bit))
        })
    }
}

const NAMES: [(Condition, &str); 13] = [
    (Condition::CLAMPED, "clamped"),
    (Condition::CONVERSION_SYNTAX, "conversion syntax"),
    (Condition::DIVISION_BY_ZERO, "division by zero"),
    (Condition::DIVISION_IMPOSSIBLE, "division impossible"),
    (Condition::DIVISION_UNDEFINED, "division undefined"),
    (Condition::INEXACT, "inexact"),
    (Condition::INSUFFICIENT_STORAGE, "insufficient storage"),
    (Condition::INVALID_CONTEXT, "invalid context"),
    (Condition::INVALID_OPERATION, "invalid operation"),
    (Condition::OVERFLOW, "overflow"),
    (Condition::ROUNDED, "rounded"),
    (Condition::SUBNORMAL, "subnormal"),
    (Condition::UNDERFLOW, "underflow"),
];

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bit) in self.single_bits().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match bit.name() {
                Some(name) => f.write_str(name)?,
                None => write!(f, "unknown({})", bit.bits())?,
            }
        }
        Ok(())
    }
}
