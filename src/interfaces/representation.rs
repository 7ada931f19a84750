// ============================================================================
// Representation Interface
// Query surface the rounding decision needs from a magnitude
// ============================================================================

use num_bigint::BigUint;

/// Query interface over a value's magnitude.
///
/// A magnitude is held either as a native `u64` (the compact, fast path) or
/// as a `BigUint` (the general path). Callers must check `is_compact` before
/// reading either form.
pub trait Representation {
    /// Whether the magnitude is stored as a native machine integer.
    fn is_compact(&self) -> bool;

    /// The native magnitude. Only meaningful when `is_compact` is true.
    fn compact(&self) -> u64;

    /// The arbitrary-precision magnitude. `None` on the fast path.
    fn unscaled(&self) -> Option<&BigUint>;

    /// Parity of the least significant digit, read from whichever form the
    /// magnitude currently uses.
    ///
    /// Bit 0 of a decimal coefficient is odd iff its last decimal digit is.
    fn last_digit_odd(&self) -> bool {
        if self.is_compact() {
            self.compact() & 1 != 0
        } else {
            self.unscaled().is_some_and(|big| big.bit(0))
        }
    }
}

impl Representation for u64 {
    #[inline]
    fn is_compact(&self) -> bool {
        true
    }

    #[inline]
    fn compact(&self) -> u64 {
        *self
    }

    #[inline]
    fn unscaled(&self) -> Option<&BigUint> {
        None
    }
}

impl Representation for BigUint {
    #[inline]
    fn is_compact(&self) -> bool {
        false
    }

    #[inline]
    fn compact(&self) -> u64 {
        0
    }

    #[inline]
    fn unscaled(&self) -> Option<&BigUint> {
        Some(self)
    }
}
