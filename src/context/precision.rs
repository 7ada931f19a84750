// ============================================================================
// Precision and Scale Limits
// Normalization of the signed precision stored in a Context
// ============================================================================

/// Largest allowed Context precision.
pub const MAX_PRECISION: isize = isize::MAX;

/// Smallest allowed Context precision.
pub const MIN_PRECISION: isize = 1;

/// No precision limit, although operations may still fail when an exact
/// result cannot be represented.
///
/// `MAX_PRECISION == -(UNLIMITED_PRECISION)`.
pub const UNLIMITED_PRECISION: isize = -MAX_PRECISION;

/// Precision used when a Context stores 0.
pub const DEFAULT_PRECISION: isize = 16;

/// Largest allowed scale.
pub const MAX_SCALE: i32 = i32::MAX;

/// Smallest allowed scale.
pub const MIN_SCALE: i32 = i32::MIN;

/// The meaning of a stored precision value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// At most this many significant digits, in `[1, MAX_PRECISION]`.
    Limited(usize),
    /// No limit.
    Unlimited,
    /// Not representable as a digit count (`isize::MIN`).
    Invalid,
}

impl Precision {
    /// Interprets a stored precision.
    ///
    /// ```text
    /// precision ==  4 // 4
    /// precision == -4 // 4
    /// precision ==  0 // DEFAULT_PRECISION
    /// precision == UNLIMITED_PRECISION // Unlimited
    /// ```
    pub const fn normalize(raw: isize) -> Precision {
        match raw {
            0 => Precision::Limited(DEFAULT_PRECISION as usize),
            UNLIMITED_PRECISION => Precision::Unlimited,
            isize::MIN => Precision::Invalid,
            p => Precision::Limited(p.unsigned_abs()),
        }
    }

    /// Digit limit, if any.
    #[inline]
    pub const fn digits(self) -> Option<usize> {
        match self {
            Precision::Limited(digits) => Some(digits),
            Precision::Unlimited | Precision::Invalid => None,
        }
    }
}
