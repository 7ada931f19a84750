// ============================================================================
// Decimal Errors
// Error types promoted from trapped conditions and invalid configuration
// ============================================================================

use crate::context::Condition;
use thiserror::Error;

/// Errors recorded in a `Context` or returned from configuration helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalError {
    /// Rounding mode ordinal outside of the six known modes
    #[error("invalid rounding mode: {0}")]
    InvalidRoundingMode(u8),
    /// Rounding mode name that could not be parsed
    #[error("unknown rounding mode: {0:?}")]
    UnknownRoundingMode(String),
    /// Operating mode name that could not be parsed
    #[error("unknown operating mode: {0:?}")]
    UnknownOperatingMode(String),
    /// Precision that does not normalize to `[1, MAX_PRECISION]`
    #[error("invalid precision: {0}")]
    InvalidPrecision(isize),
    /// A signaling NaN would have to be materialized
    #[error("signaling NaN is not representable in idiomatic mode")]
    SignalingNaN,
    /// Scale left the `[MIN_SCALE, MAX_SCALE]` range
    #[error("scale overflow: adjusted scale outside of i32 range")]
    ScaleOverflow,
    /// Generic trapped condition
    #[error("{0}")]
    Signaled(Condition),
}

impl From<Condition> for DecimalError {
    fn from(condition: Condition) -> Self {
        DecimalError::Signaled(condition)
    }
}

/// Result type alias for decimal context operations
pub type DecimalResult<T> = Result<T, DecimalError>;
