// ============================================================================
// Decimal Context
// Per-value configuration and exception ledger
// ============================================================================

use super::condition::Condition;
use super::operating_mode::OperatingMode;
use super::precision::Precision;
use super::rounding::RoundingMode;
use crate::interfaces::{Representation, Signaler};
use crate::numeric::{DecimalError, DecimalResult};
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Governs rounding, signaling and display for the value that owns it.
///
/// A `Context` is copied into each value at construction; mutating one
/// value's context never affects another value or the source template.
///
/// # Example
/// ```
/// use decimal_context::context::{Condition, Context, RoundingMode};
///
/// let mut ctx = Context::DECIMAL64;
/// ctx.set_rounding_mode(RoundingMode::ToZero);
/// ctx.signal(Condition::DIVISION_BY_ZERO, Condition::DIVISION_BY_ZERO.into());
///
/// assert!(ctx.conditions.contains(Condition::DIVISION_BY_ZERO));
/// assert!(ctx.err.is_some());
/// assert!(Context::DECIMAL64.conditions.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Context {
    /// Selects idiomatic or strict behavior.
    pub operating_mode: OperatingMode,

    /// Maximum number of significant digits of any arithmetic result.
    ///
    /// Values outside `[1, MAX_PRECISION]` are read as their negation, 0 as
    /// `DEFAULT_PRECISION`, and `UNLIMITED_PRECISION` as no limit. See
    /// [`Precision::normalize`].
    pub precision: isize,

    /// Conditions that are promoted to `err` when raised.
    pub traps: Condition,

    /// Conditions raised since the last `clear_status`.
    pub conditions: Condition,

    /// Most recent trapped error.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub err: Option<DecimalError>,

    /// Ordinal of the active `RoundingMode`. Kept raw so that a context
    /// loaded from an external source can carry an unknown mode until it
    /// is used.
    #[cfg_attr(feature = "serde", serde(rename = "rounding_mode"))]
    rounding: u8,
}

impl Default for Context {
    fn default() -> Self {
        Self::new(OperatingMode::Idiomatic)
    }
}

// ============================================================================
// Preset Contexts (IEEE 754R)
// ============================================================================

impl Context {
    /// IEEE 754R Decimal32 format.
    pub const DECIMAL32: Context = Context::ieee(7);

    /// IEEE 754R Decimal64 format.
    pub const DECIMAL64: Context = Context::ieee(16);

    /// IEEE 754R Decimal128 format.
    pub const DECIMAL128: Context = Context::ieee(34);

    const fn ieee(precision: isize) -> Context {
        Context {
            operating_mode: OperatingMode::Strict,
            precision,
            traps: Condition::IEEE_TRAPS,
            conditions: Condition::empty(),
            err: None,
            rounding: RoundingMode::ToNearestEven.ordinal(),
        }
    }
}

// ============================================================================
// Construction and Configuration
// ============================================================================

impl Context {
    /// Zero-valued context in the given mode: default precision, no traps,
    /// ties-to-even.
    pub const fn new(operating_mode: OperatingMode) -> Self {
        Self {
            operating_mode,
            precision: 0,
            traps: Condition::empty(),
            conditions: Condition::empty(),
            err: None,
            rounding: RoundingMode::ToNearestEven.ordinal(),
        }
    }

    /// Builder method: set the stored precision
    pub fn with_precision(mut self, precision: isize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: set the rounding mode
    pub fn with_rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.set_rounding_mode(mode);
        self
    }

    /// Builder method: set the operating mode
    pub fn with_operating_mode(mut self, mode: OperatingMode) -> Self {
        self.operating_mode = mode;
        self
    }

    /// Builder method: set the trap mask
    pub fn with_traps(mut self, traps: Condition) -> Self {
        self.traps = traps;
        self
    }

    /// Normalized precision.
    #[inline]
    pub const fn precision(&self) -> Precision {
        Precision::normalize(self.precision)
    }

    /// Active rounding mode, or the error naming the unknown ordinal.
    #[inline]
    pub fn rounding_mode(&self) -> DecimalResult<RoundingMode> {
        RoundingMode::try_from(self.rounding)
    }

    /// Raw rounding mode ordinal.
    #[inline]
    pub const fn rounding_mode_raw(&self) -> u8 {
        self.rounding
    }

    #[inline]
    pub fn set_rounding_mode(&mut self, mode: RoundingMode) {
        self.rounding = mode.ordinal();
    }

    /// Stores a raw ordinal without validating it. An unknown ordinal is
    /// reported as `INVALID_CONTEXT` the next time a rounding decision is
    /// made.
    #[inline]
    pub fn set_rounding_mode_raw(&mut self, raw: u8) {
        self.rounding = raw;
    }

    /// Validate the configuration
    pub fn validate(&self) -> DecimalResult<()> {
        if self.precision() == Precision::Invalid {
            return Err(DecimalError::InvalidPrecision(self.precision));
        }
        self.rounding_mode()?;
        Ok(())
    }

    /// Returns the pending trapped error, if any.
    pub fn status(&self) -> DecimalResult<()> {
        match &self.err {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    /// Clears `conditions` and `err`. Nothing else clears them.
    pub fn clear_status(&mut self) {
        self.conditions = Condition::empty();
        self.err = None;
    }
}

// ============================================================================
// Signaling
// ============================================================================

impl Context {
    /// Records `condition` according to the operating mode.
    ///
    /// Strict: `condition` is OR-ed into `conditions`, and `err` is replaced
    /// when `condition` intersects `traps`.
    ///
    /// Idiomatic: nothing is recorded.
    ///
    /// # Panics
    /// In idiomatic mode, when `condition` intersects
    /// [`Condition::PANICS_IN_IDIOMATIC`].
    pub fn signal(&mut self, condition: Condition, err: DecimalError) {
        if self.operating_mode.panics_on(condition) {
            panic!("decimal: {err}");
        }
        if !self.operating_mode.records_conditions() {
            return;
        }

        self.conditions |= condition;
        if condition.intersects(self.traps) {
            tracing::debug!(%condition, %err, "trapped decimal condition");
            self.err = Some(err);
        }
    }

    /// Decides whether the least significant retained digit is incremented.
    ///
    /// # Arguments
    /// * `retained` - the already truncated magnitude
    /// * `remainder` - the discarded portion compared to half a unit in the
    ///   last retained place
    /// * `positive` - sign of the result
    ///
    /// An unknown rounding mode raises `INVALID_CONTEXT` and never
    /// increments.
    pub fn needs_increment<R>(&mut self, retained: &R, remainder: Ordering, positive: bool) -> bool
    where
        R: Representation + ?Sized,
    {
        let mode = match self.rounding_mode() {
            Ok(mode) => mode,
            Err(err) => {
                tracing::warn!(raw = self.rounding, "invalid rounding mode in context");
                self.signal(Condition::INVALID_CONTEXT, err);
                return false;
            }
        };

        let inc = match mode {
            RoundingMode::AwayFromZero => true,
            RoundingMode::ToZero => false,
            RoundingMode::ToPositiveInf => positive,
            RoundingMode::ToNegativeInf => !positive,
            RoundingMode::ToNearestEven => match remainder {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => retained.last_digit_odd(),
            },
            RoundingMode::ToNearestAway => remainder != Ordering::Less,
        };
        tracing::trace!(%mode, ?remainder, positive, inc, "rounding decision");
        inc
    }
}

impl Signaler for Context {
    #[inline]
    fn signal(&mut self, condition: Condition, err: DecimalError) {
        Context::signal(self, condition, err);
    }
}
