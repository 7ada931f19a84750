// ============================================================================
// Big Decimal
// Decimal value carrying its own Context
// ============================================================================

use super::coefficient::Coefficient;
use super::errors::DecimalError;
use crate::context::{Condition, Context, OperatingMode, Precision, ResultKind, Special};
use crate::interfaces::{Representation, Signaler};
use num_bigint::BigUint;
use rust_decimal::Decimal;
use std::fmt;

/// Kind of value held by a `Big`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Form {
    #[default]
    Finite,
    Infinite,
    QuietNaN,
    SignalingNaN,
}

/// Arbitrary-precision decimal: `(-1)^negative × coefficient × 10^-scale`.
///
/// The digit arithmetic of operations lives elsewhere; a `Big` owns the
/// `Context` those operations consult and the rounding step they finish
/// with.
///
/// # Example
/// ```
/// use decimal_context::context::{Condition, Context};
/// use decimal_context::numeric::Big;
///
/// // 1234.5 rounded to 4 digits with ties-to-even
/// let mut x = Big::with_context(Context::DECIMAL32.with_precision(4));
/// x.set_parts(12345u64, 1, false).round();
///
/// assert_eq!(x.to_string(), "1234");
/// assert!(x.context.conditions.contains(Condition::ROUNDED | Condition::INEXACT));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Big {
    /// Per-value configuration, copied in at construction.
    pub context: Context,
    coefficient: Coefficient,
    scale: i32,
    negative: bool,
    form: Form,
}

// ============================================================================
// Construction
// ============================================================================

impl Big {
    /// Create a zero bound to a copy of `context`.
    pub fn with_context(context: Context) -> Self {
        Self {
            context,
            ..Self::default()
        }
    }

    /// Create a finite value with the default context.
    pub fn new(coefficient: impl Into<Coefficient>, scale: i32) -> Self {
        let mut x = Self::default();
        x.set_parts(coefficient, scale, false);
        x
    }

    /// Replace the value with a finite one, keeping the context.
    pub fn set_parts(
        &mut self,
        coefficient: impl Into<Coefficient>,
        scale: i32,
        negative: bool,
    ) -> &mut Self {
        self.coefficient = coefficient.into();
        self.scale = scale;
        self.negative = negative;
        self.form = Form::Finite;
        self
    }

    /// Set to positive or negative infinity.
    pub fn set_inf(&mut self, negative: bool) -> &mut Self {
        self.coefficient = Coefficient::ZERO;
        self.scale = 0;
        self.negative = negative;
        self.form = Form::Infinite;
        self
    }

    /// Set to a quiet or signaling NaN.
    ///
    /// # Panics
    /// A signaling NaN cannot exist in idiomatic mode; asking for one there
    /// aborts through [`Context::signal`].
    pub fn set_nan(&mut self, signaling: bool) -> &mut Self {
        if signaling && self.context.operating_mode == OperatingMode::Idiomatic {
            self.context
                .signal(Condition::INVALID_OPERATION, DecimalError::SignalingNaN);
        }
        self.coefficient = Coefficient::ZERO;
        self.scale = 0;
        self.negative = false;
        self.form = if signaling {
            Form::SignalingNaN
        } else {
            Form::QuietNaN
        };
        self
    }
}

// ============================================================================
// Accessors
// ============================================================================

impl Big {
    #[inline]
    pub fn coefficient(&self) -> &Coefficient {
        &self.coefficient
    }

    #[inline]
    pub const fn scale(&self) -> i32 {
        self.scale
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    #[inline]
    pub const fn form(&self) -> Form {
        self.form
    }

    #[inline]
    pub const fn is_finite(&self) -> bool {
        matches!(self.form, Form::Finite)
    }

    #[inline]
    pub const fn is_nan(&self) -> bool {
        matches!(self.form, Form::QuietNaN | Form::SignalingNaN)
    }

    #[inline]
    pub const fn is_inf(&self) -> bool {
        matches!(self.form, Form::Infinite)
    }
}

// ============================================================================
// Rounding and Assignment
// ============================================================================

impl Big {
    /// Rounds to the context precision.
    ///
    /// Raises `ROUNDED` when digits are discarded and `INEXACT` when any of
    /// them was non-zero. An unusable precision raises `INVALID_CONTEXT`; a
    /// scale pushed past `MIN_SCALE` raises `OVERFLOW` and yields infinity.
    ///
    /// The rounding mode is only consulted when a non-zero digit is
    /// discarded, so an unknown mode goes unreported on an exact discard.
    pub fn round(&mut self) -> &mut Self {
        if !self.is_finite() {
            return self;
        }

        let precision = match self.context.precision() {
            Precision::Limited(digits) => u64::try_from(digits).unwrap_or(u64::MAX),
            Precision::Unlimited => return self,
            Precision::Invalid => {
                let err = DecimalError::InvalidPrecision(self.context.precision);
                self.context.signal(Condition::INVALID_CONTEXT, err);
                return self;
            }
        };

        let digits = self.coefficient.digits();
        if digits <= precision {
            return self;
        }
        let Ok(mut shift) = u32::try_from(digits - precision) else {
            self.context.signal(
                Condition::INSUFFICIENT_STORAGE,
                Condition::INSUFFICIENT_STORAGE.into(),
            );
            return self;
        };

        let shifted = self.coefficient.shift_right(shift);
        let mut coefficient = shifted.quotient;
        if shifted.inexact
            && self
                .context
                .needs_increment(&coefficient, shifted.remainder, !self.negative)
        {
            coefficient = coefficient.increment();
            // 999.5 -> 1000: carry added a digit
            if coefficient.digits() > precision {
                coefficient = coefficient.shift_right(1).quotient;
                shift += 1;
            }
        }

        let mut raised = Condition::ROUNDED;
        if shifted.inexact {
            raised |= Condition::INEXACT;
        }

        match i32::try_from(shift)
            .ok()
            .and_then(|s| self.scale.checked_sub(s))
        {
            Some(scale) => {
                self.coefficient = coefficient;
                self.scale = scale;
                self.context.signal(raised, raised.into());
            }
            None => {
                let negative = self.negative;
                self.set_inf(negative);
                self.context.signal(
                    Condition::OVERFLOW | Condition::INEXACT | Condition::ROUNDED,
                    DecimalError::ScaleOverflow,
                );
            }
        }
        self
    }

    /// Finishes a raw arithmetic result. Exact results (add, sub, mul) are
    /// only rounded in strict mode; inexact ones always are.
    pub fn finalize(&mut self, kind: ResultKind) -> &mut Self {
        if self.context.operating_mode.rounds(kind) {
            self.round();
        }
        self
    }

    /// Assigns the value of `x`, keeping this value's context.
    ///
    /// Idiomatic mode copies; strict mode rounds when the two contexts have
    /// different precisions.
    ///
    /// # Panics
    /// Assigning a signaling NaN into an idiomatic value, as in
    /// [`Big::set_nan`].
    pub fn set(&mut self, x: &Big) -> &mut Self {
        if x.form == Form::SignalingNaN {
            self.set_nan(true);
            return self;
        }
        self.coefficient = x.coefficient.clone();
        self.scale = x.scale;
        self.negative = x.negative;
        self.form = x.form;

        if self
            .context
            .operating_mode
            .rounds_on_assignment(x.context.precision(), self.context.precision())
        {
            self.round();
        }
        self
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Big {
    /// Convert from rust_decimal::Decimal, binding a copy of `context`.
    pub fn from_decimal(d: Decimal, context: Context) -> Self {
        let mut x = Self::with_context(context);
        x.set_parts(
            Coefficient::from(d.mantissa().unsigned_abs()),
            d.scale() as i32,
            d.is_sign_negative(),
        );
        x
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// Returns `None` for specials and for values outside of the 96-bit,
    /// scale 0..=28 range rust_decimal can hold.
    pub fn to_decimal(&self) -> Option<Decimal> {
        if !self.is_finite() {
            return None;
        }

        let mut mantissa = self.coefficient.to_u128()?;
        let mut scale = self.scale;
        if scale < 0 {
            mantissa = mantissa.checked_mul(10u128.checked_pow(scale.unsigned_abs())?)?;
            scale = 0;
        }

        let mantissa = i128::try_from(mantissa).ok()?;
        let signed = if self.negative { -mantissa } else { mantissa };
        Decimal::try_from_i128_with_scale(signed, u32::try_from(scale).ok()?).ok()
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Representation for Big {
    #[inline]
    fn is_compact(&self) -> bool {
        self.coefficient.is_compact()
    }

    #[inline]
    fn compact(&self) -> u64 {
        self.coefficient.compact()
    }

    #[inline]
    fn unscaled(&self) -> Option<&BigUint> {
        self.coefficient.unscaled()
    }
}

impl Signaler for Big {
    #[inline]
    fn signal(&mut self, condition: Condition, err: DecimalError) {
        self.context.signal(condition, err);
    }
}

impl fmt::Display for Big {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = self.context.operating_mode;
        let special = match self.form {
            Form::Finite => return self.fmt_plain(f),
            Form::QuietNaN => Special::QuietNaN,
            Form::SignalingNaN => Special::SignalingNaN,
            Form::Infinite if self.negative => Special::NegativeInfinity,
            Form::Infinite => Special::PositiveInfinity,
        };
        f.write_str(mode.special_str(special))
    }
}

impl Big {
    // Plain notation only; scientific formatting belongs to the formatter.
    fn fmt_plain(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        if self.coefficient.is_zero() && self.scale <= 0 {
            return f.write_str("0");
        }

        let digits = self.coefficient.to_string();
        if self.scale <= 0 {
            let zeros = self.scale.unsigned_abs() as usize;
            return write!(f, "{}{:0<width$}", digits, "", width = zeros);
        }

        let scale = self.scale as usize;
        if digits.len() > scale {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            write!(f, "{}.{}", int_part, frac_part)
        } else {
            write!(f, "0.{:0>width$}", digits, width = scale)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RoundingMode;

    fn strict(precision: isize, mode: RoundingMode) -> Context {
        Context::new(OperatingMode::Strict)
            .with_precision(precision)
            .with_rounding_mode(mode)
    }

    #[test]
    fn test_with_context_copies() {
        let template = Context::DECIMAL64;
        let mut a = Big::with_context(template.clone());
        let b = Big::with_context(template.clone());

        a.context.conditions |= Condition::CLAMPED;
        a.context.precision = 2;

        assert!(b.context.conditions.is_empty());
        assert_eq!(template, Context::DECIMAL64);
    }

    #[test]
    fn test_round_tie_even_keeps_digit() {
        let mut x = Big::with_context(strict(4, RoundingMode::ToNearestEven));
        x.set_parts(12345u64, 1, false).round();

        assert_eq!(x.coefficient(), &Coefficient::from(1234u64));
        assert_eq!(x.scale(), 0);
        assert_eq!(
            x.context.conditions,
            Condition::ROUNDED | Condition::INEXACT
        );
        assert!(x.context.err.is_none());
    }

    #[test]
    fn test_round_tie_odd_increments() {
        let mut x = Big::with_context(strict(4, RoundingMode::ToNearestEven));
        x.set_parts(12355u64, 1, false).round();
        assert_eq!(x.to_string(), "1236");
    }

    #[test]
    fn test_round_directed_modes_use_sign() {
        let mut up = Big::with_context(strict(2, RoundingMode::ToPositiveInf));
        up.set_parts(121u64, 2, true).round();
        assert_eq!(up.to_string(), "-1.2");

        let mut down = Big::with_context(strict(2, RoundingMode::ToNegativeInf));
        down.set_parts(121u64, 2, true).round();
        assert_eq!(down.to_string(), "-1.3");
    }

    #[test]
    fn test_round_exact_discard_is_only_rounded() {
        let mut x = Big::with_context(strict(3, RoundingMode::AwayFromZero));
        x.set_parts(12300u64, 2, false).round();

        assert_eq!(x.to_string(), "123");
        assert_eq!(x.context.conditions, Condition::ROUNDED);
    }

    #[test]
    fn test_round_carry_adds_digit() {
        let mut x = Big::with_context(strict(4, RoundingMode::ToNearestEven));
        x.set_parts(99995u64, 1, false).round();

        assert_eq!(x.coefficient(), &Coefficient::from(1000u64));
        assert_eq!(x.scale(), -1);
        assert_eq!(x.to_string(), "10000");
    }

    #[test]
    fn test_round_general_path_parity() {
        let odd: BigUint = "1234567890123456789015".parse().unwrap();
        let mut x = Big::with_context(strict(21, RoundingMode::ToNearestEven));
        x.set_parts(odd, 0, false).round();
        assert_eq!(x.coefficient().to_string(), "123456789012345678902");
        assert_eq!(x.scale(), -1);
        assert_eq!(x.to_string(), "1234567890123456789020");

        let even: BigUint = "1234567890123456789025".parse().unwrap();
        let mut y = Big::with_context(strict(21, RoundingMode::ToNearestEven));
        y.set_parts(even, 0, false).round();
        assert_eq!(y.coefficient().to_string(), "123456789012345678902");
        assert_eq!(y.scale(), -1);
        assert!(!y.is_compact());
    }

    #[test]
    fn test_round_unlimited_is_noop() {
        let ctx = strict(crate::context::UNLIMITED_PRECISION, RoundingMode::ToZero);
        let mut x = Big::with_context(ctx);
        x.set_parts(u64::MAX, 3, false).round();

        assert_eq!(x.coefficient(), &Coefficient::from(u64::MAX));
        assert!(x.context.conditions.is_empty());
    }

    #[test]
    fn test_round_invalid_precision() {
        let ctx = strict(isize::MIN, RoundingMode::ToZero).with_traps(Condition::INVALID_CONTEXT);
        let mut x = Big::with_context(ctx);
        x.set_parts(123u64, 0, false).round();

        assert_eq!(x.coefficient(), &Coefficient::from(123u64));
        assert!(x.context.conditions.contains(Condition::INVALID_CONTEXT));
        assert_eq!(x.context.err, Some(DecimalError::InvalidPrecision(isize::MIN)));
    }

    #[test]
    fn test_round_invalid_rounding_mode_truncates() {
        let mut ctx = strict(2, RoundingMode::ToZero);
        ctx.set_rounding_mode_raw(9);
        let mut x = Big::with_context(ctx);
        x.set_parts(199u64, 0, false).round();

        assert_eq!(x.coefficient(), &Coefficient::from(19u64));
        assert!(x
            .context
            .conditions
            .contains(Condition::INVALID_CONTEXT | Condition::ROUNDED | Condition::INEXACT));
    }

    #[test]
    fn test_round_invalid_rounding_mode_exact_discard() {
        let mut ctx = strict(2, RoundingMode::ToZero);
        ctx.set_rounding_mode_raw(9);
        let mut x = Big::with_context(ctx);
        x.set_parts(1200u64, 0, false).round();

        assert_eq!(x.coefficient(), &Coefficient::from(12u64));
        assert_eq!(x.scale(), -2);
        assert_eq!(x.context.conditions, Condition::ROUNDED);
    }

    #[test]
    fn test_round_scale_overflow() {
        let mut x = Big::with_context(strict(1, RoundingMode::ToZero));
        x.set_parts(123u64, i32::MIN + 1, false).round();

        assert!(x.is_inf());
        assert!(x
            .context
            .conditions
            .contains(Condition::OVERFLOW | Condition::INEXACT | Condition::ROUNDED));
    }

    #[test]
    fn test_finalize_dispatch() {
        let mut idiomatic = Big::with_context(Context::default().with_precision(2));
        idiomatic.set_parts(12345u64, 0, false).finalize(ResultKind::Exact);
        assert_eq!(idiomatic.to_string(), "12345");

        idiomatic.finalize(ResultKind::Inexact);
        assert_eq!(idiomatic.to_string(), "12000");
        assert!(idiomatic.context.conditions.is_empty());

        let mut gda = Big::with_context(strict(2, RoundingMode::ToNearestEven));
        gda.set_parts(12345u64, 0, false).finalize(ResultKind::Exact);
        assert_eq!(gda.to_string(), "12000");
    }

    #[test]
    fn test_set_idiomatic_copies() {
        let mut src = Big::with_context(Context::default().with_precision(34));
        src.set_parts(123456789u64, 4, true);

        let mut dst = Big::with_context(Context::default().with_precision(3));
        dst.set(&src);
        assert_eq!(dst.to_string(), "-12345.6789");
        assert_eq!(dst.context.precision, 3);
    }

    #[test]
    fn test_set_strict_rounds_on_precision_mismatch() {
        let mut src = Big::with_context(Context::DECIMAL128);
        src.set_parts(123456789u64, 4, false);

        let mut dst = Big::with_context(Context::DECIMAL32);
        dst.set(&src);
        assert_eq!(dst.to_string(), "12345.68");
        assert!(dst.context.conditions.contains(Condition::ROUNDED));

        let mut same = Big::with_context(Context::DECIMAL128);
        same.set(&src);
        assert_eq!(same.to_string(), "12345.6789");
        assert!(same.context.conditions.is_empty());
    }

    #[test]
    fn test_set_strict_copies_signaling_nan() {
        let mut src = Big::with_context(Context::DECIMAL64);
        src.set_nan(true);

        let mut dst = Big::with_context(Context::DECIMAL32);
        dst.set(&src);
        assert_eq!(dst.form(), Form::SignalingNaN);
        assert_eq!(dst.to_string(), "sNaN");
        assert!(dst.context.conditions.is_empty());
    }

    #[test]
    #[should_panic(expected = "signaling NaN")]
    fn test_set_signaling_nan_into_idiomatic_panics() {
        let mut src = Big::with_context(Context::DECIMAL64);
        src.set_nan(true);
        Big::default().set(&src);
    }

    #[test]
    fn test_display_specials_by_mode() {
        let mut idiomatic = Big::default();
        assert_eq!(idiomatic.set_inf(false).to_string(), "+Inf");
        assert_eq!(idiomatic.set_inf(true).to_string(), "-Inf");
        assert_eq!(idiomatic.set_nan(false).to_string(), "NaN");

        let mut gda = Big::with_context(Context::DECIMAL64);
        assert_eq!(gda.set_inf(false).to_string(), "Infinity");
        assert_eq!(gda.set_inf(true).to_string(), "-Infinity");
        assert_eq!(gda.set_nan(false).to_string(), "NaN");
        assert_eq!(gda.set_nan(true).to_string(), "sNaN");
        assert!(gda.context.conditions.is_empty());
    }

    #[test]
    #[should_panic(expected = "signaling NaN")]
    fn test_signaling_nan_in_idiomatic_panics() {
        Big::default().set_nan(true);
    }

    #[test]
    fn test_display_plain() {
        assert_eq!(Big::new(0u64, 0).to_string(), "0");
        assert_eq!(Big::new(5u64, 3).to_string(), "0.005");
        assert_eq!(Big::new(123u64, -2).to_string(), "12300");
        assert_eq!(Big::new(12345u64, 2).to_string(), "123.45");
    }

    #[test]
    fn test_from_decimal() {
        let d = Decimal::new(-12345, 2); // -123.45
        let x = Big::from_decimal(d, Context::DECIMAL64);
        assert_eq!(x.to_string(), "-123.45");
        assert_eq!(x.context.operating_mode, OperatingMode::Strict);

        let wide = Decimal::from_i128_with_scale(i128::from(u64::MAX) * 1000, 3);
        let y = Big::from_decimal(wide, Context::default());
        assert!(!y.is_compact());
        assert_eq!(y.to_decimal(), Some(wide));
    }

    #[test]
    fn test_to_decimal() {
        assert_eq!(Big::new(12345u64, 2).to_decimal(), Some(Decimal::new(12345, 2)));
        assert_eq!(Big::new(12u64, -3).to_decimal(), Some(Decimal::new(12000, 0)));

        let mut inf = Big::default();
        inf.set_inf(false);
        assert_eq!(inf.to_decimal(), None);
    }
}
