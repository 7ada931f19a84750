// ============================================================================
// Decimal Context Library
// Rounding, signaling and operating-mode policy for arbitrary-precision decimals
// ============================================================================

//! # Decimal Context
//!
//! The control layer of an arbitrary-precision decimal engine: it decides how
//! a too-precise result is rounded, records the exceptional conditions an
//! operation raised, and switches between two behavioral philosophies.
//!
//! ## Features
//!
//! - **Six rounding modes** including IEEE ties-to-even on either the native
//!   or the `BigUint` representation
//! - **Composable conditions** with traps that promote them into errors
//! - **Idiomatic or GDA-strict operating modes** consulted at every
//!   mode-dependent step
//! - **IEEE 754R presets** for Decimal32/64/128
//!
//! ## Example
//!
//! ```rust
//! use decimal_context::prelude::*;
//!
//! // Strict context with 4 digits, ties-to-even
//! let ctx = Context::new(OperatingMode::Strict).with_precision(4);
//!
//! // 1234.5 -> 1234: exactly half, last retained digit even
//! let mut x = Big::with_context(ctx);
//! x.set_parts(12345u64, 1, false).finalize(ResultKind::Exact);
//!
//! assert_eq!(x.to_string(), "1234");
//! assert_eq!(x.context.conditions.to_string(), "inexact, rounded");
//! assert!(x.context.err.is_none());
//! ```

pub mod context;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::context::{
        Condition, Context, OperatingMode, Precision, ResultKind, RoundingMode, Special,
    };
    pub use crate::interfaces::{Representation, Signaler};
    pub use crate::numeric::{Big, Coefficient, DecimalError, DecimalResult, Form};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::cmp::Ordering;

    #[test]
    fn test_end_to_end_strict_tie_to_even() {
        let ctx = Context::new(OperatingMode::Strict)
            .with_precision(4)
            .with_rounding_mode(RoundingMode::ToNearestEven);
        let mut x = Big::with_context(ctx);

        // raw result 2468.5 from some operation
        x.set_parts(24685u64, 1, false);
        x.finalize(ResultKind::Exact);

        assert_eq!(x.coefficient(), &Coefficient::from(2468u64));
        assert!(x.context.conditions.contains(Condition::ROUNDED));
        assert!(x.context.conditions.contains(Condition::INEXACT));
    }

    #[test]
    fn test_operation_flow_through_signaler() {
        // An operation layer only sees the seams.
        fn divide_by_zero<S: Signaler>(target: &mut S) {
            target.signal(
                Condition::DIVISION_BY_ZERO,
                DecimalError::Signaled(Condition::DIVISION_BY_ZERO),
            );
        }

        let mut x = Big::with_context(Context::DECIMAL64);
        divide_by_zero(&mut x);
        assert_eq!(x.context.conditions, Condition::DIVISION_BY_ZERO);
        assert_eq!(
            x.context.status(),
            Err(DecimalError::Signaled(Condition::DIVISION_BY_ZERO))
        );

        let mut quiet = Big::default();
        divide_by_zero(&mut quiet);
        assert!(quiet.context.conditions.is_empty());
    }

    #[test]
    fn test_decision_through_value_representation() {
        let mut x = Big::with_context(Context::DECIMAL64);
        x.set_parts(7u64, 0, false);

        let mut ctx = x.context.clone();
        assert!(ctx.needs_increment(&x, Ordering::Equal, true));

        x.set_parts(8u64, 0, false);
        assert!(!ctx.needs_increment(&x, Ordering::Equal, true));
    }

    #[test]
    fn test_conditions_persist_across_operations() {
        let mut x = Big::with_context(Context::DECIMAL32);
        x.set_parts(123456789u64, 0, false).round();
        assert!(x.context.conditions.contains(Condition::ROUNDED));

        // an exact second step does not clear the earlier record
        x.set_parts(5u64, 0, false).round();
        assert!(x.context.conditions.contains(Condition::ROUNDED | Condition::INEXACT));

        x.context.clear_status();
        assert!(x.context.conditions.is_empty());
    }

    #[test]
    fn test_presets_shared_across_threads() {
        let handles: Vec<_> = (0..4u64)
            .map(|i| {
                std::thread::spawn(move || {
                    let mut x = Big::with_context(Context::DECIMAL32);
                    x.set_parts(123456785u64 + i, 0, false).round();
                    x.context.conditions
                })
            })
            .collect();

        for handle in handles {
            let conditions = handle.join().unwrap();
            assert!(conditions.contains(Condition::ROUNDED));
        }
        assert!(Context::DECIMAL32.conditions.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_context_config_from_json() {
        let json = r#"{
            "operating_mode": "Strict",
            "precision": 7,
            "traps": "OVERFLOW | DIVISION_BY_ZERO",
            "conditions": "",
            "rounding_mode": 3
        }"#;

        let ctx: Context = serde_json::from_str(json).unwrap();
        assert!(ctx.validate().is_ok());
        assert_eq!(ctx.rounding_mode(), Ok(RoundingMode::AwayFromZero));
        assert_eq!(ctx.traps, Condition::OVERFLOW | Condition::DIVISION_BY_ZERO);
        assert!(ctx.err.is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_context_config_with_unknown_mode_fails_on_use() {
        let json = r#"{
            "operating_mode": "Strict",
            "precision": 7,
            "traps": "INVALID_CONTEXT",
            "conditions": "",
            "rounding_mode": 17
        }"#;

        let mut ctx: Context = serde_json::from_str(json).unwrap();
        assert_eq!(ctx.validate(), Err(DecimalError::InvalidRoundingMode(17)));
        assert!(!ctx.needs_increment(&1u64, Ordering::Greater, true));
        assert_eq!(ctx.err, Some(DecimalError::InvalidRoundingMode(17)));
    }
}
