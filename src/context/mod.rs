// ============================================================================
// Context Module
// Rounding, signaling and operating-mode policy attached to every decimal
// ============================================================================
//
// This module provides:
// - Context: per-value configuration and exception ledger
// - Condition: composable exceptional-condition flags
// - RoundingMode: the six rounding policies
// - OperatingMode: idiomatic vs. GDA-strict behavior
// - Precision: normalization of the stored precision
//
// Contexts are plain values. Presets are `const` items, so every use is an
// independent copy.

mod condition;
mod decimal_context;
mod operating_mode;
mod precision;
mod rounding;

pub use condition::Condition;
pub use decimal_context::Context;
pub use operating_mode::{OperatingMode, ResultKind, Special};
pub use precision::{
    Precision, DEFAULT_PRECISION, MAX_PRECISION, MAX_SCALE, MIN_PRECISION, MIN_SCALE,
    UNLIMITED_PRECISION,
};
pub use rounding::RoundingMode;
