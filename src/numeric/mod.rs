// ============================================================================
// Numeric Module
// Minimal numeric representation the policy layer operates on
// ============================================================================
//
// This module provides:
// - Coefficient: digit magnitude, native u64 fast path or BigUint general path
// - Big: decimal value owning its Context, with the rounding step
// - DecimalError: errors recorded by trapped conditions
//
// Digit arithmetic for add/div/sqrt and literal parsing live outside this
// crate; they call `Big::finalize` and `Context::signal`.

mod big;
mod coefficient;
mod errors;

pub use big::{Big, Form};
pub use coefficient::{Coefficient, Shifted};
pub use errors::{DecimalError, DecimalResult};
