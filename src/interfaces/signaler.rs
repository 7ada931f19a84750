// ============================================================================
// Signaler Interface
// Callback the operation layer uses to report conditions
// ============================================================================

use crate::context::Condition;
use crate::numeric::DecimalError;

/// Receiver of exceptional conditions raised by an operation.
pub trait Signaler {
    /// Report `condition`; `err` is the error to record if it is trapped.
    fn signal(&mut self, condition: Condition, err: DecimalError);
}
