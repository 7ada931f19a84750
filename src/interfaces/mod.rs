// ============================================================================
// Interfaces Module
// Contracts between the policy layer and the numeric representation
// ============================================================================

mod representation;
mod signaler;

pub use representation::Representation;
pub use signaler::Signaler;
