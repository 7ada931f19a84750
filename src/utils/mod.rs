// ============================================================================
// Utilities Module
// Helper functions outside of the decimal policy itself
// ============================================================================

mod logging;

pub use logging::init_logging;
