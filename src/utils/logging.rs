// ============================================================================
// Logging Setup
// Subscriber installation for the tracing events emitted by Context
// ============================================================================
//
// Context emits:
// - debug: a trapped condition was promoted into `err`
// - warn:  a rounding decision found an unknown rounding mode
// - trace: every rounding decision

use tracing::Level;

/// Install a global fmt subscriber at `level`.
///
/// # Returns
/// * `true` if the subscriber was installed
/// * `false` if another global subscriber already exists
///
/// # Example
/// ```ignore
/// use decimal_context::utils::init_logging;
///
/// init_logging(tracing::Level::DEBUG);
/// ```
#[cfg(feature = "logging")]
pub fn init_logging(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}

/// Install a global fmt subscriber at `level`.
///
/// **Note:** This is a no-op stub. Enable the `logging` feature for output.
#[cfg(not(feature = "logging"))]
pub fn init_logging(_level: Level) -> bool {
    // No-op when logging feature is disabled
    false
}
