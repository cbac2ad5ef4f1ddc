// ============================================================================
// Utilities Module
// Optional helpers that sit outside the money engine
// ============================================================================

#[cfg(feature = "logging")]
pub mod logging;

#[cfg(feature = "logging")]
pub use logging::init_tracing;
