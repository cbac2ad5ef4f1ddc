// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod calculator;

pub use calculator::Calculator;
