// ============================================================================
// Numeric Module
// Interchangeable integer backends for scaled-integer money
// ============================================================================
//
// This module provides:
// - NativeCalculator: checked i64 arithmetic
// - BigIntCalculator: arbitrary-precision integers (num-bigint)
// - DecimalCalculator: integral rust_decimal::Decimal values
// - MoneyError: Error types for every monetary operation
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - Backends are selected at compile time through the Calculator trait

mod bigint;
mod decimal;
mod errors;
mod native;

pub use bigint::BigIntCalculator;
pub use decimal::DecimalCalculator;
pub use errors::{MoneyError, MoneyResult};
pub use native::NativeCalculator;
