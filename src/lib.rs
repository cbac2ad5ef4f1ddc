// ============================================================================
// Scaled Money Library
// Exact monetary arithmetic on scaled integers with pluggable numeric backends
// ============================================================================

//! # Scaled Money
//!
//! Monetary values stored as an integer amount of minor units, a currency,
//! and a scale. No floating point is involved anywhere.
//!
//! ## Features
//!
//! - **Pluggable numeric backends**: checked `i64`, arbitrary-precision
//!   `BigInt`, and integral `rust_decimal::Decimal`
//! - **Lossless arithmetic**: add, subtract and multiply never round
//! - **Explicit rounding** at division, conversion and downscaling only
//! - **Exact allocation**: proportional splits always sum to the original
//! - **Non-decimal currencies**: any radix, including multi-base currencies
//!
//! ## Example
//!
//! ```rust
//! use scaled_money::prelude::*;
//!
//! // MGA has base 5 and exponent 1
//! let a = NativeMoney::from_minor(8, &iso::MGA);
//! let b = NativeMoney::with_scale(10, iso::MGA.to_currency::<NativeCalculator>(), 2).unwrap();
//!
//! let sum = add(&a, &b).unwrap();
//! assert_eq!(sum.amount(), &50);
//! assert_eq!(sum.scale(), &2);
//!
//! // Split $1.00 three ways
//! let parts = allocate(&NativeMoney::from_minor(100, &iso::USD), &[1, 1, 1]).unwrap();
//! let cents: Vec<i64> = parts.iter().map(|m| *m.amount()).collect();
//! assert_eq!(cents, vec![34, 33, 33]);
//!
//! // Same operations with a configured engine
//! let engine = MoneyEngine::<NativeCalculator>::new(EngineConfig::commercial()).unwrap();
//! let half = engine.divide(&NativeMoney::from_minor(5, &iso::USD), &2).unwrap();
//! assert_eq!(half.amount(), &3);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        from_snapshot, iso, to_snapshot, Base, BigMoney, Currency, CurrencyDef, DecimalMoney,
        EngineConfig, ExchangeRate, Money, MoneySnapshot, NativeMoney, ScaledAmount,
    };
    pub use crate::engine::{
        add, allocate, allocate_scaled, compare, convert, divide, equal, greater_than,
        greater_than_or_equal, has_sub_units, have_same_amount, have_same_currency, is_negative,
        is_positive, is_zero, less_than, less_than_or_equal, maximum, minimum, multiply, negate,
        normalize, normalize_scale, subtract, to_units, transform_scale, trim_scale, MoneyEngine,
        RoundingMode, Units,
    };
    pub use crate::interfaces::Calculator;
    pub use crate::numeric::{
        BigIntCalculator, DecimalCalculator, MoneyError, MoneyResult, NativeCalculator,
    };
}
