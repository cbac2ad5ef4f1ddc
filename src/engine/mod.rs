// ============================================================================
// Engine Module
// Scaled-integer arithmetic, allocation, conversion and rounding
// ============================================================================

mod allocator;
mod arithmetic;
mod converter;
mod money_engine;
mod rounding;
mod scale;
mod units;

pub use allocator::{allocate, allocate_scaled};
pub use arithmetic::{
    add, compare, divide, equal, greater_than, greater_than_or_equal, has_sub_units,
    have_same_amount, have_same_currency, is_negative, is_positive, is_zero, less_than,
    less_than_or_equal, maximum, minimum, multiply, negate, subtract,
};
pub use converter::convert;
pub use money_engine::MoneyEngine;
pub use rounding::RoundingMode;
pub use scale::{normalize, normalize_scale, transform_scale, trim_scale};
pub use units::{to_units, Units};
