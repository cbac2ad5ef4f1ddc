// ============================================================================
// Calculator Interface
// Defines the arithmetic contract every numeric backend must supply
// ============================================================================

use crate::numeric::{MoneyError, MoneyResult};
use std::cmp::Ordering;
use std::fmt;

/// Strategy interface for numeric backends.
/// Implementations: `NativeCalculator` (i64), `BigIntCalculator`, `DecimalCalculator`.
///
/// A calculator is a stateless set of pure functions bound to exactly one
/// value type. The arithmetic engine is generic over this trait and never
/// inspects which backend is active.
///
/// Integer division truncates toward zero, and the remainder carries the
/// sign of the dividend, on every backend. Rounding policies rely on this.
pub trait Calculator: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// The numeric representation used for amounts, scales, bases and ratios
    type Value: Clone + fmt::Debug + fmt::Display + PartialEq + Send + Sync + 'static;

    /// Backend name for logging
    const NAME: &'static str;

    /// Additive identity
    fn zero() -> Self::Value;

    /// Lift a machine integer into the backend.
    fn from_integer(n: i64) -> Self::Value;

    /// Lower a value to a machine integer. Boundary use only.
    ///
    /// # Errors
    /// Returns `Overflow`/`Underflow` if the value does not fit,
    /// `NonIntegerAmount` if it has a fractional component.
    fn to_integer(a: &Self::Value) -> MoneyResult<i64>;

    /// Whether the value has no fractional component.
    fn is_integral(a: &Self::Value) -> bool;

    fn add(a: &Self::Value, b: &Self::Value) -> MoneyResult<Self::Value>;

    fn subtract(a: &Self::Value, b: &Self::Value) -> MoneyResult<Self::Value>;

    fn multiply(a: &Self::Value, b: &Self::Value) -> MoneyResult<Self::Value>;

    /// Raise `base` to a non-negative integer `exponent`.
    ///
    /// # Errors
    /// Returns `InvalidScale` for a negative or non-integral exponent.
    fn power(base: &Self::Value, exponent: &Self::Value) -> MoneyResult<Self::Value>;

    /// Truncating division returning `(quotient, remainder)`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `b` is zero.
    fn integer_divide(
        a: &Self::Value,
        b: &Self::Value,
    ) -> MoneyResult<(Self::Value, Self::Value)>;

    fn compare(a: &Self::Value, b: &Self::Value) -> Ordering;

    fn is_zero(a: &Self::Value) -> bool {
        Self::compare(a, &Self::zero()) == Ordering::Equal
    }

    fn negate(a: &Self::Value) -> MoneyResult<Self::Value>;

    fn increment(a: &Self::Value) -> MoneyResult<Self::Value>;

    // ========================================================================
    // Provided helpers
    // ========================================================================

    /// Multiplicative identity
    fn one() -> Self::Value {
        Self::from_integer(1)
    }

    fn is_negative(a: &Self::Value) -> bool {
        Self::compare(a, &Self::zero()) == Ordering::Less
    }

    fn is_positive(a: &Self::Value) -> bool {
        Self::compare(a, &Self::zero()) == Ordering::Greater
    }

    fn abs(a: &Self::Value) -> MoneyResult<Self::Value> {
        if Self::is_negative(a) {
            Self::negate(a)
        } else {
            Ok(a.clone())
        }
    }

    fn decrement(a: &Self::Value) -> MoneyResult<Self::Value> {
        Self::subtract(a, &Self::one())
    }

    fn maximum(a: &Self::Value, b: &Self::Value) -> Self::Value {
        if Self::compare(a, b) == Ordering::Less {
            b.clone()
        } else {
            a.clone()
        }
    }

    fn is_even(a: &Self::Value) -> MoneyResult<bool> {
        let (_, remainder) = Self::integer_divide(a, &Self::from_integer(2))?;
        Ok(Self::is_zero(&remainder))
    }

    /// Sum a sequence of values, starting from zero.
    fn sum<'a, I>(values: I) -> MoneyResult<Self::Value>
    where
        I: IntoIterator<Item = &'a Self::Value>,
    {
        values
            .into_iter()
            .try_fold(Self::zero(), |acc, value| Self::add(&acc, value))
    }

    /// Floored division: quotient rounded toward negative infinity and a
    /// remainder with the sign of the divisor.
    fn floor_divide(
        a: &Self::Value,
        b: &Self::Value,
    ) -> MoneyResult<(Self::Value, Self::Value)> {
        let (quotient, remainder) = Self::integer_divide(a, b)?;
        if !Self::is_zero(&remainder) && Self::is_negative(&remainder) != Self::is_negative(b) {
            Ok((Self::decrement(&quotient)?, Self::add(&remainder, b)?))
        } else {
            Ok((quotient, remainder))
        }
    }

    /// Validate that a value can be used as a scale.
    fn check_scale(scale: &Self::Value) -> MoneyResult<()> {
        if !Self::is_integral(scale) || Self::is_negative(scale) {
            Err(MoneyError::InvalidScale)
        } else {
            Ok(())
        }
    }
}
