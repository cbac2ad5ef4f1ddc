// ============================================================================
// Decimal Calculator
// Integral arithmetic on rust_decimal::Decimal
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use crate::interfaces::Calculator;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// Calculator over fixed-point decimals holding integral values only.
///
/// `Decimal` can represent fractions, but monetary amounts never carry one:
/// a value with a fractional component is rejected at construction with
/// `NonIntegerAmount`. The 96-bit mantissa gives roughly 28 significant
/// digits before `Overflow`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DecimalCalculator;

impl Calculator for DecimalCalculator {
    type Value = Decimal;

    const NAME: &'static str = "decimal";

    #[inline]
    fn zero() -> Decimal {
        Decimal::ZERO
    }

    #[inline]
    fn from_integer(n: i64) -> Decimal {
        Decimal::from(n)
    }

    fn to_integer(a: &Decimal) -> MoneyResult<i64> {
        if !Self::is_integral(a) {
            return Err(MoneyError::NonIntegerAmount);
        }
        a.to_i64().ok_or(if a.is_sign_negative() {
            MoneyError::Underflow
        } else {
            MoneyError::Overflow
        })
    }

    #[inline]
    fn is_integral(a: &Decimal) -> bool {
        a.fract().is_zero()
    }

    #[inline]
    fn add(a: &Decimal, b: &Decimal) -> MoneyResult<Decimal> {
        a.checked_add(*b).ok_or(if b.is_sign_positive() {
            MoneyError::Overflow
        } else {
            MoneyError::Underflow
        })
    }

    #[inline]
    fn subtract(a: &Decimal, b: &Decimal) -> MoneyResult<Decimal> {
        a.checked_sub(*b).ok_or(if b.is_sign_negative() {
            MoneyError::Overflow
        } else {
            MoneyError::Underflow
        })
    }

    #[inline]
    fn multiply(a: &Decimal, b: &Decimal) -> MoneyResult<Decimal> {
        a.checked_mul(*b).ok_or(if a.is_sign_negative() != b.is_sign_negative() {
            MoneyError::Underflow
        } else {
            MoneyError::Overflow
        })
    }

    /// Square-and-multiply so large exponents fail fast on overflow.
    fn power(base: &Decimal, exponent: &Decimal) -> MoneyResult<Decimal> {
        Self::check_scale(exponent)?;
        let mut remaining = exponent.to_u32().ok_or(MoneyError::Overflow)?;
        let mut result = Decimal::ONE;
        let mut factor = *base;

        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result.checked_mul(factor).ok_or(MoneyError::Overflow)?;
            }
            remaining >>= 1;
            if remaining > 0 {
                factor = factor.checked_mul(factor).ok_or(MoneyError::Overflow)?;
            }
        }

        Ok(result)
    }

    fn integer_divide(a: &Decimal, b: &Decimal) -> MoneyResult<(Decimal, Decimal)> {
        if b.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }

        // Take the remainder first so the quotient division is exact and
        // never rounds at the 28th digit.
        let remainder = a.checked_rem(*b).ok_or(MoneyError::Overflow)?;
        let quotient = a
            .checked_sub(remainder)
            .and_then(|exact| exact.checked_div(*b))
            .ok_or(MoneyError::Overflow)?;

        Ok((quotient.trunc().normalize(), remainder.normalize()))
    }

    #[inline]
    fn compare(a: &Decimal, b: &Decimal) -> Ordering {
        a.cmp(b)
    }

    #[inline]
    fn is_zero(a: &Decimal) -> bool {
        a.is_zero()
    }

    #[inline]
    fn negate(a: &Decimal) -> MoneyResult<Decimal> {
        Ok(-*a)
    }

    #[inline]
    fn increment(a: &Decimal) -> MoneyResult<Decimal> {
        a.checked_add(Decimal::ONE).ok_or(MoneyError::Overflow)
    }
}
