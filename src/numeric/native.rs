// ============================================================================
// Native Calculator
// Checked i64 arithmetic for the common case
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use crate::interfaces::Calculator;
use std::cmp::Ordering;

/// Calculator over machine integers.
///
/// Every operation is checked: leaving the i64 range is reported as
/// `Overflow` or `Underflow`, never wrapped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NativeCalculator;

impl Calculator for NativeCalculator {
    type Value = i64;

    const NAME: &'static str = "native";

    #[inline]
    fn zero() -> i64 {
        0
    }

    #[inline]
    fn from_integer(n: i64) -> i64 {
        n
    }

    #[inline]
    fn to_integer(a: &i64) -> MoneyResult<i64> {
        Ok(*a)
    }

    #[inline]
    fn is_integral(_a: &i64) -> bool {
        true
    }

    #[inline]
    fn add(a: &i64, b: &i64) -> MoneyResult<i64> {
        a.checked_add(*b).ok_or(if *b > 0 {
            MoneyError::Overflow
        } else {
            MoneyError::Underflow
        })
    }

    #[inline]
    fn subtract(a: &i64, b: &i64) -> MoneyResult<i64> {
        a.checked_sub(*b).ok_or(if *b < 0 {
            MoneyError::Overflow
        } else {
            MoneyError::Underflow
        })
    }

    #[inline]
    fn multiply(a: &i64, b: &i64) -> MoneyResult<i64> {
        a.checked_mul(*b).ok_or(if (*a < 0) != (*b < 0) {
            MoneyError::Underflow
        } else {
            MoneyError::Overflow
        })
    }

    fn power(base: &i64, exponent: &i64) -> MoneyResult<i64> {
        Self::check_scale(exponent)?;
        let exponent = u32::try_from(*exponent).map_err(|_| MoneyError::Overflow)?;
        base.checked_pow(exponent).ok_or(MoneyError::Overflow)
    }

    #[inline]
    fn integer_divide(a: &i64, b: &i64) -> MoneyResult<(i64, i64)> {
        if *b == 0 {
            return Err(MoneyError::DivisionByZero);
        }

        // i64::MIN / -1 is the only overflowing case
        let quotient = a.checked_div(*b).ok_or(MoneyError::Overflow)?;
        let remainder = a.checked_rem(*b).ok_or(MoneyError::Overflow)?;
        Ok((quotient, remainder))
    }

    #[inline]
    fn compare(a: &i64, b: &i64) -> Ordering {
        a.cmp(b)
    }

    #[inline]
    fn is_zero(a: &i64) -> bool {
        *a == 0
    }

    #[inline]
    fn negate(a: &i64) -> MoneyResult<i64> {
        a.checked_neg().ok_or(MoneyError::Overflow)
    }

    #[inline]
    fn increment(a: &i64) -> MoneyResult<i64> {
        a.checked_add(1).ok_or(MoneyError::Overflow)
    }
}
