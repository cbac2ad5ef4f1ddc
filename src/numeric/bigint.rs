// ============================================================================
// Arbitrary-Precision Calculator
// Unbounded integer arithmetic on num_bigint::BigInt
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use crate::interfaces::Calculator;
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;

/// Calculator over arbitrary-precision integers.
///
/// Addition, subtraction and multiplication cannot overflow. Scales are
/// `BigInt` too, but `power` only accepts exponents that fit in a `u32`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BigIntCalculator;

impl Calculator for BigIntCalculator {
    type Value = BigInt;

    const NAME: &'static str = "bigint";

    fn zero() -> BigInt {
        BigInt::zero()
    }

    fn from_integer(n: i64) -> BigInt {
        BigInt::from(n)
    }

    fn to_integer(a: &BigInt) -> MoneyResult<i64> {
        a.to_i64().ok_or(if a.is_negative() {
            MoneyError::Underflow
        } else {
            MoneyError::Overflow
        })
    }

    fn is_integral(_a: &BigInt) -> bool {
        true
    }

    fn add(a: &BigInt, b: &BigInt) -> MoneyResult<BigInt> {
        Ok(a + b)
    }

    fn subtract(a: &BigInt, b: &BigInt) -> MoneyResult<BigInt> {
        Ok(a - b)
    }

    fn multiply(a: &BigInt, b: &BigInt) -> MoneyResult<BigInt> {
        Ok(a * b)
    }

    fn power(base: &BigInt, exponent: &BigInt) -> MoneyResult<BigInt> {
        Self::check_scale(exponent)?;
        let exponent = exponent.to_u32().ok_or(MoneyError::Overflow)?;
        Ok(base.pow(exponent))
    }

    fn integer_divide(a: &BigInt, b: &BigInt) -> MoneyResult<(BigInt, BigInt)> {
        if b.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok((a / b, a % b))
    }

    fn compare(a: &BigInt, b: &BigInt) -> Ordering {
        a.cmp(b)
    }

    fn is_zero(a: &BigInt) -> bool {
        Zero::is_zero(a)
    }

    fn negate(a: &BigInt) -> MoneyResult<BigInt> {
        Ok(-a)
    }

    fn increment(a: &BigInt) -> MoneyResult<BigInt> {
        Ok(a + BigInt::one())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type B = BigIntCalculator;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_beyond_i64() {
        let a = big("9223372036854775807");
        let sum = B::add(&a, &BigInt::from(10)).unwrap();
        assert_eq!(sum, big("9223372036854775817"));
        assert_eq!(B::to_integer(&sum), Err(MoneyError::Overflow));
        assert_eq!(B::to_integer(&-sum), Err(MoneyError::Underflow));
    }

    #[test]
    fn test_power() {
        let p = B::power(&BigInt::from(10), &BigInt::from(30)).unwrap();
        assert_eq!(p, big("1000000000000000000000000000000"));
        assert_eq!(
            B::power(&BigInt::from(10), &BigInt::from(-2)),
            Err(MoneyError::InvalidScale)
        );
    }

    #[test]
    fn test_integer_divide_truncates() {
        assert_eq!(
            B::integer_divide(&BigInt::from(-7), &BigInt::from(2)),
            Ok((BigInt::from(-3), BigInt::from(-1)))
        );
        assert_eq!(
            B::integer_divide(&BigInt::from(7), &BigInt::zero()),
            Err(MoneyError::DivisionByZero)
        );
    }

    #[test]
    fn test_negate_and_increment() {
        assert_eq!(B::negate(&BigInt::from(5)), Ok(BigInt::from(-5)));
        assert_eq!(B::increment(&BigInt::from(-1)), Ok(BigInt::zero()));
        assert!(B::is_zero(&BigInt::zero()));
    }
}
