// ============================================================================
// Rounding Policies
// Applied only at explicit precision-reducing boundaries
// ============================================================================

use crate::interfaces::Calculator;
use crate::numeric::MoneyResult;
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounding policy applied after a truncating integer division.
///
/// Division, conversion and downscaling round; addition, subtraction and
/// multiplication never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Toward positive infinity (ceiling)
    Up,
    /// Toward negative infinity (floor)
    Down,
    /// Nearest, ties toward positive infinity
    HalfUp,
    /// Nearest, ties toward negative infinity
    HalfDown,
    /// Nearest, ties to the even neighbour (banker's rounding)
    #[default]
    HalfEven,
    /// Nearest, ties to the odd neighbour
    HalfOdd,
    /// Nearest, ties toward zero
    HalfTowardsZero,
    /// Nearest, ties away from zero
    HalfAwayFromZero,
}

impl RoundingMode {
    /// Adjust a truncated quotient given the division's remainder and divisor.
    ///
    /// `quotient` and `remainder` must come from `Calculator::integer_divide`
    /// (truncation toward zero, remainder signed like the dividend).
    pub fn apply<C: Calculator>(
        self,
        quotient: &C::Value,
        remainder: &C::Value,
        divisor: &C::Value,
    ) -> MoneyResult<C::Value> {
        if C::is_zero(remainder) {
            return Ok(quotient.clone());
        }

        // Sign of the exact result; the quotient may itself be zero.
        let negative = C::is_negative(remainder) != C::is_negative(divisor);

        let round_away = match self {
            RoundingMode::Up => !negative,
            RoundingMode::Down => negative,
            RoundingMode::HalfUp => {
                Self::beyond_half::<C>(remainder, divisor)?.unwrap_or(!negative)
            },
            RoundingMode::HalfDown => {
                Self::beyond_half::<C>(remainder, divisor)?.unwrap_or(negative)
            },
            RoundingMode::HalfEven => match Self::beyond_half::<C>(remainder, divisor)? {
                Some(away) => away,
                None => !C::is_even(quotient)?,
            },
            RoundingMode::HalfOdd => match Self::beyond_half::<C>(remainder, divisor)? {
                Some(away) => away,
                None => C::is_even(quotient)?,
            },
            RoundingMode::HalfTowardsZero => {
                Self::beyond_half::<C>(remainder, divisor)?.unwrap_or(false)
            },
            RoundingMode::HalfAwayFromZero => {
                Self::beyond_half::<C>(remainder, divisor)?.unwrap_or(true)
            },
        };

        if !round_away {
            Ok(quotient.clone())
        } else if negative {
            C::decrement(quotient)
        } else {
            C::increment(quotient)
        }
    }

    /// Divide and round in one step.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `divisor` is zero.
    pub fn divide<C: Calculator>(
        self,
        dividend: &C::Value,
        divisor: &C::Value,
    ) -> MoneyResult<C::Value> {
        let (quotient, remainder) = C::integer_divide(dividend, divisor)?;
        let rounded = self.apply::<C>(&quotient, &remainder, divisor)?;

        if !C::is_zero(&remainder) {
            tracing::trace!(
                backend = C::NAME,
                mode = ?self,
                %dividend,
                %divisor,
                %rounded,
                "rounded inexact division"
            );
        }

        Ok(rounded)
    }

    /// `Some(true)` past the midpoint, `Some(false)` before it, `None` on a tie.
    ///
    /// Compares `-|r|` with `-|d| + |r|`. Negative magnitudes never
    /// overflow, even for the most negative divisor, and `2|r|` is never
    /// formed.
    fn beyond_half<C: Calculator>(
        remainder: &C::Value,
        divisor: &C::Value,
    ) -> MoneyResult<Option<bool>> {
        let remainder = Self::negative_magnitude::<C>(remainder)?;
        let complement = C::subtract(&Self::negative_magnitude::<C>(divisor)?, &remainder)?;

        Ok(match C::compare(&remainder, &complement) {
            Ordering::Less => Some(true),
            Ordering::Greater => Some(false),
            Ordering::Equal => None,
        })
    }

    fn negative_magnitude<C: Calculator>(value: &C::Value) -> MoneyResult<C::Value> {
        if C::is_positive(value) {
            C::negate(value)
        } else {
            Ok(value.clone())
        }
    }
}
