// ============================================================================
// Unit Decomposition
// Splits an amount into major unit and per-subdivision units
// ============================================================================

use crate::domain::Money;
use crate::interfaces::Calculator;
use crate::numeric::MoneyResult;
use smallvec::SmallVec;

/// Units of an amount, most significant first. Rarely more than three.
pub type Units<T> = SmallVec<[T; 4]>;

/// Decompose a value into its units.
///
/// A single-base currency yields `[major, minor]`. A sequence base yields
/// one entry per subdivision, e.g. pre-decimal pounds with base `[20, 12]`
/// turn 267 pence into `[1, 2, 3]` (£1 2s 3d).
///
/// Each step is a truncating division, so negative amounts give
/// non-positive units throughout.
pub fn to_units<C: Calculator>(value: &Money<C>) -> MoneyResult<Units<C::Value>> {
    let powers = value
        .currency()
        .base()
        .as_slice()
        .iter()
        .map(|base| C::power(base, value.scale()))
        .collect::<MoneyResult<Vec<_>>>()?;

    let mut units = Units::new();
    let mut rest = value.amount().clone();

    for index in 0..powers.len() {
        // Divisor for position i is the product of powers[i..]
        let divisor = powers[index..]
            .iter()
            .try_fold(C::one(), |acc, power| C::multiply(&acc, power))?;
        let (quotient, remainder) = C::integer_divide(&rest, &divisor)?;
        units.push(quotient);
        rest = remainder;
    }
    units.push(rest);

    Ok(units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{iso, Base, Currency, NativeMoney};
    use crate::numeric::MoneyError;
    use std::sync::Arc;

    #[test]
    fn test_decimal_currency() {
        let m = NativeMoney::from_minor(1050, &iso::USD);
        assert_eq!(to_units(&m).unwrap().as_slice(), &[10, 50]);

        let m = NativeMoney::from_minor(-1050, &iso::USD);
        assert_eq!(to_units(&m).unwrap().as_slice(), &[-10, -50]);

        let m = NativeMoney::from_minor(1050, &iso::JPY);
        assert_eq!(to_units(&m).unwrap().as_slice(), &[1050, 0]);
    }

    #[test]
    fn test_non_decimal_currency() {
        let m = NativeMoney::from_minor(11, &iso::MGA);
        assert_eq!(to_units(&m).unwrap().as_slice(), &[2, 1]);
    }

    #[test]
    fn test_multiple_bases() {
        let lsd = Arc::new(Currency::new("GBP", Base::Multiple(vec![20, 12]), 1));
        let m = NativeMoney::new(267, lsd).unwrap();
        assert_eq!(to_units(&m).unwrap().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_zero_base_is_reported() {
        let broken = Arc::new(Currency::new("XXX", Base::Single(0), 1));
        let m = NativeMoney::new(5, broken).unwrap();
        assert_eq!(to_units(&m).unwrap_err(), MoneyError::DivisionByZero);
    }
}
