// ============================================================================
// Scale Normalizer
// Aligns, transforms and trims the scale of monetary values
// ============================================================================

use super::rounding::RoundingMode;
use crate::domain::Money;
use crate::interfaces::Calculator;
use crate::numeric::{MoneyError, MoneyResult};
use std::cmp::Ordering;

/// Bring two same-currency values to their highest scale.
///
/// The lower-scale value is multiplied by `radix^(difference)`, which is
/// exact, so the represented quantities never change.
///
/// # Errors
/// Returns `CurrencyMismatch` when the currency codes differ.
pub fn normalize<C: Calculator>(
    a: &Money<C>,
    b: &Money<C>,
) -> MoneyResult<(Money<C>, Money<C>, C::Value)> {
    a.ensure_same_currency(b)?;

    let common = C::maximum(a.scale(), b.scale());
    let a = upscale(a, &common)?;
    let b = upscale(b, &common)?;
    Ok((a, b, common))
}

/// N-ary form of [`normalize`]: every value re-expressed at the highest scale.
pub fn normalize_scale<C: Calculator>(values: &[Money<C>]) -> MoneyResult<Vec<Money<C>>> {
    let Some(first) = values.first() else {
        return Ok(Vec::new());
    };

    let mut highest = first.scale().clone();
    for value in &values[1..] {
        first.ensure_same_currency(value)?;
        highest = C::maximum(&highest, value.scale());
    }

    values.iter().map(|value| upscale(value, &highest)).collect()
}

/// Re-express a value at `new_scale`.
///
/// Raising the scale is exact. Lowering it divides by `radix^(difference)`
/// and rounds with `mode`.
///
/// # Errors
/// Returns `InvalidScale` for a negative or fractional target scale.
pub fn transform_scale<C: Calculator>(
    value: &Money<C>,
    new_scale: &C::Value,
    mode: RoundingMode,
) -> MoneyResult<Money<C>> {
    C::check_scale(new_scale)?;

    match C::compare(value.scale(), new_scale) {
        Ordering::Equal => Ok(value.clone()),
        Ordering::Less => upscale(value, new_scale),
        Ordering::Greater => {
            let factor = scale_factor(value, new_scale, value.scale())?;
            let amount = mode.divide::<C>(value.amount(), &factor)?;
            Ok(Money::from_parts(amount, value.currency_handle(), new_scale.clone()))
        },
    }
}

/// Drop trailing zero digits (in the currency's radix) from the scale.
///
/// The scale never goes below `min_scale` (default: the currency exponent)
/// and never goes up. Only exact zeros are removed, so no information is
/// lost and trimming twice is the same as trimming once. A zero amount is
/// left as is.
pub fn trim_scale<C: Calculator>(
    value: &Money<C>,
    min_scale: Option<&C::Value>,
) -> MoneyResult<Money<C>> {
    let min_scale = min_scale.unwrap_or_else(|| value.currency().exponent());
    C::check_scale(min_scale)?;

    let radix = value.currency().radix::<C>()?;
    let zeros = count_trailing_zeros::<C>(value.amount(), &radix, value.scale())?;
    let candidate = C::maximum(&C::subtract(value.scale(), &zeros)?, min_scale);

    if C::compare(&candidate, value.scale()) != Ordering::Less {
        return Ok(value.clone());
    }

    tracing::trace!(
        backend = C::NAME,
        from = %value.scale(),
        to = %candidate,
        "trimmed scale"
    );

    // Exact by construction: the dropped digits are all zero.
    transform_scale(value, &candidate, RoundingMode::HalfEven)
}

/// Order two amounts of one currency without upscaling either of them.
///
/// The finer amount is divided down to the coarser scale. The truncated
/// quotient decides unless it ties with the coarser amount, in which case
/// the sign of the remainder does. A factor too large for the backend means
/// the finer amount is below one unit at the coarser scale.
pub(crate) fn compare_scaled<C: Calculator>(
    a: &Money<C>,
    b: &Money<C>,
) -> MoneyResult<Ordering> {
    match C::compare(a.scale(), b.scale()) {
        Ordering::Equal => Ok(C::compare(a.amount(), b.amount())),
        Ordering::Less => compare_coarse_to_fine(a, b),
        Ordering::Greater => Ok(compare_coarse_to_fine(b, a)?.reverse()),
    }
}

fn compare_coarse_to_fine<C: Calculator>(
    coarse: &Money<C>,
    fine: &Money<C>,
) -> MoneyResult<Ordering> {
    let (quotient, remainder) = match scale_factor(coarse, coarse.scale(), fine.scale()) {
        Ok(factor) => C::integer_divide(fine.amount(), &factor)?,
        Err(MoneyError::Overflow) => (C::zero(), fine.amount().clone()),
        Err(err) => return Err(err),
    };

    match C::compare(coarse.amount(), &quotient) {
        Ordering::Equal => Ok(C::compare(&C::zero(), &remainder)),
        unequal => Ok(unequal),
    }
}

/// Exact upscale; the caller guarantees `target >= value.scale()`.
fn upscale<C: Calculator>(value: &Money<C>, target: &C::Value) -> MoneyResult<Money<C>> {
    if C::compare(value.scale(), target) == Ordering::Equal {
        return Ok(value.clone());
    }

    let factor = scale_factor(value, value.scale(), target)?;
    let amount = C::multiply(value.amount(), &factor)?;
    Ok(Money::from_parts(amount, value.currency_handle(), target.clone()))
}

/// `radix^(high - low)` for the value's currency.
fn scale_factor<C: Calculator>(
    value: &Money<C>,
    low: &C::Value,
    high: &C::Value,
) -> MoneyResult<C::Value> {
    let radix = value.currency().radix::<C>()?;
    C::power(&radix, &C::subtract(high, low)?)
}

/// Number of trailing zero digits of `amount` in `radix`, at most `limit`.
fn count_trailing_zeros<C: Calculator>(
    amount: &C::Value,
    radix: &C::Value,
    limit: &C::Value,
) -> MoneyResult<C::Value> {
    let mut count = C::zero();
    if C::is_zero(amount) || C::compare(radix, &C::one()) != Ordering::Greater {
        return Ok(count);
    }

    let mut rest = amount.clone();
    while C::compare(&count, limit) == Ordering::Less {
        let (quotient, remainder) = C::integer_divide(&rest, radix)?;
        if !C::is_zero(&remainder) {
            break;
        }
        rest = quotient;
        count = C::increment(&count)?;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{iso, Base, BigMoney, Currency, NativeMoney};
    use crate::numeric::NativeCalculator;
    use num_bigint::BigInt;
    use std::sync::Arc;

    fn usd(amount: i64, scale: i64) -> NativeMoney {
        NativeMoney::with_scale(amount, iso::USD.to_currency::<NativeCalculator>(), scale).unwrap()
    }

    fn mga(amount: i64, scale: i64) -> NativeMoney {
        NativeMoney::with_scale(amount, iso::MGA.to_currency::<NativeCalculator>(), scale).unwrap()
    }

    #[test]
    fn test_normalize_decimal_currency() {
        let (a, b, common) = normalize(&usd(500, 2), &usd(1000, 3)).unwrap();
        assert_eq!(common, 3);
        assert_eq!(a.amount(), &5000);
        assert_eq!(b.amount(), &1000);
        assert_eq!(a.scale(), &3);
    }

    #[test]
    fn test_normalize_non_decimal_currency() {
        let (a, b, common) = normalize(&mga(8, 1), &mga(10, 2)).unwrap();
        assert_eq!(common, 2);
        assert_eq!(a.amount(), &40);
        assert_eq!(b.amount(), &10);
    }

    #[test]
    fn test_normalize_rejects_mismatch() {
        let eur = NativeMoney::from_minor(100, &iso::EUR);
        assert_eq!(
            normalize(&usd(100, 2), &eur).unwrap_err(),
            MoneyError::CurrencyMismatch
        );
    }

    #[test]
    fn test_normalize_scale_slice() {
        let values = vec![usd(1, 2), usd(1, 4), usd(1, 3)];
        let normalized = normalize_scale(&values).unwrap();
        let amounts: Vec<i64> = normalized.iter().map(|m| *m.amount()).collect();
        assert_eq!(amounts, vec![100, 1, 10]);
        assert!(normalized.iter().all(|m| *m.scale() == 4));
        assert!(normalize_scale::<NativeCalculator>(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_transform_scale_up_and_down() {
        let up = transform_scale(&usd(105, 2), &4, RoundingMode::HalfEven).unwrap();
        assert_eq!(up.amount(), &10500);

        let down = transform_scale(&usd(10545, 4), &2, RoundingMode::HalfEven).unwrap();
        assert_eq!(down.amount(), &105);

        let down = transform_scale(&usd(10550, 4), &2, RoundingMode::HalfEven).unwrap();
        assert_eq!(down.amount(), &106);

        let down = transform_scale(&usd(10550, 4), &2, RoundingMode::Down).unwrap();
        assert_eq!(down.amount(), &105);

        assert_eq!(
            transform_scale(&usd(1, 2), &-1, RoundingMode::HalfEven).unwrap_err(),
            MoneyError::InvalidScale
        );
    }

    #[test]
    fn test_trim_scale_to_exponent() {
        let trimmed = trim_scale(&usd(5000000, 6), None).unwrap();
        assert_eq!(trimmed.amount(), &500);
        assert_eq!(trimmed.scale(), &2);

        // Stops at the first non-zero digit
        let trimmed = trim_scale(&usd(5010000, 6), None).unwrap();
        assert_eq!(trimmed.amount(), &501);
        assert_eq!(trimmed.scale(), &2);

        let trimmed = trim_scale(&usd(5012345, 6), None).unwrap();
        assert_eq!(trimmed.amount(), &5012345);
        assert_eq!(trimmed.scale(), &6);
    }

    #[test]
    fn test_trim_scale_respects_min_and_never_upscales() {
        let trimmed = trim_scale(&usd(5000000, 6), Some(&4)).unwrap();
        assert_eq!(trimmed.amount(), &50000);
        assert_eq!(trimmed.scale(), &4);

        let trimmed = trim_scale(&usd(5, 1), None).unwrap();
        assert_eq!(trimmed.amount(), &5);
        assert_eq!(trimmed.scale(), &1);
    }

    #[test]
    fn test_trim_scale_zero_and_idempotent() {
        let zero = usd(0, 5);
        assert_eq!(trim_scale(&zero, None).unwrap().scale(), &5);

        let once = trim_scale(&usd(1200, 4), None).unwrap();
        let twice = trim_scale(&once, None).unwrap();
        assert_eq!(once.amount(), twice.amount());
        assert_eq!(once.scale(), twice.scale());
    }

    #[test]
    fn test_trim_scale_non_decimal() {
        // 50 at scale 2 in base 5 is 2 at scale 0, floored at exponent 1
        let trimmed = trim_scale(&mga(50, 2), None).unwrap();
        assert_eq!(trimmed.amount(), &10);
        assert_eq!(trimmed.scale(), &1);
    }

    #[test]
    fn test_bigint_scale_beyond_machine_range() {
        let currency = Arc::new(Currency::new(
            "USD",
            Base::Single(BigInt::from(10)),
            BigInt::from(2),
        ));
        let m = BigMoney::with_scale(BigInt::from(1), currency, BigInt::from(2)).unwrap();
        let up = transform_scale(&m, &BigInt::from(40), RoundingMode::HalfEven).unwrap();
        assert_eq!(up.amount(), &BigInt::from(10).pow(38));
        let back = trim_scale(&up, None).unwrap();
        assert_eq!(back.amount(), &BigInt::from(1));
        assert_eq!(back.scale(), &BigInt::from(2));
    }

    #[test]
    fn test_compare_scaled_without_upscaling() {
        // Scale gap of 19: 10^19 does not fit in i64
        assert_eq!(compare_scaled(&usd(0, 0), &usd(0, 19)).unwrap(), Ordering::Equal);
        assert_eq!(compare_scaled(&usd(1, 0), &usd(0, 19)).unwrap(), Ordering::Greater);
        assert_eq!(compare_scaled(&usd(0, 0), &usd(5, 19)).unwrap(), Ordering::Less);
        assert_eq!(compare_scaled(&usd(0, 0), &usd(-5, 19)).unwrap(), Ordering::Greater);
        assert_eq!(compare_scaled(&usd(-1, 0), &usd(i64::MIN, 30)).unwrap(), Ordering::Less);

        // Factor fits, quotient decides or ties and the remainder decides
        assert_eq!(
            compare_scaled(&usd(1, 0), &usd(1_000_000_000_000_000_000, 18)).unwrap(),
            Ordering::Equal
        );
        assert_eq!(compare_scaled(&usd(5, 2), &usd(5001, 5)).unwrap(), Ordering::Less);
        assert_eq!(compare_scaled(&usd(-5, 2), &usd(-5001, 5)).unwrap(), Ordering::Greater);
        assert_eq!(compare_scaled(&usd(5001, 5), &usd(5, 2)).unwrap(), Ordering::Greater);
        assert_eq!(compare_scaled(&mga(2, 1), &mga(10, 2)).unwrap(), Ordering::Equal);
    }
}
