// ============================================================================
// Arithmetic Engine
// Currency-safe, scale-aware operations on monetary values
// ============================================================================

use super::rounding::RoundingMode;
use super::scale::{compare_scaled, normalize, normalize_scale};
use crate::domain::{Money, ScaledAmount};
use crate::interfaces::Calculator;
use crate::numeric::{MoneyError, MoneyResult};
use std::cmp::Ordering;

// ============================================================================
// Combining Operations
// ============================================================================

/// Add two values of the same currency. The result is at the higher scale.
///
/// # Errors
/// Returns `CurrencyMismatch` when the currency codes differ.
pub fn add<C: Calculator>(a: &Money<C>, b: &Money<C>) -> MoneyResult<Money<C>> {
    let (a, b, _) = normalize(a, b)?;
    let amount = C::add(a.amount(), b.amount())?;
    Ok(a.with_amount(amount))
}

/// Subtract `b` from `a`. The result is at the higher scale.
///
/// # Errors
/// Returns `CurrencyMismatch` when the currency codes differ.
pub fn subtract<C: Calculator>(a: &Money<C>, b: &Money<C>) -> MoneyResult<Money<C>> {
    let (a, b, _) = normalize(a, b)?;
    let amount = C::subtract(a.amount(), b.amount())?;
    Ok(a.with_amount(amount))
}

/// Multiply by a scaled factor. Exact: the scales add up, nothing rounds.
///
/// ```
/// use scaled_money::prelude::*;
///
/// let m = NativeMoney::from_minor(400, &iso::USD);       // $4.00
/// let tripled = multiply(&m, &ScaledAmount::new(3, 0)).unwrap();
/// assert_eq!(tripled.amount(), &1200);
///
/// let m = multiply(&m, &ScaledAmount::new(2001, 3)).unwrap(); // x 2.001
/// assert_eq!(m.amount(), &800400);
/// assert_eq!(m.scale(), &5);
/// ```
pub fn multiply<C: Calculator>(
    a: &Money<C>,
    factor: &ScaledAmount<C::Value>,
) -> MoneyResult<Money<C>> {
    if !C::is_integral(&factor.amount) {
        return Err(MoneyError::NonIntegerAmount);
    }
    C::check_scale(&factor.scale)?;

    let amount = C::multiply(a.amount(), &factor.amount)?;
    let scale = C::add(a.scale(), &factor.scale)?;
    Ok(Money::from_parts(amount, a.currency_handle(), scale))
}

/// Divide the amount by an integer divisor, keeping scale and currency.
///
/// # Errors
/// Returns `DivisionByZero` when `divisor` is zero.
pub fn divide<C: Calculator>(
    a: &Money<C>,
    divisor: &C::Value,
    mode: RoundingMode,
) -> MoneyResult<Money<C>> {
    if C::is_zero(divisor) {
        return Err(MoneyError::DivisionByZero);
    }
    if !C::is_integral(divisor) {
        return Err(MoneyError::NonIntegerAmount);
    }

    let amount = mode.divide::<C>(a.amount(), divisor)?;
    Ok(a.with_amount(amount))
}

/// Flip the sign of the amount.
pub fn negate<C: Calculator>(a: &Money<C>) -> MoneyResult<Money<C>> {
    Ok(a.with_amount(C::negate(a.amount())?))
}

// ============================================================================
// Comparison
// ============================================================================

/// Order two values of the same currency after normalizing their scales.
///
/// # Errors
/// Returns `CurrencyMismatch` when the currency codes differ.
pub fn compare<C: Calculator>(a: &Money<C>, b: &Money<C>) -> MoneyResult<Ordering> {
    a.ensure_same_currency(b)?;
    compare_scaled(a, b)
}

/// Same currency and same normalized amount. Scale alone never matters.
///
/// Values in different currencies are simply unequal.
pub fn equal<C: Calculator>(a: &Money<C>, b: &Money<C>) -> bool {
    a.same_currency(b) && have_same_amount(a, b)
}

/// Same normalized amount, whatever the currency.
///
/// Scales are reconciled with `a`'s currency radix, by division rather
/// than upscaling, so any scale gap compares exactly. Only a currency whose
/// radix is zero cannot relate two scales; its values are equal only at
/// the same scale.
pub fn have_same_amount<C: Calculator>(a: &Money<C>, b: &Money<C>) -> bool {
    let aligned = Money::from_parts(b.amount().clone(), a.currency_handle(), b.scale().clone());
    matches!(compare_scaled(a, &aligned), Ok(Ordering::Equal))
}

/// Whether every value shares the first value's currency code.
pub fn have_same_currency<C: Calculator>(values: &[Money<C>]) -> bool {
    match values.split_first() {
        Some((first, rest)) => rest.iter().all(|value| first.same_currency(value)),
        None => true,
    }
}

pub fn less_than<C: Calculator>(a: &Money<C>, b: &Money<C>) -> MoneyResult<bool> {
    Ok(compare(a, b)? == Ordering::Less)
}

pub fn less_than_or_equal<C: Calculator>(a: &Money<C>, b: &Money<C>) -> MoneyResult<bool> {
    Ok(compare(a, b)? != Ordering::Greater)
}

pub fn greater_than<C: Calculator>(a: &Money<C>, b: &Money<C>) -> MoneyResult<bool> {
    Ok(compare(a, b)? == Ordering::Greater)
}

pub fn greater_than_or_equal<C: Calculator>(a: &Money<C>, b: &Money<C>) -> MoneyResult<bool> {
    Ok(compare(a, b)? != Ordering::Less)
}

/// Smallest of a non-empty set of same-currency values, at their common scale.
///
/// # Errors
/// - `InvalidInput` for an empty slice
/// - `CurrencyMismatch` when the currency codes differ
pub fn minimum<C: Calculator>(values: &[Money<C>]) -> MoneyResult<Money<C>> {
    extreme(values, Ordering::Less)
}

/// Largest of a non-empty set of same-currency values, at their common scale.
pub fn maximum<C: Calculator>(values: &[Money<C>]) -> MoneyResult<Money<C>> {
    extreme(values, Ordering::Greater)
}

fn extreme<C: Calculator>(values: &[Money<C>], wanted: Ordering) -> MoneyResult<Money<C>> {
    normalize_scale(values)?
        .into_iter()
        .reduce(|best, value| {
            if C::compare(value.amount(), best.amount()) == wanted {
                value
            } else {
                best
            }
        })
        .ok_or(MoneyError::InvalidInput)
}

// ============================================================================
// Predicates
// ============================================================================

pub fn is_zero<C: Calculator>(a: &Money<C>) -> bool {
    C::is_zero(a.amount())
}

pub fn is_positive<C: Calculator>(a: &Money<C>) -> bool {
    C::is_positive(a.amount())
}

pub fn is_negative<C: Calculator>(a: &Money<C>) -> bool {
    C::is_negative(a.amount())
}

/// Whether the amount has a non-zero part below one major unit.
pub fn has_sub_units<C: Calculator>(a: &Money<C>) -> MoneyResult<bool> {
    let radix = a.currency().radix::<C>()?;
    let unit = C::power(&radix, a.scale())?;
    let (_, remainder) = C::integer_divide(a.amount(), &unit)?;
    Ok(!C::is_zero(&remainder))
}
