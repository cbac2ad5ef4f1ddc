// ============================================================================
// Currency Converter
// Rescales a value into another currency at a given rate
// ============================================================================

use super::rounding::RoundingMode;
use crate::domain::{Currency, ExchangeRate, Money};
use crate::interfaces::Calculator;
use crate::numeric::{MoneyError, MoneyResult};
use std::sync::Arc;

/// Convert a value into `target` at `rate`, landing on the target
/// currency's default scale.
///
/// The rate is a decimal ratio (`amount / 10^scale`). The product
/// `value.amount * rate.amount` is exact; the only rounding happens once,
/// when that product is brought to the target exponent:
///
/// ```text
/// target = amount * rate * radix_t^exp_t / (radix_s^scale_s * 10^scale_r)
/// ```
///
/// For decimal currencies this is the product taken at scale
/// `value.scale + rate.scale` and rescaled to the target exponent.
///
/// # Errors
/// - `CurrencyMismatch` if the rate states a source currency other than the value's
/// - `InvalidScale` for a negative rate scale
pub fn convert<C: Calculator>(
    value: &Money<C>,
    target: Arc<Currency<C::Value>>,
    rate: &ExchangeRate<C::Value>,
    mode: RoundingMode,
) -> MoneyResult<Money<C>> {
    if let Some(source) = rate.source.as_deref() {
        if source != value.currency().code() {
            tracing::debug!(
                expected = source,
                found = value.currency().code(),
                "rejected conversion: source currency mismatch"
            );
            return Err(MoneyError::CurrencyMismatch);
        }
    }

    let rate = &rate.rate;
    if !C::is_integral(&rate.amount) {
        return Err(MoneyError::NonIntegerAmount);
    }
    C::check_scale(&rate.scale)?;

    let source_radix = value.currency().radix::<C>()?;
    let target_radix = target.radix::<C>()?;
    let target_scale = target.exponent().clone();

    let numerator = C::multiply(
        &C::multiply(value.amount(), &rate.amount)?,
        &C::power(&target_radix, &target_scale)?,
    )?;
    let denominator = C::multiply(
        &C::power(&source_radix, value.scale())?,
        &C::power(&C::from_integer(10), &rate.scale)?,
    )?;

    let amount = mode.divide::<C>(&numerator, &denominator)?;

    tracing::debug!(
        backend = C::NAME,
        from = value.currency().code(),
        to = target.code(),
        %amount,
        "converted monetary value"
    );

    Ok(Money::from_parts(amount, target, target_scale))
}
