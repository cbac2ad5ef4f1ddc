// ============================================================================
// Allocator
// Proportional splitting with an exact-sum guarantee
// ============================================================================

use super::rounding::RoundingMode;
use super::scale::transform_scale;
use crate::domain::{Money, ScaledAmount};
use crate::interfaces::Calculator;
use crate::numeric::{MoneyError, MoneyResult};

/// Split a value into parts proportional to integer ratios.
///
/// Every part gets `floor(amount * ratio / total)` minor units first. The
/// leftover units (always fewer than the number of ratios) are then handed
/// out one at a time, largest remainder first, ties to the earlier ratio.
/// The parts always sum to exactly the original amount.
///
/// # Example
/// ```text
/// $1.00 split [1, 1, 1]:
///   floor pass:   33, 33, 33   (remainders 1, 1, 1)
///   leftover:     1 cent -> first ratio (tie, lowest index)
///   result:       34, 33, 33
/// ```
///
/// # Errors
/// Returns `InvalidRatios` when the ratios are empty, contain a negative
/// value, or are all zero.
pub fn allocate<C: Calculator>(
    value: &Money<C>,
    ratios: &[C::Value],
) -> MoneyResult<Vec<Money<C>>> {
    validate_ratios::<C>(ratios)?;

    let shares = distribute::<C>(value.amount(), ratios)?;
    Ok(shares
        .into_iter()
        .map(|amount| value.with_amount(amount))
        .collect())
}

/// Allocate with ratios that may carry a decimal scale (e.g., 50.5 / 49.5).
///
/// Ratios are brought to the highest ratio scale, and the value is upscaled
/// by as many positions in its currency radix, so the split keeps the extra
/// precision the ratios ask for.
pub fn allocate_scaled<C: Calculator>(
    value: &Money<C>,
    ratios: &[ScaledAmount<C::Value>],
) -> MoneyResult<Vec<Money<C>>> {
    if ratios.is_empty() {
        return Err(MoneyError::InvalidRatios);
    }

    let mut highest = C::zero();
    for ratio in ratios {
        if !C::is_integral(&ratio.amount) {
            return Err(MoneyError::InvalidRatios);
        }
        C::check_scale(&ratio.scale)?;
        highest = C::maximum(&highest, &ratio.scale);
    }

    let ten = C::from_integer(10);
    let normalized = ratios
        .iter()
        .map(|ratio| {
            let factor = C::power(&ten, &C::subtract(&highest, &ratio.scale)?)?;
            C::multiply(&ratio.amount, &factor)
        })
        .collect::<MoneyResult<Vec<_>>>()?;

    let new_scale = C::add(value.scale(), &highest)?;
    let upscaled = transform_scale(value, &new_scale, RoundingMode::HalfEven)?;
    allocate(&upscaled, &normalized)
}

fn validate_ratios<C: Calculator>(ratios: &[C::Value]) -> MoneyResult<()> {
    let has_negative = ratios
        .iter()
        .any(|ratio| C::is_negative(ratio) || !C::is_integral(ratio));
    let has_non_zero = ratios.iter().any(|ratio| !C::is_zero(ratio));

    if has_negative || !has_non_zero {
        tracing::debug!(backend = C::NAME, count = ratios.len(), "rejected allocation ratios");
        return Err(MoneyError::InvalidRatios);
    }
    Ok(())
}

/// Largest-remainder distribution of `amount` over `ratios`.
fn distribute<C: Calculator>(amount: &C::Value, ratios: &[C::Value]) -> MoneyResult<Vec<C::Value>> {
    let total = C::sum(ratios)?;
    if C::is_zero(&total) {
        return Err(MoneyError::DivisionByZero);
    }

    // amount = whole * total + rest, with 0 <= rest < total, so
    // floor(amount * r / total) = whole * r + floor(rest * r / total) and no
    // intermediate product grows with the amount.
    let (whole, rest) = C::floor_divide(amount, &total)?;

    let mut shares = Vec::with_capacity(ratios.len());
    let mut remainders = Vec::with_capacity(ratios.len());
    let mut allocated = C::zero();

    for ratio in ratios {
        // Floored, so remainders are non-negative and the leftover is too
        let (part, remainder) = C::floor_divide(&C::multiply(&rest, ratio)?, &total)?;
        let share = C::add(&C::multiply(&whole, ratio)?, &part)?;
        allocated = C::add(&allocated, &share)?;
        shares.push(share);
        remainders.push(remainder);
    }

    let mut leftover = C::subtract(amount, &allocated)?;
    if C::is_zero(&leftover) {
        return Ok(shares);
    }

    tracing::trace!(
        backend = C::NAME,
        %leftover,
        parts = ratios.len(),
        "distributing allocation leftover"
    );

    // Stable sort: equal remainders keep their original order
    let mut order: Vec<usize> = (0..ratios.len()).collect();
    order.sort_by(|&i, &j| C::compare(&remainders[j], &remainders[i]));

    for index in order {
        if C::is_zero(&leftover) {
            break;
        }
        shares[index] = C::increment(&shares[index])?;
        leftover = C::decrement(&leftover)?;
    }

    Ok(shares)
}
