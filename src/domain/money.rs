// ============================================================================
// Money Domain Model
// Immutable scaled-integer monetary values
// ============================================================================

use super::currency::{Currency, CurrencyDef};
use crate::interfaces::Calculator;
use crate::numeric::{
    BigIntCalculator, DecimalCalculator, MoneyError, MoneyResult, NativeCalculator,
};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Monetary value: `amount` minor units at `scale`, in `currency`.
///
/// The represented quantity is `amount / radix^scale` major units.
/// Values are immutable; every operation returns a new value. Amount and
/// scale are always integral and the scale is never negative.
///
/// # Example
/// ```
/// use scaled_money::prelude::*;
///
/// let usd = iso::USD.to_currency::<NativeCalculator>();
/// let price = NativeMoney::new(500, usd.clone()).unwrap(); // $5.00
/// let fee = NativeMoney::with_scale(1000, usd, 3).unwrap(); // $1.000
/// let total = add(&price, &fee).unwrap();
/// assert_eq!(total.amount(), &6000);
/// assert_eq!(total.scale(), &3);
/// ```
#[derive(Debug, Clone)]
pub struct Money<C: Calculator> {
    amount: C::Value,
    currency: Arc<Currency<C::Value>>,
    scale: C::Value,
}

impl<C: Calculator> Money<C> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a value at the currency's default scale.
    ///
    /// # Errors
    /// Returns `NonIntegerAmount` if the amount has a fractional component.
    pub fn new(amount: C::Value, currency: Arc<Currency<C::Value>>) -> MoneyResult<Self> {
        let scale = currency.exponent().clone();
        Self::with_scale(amount, currency, scale)
    }

    /// Create a value at an explicit scale.
    ///
    /// # Errors
    /// - `NonIntegerAmount` if the amount has a fractional component
    /// - `InvalidScale` if the scale is negative or fractional
    pub fn with_scale(
        amount: C::Value,
        currency: Arc<Currency<C::Value>>,
        scale: C::Value,
    ) -> MoneyResult<Self> {
        if !C::is_integral(&amount) {
            return Err(MoneyError::NonIntegerAmount);
        }
        C::check_scale(&scale)?;

        Ok(Self {
            amount,
            currency,
            scale,
        })
    }

    /// Create from a machine integer and a static currency definition.
    pub fn from_minor(amount: i64, currency: &CurrencyDef) -> Self {
        let currency = currency.to_currency::<C>();
        Self {
            amount: C::from_integer(amount),
            scale: currency.exponent().clone(),
            currency,
        }
    }

    /// Assemble a value whose parts are already known to be valid.
    pub(crate) fn from_parts(
        amount: C::Value,
        currency: Arc<Currency<C::Value>>,
        scale: C::Value,
    ) -> Self {
        Self {
            amount,
            currency,
            scale,
        }
    }

    /// Same currency and scale, different amount.
    pub(crate) fn with_amount(&self, amount: C::Value) -> Self {
        Self::from_parts(amount, Arc::clone(&self.currency), self.scale.clone())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn amount(&self) -> &C::Value {
        &self.amount
    }

    #[inline]
    pub fn currency(&self) -> &Currency<C::Value> {
        &self.currency
    }

    /// Shared handle to the currency descriptor.
    #[inline]
    pub fn currency_handle(&self) -> Arc<Currency<C::Value>> {
        Arc::clone(&self.currency)
    }

    #[inline]
    pub fn scale(&self) -> &C::Value {
        &self.scale
    }

    pub fn into_parts(self) -> (C::Value, Arc<Currency<C::Value>>, C::Value) {
        (self.amount, self.currency, self.scale)
    }

    /// Whether both values carry the same currency code.
    #[inline]
    pub fn same_currency(&self, other: &Self) -> bool {
        self.currency.same_code(&other.currency)
    }

    pub(crate) fn ensure_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.same_currency(other) {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch)
        }
    }
}

impl<C: Calculator> PartialEq for Money<C> {
    /// Value equality: same currency code and same amount once scales are
    /// normalized.
    fn eq(&self, other: &Self) -> bool {
        crate::engine::equal(self, other)
    }
}

// ============================================================================
// Scaled Amounts and Rates
// ============================================================================

/// A scalar expressed as `amount / 10^scale` (e.g., `{ amount: 55, scale: 1 }` is 5.5).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScaledAmount<T> {
    pub amount: T,
    pub scale: T,
}

impl<T> ScaledAmount<T> {
    pub fn new(amount: T, scale: T) -> Self {
        Self { amount, scale }
    }
}

/// Exchange rate from an optional stated source currency.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExchangeRate<T> {
    /// Currency code the rate converts from. When set, conversion rejects
    /// values in any other currency.
    pub source: Option<String>,

    /// Target units per source unit
    pub rate: ScaledAmount<T>,
}

impl<T> ExchangeRate<T> {
    pub fn new(amount: T, scale: T) -> Self {
        Self {
            source: None,
            rate: ScaledAmount::new(amount, scale),
        }
    }

    /// Builder method: state the source currency
    pub fn with_source(mut self, code: impl Into<String>) -> Self {
        self.source = Some(code.into());
        self
    }
}

// ============================================================================
// Type Aliases for Common Backends
// ============================================================================

/// Money over checked i64
pub type NativeMoney = Money<NativeCalculator>;

/// Money over arbitrary-precision integers
pub type BigMoney = Money<BigIntCalculator>;

/// Money over integral decimals
pub type DecimalMoney = Money<DecimalCalculator>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::currency::iso;
    use rust_decimal::Decimal;

    #[test]
    fn test_new_uses_currency_exponent() {
        let usd = iso::USD.to_currency::<NativeCalculator>();
        let m = NativeMoney::new(500, usd).unwrap();
        assert_eq!(m.amount(), &500);
        assert_eq!(m.scale(), &2);
        assert_eq!(m.currency().code(), "USD");
    }

    #[test]
    fn test_from_minor() {
        let m = BigMoney::from_minor(-800, &iso::MGA);
        assert_eq!(m.amount(), &num_bigint::BigInt::from(-800));
        assert_eq!(m.scale(), &num_bigint::BigInt::from(1));
    }

    #[test]
    fn test_rejects_fractional_amount() {
        let usd = iso::USD.to_currency::<DecimalCalculator>();
        let result = DecimalMoney::new(Decimal::new(505, 1), usd);
        assert_eq!(result.unwrap_err(), MoneyError::NonIntegerAmount);
    }

    #[test]
    fn test_rejects_negative_scale() {
        let usd = iso::USD.to_currency::<NativeCalculator>();
        let result = NativeMoney::with_scale(500, usd, -1);
        assert_eq!(result.unwrap_err(), MoneyError::InvalidScale);
    }

    #[test]
    fn test_currency_is_shared() {
        let usd = iso::USD.to_currency::<NativeCalculator>();
        let a = NativeMoney::new(1, Arc::clone(&usd)).unwrap();
        let b = NativeMoney::new(2, Arc::clone(&usd)).unwrap();
        assert!(Arc::ptr_eq(&a.currency_handle(), &b.currency_handle()));
        assert!(a.same_currency(&b));
    }

    #[test]
    fn test_equality_ignores_scale() {
        let usd = iso::USD.to_currency::<NativeCalculator>();
        let a = NativeMoney::new(500, Arc::clone(&usd)).unwrap();
        let b = NativeMoney::with_scale(5000, Arc::clone(&usd), 3).unwrap();
        let c = NativeMoney::new(501, usd).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_exchange_rate_builder() {
        let rate = ExchangeRate::new(89, 2).with_source("USD");
        assert_eq!(rate.source.as_deref(), Some("USD"));
        assert_eq!(rate.rate, ScaledAmount::new(89, 2));
    }
}
