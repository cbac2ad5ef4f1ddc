// ============================================================================
// Money Engine
// Configured facade over the arithmetic, allocation and conversion engine
// ============================================================================

use super::allocator;
use super::arithmetic;
use super::converter;
use super::scale::trim_scale;
use crate::domain::{Currency, EngineConfig, ExchangeRate, Money, ScaledAmount};
use crate::interfaces::Calculator;
use crate::numeric::{MoneyError, MoneyResult};
use std::cmp::Ordering;
use std::marker::PhantomData;
use std::sync::Arc;

/// Money engine bound to one numeric backend and one rounding policy.
///
/// The free functions in [`crate::engine`] take their rounding mode per
/// call. The engine fixes those choices once, in an [`EngineConfig`], and
/// applies the configured result shaping (trimming, scale ceiling) to
/// everything it returns.
#[derive(Debug, Clone)]
pub struct MoneyEngine<C: Calculator> {
    config: EngineConfig,
    _backend: PhantomData<C>,
}

impl<C: Calculator> Default for MoneyEngine<C> {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            _backend: PhantomData,
        }
    }
}

impl<C: Calculator> MoneyEngine<C> {
    /// Create an engine from a validated configuration
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the configuration does not validate.
    pub fn new(config: EngineConfig) -> MoneyResult<Self> {
        if let Err(reason) = config.validate() {
            tracing::warn!(backend = C::NAME, %reason, "rejected engine configuration");
            return Err(MoneyError::InvalidConfig);
        }

        tracing::debug!(
            backend = C::NAME,
            division = ?config.division_rounding,
            conversion = ?config.conversion_rounding,
            trim = config.trim_results,
            "money engine created"
        );

        Ok(Self {
            config,
            _backend: PhantomData,
        })
    }

    /// Get the engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn add(&self, a: &Money<C>, b: &Money<C>) -> MoneyResult<Money<C>> {
        self.finish("add", arithmetic::add(a, b))
    }

    pub fn subtract(&self, a: &Money<C>, b: &Money<C>) -> MoneyResult<Money<C>> {
        self.finish("subtract", arithmetic::subtract(a, b))
    }

    pub fn multiply(
        &self,
        a: &Money<C>,
        factor: &ScaledAmount<C::Value>,
    ) -> MoneyResult<Money<C>> {
        self.finish("multiply", arithmetic::multiply(a, factor))
    }

    /// Divide with the configured division rounding
    pub fn divide(&self, a: &Money<C>, divisor: &C::Value) -> MoneyResult<Money<C>> {
        self.finish(
            "divide",
            arithmetic::divide(a, divisor, self.config.division_rounding),
        )
    }

    /// Convert with the configured conversion rounding
    pub fn convert(
        &self,
        value: &Money<C>,
        target: Arc<Currency<C::Value>>,
        rate: &ExchangeRate<C::Value>,
    ) -> MoneyResult<Money<C>> {
        self.finish(
            "convert",
            converter::convert(value, target, rate, self.config.conversion_rounding),
        )
    }

    /// Allocate; every part is shaped like any other result
    pub fn allocate(&self, value: &Money<C>, ratios: &[C::Value]) -> MoneyResult<Vec<Money<C>>> {
        let parts = allocator::allocate(value, ratios).map_err(|err| {
            tracing::debug!(backend = C::NAME, operation = "allocate", %err, "operation rejected");
            err
        })?;
        parts
            .into_iter()
            .map(|part| self.finish("allocate", Ok(part)))
            .collect()
    }

    pub fn compare(&self, a: &Money<C>, b: &Money<C>) -> MoneyResult<Ordering> {
        arithmetic::compare(a, b)
    }

    pub fn equal(&self, a: &Money<C>, b: &Money<C>) -> bool {
        arithmetic::equal(a, b)
    }

    /// Trim to the currency exponent regardless of `trim_results`
    pub fn trim(&self, value: &Money<C>) -> MoneyResult<Money<C>> {
        trim_scale(value, None)
    }

    // ========================================================================
    // Result shaping
    // ========================================================================

    fn finish(
        &self,
        operation: &'static str,
        result: MoneyResult<Money<C>>,
    ) -> MoneyResult<Money<C>> {
        let shaped = result.and_then(|value| self.shape(value));
        if let Err(err) = &shaped {
            tracing::debug!(backend = C::NAME, operation, %err, "operation rejected");
        }
        shaped
    }

    fn shape(&self, value: Money<C>) -> MoneyResult<Money<C>> {
        let value = if self.config.trim_results {
            trim_scale(&value, None)?
        } else {
            value
        };

        if let Some(max_scale) = self.config.max_scale {
            let ceiling = C::from_integer(i64::from(max_scale));
            if C::compare(value.scale(), &ceiling) == Ordering::Greater {
                return Err(MoneyError::InvalidScale);
            }
        }

        Ok(value)
    }
}
