// ============================================================================
// Currency Domain Model
// Currency descriptors and the static ISO 4217 reference table
// ============================================================================

use crate::interfaces::Calculator;
use crate::numeric::MoneyResult;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Subdivision base of a currency.
///
/// Most currencies have a single base (10). Currencies with irregular
/// subdivision list one base per fractional position; arithmetic uses the
/// product of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Base<T> {
    Single(T),
    Multiple(Vec<T>),
}

impl<T> Base<T> {
    /// The bases as a slice, one entry per subdivision.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Base::Single(base) => std::slice::from_ref(base),
            Base::Multiple(bases) => bases,
        }
    }
}

/// Currency descriptor, shared by reference between monetary values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Currency<T> {
    /// ISO 4217 code (e.g., "USD")
    pub code: String,

    /// Subdivision base
    pub base: Base<T>,

    /// Default scale (minor-unit exponent)
    pub exponent: T,
}

impl<T> Currency<T> {
    pub fn new(code: impl Into<String>, base: Base<T>, exponent: T) -> Self {
        Self {
            code: code.into(),
            base,
            exponent,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn base(&self) -> &Base<T> {
        &self.base
    }

    pub fn exponent(&self) -> &T {
        &self.exponent
    }

    /// Currencies are identified by code, not by descriptor identity.
    pub fn same_code(&self, other: &Currency<T>) -> bool {
        self.code == other.code
    }

    /// The effective radix used to move between scales.
    pub fn radix<C: Calculator<Value = T>>(&self) -> MoneyResult<T>
    where
        T: Clone,
    {
        match &self.base {
            Base::Single(base) => Ok(base.clone()),
            Base::Multiple(bases) => bases
                .iter()
                .try_fold(C::one(), |acc, base| C::multiply(&acc, base)),
        }
    }
}

// ============================================================================
// Static Reference Data
// ============================================================================

/// Backend-independent currency definition for static tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyDef {
    pub code: &'static str,
    pub base: &'static [u16],
    pub exponent: u16,
}

impl CurrencyDef {
    /// Find a currency in the ISO table by code.
    pub fn lookup(code: &str) -> Option<&'static CurrencyDef> {
        iso::ALL.iter().find(|def| def.code == code)
    }

    /// Materialize the descriptor in a backend's numeric type.
    pub fn to_currency<C: Calculator>(&self) -> Arc<Currency<C::Value>> {
        let mut bases = self
            .base
            .iter()
            .map(|base| C::from_integer(i64::from(*base)))
            .collect::<Vec<_>>();

        let base = if bases.len() == 1 {
            Base::Single(bases.remove(0))
        } else {
            Base::Multiple(bases)
        };

        Arc::new(Currency::new(
            self.code,
            base,
            C::from_integer(i64::from(self.exponent)),
        ))
    }
}

/// ISO 4217 currencies.
pub mod iso {
    use super::CurrencyDef;

    pub const USD: CurrencyDef = CurrencyDef {
        code: "USD",
        base: &[10],
        exponent: 2,
    };
    pub const EUR: CurrencyDef = CurrencyDef {
        code: "EUR",
        base: &[10],
        exponent: 2,
    };
    pub const GBP: CurrencyDef = CurrencyDef {
        code: "GBP",
        base: &[10],
        exponent: 2,
    };
    pub const CHF: CurrencyDef = CurrencyDef {
        code: "CHF",
        base: &[10],
        exponent: 2,
    };
    pub const JPY: CurrencyDef = CurrencyDef {
        code: "JPY",
        base: &[10],
        exponent: 0,
    };
    pub const IQD: CurrencyDef = CurrencyDef {
        code: "IQD",
        base: &[10],
        exponent: 3,
    };
    pub const KWD: CurrencyDef = CurrencyDef {
        code: "KWD",
        base: &[10],
        exponent: 3,
    };
    /// Malagasy ariary: 1 ariary = 5 iraimbilanja
    pub const MGA: CurrencyDef = CurrencyDef {
        code: "MGA",
        base: &[5],
        exponent: 1,
    };
    /// Mauritanian ouguiya: 1 ouguiya = 5 khoums
    pub const MRU: CurrencyDef = CurrencyDef {
        code: "MRU",
        base: &[5],
        exponent: 1,
    };

    pub const ALL: &[CurrencyDef] = &[USD, EUR, GBP, CHF, JPY, IQD, KWD, MGA, MRU];
}
