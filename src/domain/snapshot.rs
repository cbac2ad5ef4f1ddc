// ============================================================================
// Money Snapshot
// Plain structural representation for storage and transport
// ============================================================================

use super::currency::Currency;
use super::money::Money;
use crate::interfaces::Calculator;
use crate::numeric::MoneyResult;
use std::sync::Arc;

#[cfg(feature = "serde")]
use crate::numeric::MoneyError;
#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Structural copy of a monetary value.
///
/// All three fields are mandatory. The snapshot carries the full currency
/// descriptor and is authoritative about the scale: restoring it never
/// re-derives the scale from the currency exponent.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoneySnapshot<T> {
    pub amount: T,
    pub currency: Currency<T>,
    pub scale: T,
}

/// Copy a monetary value into a snapshot. No recomputation happens.
pub fn to_snapshot<C: Calculator>(value: &Money<C>) -> MoneySnapshot<C::Value> {
    MoneySnapshot {
        amount: value.amount().clone(),
        currency: value.currency().clone(),
        scale: value.scale().clone(),
    }
}

/// Rebuild a monetary value from a snapshot.
///
/// # Errors
/// Returns `NonIntegerAmount` or `InvalidScale` when the snapshot violates
/// the integer-amount invariant.
pub fn from_snapshot<C: Calculator>(snapshot: MoneySnapshot<C::Value>) -> MoneyResult<Money<C>> {
    Money::with_scale(snapshot.amount, Arc::new(snapshot.currency), snapshot.scale)
}

impl<C: Calculator> Money<C> {
    pub fn to_snapshot(&self) -> MoneySnapshot<C::Value> {
        to_snapshot(self)
    }

    pub fn from_snapshot(snapshot: MoneySnapshot<C::Value>) -> MoneyResult<Self> {
        from_snapshot(snapshot)
    }
}

#[cfg(feature = "serde")]
impl<T: Serialize + DeserializeOwned> MoneySnapshot<T> {
    /// Encode as JSON.
    pub fn to_json(&self) -> MoneyResult<String> {
        serde_json::to_string(self).map_err(|_| MoneyError::InvalidInput)
    }

    /// Decode from JSON.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the document is malformed or a field is missing.
    pub fn from_json(json: &str) -> MoneyResult<Self> {
        serde_json::from_str(json).map_err(|err| {
            tracing::debug!(error = %err, "rejected money snapshot");
            MoneyError::InvalidInput
        })
    }
}
