// ============================================================================
// Engine Configuration
// Rounding policies and result shaping for the money engine
// ============================================================================

use crate::engine::RoundingMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`MoneyEngine`](crate::engine::MoneyEngine)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Policy for `divide`
    pub division_rounding: RoundingMode,

    /// Policy for `convert`
    pub conversion_rounding: RoundingMode,

    /// Trim trailing zero digits from results, down to the currency exponent
    pub trim_results: bool,

    /// Optional: Maximum scale a result may carry
    /// None means no limit
    pub max_scale: Option<u32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::bankers()
    }
}

impl EngineConfig {
    /// Create a new configuration with required parameters
    pub fn new(division_rounding: RoundingMode, conversion_rounding: RoundingMode) -> Self {
        Self {
            division_rounding,
            conversion_rounding,
            trim_results: false,
            max_scale: None,
        }
    }

    /// Builder method: Set the division rounding policy
    pub fn with_division_rounding(mut self, mode: RoundingMode) -> Self {
        self.division_rounding = mode;
        self
    }

    /// Builder method: Set the conversion rounding policy
    pub fn with_conversion_rounding(mut self, mode: RoundingMode) -> Self {
        self.conversion_rounding = mode;
        self
    }

    /// Builder method: Trim results after every operation
    pub fn with_trimmed_results(mut self) -> Self {
        self.trim_results = true;
        self
    }

    /// Builder method: Set maximum result scale
    pub fn with_max_scale(mut self, scale: u32) -> Self {
        self.max_scale = Some(scale);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(max_scale) = self.max_scale {
            if max_scale == 0 && self.trim_results {
                return Err("Trimming cannot be combined with a zero maximum scale".to_string());
            }
            if i64::from(max_scale) > i64::from(u16::MAX) {
                return Err("Maximum scale must fit in 16 bits".to_string());
            }
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl EngineConfig {
    /// Banker's rounding everywhere (default)
    pub fn bankers() -> Self {
        Self::new(RoundingMode::HalfEven, RoundingMode::HalfEven)
    }

    /// Commercial rounding: ties away from zero
    pub fn commercial() -> Self {
        Self::new(RoundingMode::HalfAwayFromZero, RoundingMode::HalfAwayFromZero)
    }

    /// Truncation toward negative infinity, with trimmed results
    pub fn truncating() -> Self {
        Self::new(RoundingMode::Down, RoundingMode::Down).with_trimmed_results()
    }
}
