// ============================================================================
// Money Errors
// Error types for scaled-integer monetary arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while operating on monetary values.
///
/// Every error is a caller-input error: none of them is transient, and no
/// operation returns a partial result alongside one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoneyError {
    /// Operands carry different currency codes
    CurrencyMismatch,
    /// Attempted division by zero
    DivisionByZero,
    /// Allocation ratios are empty, negative or all zero
    InvalidRatios,
    /// Scale is negative or cannot be used as an exponent
    InvalidScale,
    /// Amount has a fractional component
    NonIntegerAmount,
    /// Result exceeded the backend's maximum value
    Overflow,
    /// Result below the backend's minimum value
    Underflow,
    /// Input string or value is invalid
    InvalidInput,
    /// Engine configuration failed validation
    InvalidConfig,
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::CurrencyMismatch => {
                write!(f, "currency mismatch: objects must have the same currency")
            },
            MoneyError::DivisionByZero => write!(f, "division by zero"),
            MoneyError::InvalidRatios => write!(
                f,
                "invalid ratios: expected at least one non-zero, non-negative ratio"
            ),
            MoneyError::InvalidScale => write!(f, "invalid scale: must be a non-negative integer"),
            MoneyError::NonIntegerAmount => write!(f, "amount must be an integer"),
            MoneyError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            MoneyError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum value")
            },
            MoneyError::InvalidInput => write!(f, "invalid input: could not parse value"),
            MoneyError::InvalidConfig => write!(f, "invalid engine configuration"),
        }
    }
}

impl std::error::Error for MoneyError {}

/// Result type alias for monetary operations
pub type MoneyResult<T> = Result<T, MoneyError>;
