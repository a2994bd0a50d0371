//! Errors raised by the checked polynomial operations.

use thiserror::Error;

/// Errors from polynomial operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// The divisor was the zero polynomial.
    #[error("division by the zero polynomial")]
    DivisionByZero,
}

/// Result type for polynomial operations.
pub type Result<T> = std::result::Result<T, PolyError>;
