//! Validation errors raised by operation nodes
//!
//! A [`ValidationError`] is sticky: once a node records one, that node never
//! produces a value. The engine surfaces it as `Error: <reason>` and discards
//! the in-flight calculation on the next interaction.

use thiserror::Error;

/// Reasons an operation rejects its numeric inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Divisor is zero
    #[error("division by 0")]
    DivisionByZero,

    /// Power whose result is not a real number (e.g. `(-8) ^ 0.5`)
    #[error("complex number")]
    ComplexNumber,
}
