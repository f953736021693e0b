//! Error types for polynomial construction and operand dispatch.

use thiserror::Error;

/// Result type alias using the crate's [`PolyError`].
pub type Result<T> = std::result::Result<T, PolyError>;

/// Errors raised by polynomial construction and dynamically dispatched operators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolyError {
    /// A polynomial needs at least one coefficient, otherwise its degree is undefined.
    #[error("a polynomial needs at least one coefficient")]
    EmptyCoefficients,

    /// The operator is not defined between a polynomial and this operand type.
    #[error("unsupported operand type for '{op}': {operand}")]
    UnsupportedOperand {
        /// Operator symbol
        op: &'static str,
        /// Type name of the rejected operand
        operand: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::PolyError;

    #[test]
    fn test_messages() {
        assert_eq!(
            PolyError::EmptyCoefficients.to_string(),
            "a polynomial needs at least one coefficient"
        );
        let err = PolyError::UnsupportedOperand {
            op: "+",
            operand: "&str",
        };
        assert_eq!(err.to_string(), "unsupported operand type for '+': &str");
    }
}
