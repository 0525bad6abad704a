#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
pub enum RuntimeError {
    /// The right operand of `/` evaluated to zero.
    DivisionByZero {
        /// Byte offset of the `/` token.
        position: usize,
    },
    /// A result does not fit in an `i64`.
    Overflow {
        /// The operation that overflowed, e.g. `*` or `negation`.
        operation: String,
        /// Byte offset of the operator token.
        position:  usize,
    },
}

impl RuntimeError {
    /// Gets the byte offset the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DivisionByZero { position } | Self::Overflow { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::Overflow { operation, position } => {
                write!(f, "Error at position {position}: Integer overflow in {operation}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
