#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenizing or parsing.
///
/// Every variant records the byte offset of the offending token so callers
/// can point at it in the original source.
pub enum SyntaxError {
    /// Found a token that cannot start or continue the current production.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    UnexpectedEndOfInput {
        /// Byte offset of the end marker.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The token found in its place.
        found:    String,
        /// Byte offset of that token.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset of that token.
        position: usize,
    },
    /// Parentheses or unary minus nest deeper than the configured limit.
    NestingTooDeep {
        /// The configured limit.
        limit:    usize,
        /// Byte offset of the token that would open the next level.
        position: usize,
    },
    /// The tokenizer met text that is not part of the language.
    UnrecognizedCharacter {
        /// The unrecognized text.
        text:     String,
        /// Byte offset of the text.
        position: usize,
    },
    /// An integer literal does not fit in an `i64`.
    LiteralTooLarge {
        /// The literal as written.
        text:     String,
        /// Byte offset of the literal.
        position: usize,
    },
}

impl SyntaxError {
    /// Gets the byte offset the error points at.
    ///
    /// ## Example
    /// ```
    /// use tally::{error::SyntaxError, parse_source};
    ///
    /// let err = parse_source("(2+3").unwrap_err();
    /// assert!(matches!(err, SyntaxError::ExpectedClosingParen { .. }));
    /// assert_eq!(err.position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::NestingTooDeep { position, .. }
            | Self::UnrecognizedCharacter { position, .. }
            | Self::LiteralTooLarge { position, .. } => *position,
        }
    }

    /// Gets the explanation without the position prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::UnexpectedToken { token, .. } => format!("Unexpected token: {token}."),
            Self::UnexpectedEndOfInput { .. } => "Unexpected end of input.".to_string(),
            Self::ExpectedClosingParen { found, .. } => {
                format!("Expected closing parenthesis ')' but found {found}.")
            },
            Self::UnexpectedTrailingTokens { token, .. } => {
                format!("Extra tokens after expression, starting at {token}.")
            },
            Self::NestingTooDeep { limit, .. } => {
                format!("Expression nests deeper than the limit of {limit} levels.")
            },
            Self::UnrecognizedCharacter { text, .. } => format!("Unrecognized character: {text}."),
            Self::LiteralTooLarge { text, .. } => format!("Literal {text} is too large."),
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error at position {}: {}", self.position(), self.message())
    }
}

impl std::error::Error for SyntaxError {}
