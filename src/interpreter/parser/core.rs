use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::binary::parse_expression_at,
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// The result of one production: the parsed node and the index of the first
/// token it did not consume.
pub type Step = ParseResult<(Expr, usize)>;

/// Default limit on how deeply parentheses and unary minus may nest.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Settings that apply to a whole parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting depth of groupings and negations.
    pub max_depth: usize,
}

impl ParserConfig {
    /// A configuration with no nesting limit.
    ///
    /// Deeply nested input may then exhaust the stack.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { max_depth: usize::MAX }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

/// Position of a production within the token sequence.
///
/// A cursor is a plain value: each production receives one, and nested
/// productions receive copies. `depth` counts the groupings and negations
/// enclosing the current production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index:     usize,
    depth:     usize,
    max_depth: usize,
}

impl Cursor {
    /// Creates a cursor at the first token.
    #[must_use]
    pub const fn start(config: &ParserConfig) -> Self {
        Self { index:     0,
               depth:     0,
               max_depth: config.max_depth, }
    }

    /// Gets the index of the current token.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    /// Moves to `index` at the same depth.
    #[must_use]
    pub const fn at(self, index: usize) -> Self {
        Self { index, ..self }
    }

    /// Moves to `index` one nesting level deeper.
    ///
    /// # Errors
    /// Returns `NestingTooDeep`, pointing at the current token, when the new
    /// level would exceed the configured limit.
    pub fn nested(self, index: usize, tokens: &[Token]) -> ParseResult<Self> {
        if self.depth >= self.max_depth {
            return Err(SyntaxError::NestingTooDeep { limit:    self.max_depth,
                                                     position: position_at(tokens, self.index), });
        }
        Ok(Self { index,
                  depth: self.depth + 1,
                  ..self })
    }
}

/// Gets the kind of the token at `index`, treating a position past the end
/// of the slice as [`TokenKind::End`].
pub(in crate::interpreter::parser) fn kind_at(tokens: &[Token], index: usize) -> TokenKind {
    tokens.get(index).map_or(TokenKind::End, |t| t.kind)
}

/// Gets the source position of the token at `index`.
///
/// Past the end of the slice this is one past the *start* of the last token,
/// or `0` for an empty slice. Token lengths are not recorded, so this is only
/// the true end of the text when the last token is one byte long; sequences
/// from [`tokenize`] end with an `End` token at the end of the text and never
/// reach this fallback.
///
/// [`tokenize`]: crate::interpreter::lexer::tokenize
pub(in crate::interpreter::parser) fn position_at(tokens: &[Token], index: usize) -> usize {
    match tokens.get(index) {
        Some(token) => token.position,
        None => tokens.last().map_or(0, |t| t.position + 1),
    }
}

/// Parses a full expression from the start of `tokens`.
///
/// This is the entry point for expression parsing: it applies the `expression`
/// production at index 0 with the default [`ParserConfig`] and returns the
/// tree together with the tokens that follow it. For a complete expression
/// the remainder is just the end marker. Trailing tokens are left for the
/// caller to reject.
///
/// Grammar:
/// ```text
/// simple_expression := number | "(" expression ")" | "-" simple_expression
/// factor            := simple_expression
/// term              := factor (("*" | "/") factor)*
/// expression        := term (("+" | "-") term)*
/// ```
///
/// # Errors
/// Returns the first `SyntaxError` met; no partial tree is produced.
///
/// # Example
/// ```
/// use tally::interpreter::{
///     lexer::{TokenKind, tokenize},
///     parser::core::parse_expression,
/// };
///
/// let tokens = tokenize("8*4/2").unwrap();
/// let (ast, rest) = parse_expression(&tokens).unwrap();
///
/// assert_eq!(ast.to_string(), "(/ (* 8 4) 2)");
/// assert_eq!(rest.len(), 1);
/// assert_eq!(rest[0].kind, TokenKind::End);
/// ```
pub fn parse_expression(tokens: &[Token]) -> ParseResult<(Expr, &[Token])> {
    parse_expression_with(tokens, &ParserConfig::default())
}

/// Parses a full expression from the start of `tokens` using `config`.
///
/// # Errors
/// Returns the first `SyntaxError` met, including `NestingTooDeep` when the
/// input nests past `config.max_depth`.
pub fn parse_expression_with<'t>(tokens: &'t [Token],
                                 config: &ParserConfig)
                                 -> ParseResult<(Expr, &'t [Token])> {
    let (expr, index) = parse_expression_at(tokens, Cursor::start(config))?;
    let rest = tokens.get(index..).unwrap_or_default();
    Ok((expr, rest))
}
