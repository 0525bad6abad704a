use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_expression_at,
            core::{Cursor, Step, kind_at, position_at},
        },
    },
};

/// Parses a simple expression, the highest-precedence unit of the grammar.
///
/// Dispatches on the current token:
/// - a number becomes an [`Expr::Number`] leaf;
/// - `(` starts a grouping, parsed by [`parse_grouping`];
/// - `-` negates the following simple expression, so `--2` nests two
///   [`Expr::Negate`] nodes with the innermost bound to the operand.
///
/// Grammar:
/// ```text
///     simple_expression := number
///                        | "(" expression ")"
///                        | "-" simple_expression
/// ```
/// # Parameters
/// - `tokens`: The whole token sequence.
/// - `cursor`: Position of the first token of the simple expression.
///
/// # Returns
/// The parsed node and the index of the first unconsumed token.
///
/// # Errors
/// Returns a `SyntaxError` if:
/// - the input ends where an operand was expected,
/// - the current token cannot start an operand,
/// - a grouping is not closed,
/// - nesting exceeds the configured depth.
///
/// # Example
/// ```
/// use tally::interpreter::{
///     lexer::tokenize,
///     parser::{
///         core::{Cursor, ParserConfig},
///         simple::parse_simple_expression,
///     },
/// };
///
/// let tokens = tokenize("--2").unwrap();
/// let cursor = Cursor::start(&ParserConfig::default());
/// let (ast, next) = parse_simple_expression(&tokens, cursor).unwrap();
///
/// assert_eq!(ast.to_string(), "(neg (neg 2))");
/// assert_eq!(next, 3);
/// ```
pub fn parse_simple_expression(tokens: &[Token], cursor: Cursor) -> Step {
    let index = cursor.index();
    let position = position_at(tokens, index);

    match kind_at(tokens, index) {
        TokenKind::Number(value) => Ok((Expr::Number { value, position }, index + 1)),
        TokenKind::LParen => parse_grouping(tokens, cursor),
        TokenKind::Minus => {
            let (operand, next) =
                parse_simple_expression(tokens, cursor.nested(index + 1, tokens)?)?;
            Ok((Expr::Negate { operand: Box::new(operand),
                               position },
                next))
        },
        TokenKind::End => Err(SyntaxError::UnexpectedEndOfInput { position }),
        other => Err(SyntaxError::UnexpectedToken { token: other.to_string(),
                                                    position }),
    }
}

/// Parses a factor.
///
/// A factor is currently exactly a simple expression. It is kept as its own
/// production so that an operator binding tighter than `*` and `/` but looser
/// than unary minus can be added here without changing [`parse_term`].
///
/// Grammar: `factor := simple_expression`
///
/// [`parse_term`]: crate::interpreter::parser::binary::parse_term
pub fn parse_factor(tokens: &[Token], cursor: Cursor) -> Step {
    parse_simple_expression(tokens, cursor)
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The cursor must be at the opening parenthesis. The enclosed expression is
/// parsed one nesting level deeper, then a closing `)` is required. Failure
/// to find it yields `SyntaxError::ExpectedClosingParen` pointing at whatever
/// token stands in its place.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping(tokens: &[Token], cursor: Cursor) -> Step {
    let index = cursor.index();
    let (expr, next) = parse_expression_at(tokens, cursor.nested(index + 1, tokens)?)?;

    match kind_at(tokens, next) {
        TokenKind::RParen => Ok((expr, next + 1)),
        found => Err(SyntaxError::ExpectedClosingParen { found:    found.to_string(),
                                                         position: position_at(tokens, next), }),
    }
}
