use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{Cursor, Step, kind_at, position_at},
            simple::parse_factor,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`. Each operator and
/// the term after it is folded into the accumulated tree, so `1-2-3` parses
/// as `(1-2)-3`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: The whole token sequence.
/// - `cursor`: Position of the first token of the expression.
///
/// # Returns
/// The parsed node and the index of the first token that is not part of the
/// expression.
pub fn parse_expression_at(tokens: &[Token], cursor: Cursor) -> Step {
    let (mut left, mut index) = parse_term(tokens, cursor)?;
    loop {
        if let Some(op) = token_to_binary_operator(kind_at(tokens, index))
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let position = position_at(tokens, index);
            let (right, next) = parse_term(tokens, cursor.at(index + 1))?;
            left = Expr::BinaryOp { op,
                                    left: Box::new(left),
                                    right: Box::new(right),
                                    position };
            index = next;
            continue;
        }
        break;
    }
    Ok((left, index))
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`: `8*4/2` parses as
/// `(8*4)/2`.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `tokens`: The whole token sequence.
/// - `cursor`: Position of the first token of the term.
///
/// # Returns
/// A binary expression tree combining factor-level nodes, and the index of
/// the first token after it.
pub fn parse_term(tokens: &[Token], cursor: Cursor) -> Step {
    let (mut left, mut index) = parse_factor(tokens, cursor)?;
    loop {
        if let Some(op) = token_to_binary_operator(kind_at(tokens, index))
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let position = position_at(tokens, index);
            let (right, next) = parse_factor(tokens, cursor.at(index + 1))?;
            left = Expr::BinaryOp { op,
                                    left: Box::new(left),
                                    right: Box::new(right),
                                    position };
            index = next;
            continue;
        }
        break;
    }
    Ok((left, index))
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators.
///
/// # Example
/// ```
/// use tally::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
