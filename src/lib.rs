//! # tally
//!
//! tally parses integer arithmetic expressions into an abstract syntax tree.
//! It supports integer literals, parentheses, unary minus and the four binary
//! operators `+ - * /`, with the usual precedence and left-associativity.
//! Parsed trees can be printed, compared or evaluated.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::SyntaxError,
    interpreter::{
        evaluator::evaluate,
        lexer::{TokenKind, tokenize},
        parser::core::{ParseResult, ParserConfig, parse_expression_with},
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum that represents an arithmetic
/// expression as a tree. The AST is built by the parser and traversed by the
/// evaluator and printers.
///
/// # Responsibilities
/// - Defines the node variants: literals, negation, binary operations.
/// - Attaches source positions to nodes for error reporting.
/// - Provides structural comparison and s-expression display.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines `SyntaxError` for malformed input and `RuntimeError` for failed
///   evaluation.
/// - Attaches the byte offset of the offending token to every error.
pub mod error;
/// Ties together tokenizing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Provides entry points for parsing token sequences.
pub mod interpreter;
/// General utilities for presenting results to users.
pub mod util;

/// Parses a complete expression from source text.
///
/// The source is tokenized, parsed with the default [`ParserConfig`], and must
/// be fully consumed: anything after a complete expression is an error.
///
/// # Errors
/// Returns the first `SyntaxError` from the tokenizer or the parser, or
/// `UnexpectedTrailingTokens` when input remains after the expression.
///
/// # Examples
/// ```
/// use tally::parse_source;
///
/// let ast = parse_source("2 + 3 * 4").unwrap();
/// assert_eq!(ast.to_string(), "(+ 2 (* 3 4))");
///
/// // Two expressions back to back are rejected.
/// assert!(parse_source("(1) (2)").is_err());
/// ```
pub fn parse_source(source: &str) -> ParseResult<ast::Expr> {
    parse_source_with(source, &ParserConfig::default())
}

/// Parses a complete expression from source text using `config`.
///
/// # Errors
/// See [`parse_source`].
pub fn parse_source_with(source: &str, config: &ParserConfig) -> ParseResult<ast::Expr> {
    let tokens = tokenize(source)?;
    let (expr, rest) = parse_expression_with(&tokens, config)?;

    match rest.first() {
        None => Ok(expr),
        Some(token) if token.kind == TokenKind::End => Ok(expr),
        Some(token) => Err(SyntaxError::UnexpectedTrailingTokens { token:    token.kind.to_string(),
                                                                   position: token.position, }),
    }
}

/// Returns the value of the expression in `source`.
///
/// This function parses the whole source and evaluates the resulting tree.
///
/// # Errors
/// Returns an error if parsing fails or if evaluation divides by zero or
/// overflows.
///
/// # Examples
/// ```
/// use tally::get_result;
///
/// // Left-associative: (8/4)/2, not 8/(4/2).
/// assert_eq!(get_result("8/4/2").unwrap(), 1);
///
/// // Division by zero is reported, not panicked on.
/// assert!(get_result("1/(2-2)").is_err());
/// ```
pub fn get_result(source: &str) -> Result<i64, Box<dyn std::error::Error>> {
    let expr = parse_source(source)?;
    Ok(evaluate(&expr)?)
}
