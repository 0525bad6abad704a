/// Syntax errors.
///
/// Defines all error types that can occur during tokenizing and parsing of
/// source code: unexpected tokens, missing parentheses, premature end of
/// input, runaway nesting and malformed literals.
pub mod syntax_error;
/// Runtime errors.
///
/// Contains the error types raised while evaluating a parsed tree, such as
/// division by zero or integer overflow.
pub mod runtime_error;

pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;
