/// Core parsing types and the public entry points.
///
/// Contains the cursor threaded through every production, the parser
/// configuration, and [`core::parse_expression`].
pub mod core;

/// Highest-precedence productions.
///
/// Implements `simple_expression` (literals, groupings and unary minus) and
/// `factor`, the layer reserved for operators binding tighter than `*`.
pub mod simple;

/// Left-associative binary productions.
///
/// Implements `term` (`*`, `/`) and `expression` (`+`, `-`) as iterative
/// folds over the next-higher production.
pub mod binary;
