/// The evaluator module computes the value of a parsed tree.
///
/// It is the reference consumer of the AST: a recursive walk with checked
/// integer arithmetic that reports division by zero and overflow.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a finite
/// sequence of tokens, each carrying its kind, its value for literals, and its
/// byte offset. The sequence always ends with an end marker.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Parses integer literals.
/// - Reports lexical errors for unrecognized or oversized input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive descent over four production rules, one
/// function per rule, each mapping `(tokens, cursor)` to a node and the next
/// cursor position.
///
/// # Responsibilities
/// - Encodes operator precedence by the layering of productions.
/// - Encodes left-associativity by iterative folding.
/// - Stops at the first syntax error, reporting the offending position.
pub mod parser;
