use logos::Logos;

use crate::{error::SyntaxError, interpreter::parser::core::ParseResult};

/// The raw lexemes recognized in source text.
///
/// This is the logos-facing half of the tokenizer; [`tokenize`] converts each
/// lexeme into a [`TokenKind`] and appends the end marker, which never appears
/// in source text.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
enum Lexeme {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
}

/// The kind of a lexical token, including its value for literals.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// An integer literal.
    Number(i64),
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// End of input. Always the last token produced by [`tokenize`].
    End,
}

impl Lexeme {
    const fn kind(self) -> TokenKind {
        match self {
            Self::Number(n) => TokenKind::Number(n),
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number {n}"),
            Self::End => write!(f, "end of input"),
            other => write!(f, "'{}'", other.tag()),
        }
    }
}

impl TokenKind {
    /// Gets the grammar tag of this kind: `number`, one of the punctuation
    /// characters, or `end`.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::End => "end",
        }
    }
}

/// A lexical token: its kind and the byte offset where it starts.
///
/// Tokens are produced once by [`tokenize`] and never mutated.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Token {
    /// What the token is.
    pub kind:     TokenKind,
    /// Byte offset of the token's first byte in the source.
    pub position: usize,
}

impl Token {
    /// Creates a token of `kind` at `position`.
    #[must_use]
    pub const fn new(kind: TokenKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// Gets the token's grammar tag.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        self.kind.tag()
    }

    /// Gets the literal value, present only for number tokens.
    #[must_use]
    pub const fn value(&self) -> Option<i64> {
        match self.kind {
            TokenKind::Number(n) => Some(n),
            _ => None,
        }
    }
}

/// Converts source text into a token sequence terminated by a single
/// [`TokenKind::End`] token positioned at `source.len()`.
///
/// Whitespace is skipped.
///
/// # Errors
/// - `UnrecognizedCharacter` for text that is not a number, parenthesis or
///   operator.
/// - `LiteralTooLarge` for integer literals that do not fit in an `i64`.
///
/// # Example
/// ```
/// use tally::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("12 + 3").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Number(12), TokenKind::Plus, TokenKind::Number(3), TokenKind::End]);
/// assert_eq!(tokens[2].position, 5);
/// assert_eq!(tokens[3].position, 6);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let position = lexer.span().start;
        match lexeme {
            Ok(lexeme) => tokens.push(Token::new(lexeme.kind(), position)),
            Err(()) => {
                let text = lexer.slice().to_string();
                if text.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(SyntaxError::LiteralTooLarge { text, position });
                }
                return Err(SyntaxError::UnrecognizedCharacter { text, position });
            },
        }
    }

    tokens.push(Token::new(TokenKind::End, source.len()));
    Ok(tokens)
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits.
/// - `None`: If the literal overflows an `i64`.
fn parse_integer(lex: &logos::Lexer<Lexeme>) -> Option<i64> {
    lex.slice().parse().ok()
}
