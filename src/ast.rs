/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` is a closed set of variants: integer literals, unary negation and
/// the four binary operators. Every child is a complete subtree owned
/// exclusively by its parent, so the tree never shares nodes and has no
/// back-references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Number {
        /// The literal value.
        value:    i64,
        /// Byte offset of the literal in the source.
        position: usize,
    },
    /// Unary minus applied to a single operand.
    Negate {
        /// The negated expression.
        operand:  Box<Self>,
        /// Byte offset of the `-` token.
        position: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// The operator.
        op:       BinaryOperator,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator token.
        position: usize,
    },
}

impl Expr {
    /// Gets the source position of `self`.
    ///
    /// For literals this is the literal itself; for operators it is the
    /// operator token.
    /// ## Example
    /// ```
    /// use tally::ast::Expr;
    ///
    /// let expr = Expr::Number { value:    7,
    ///                           position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. }
            | Self::Negate { position, .. }
            | Self::BinaryOp { position, .. } => *position,
        }
    }

    /// Compares two trees structurally, ignoring every source position.
    ///
    /// `(2+3)` and `2+3` produce trees with different positions but the same
    /// shape.
    ///
    /// ## Example
    /// ```
    /// use tally::parse_source;
    ///
    /// let plain = parse_source("2+3").unwrap();
    /// let grouped = parse_source("((2+3))").unwrap();
    ///
    /// assert_ne!(plain, grouped);
    /// assert!(plain.same_shape(&grouped));
    /// ```
    #[must_use]
    pub fn same_shape(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number { value: a, .. }, Self::Number { value: b, .. }) => a == b,
            (Self::Negate { operand: a, .. }, Self::Negate { operand: b, .. }) => a.same_shape(b),
            (Self::BinaryOp { op: op_a,
                              left: left_a,
                              right: right_a,
                              .. },
             Self::BinaryOp { op: op_b,
                              left: left_b,
                              right: right_b,
                              .. }) => {
                op_a == op_b && left_a.same_shape(left_b) && right_a.same_shape(right_b)
            },
            _ => false,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

/// Writes the tree as a fully parenthesized s-expression.
///
/// ```
/// use tally::parse_source;
///
/// let expr = parse_source("2+3*-4").unwrap();
/// assert_eq!(expr.to_string(), "(+ 2 (* 3 (neg 4)))");
/// ```
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::Negate { operand, .. } => write!(f, "(neg {operand})"),
            Self::BinaryOp { op, left, right, .. } => write!(f, "({op} {left} {right})"),
        }
    }
}
