use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
};

pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a parsed tree with checked `i64` arithmetic.
///
/// Division truncates toward zero.
///
/// # Errors
/// - `DivisionByZero` when a `/` has a zero right operand.
/// - `Overflow` when any intermediate result leaves the `i64` range.
///
/// # Example
/// ```
/// use tally::{interpreter::evaluator::evaluate, parse_source};
///
/// let ast = parse_source("8*4/2").unwrap();
/// assert_eq!(evaluate(&ast).unwrap(), 16);
///
/// let ast = parse_source("8/4/2").unwrap();
/// assert_eq!(evaluate(&ast).unwrap(), 1);
///
/// let ast = parse_source("-(2+3)*4").unwrap();
/// assert_eq!(evaluate(&ast).unwrap(), -20);
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<i64> {
    match expr {
        Expr::Number { value, .. } => Ok(*value),
        Expr::Negate { operand, position } => {
            let value = evaluate(operand)?;
            value.checked_neg()
                 .ok_or_else(|| RuntimeError::Overflow { operation: "negation".to_string(),
                                                         position:  *position, })
        },
        Expr::BinaryOp { op,
                         left,
                         right,
                         position, } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            eval_binary(*op, left, right, *position)
        },
    }
}

fn eval_binary(op: BinaryOperator, left: i64, right: i64, position: usize) -> EvalResult<i64> {
    let result = match op {
        BinaryOperator::Add => left.checked_add(right),
        BinaryOperator::Sub => left.checked_sub(right),
        BinaryOperator::Mul => left.checked_mul(right),
        BinaryOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { position });
            }
            left.checked_div(right)
        },
    };

    result.ok_or_else(|| RuntimeError::Overflow { operation: op.to_string(),
                                                  position })
}
