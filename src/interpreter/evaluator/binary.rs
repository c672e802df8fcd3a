use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Position},
};

/// Applies a binary operator to two evaluated operands.
///
/// Arithmetic is checked: any result outside the `i64` range is an
/// `Overflow` error. `/` truncates toward zero and `%` keeps the sign of the
/// dividend. Comparisons and the logical operators produce `1` or `0`, where
/// any nonzero operand counts as true.
///
/// # Parameters
/// - `op`: Operator to apply.
/// - `left`, `right`: Operand values, both already evaluated.
/// - `position`: Position of the operator, used for errors.
///
/// # Returns
/// The resulting integer.
///
/// # Example
/// ```
/// use fimp::{
///     ast::BinaryOperator,
///     error::RuntimeError,
///     interpreter::{evaluator::binary::eval_binary, lexer::Position},
/// };
///
/// let at = Position::default();
/// assert_eq!(eval_binary(BinaryOperator::Mod, -7, 2, at), Ok(-1));
/// assert_eq!(eval_binary(BinaryOperator::Or, 0, 5, at), Ok(1));
/// assert_eq!(eval_binary(BinaryOperator::Div, 1, 0, at),
///            Err(RuntimeError::DivisionByZero { position: at }));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: i64,
                   right: i64,
                   position: Position)
                   -> EvalResult<i64> {
    let overflow = RuntimeError::Overflow { position };

    match op {
        BinaryOperator::Add => left.checked_add(right).ok_or(overflow),
        BinaryOperator::Sub => left.checked_sub(right).ok_or(overflow),
        BinaryOperator::Mul => left.checked_mul(right).ok_or(overflow),
        BinaryOperator::Div | BinaryOperator::Mod => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { position });
            }

            let result = if op == BinaryOperator::Div {
                left.checked_div(right)
            } else {
                left.checked_rem(right)
            };
            result.ok_or(overflow)
        },
        BinaryOperator::Less => Ok(i64::from(left < right)),
        BinaryOperator::LessEqual => Ok(i64::from(left <= right)),
        BinaryOperator::Greater => Ok(i64::from(left > right)),
        BinaryOperator::GreaterEqual => Ok(i64::from(left >= right)),
        BinaryOperator::Equal => Ok(i64::from(left == right)),
        BinaryOperator::NotEqual => Ok(i64::from(left != right)),
        BinaryOperator::And => Ok(i64::from(left != 0 && right != 0)),
        BinaryOperator::Or => Ok(i64::from(left != 0 || right != 0)),
    }
}
