use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies an infix operator to two already-evaluated operands.
///
/// Dispatch order matters and mirrors the language rules: the
/// integer-integer and string-string paths claim their operand pairs first;
/// for every remaining pair, `==` and `!=` compare by identity (so mixed
/// types are simply unequal, never an error), and any other operator is a
/// type mismatch across types or an unknown operator within one.
pub(super) fn eval_infix(operator: InfixOperator,
                         left: &Value,
                         right: &Value)
                         -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Value::Str(l), Value::Str(r)) => eval_string_infix(operator, l, r),
        _ => match operator {
            InfixOperator::Eq => Ok(Value::Boolean(left.identity_eq(right))),
            InfixOperator::NotEq => Ok(Value::Boolean(!left.identity_eq(right))),
            _ if left.type_name() != right.type_name() => {
                Err(RuntimeError::TypeMismatch { left: left.type_name(),
                                                 operator,
                                                 right: right.type_name() })
            },
            _ => Err(RuntimeError::UnknownInfixOperator { left: left.type_name(),
                                                          operator,
                                                          right: right.type_name() }),
        },
    }
}

/// Integer arithmetic and comparison. `+`, `-` and `*` wrap on overflow;
/// division truncates toward zero and rejects a zero divisor.
fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64) -> EvalResult<Value> {
    match operator {
        InfixOperator::Plus => Ok(Value::Integer(left.wrapping_add(right))),
        InfixOperator::Minus => Ok(Value::Integer(left.wrapping_sub(right))),
        InfixOperator::Asterisk => Ok(Value::Integer(left.wrapping_mul(right))),
        InfixOperator::Slash => {
            if right == 0 {
                Err(RuntimeError::DivisionByZero)
            } else {
                Ok(Value::Integer(left.wrapping_div(right)))
            }
        },
        InfixOperator::Lt => Ok(Value::Boolean(left < right)),
        InfixOperator::Gt => Ok(Value::Boolean(left > right)),
        InfixOperator::Eq => Ok(Value::Boolean(left == right)),
        InfixOperator::NotEq => Ok(Value::Boolean(left != right)),
    }
}

/// Strings support `+` (concatenation) and nothing else, not even `==`,
/// which lands here before the identity fallback can see it.
fn eval_string_infix(operator: InfixOperator, left: &str, right: &str) -> EvalResult<Value> {
    match operator {
        InfixOperator::Plus => Ok(Value::from(format!("{left}{right}"))),
        _ => Err(RuntimeError::UnknownInfixOperator { left: "STRING",
                                                      operator,
                                                      right: "STRING" }),
    }
}
