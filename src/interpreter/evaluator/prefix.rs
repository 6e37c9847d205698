use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies a prefix operator to an already-evaluated operand.
pub(super) fn eval_prefix(operator: PrefixOperator, operand: &Value) -> EvalResult<Value> {
    match operator {
        PrefixOperator::Bang => Ok(eval_bang(operand)),
        PrefixOperator::Minus => eval_minus(operand),
    }
}

/// `!` maps truthiness to its boolean opposite: `!false` and `!null` are
/// `true`, everything else (including `!0`) is `false`.
fn eval_bang(operand: &Value) -> Value {
    match operand {
        Value::Boolean(true) => Value::Boolean(false),
        Value::Boolean(false) | Value::Null => Value::Boolean(true),
        _ => Value::Boolean(false),
    }
}

/// `-` negates integers only. Negation wraps, so the minimum integer is its
/// own negation.
fn eval_minus(operand: &Value) -> EvalResult<Value> {
    match operand {
        Value::Integer(value) => Ok(Value::Integer(value.wrapping_neg())),
        other => Err(RuntimeError::UnknownPrefixOperator { operator: PrefixOperator::Minus,
                                                           operand:  other.type_name(), }),
    }
}
