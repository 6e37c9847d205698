use std::collections::HashMap;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::EnvRef,
        evaluator::core::{EvalResult, Evaluator},
        value::{core::Value, hash_key::HashKey},
    },
};

impl Evaluator<'_> {
    /// Evaluates an array literal's elements left to right.
    pub(super) fn eval_array_literal(&mut self,
                                     elements: &[Expr],
                                     env: &EnvRef)
                                     -> EvalResult<Value> {
        let mut values = Vec::with_capacity(elements.len());
        for element in elements {
            values.push(self.eval_expression(element, env)?);
        }

        Ok(Value::from(values))
    }

    /// Evaluates a hash literal: each key, then its value, in source order.
    ///
    /// A key that is not an integer, boolean or string is rejected, as is a
    /// key that hashes equal to an earlier one.
    pub(super) fn eval_hash_literal(&mut self,
                                    pairs: &[(Expr, Expr)],
                                    env: &EnvRef)
                                    -> EvalResult<Value> {
        let mut map = HashMap::with_capacity(pairs.len());

        for (key_expr, value_expr) in pairs {
            let key = self.eval_expression(key_expr, env)?;
            let Some(hash_key) = key.hash_key() else {
                return Err(RuntimeError::InvalidKeyType { type_name: key.type_name() });
            };

            let value = self.eval_expression(value_expr, env)?;

            if map.insert(hash_key, value).is_some() {
                return Err(RuntimeError::DuplicateKey { key: key.to_string() });
            }
        }

        Ok(Value::from(map))
    }

    /// Evaluates a subscript expression: the target, then the index, then
    /// the lookup appropriate to the target's type.
    pub(super) fn eval_subscript_expression(&mut self,
                                            left: &Expr,
                                            index: &Expr,
                                            env: &EnvRef)
                                            -> EvalResult<Value> {
        let target = self.eval_expression(left, env)?;
        let index = self.eval_expression(index, env)?;

        match &target {
            Value::Array(elements) => eval_array_subscript(elements, &index),
            Value::Hash(pairs) => eval_hash_subscript(pairs, &index),
            other => Err(RuntimeError::SubscriptNotSupported { type_name: other.type_name() }),
        }
    }
}

/// Array subscripts take an integer index; anything negative or past the
/// end is out of range (there is no reverse indexing).
fn eval_array_subscript(elements: &[Value], index: &Value) -> EvalResult<Value> {
    let Value::Integer(index) = index else {
        return Err(RuntimeError::NonIntegerSubscript { type_name: index.type_name() });
    };

    usize::try_from(*index)
        .ok()
        .and_then(|i| elements.get(i))
        .cloned()
        .ok_or(RuntimeError::IndexOutOfRange { index: *index, length: elements.len() })
}

/// Hash subscripts take any hashable key; a missing key is `null`, not an
/// error.
fn eval_hash_subscript(pairs: &HashMap<HashKey, Value>, index: &Value) -> EvalResult<Value> {
    let Some(key) = index.hash_key() else {
        return Err(RuntimeError::InvalidKeyType { type_name: index.type_name() });
    };

    Ok(pairs.get(&key).cloned().unwrap_or(Value::Null))
}
