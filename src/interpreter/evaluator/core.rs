use std::{io::Write, rc::Rc};

use crate::{
    ast::{BlockStatement, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::EnvRef,
        evaluator::{builtin, infix, prefix},
        value::core::{FunctionValue, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`RuntimeError`] describing the failure. The `?` operator is what gives
/// the language its error semantics: the first error anywhere in a program
/// propagates unchanged through every enclosing evaluation step.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The tree-walking evaluator.
///
/// Evaluation itself is stateless between calls; the struct exists to carry
/// the output sink that the `puts` built-in writes to, so embedders (CLI,
/// REPL, tests) can direct program output wherever they need it.
pub struct Evaluator<'a> {
    pub(super) out: &'a mut dyn Write,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator whose `puts` output goes to `out`.
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self { out }
    }

    /// Evaluates a whole program against `env`.
    ///
    /// Statements run in order. A `return` unwinds to here and is unwrapped:
    /// its inner value becomes the program result. Otherwise the result is
    /// the last statement's value, which is `None` when the program ends in
    /// a `let` (a binding has no observable value).
    pub fn eval_program(&mut self, program: &Program, env: &EnvRef) -> EvalResult<Option<Value>> {
        let mut result = None;

        for statement in &program.statements {
            match self.eval_statement(statement, env)? {
                Some(Value::Return(value)) => return Ok(Some(*value)),
                other => result = other,
            }
        }

        Ok(result)
    }

    /// Evaluates one statement. Only `let` produces `None`.
    pub(super) fn eval_statement(&mut self,
                                 statement: &Statement,
                                 env: &EnvRef)
                                 -> EvalResult<Option<Value>> {
        match statement {
            Statement::Let { name, value } => {
                let value = self.eval_expression(value, env)?;
                env.borrow_mut().set(name.clone(), value);
                Ok(None)
            },
            Statement::Return { value } => {
                let value = self.eval_expression(value, env)?;
                Ok(Some(Value::Return(Box::new(value))))
            },
            Statement::Expression { expr } => self.eval_expression(expr, env).map(Some),
        }
    }

    /// Evaluates a block of statements.
    ///
    /// A `return` value is forwarded *without* unwrapping: the unwrap
    /// happens only at program and function-call boundaries, which is what
    /// lets a `return` inside nested `if` arms unwind all of them. A block
    /// ending in a `let` evaluates to `null`.
    pub(super) fn eval_block(&mut self,
                             block: &BlockStatement,
                             env: &EnvRef)
                             -> EvalResult<Value> {
        let mut result = Value::Null;

        for statement in &block.statements {
            match self.eval_statement(statement, env)? {
                Some(value) => {
                    if matches!(value, Value::Return(_)) {
                        return Ok(value);
                    }
                    result = value;
                },
                None => result = Value::Null,
            }
        }

        Ok(result)
    }

    /// Evaluates one expression, dispatching on its variant.
    pub(super) fn eval_expression(&mut self, expr: &Expr, env: &EnvRef) -> EvalResult<Value> {
        match expr {
            Expr::Identifier(name) => Self::eval_identifier(name, env),
            Expr::IntegerLiteral(value) => Ok(Value::Integer(*value)),
            Expr::BooleanLiteral(value) => Ok(Value::Boolean(*value)),
            Expr::StringLiteral(value) => Ok(Value::from(value.as_str())),
            Expr::Prefix { operator, right } => {
                let operand = self.eval_expression(right, env)?;
                prefix::eval_prefix(*operator, &operand)
            },
            Expr::Infix { operator, left, right } => {
                let left = self.eval_expression(left, env)?;
                let right = self.eval_expression(right, env)?;
                infix::eval_infix(*operator, &left, &right)
            },
            Expr::If { condition, consequence, alternative } => {
                self.eval_if_expression(condition, consequence, alternative.as_ref(), env)
            },
            Expr::FunctionLiteral { parameters, body } => {
                Ok(Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                           body:       body.clone(),
                                                           env:        Rc::clone(env), })))
            },
            Expr::Call { function, arguments } => {
                self.eval_call_expression(function, arguments, env)
            },
            Expr::ArrayLiteral(elements) => self.eval_array_literal(elements, env),
            Expr::HashLiteral(pairs) => self.eval_hash_literal(pairs, env),
            Expr::Subscript { left, index } => self.eval_subscript_expression(left, index, env),
        }
    }

    /// Evaluates a conditional. The condition is truthy unless it is `null`
    /// or `false`; a missing `else` arm yields `null`.
    fn eval_if_expression(&mut self,
                          condition: &Expr,
                          consequence: &BlockStatement,
                          alternative: Option<&BlockStatement>,
                          env: &EnvRef)
                          -> EvalResult<Value> {
        let condition = self.eval_expression(condition, env)?;

        if condition.is_truthy() {
            self.eval_block(consequence, env)
        } else if let Some(alternative) = alternative {
            self.eval_block(alternative, env)
        } else {
            Ok(Value::Null)
        }
    }

    /// Resolves an identifier: the environment chain first, then the
    /// built-ins table.
    fn eval_identifier(name: &str, env: &EnvRef) -> EvalResult<Value> {
        if let Some(value) = env.borrow().get(name) {
            return Ok(value);
        }

        if let Some(value) = builtin::lookup(name) {
            return Ok(value);
        }

        Err(RuntimeError::IdentifierNotFound { name: name.to_string() })
    }
}
