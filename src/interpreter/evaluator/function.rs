use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::{EnvRef, Environment},
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a call expression: callee first, then the arguments left to
    /// right, aborting on the first error.
    pub(super) fn eval_call_expression(&mut self,
                                       function: &Expr,
                                       arguments: &[Expr],
                                       env: &EnvRef)
                                       -> EvalResult<Value> {
        let callee = self.eval_expression(function, env)?;

        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.eval_expression(argument, env)?);
        }

        self.apply_function(&callee, &args)
    }

    /// Applies a callee to evaluated arguments.
    ///
    /// A user function gets a fresh scope chained to its *captured*
    /// environment (never the caller's) with one binding per parameter;
    /// the body runs there and a `return` value is unwrapped exactly once at
    /// this boundary. Built-ins are invoked directly; they never produce a
    /// return sentinel, so there is nothing to unwrap.
    fn apply_function(&mut self, callee: &Value, args: &[Value]) -> EvalResult<Value> {
        match callee {
            Value::Function(function) => {
                if function.parameters.len() != args.len() {
                    return Err(RuntimeError::WrongFunctionArity {
                        expected: function.parameters.len(),
                        got:      args.len(),
                    });
                }

                let call_env = Environment::extend(&function.env);
                for (parameter, argument) in function.parameters.iter().zip(args) {
                    call_env.borrow_mut().set(parameter.clone(), argument.clone());
                }

                let result = self.eval_block(&function.body, &call_env)?;
                Ok(match result {
                    Value::Return(value) => *value,
                    other => other,
                })
            },
            Value::Builtin(builtin) => (builtin.func)(&mut *self.out, args),
            other => Err(RuntimeError::NotAFunction { type_name: other.type_name() }),
        }
    }
}
