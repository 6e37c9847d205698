use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// The signature shared by every built-in: the evaluator's output sink plus
/// the already-evaluated argument list.
pub type BuiltinFn = fn(&mut dyn Write, &[Value]) -> EvalResult<Value>;

/// One entry of the built-ins table: a name and the procedure bound to it.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// The identifier the built-in is resolved under.
    pub name: &'static str,
    /// The procedure itself.
    pub func: BuiltinFn,
}

/// The built-ins table. Fixed at compile time; identifier lookup consults it
/// after the environment chain, so user bindings may shadow these names.
pub const BUILTINS: [Builtin; 7] = [
    Builtin { name: "len", func: len },
    Builtin { name: "first", func: first },
    Builtin { name: "last", func: last },
    Builtin { name: "rest", func: rest },
    Builtin { name: "push", func: push },
    Builtin { name: "puts", func: puts },
    Builtin { name: "put", func: put },
];

/// Looks a name up in the built-ins table.
#[must_use]
pub fn lookup(name: &str) -> Option<Value> {
    BUILTINS.iter().find(|builtin| builtin.name == name).map(|builtin| Value::Builtin(*builtin))
}

/// Rejects a call whose argument count is not exactly `want`.
fn check_args_len(want: usize, args: &[Value]) -> Result<(), RuntimeError> {
    if args.len() == want {
        Ok(())
    } else {
        Err(RuntimeError::WrongBuiltinArity { got: args.len(), want })
    }
}

/// The error for an argument of a type a built-in does not accept.
fn unsupported_argument(position: usize, name: &'static str, argument: &Value) -> RuntimeError {
    RuntimeError::UnsupportedBuiltinArgument { position, name, type_name: argument.type_name() }
}

/// `len(x)`: the length of a string in bytes, or of an array in elements.
#[allow(clippy::cast_possible_wrap)]
fn len(_out: &mut dyn Write, args: &[Value]) -> EvalResult<Value> {
    check_args_len(1, args)?;

    match &args[0] {
        Value::Str(value) => Ok(Value::Integer(value.len() as i64)),
        Value::Array(elements) => Ok(Value::Integer(elements.len() as i64)),
        other => Err(unsupported_argument(1, "len", other)),
    }
}

/// `first(a)`: the first element of a non-empty array.
fn first(_out: &mut dyn Write, args: &[Value]) -> EvalResult<Value> {
    check_args_len(1, args)?;

    match &args[0] {
        Value::Array(elements) => elements
            .first()
            .cloned()
            .ok_or(RuntimeError::EmptyArrayCall { name: "first" }),
        other => Err(unsupported_argument(1, "first", other)),
    }
}

/// `last(a)`: the last element of a non-empty array.
fn last(_out: &mut dyn Write, args: &[Value]) -> EvalResult<Value> {
    check_args_len(1, args)?;

    match &args[0] {
        Value::Array(elements) => elements
            .last()
            .cloned()
            .ok_or(RuntimeError::EmptyArrayCall { name: "last" }),
        other => Err(unsupported_argument(1, "last", other)),
    }
}

/// `rest(a)`: a new array holding everything but the first element of a
/// non-empty array.
fn rest(_out: &mut dyn Write, args: &[Value]) -> EvalResult<Value> {
    check_args_len(1, args)?;

    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                return Err(RuntimeError::EmptyArrayCall { name: "rest" });
            }
            Ok(Value::from(elements[1..].to_vec()))
        },
        other => Err(unsupported_argument(1, "rest", other)),
    }
}

/// `push(a, x)`: a new array with `x` appended. The original array is
/// untouched; callers relying on it keep their value.
fn push(_out: &mut dyn Write, args: &[Value]) -> EvalResult<Value> {
    check_args_len(2, args)?;

    match &args[0] {
        Value::Array(elements) => {
            let mut pushed = Vec::with_capacity(elements.len() + 1);
            pushed.extend(elements.iter().cloned());
            pushed.push(args[1].clone());
            Ok(Value::from(pushed))
        },
        other => Err(unsupported_argument(1, "push", other)),
    }
}

/// `puts(...)`: writes each argument's inspect form and a newline to the
/// evaluator's sink, and yields `null`. Takes any number of arguments.
fn puts(out: &mut dyn Write, args: &[Value]) -> EvalResult<Value> {
    for arg in args {
        // A failing sink is not a language-level error.
        let _ = writeln!(out, "{arg}");
    }

    Ok(Value::Null)
}

/// `put(h, k, v)`: a new hash with `k` mapped to `v`, inserted or
/// replaced. The original hash is untouched.
fn put(_out: &mut dyn Write, args: &[Value]) -> EvalResult<Value> {
    check_args_len(3, args)?;

    let Value::Hash(pairs) = &args[0] else {
        return Err(unsupported_argument(1, "put", &args[0]));
    };
    let Some(key) = args[1].hash_key() else {
        return Err(unsupported_argument(2, "put", &args[1]));
    };

    let mut updated = (**pairs).clone();
    updated.insert(key, args[2].clone());

    Ok(Value::from(updated))
}
