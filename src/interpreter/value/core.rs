use std::{collections::HashMap, fmt, rc::Rc};

use crate::{
    ast::BlockStatement,
    interpreter::{
        environment::EnvRef,
        evaluator::builtin::Builtin,
        value::hash_key::HashKey,
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every type a program can produce. Collections and
/// functions are shared behind `Rc`: cloning a value aliases the same
/// underlying data, which is safe because the language has no mutation, and
/// which gives `==` on those types the reference-identity semantics the
/// evaluator relies on.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean, produced by the literals and the comparison operators.
    Boolean(bool),
    /// An immutable string.
    Str(Rc<str>),
    /// The absence of a value: a missing `else` arm, a missing hash key.
    Null,
    /// An array of values.
    Array(Rc<Vec<Value>>),
    /// A hash mapping hashable keys to values.
    Hash(Rc<HashMap<HashKey, Value>>),
    /// A user-defined function together with its captured environment.
    Function(Rc<FunctionValue>),
    /// An entry of the built-ins table.
    Builtin(Builtin),
    /// The sentinel wrapping a `return`ed value while it unwinds to the
    /// nearest function or program boundary.
    Return(Box<Value>),
}

/// A function value: parameters, body, and the environment captured at the
/// point of definition. Calls extend that environment, never the caller's,
/// which is what makes closures work.
pub struct FunctionValue {
    /// Parameter names.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       BlockStatement,
    /// The environment the function literal was evaluated in.
    pub env:        EnvRef,
}

// The captured environment may reach back to this function through a user
// binding, so the derived Debug would recurse. Render parameters only.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue").field("parameters", &self.parameters).finish_non_exhaustive()
    }
}

impl Value {
    /// Returns the value's type name as it appears in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::Str(_) => "STRING",
            Self::Null => "NULL",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Return(_) => "RETURN_VALUE",
        }
    }

    /// Returns whether the value counts as true in a condition.
    ///
    /// Everything except `null` and `false` is truthy, including `0` and the
    /// empty string.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Boolean(false))
    }

    /// Identity comparison, the semantics of `==` and `!=` for every operand
    /// pair the integer and string operator paths do not intercept.
    ///
    /// Booleans and `null` compare by value (their singletons make identity
    /// and value equality coincide); strings, arrays, hashes and functions
    /// compare by reference, so a `let`-bound value equals itself but two
    /// equal-looking literals do not; mixed types are never equal.
    #[must_use]
    pub fn identity_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Boolean(left), Self::Boolean(right)) => left == right,
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Null, Self::Null) => true,
            (Self::Str(left), Self::Str(right)) => Rc::ptr_eq(left, right),
            (Self::Array(left), Self::Array(right)) => Rc::ptr_eq(left, right),
            (Self::Hash(left), Self::Hash(right)) => Rc::ptr_eq(left, right),
            (Self::Function(left), Self::Function(right)) => Rc::ptr_eq(left, right),
            (Self::Builtin(left), Self::Builtin(right)) => left.name == right.name,
            _ => false,
        }
    }

    /// Returns the value's hash key projection, or `None` if the value is
    /// not hashable.
    #[must_use]
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Self::Integer(value) => Some(HashKey::Integer(*value)),
            Self::Boolean(value) => Some(HashKey::Boolean(*value)),
            Self::Str(value) => Some(HashKey::Str(Rc::clone(value))),
            _ => None,
        }
    }

}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(Rc::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(Rc::from(value))
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::Array(Rc::new(value))
    }
}

impl From<HashMap<HashKey, Self>> for Value {
    fn from(value: HashMap<HashKey, Self>) -> Self {
        Self::Hash(Rc::new(value))
    }
}

impl fmt::Display for Value {
    /// Writes the value's inspect form: integers in decimal, booleans as
    /// `true`/`false`, strings raw, `null`, arrays and hashes element-wise,
    /// functions with their parameter list and body.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Hash(pairs) => {
                write!(f, "{{")?;
                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
            Self::Function(function) => {
                write!(f, "fn({}) {{\n{}\n}}", function.parameters.join(", "), function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Return(value) => write!(f, "{value}"),
        }
    }
}
