use crate::ast::{InfixOperator, PrefixOperator};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
///
/// An error anywhere in a program is the program's result: evaluation
/// propagates the first error unchanged through every enclosing expression.
/// The rendered message is the sole user-visible payload.
pub enum RuntimeError {
    /// An infix operator was applied to operands of two different types.
    TypeMismatch {
        /// Type name of the left operand.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Type name of the right operand.
        right:    &'static str,
    },
    /// A prefix operator was applied to an operand it does not support.
    UnknownPrefixOperator {
        /// The operator.
        operator: PrefixOperator,
        /// Type name of the operand.
        operand:  &'static str,
    },
    /// An infix operator was applied to same-typed operands it does not
    /// support.
    UnknownInfixOperator {
        /// Type name of the left operand.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Type name of the right operand.
        right:    &'static str,
    },
    /// An identifier is bound neither in scope nor in the built-ins table.
    IdentifierNotFound {
        /// The name looked up.
        name: String,
    },
    /// A call expression's callee is not a function or built-in.
    NotAFunction {
        /// Type name of the callee.
        type_name: &'static str,
    },
    /// A function was called with the wrong number of arguments.
    WrongFunctionArity {
        /// The function's parameter count.
        expected: usize,
        /// The number of arguments supplied.
        got:      usize,
    },
    /// A built-in was called with the wrong number of arguments.
    WrongBuiltinArity {
        /// The number of arguments supplied.
        got:  usize,
        /// The number of arguments required.
        want: usize,
    },
    /// A built-in was given an argument of an unsupported type.
    UnsupportedBuiltinArgument {
        /// One-based position of the offending argument.
        position:  usize,
        /// The built-in's name.
        name:      &'static str,
        /// Type name of the argument.
        type_name: &'static str,
    },
    /// `first`, `last` or `rest` was applied to an empty array.
    EmptyArrayCall {
        /// The built-in's name.
        name: &'static str,
    },
    /// An array was subscripted with a non-integer index.
    NonIntegerSubscript {
        /// Type name of the index.
        type_name: &'static str,
    },
    /// An array subscript was negative or past the end.
    IndexOutOfRange {
        /// The requested index.
        index:  i64,
        /// The array's length.
        length: usize,
    },
    /// A value that is neither an array nor a hash was subscripted.
    SubscriptNotSupported {
        /// Type name of the subscripted value.
        type_name: &'static str,
    },
    /// An array, hash or function was used as a hash key.
    InvalidKeyType {
        /// Type name of the key.
        type_name: &'static str,
    },
    /// A hash literal contains the same key twice.
    DuplicateKey {
        /// The key's inspect form.
        key: String,
    },
    /// Integer division by zero.
    DivisionByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left, operator, right } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },
            Self::UnknownPrefixOperator { operator, operand } => {
                write!(f, "unknown operator: {operator}{operand}")
            },
            Self::UnknownInfixOperator { left, operator, right } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::NotAFunction { type_name } => write!(f, "not a function: {type_name}"),
            Self::WrongFunctionArity { expected, got } => {
                write!(f, "wrong number of arguments to function. expected={expected}, got={got}")
            },
            Self::WrongBuiltinArity { got, want } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },
            Self::UnsupportedBuiltinArgument { position, name, type_name } => {
                write!(f,
                       "type of {} argument to `{name}` not supported, got {type_name}",
                       ordinal(*position))
            },
            Self::EmptyArrayCall { name } => {
                write!(f, "`{name}` should not be called on empty array")
            },
            Self::NonIntegerSubscript { type_name } => {
                write!(f,
                       "non-integer argument to array subscript not supported, got {type_name}")
            },
            Self::IndexOutOfRange { index, length } => {
                write!(f, "index out of range: {index}. array length: {length}")
            },
            Self::SubscriptNotSupported { type_name } => {
                write!(f, "subscript operator not supported for type: {type_name}")
            },
            Self::InvalidKeyType { type_name } => write!(f, "invalid key type: {type_name}"),
            Self::DuplicateKey { key } => write!(f, "duplicate key: {key}"),
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for RuntimeError {}

/// Renders a one-based argument position as an English ordinal.
fn ordinal(position: usize) -> String {
    match position {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        n => format!("{n}th"),
    }
}
