use std::rc::Rc;

/// The canonical hashable projection of a value.
///
/// Only integers, booleans and strings can be hash keys. The enum variant
/// acts as a type tag, so the integer `1`, the boolean `true` and the string
/// `"1"` are three distinct keys no matter what their contents hash to.
/// Arrays, hashes and functions have no projection; [`super::core::Value::hash_key`]
/// returns `None` for them and callers report the appropriate error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    /// An integer key.
    Integer(i64),
    /// A boolean key.
    Boolean(bool),
    /// A string key.
    Str(Rc<str>),
}

impl std::fmt::Display for HashKey {
    /// Writes the key's inspect form, as used in hash renderings and in the
    /// `duplicate key` message.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value}"),
        }
    }
}
