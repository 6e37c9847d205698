#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while parsing a token stream.
///
/// The parser records these and keeps going; callers inspect the collected
/// list after `parse_program`. Each message renders its canonical text first
/// and the source line as a ` (line N)` suffix.
pub enum ParseError {
    /// The token after the current one was not the one the grammar requires.
    UnexpectedToken {
        /// The kind name of the expected token.
        expected: String,
        /// The kind name of the token actually found.
        got:      String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No expression can start with the current token.
    NoPrefixParseFn {
        /// The kind name of the offending token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal does not fit a 64-bit signed integer.
    InvalidInteger {
        /// The literal text as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, got, line } => {
                write!(f, "expected next token to be {expected}, got {got} instead (line {line})")
            },
            Self::NoPrefixParseFn { token, line } => {
                write!(f, "no prefix parse function for type {token} found (line {line})")
            },
            Self::InvalidInteger { literal, line } => {
                write!(f, "could not parse {literal:?} as an integer (line {line})")
            },
        }
    }
}

impl std::error::Error for ParseError {}
