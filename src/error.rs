/// Parsing errors.
///
/// Defines all error types that can occur while turning source text into an
/// abstract syntax tree. Parse errors carry the source line they were
/// recorded on and are accumulated by the parser instead of aborting it.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Their
/// rendered messages are part of the language surface: programs observe them
/// verbatim, so the texts here are exact.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
