/// Core parser state and the precedence-climbing expression loop.
///
/// Contains the `Parser` struct, the operator precedence table, the token
/// window management and the error-recording helpers shared by the other
/// parser modules.
pub mod core;

/// Expression parsing.
///
/// Implements the prefix and infix handlers: literals, identifiers, operator
/// applications, grouping, conditionals, function literals, calls, arrays,
/// hashes and subscripts.
pub mod expression;

/// Statement parsing.
///
/// Implements program, statement and block parsing: `let`, `return` and
/// expression statements, with their optional trailing semicolons.
pub mod statement;
