/// The environment module implements lexical scoping.
///
/// An environment is one scope of name bindings chained to an optional outer
/// scope. Closures keep a shared handle to the scope they were defined in,
/// so bindings outlive the frames that created them.
///
/// # Responsibilities
/// - Resolves identifiers by walking the scope chain outward.
/// - Binds `let` names in the innermost scope.
/// - Shares scopes between closures and call frames.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// applies operators and functions, and produces runtime values. It is the
/// core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles closures, conditionals, and `return` propagation.
/// - Reports runtime errors such as type mismatches or unknown identifiers.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a meaningful language element such as a number, string,
/// identifier, operator, delimiter, or keyword. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input into tokens with their source line.
/// - Handles integer and string literals, identifiers, and operators.
/// - Folds malformed input into `ILLEGAL` tokens instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST representing the syntactic structure of expressions and
/// statements, using operator-precedence (Pratt) parsing for expressions.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Accumulates syntax errors with location info instead of aborting.
/// - Implements the operator precedence table.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during execution: integers,
/// booleans, strings, arrays, hashes, functions, and built-ins, together
/// with the hash-key projection, truthiness, identity comparison, and the
/// inspect rendering.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Defines the `HashKey` projection used by hashes.
/// - Implements type names, truthiness, and the inspect form.
pub mod value;
