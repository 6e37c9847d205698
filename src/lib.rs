//! # tamarin
//!
//! Tamarin is a small, dynamically typed, expression-oriented scripting
//! language written in Rust. It has integers, booleans, strings, arrays and
//! hashes, first-class functions with lexical closures, and a handful of
//! built-in procedures. Source text is lexed into tokens, parsed into an
//! AST with a Pratt parser, and executed by a tree-walking evaluator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, Write};

use crate::interpreter::{
    environment::Environment,
    evaluator::core::Evaluator,
    lexer::Lexer,
    parser::core::Parser,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator; its `Display`
/// implementations render the canonical source form.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Defines the prefix and infix operator enums.
/// - Renders nodes back to parseable source text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code. Parse errors carry source lines; runtime error messages
/// are part of the language surface and render exactly.
///
/// # Responsibilities
/// - Defines error enums for the syntactic and runtime failure bands.
/// - Renders each error's canonical message.
/// - Integrates with the standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and scoping to provide a complete runtime for source code
/// evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive read-eval-print loop.
///
/// Reads one line at a time, evaluates it against an environment persisted
/// across lines, and prints results and errors.
pub mod repl;

/// Parses and evaluates `source`, writing the outcome to `out`.
///
/// Parser errors are printed as a tab-indented list and stop the run before
/// evaluation. A successful evaluation prints the result's inspect form
/// followed by a newline, except when the program has no observable result
/// (it ends in a `let`), in which case nothing is printed. A runtime error
/// prints its message.
///
/// # Errors
/// Returns an error only if writing to `out` fails.
///
/// # Examples
/// ```
/// let mut out = Vec::new();
/// tamarin::interpret("let x = 2; x * 3", &mut out).unwrap();
/// assert_eq!(out, b"6\n");
///
/// let mut out = Vec::new();
/// tamarin::interpret(r#""Hello" - "World""#, &mut out).unwrap();
/// assert_eq!(out, b"unknown operator: STRING - STRING\n");
/// ```
pub fn interpret(source: &str, out: &mut dyn Write) -> io::Result<()> {
    let env = Environment::root();
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        writeln!(out, "Parser errors:")?;
        for error in parser.errors() {
            writeln!(out, "\t{error}")?;
        }
        return Ok(());
    }

    let result = Evaluator::new(&mut *out).eval_program(&program, &env);
    match result {
        Ok(Some(value)) => writeln!(out, "{value}"),
        Ok(None) => Ok(()),
        Err(error) => writeln!(out, "{error}"),
    }
}
