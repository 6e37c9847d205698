use std::io::{self, BufRead, Write};

use crate::interpreter::{
    environment::Environment,
    evaluator::core::Evaluator,
    lexer::Lexer,
    parser::core::Parser,
};

const PROMPT: &str = ">> ";

/// Writes the greeting shown before an interactive session.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn greet(out: &mut dyn Write) -> io::Result<()> {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "friend".to_string());

    writeln!(out, "Hello {user}! This is Tamarin, a small scripting language.")?;
    writeln!(out, "Type in an expression to evaluate it. (CTRL-C to quit)")
}

/// Runs the read-eval-print loop until `input` reaches end of file.
///
/// Every line is parsed and evaluated against one environment that persists
/// across iterations, so `let` bindings survive from line to line. Parser
/// errors are printed under a banner and the loop continues; a runtime
/// error prints its message and likewise does not end the session.
///
/// # Errors
/// Returns an error if reading from `input` or writing to `out` fails.
pub fn start(input: &mut dyn BufRead, out: &mut dyn Write) -> io::Result<()> {
    let env = Environment::root();

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let mut parser = Parser::new(Lexer::new(&line));
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            writeln!(out, "Yikes! Watch what you type!")?;
            writeln!(out, " parser errors:")?;
            for error in parser.errors() {
                writeln!(out, "\t{error}")?;
            }
            continue;
        }

        let result = Evaluator::new(&mut *out).eval_program(&program, &env);
        match result {
            Ok(Some(value)) => writeln!(out, "{value}")?,
            Ok(None) => {},
            Err(error) => writeln!(out, "{error}")?,
        }
    }
}
