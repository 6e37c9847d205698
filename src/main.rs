use std::{io, path::PathBuf, process};

use clap::Parser;
use tamarin::repl;

/// Tamarin is a small, dynamically typed scripting language with first-class
/// functions and closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a script to run. Starts an interactive session when omitted.
    script: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    match args.script {
        Some(path) => {
            let source = std::fs::read_to_string(&path).unwrap_or_else(|_| {
                eprintln!("Failed to read the script '{}'. Perhaps this file does not exist?",
                          path.display());
                process::exit(1);
            });

            if let Err(e) = tamarin::interpret(&source, &mut io::stdout()) {
                eprintln!("{e}");
            }
        },

        None => {
            let mut stdout = io::stdout();
            let session = repl::greet(&mut stdout)
                .and_then(|()| repl::start(&mut io::stdin().lock(), &mut stdout));

            if let Err(e) = session {
                eprintln!("{e}");
            }
        },
    }
}
