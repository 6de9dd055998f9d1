use std::{fs, path::PathBuf, process};

use clap::Parser;
use shunt::{error::ErrorKind, get_result};

/// shunt evaluates an infix arithmetic expression read from a file and
/// writes the result, or the expression's postfix form, to another file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The file containing the expression to evaluate.
    #[arg(short, long)]
    input: PathBuf,

    /// The file the result is written to.
    #[arg(short, long)]
    output: PathBuf,

    /// Write the expression in postfix notation instead of evaluating it.
    #[arg(short, long)]
    postfix: bool,
}

/// Maps a failure category to the process exit code reported to the shell.
const fn exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Syntax => 1,
        ErrorKind::Structural => 2,
        ErrorKind::Domain => 3,
        ErrorKind::Resource => 5,
    }
}

fn main() {
    let args = Args::parse();

    let source = fs::read_to_string(&args.input).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  args.input.display());
        process::exit(exit_code(ErrorKind::Resource));
    });

    let result = match get_result(&source, args.postfix) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{e}");
            process::exit(exit_code(e.kind()));
        },
    };

    if let Err(e) = fs::write(&args.output, result) {
        eprintln!("Failed to write the output file '{}': {e}", args.output.display());
        process::exit(exit_code(ErrorKind::Resource));
    }
}
