use std::fs;

use clap::Parser;
use postfixa::{evaluate, postfix};

/// postfixa converts infix arithmetic expressions to Reverse Polish Notation
/// and evaluates them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells postfixa to read the expression from a file instead of the
    /// command line.
    #[arg(short, long)]
    file: bool,

    /// Prints the postfix form of the expression instead of its value.
    #[arg(short, long)]
    postfix: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let outcome = if args.postfix {
        postfix(expression.trim()).map(|form| println!("{form}"))
    } else {
        evaluate(expression.trim()).map(|value| println!("{value}"))
    };

    if let Err(e) = outcome {
        eprintln!("{e}");
    }
}
