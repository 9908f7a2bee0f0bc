use std::{fs, io::Write, process::ExitCode};

use camlang::{error::Error, interpret, parse, tokenize, write_tokens, write_tree};
use clap::Parser;

/// camlang runs programs written in CAM, a small imperative teaching
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells camlang to read the program from a file instead of taking it
    /// inline.
    #[arg(short, long)]
    file: bool,

    /// Prints the token stream before running the program.
    #[arg(short, long)]
    tokens: bool,

    /// Prints the parsed program, one top-level statement per line, before
    /// running it.
    #[arg(long)]
    tree: bool,

    contents: String,
}

fn execute(source: &str, args: &Args, out: &mut dyn Write) -> Result<(), Error> {
    let tokens = tokenize(source)?;
    if args.tokens {
        write_tokens(&tokens, out)?;
    }

    let program = parse(&tokens)?;
    if args.tree {
        write_tree(&program, out)?;
    }

    interpret(&program, out)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents.clone()
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = execute(&script, &args, &mut out) {
        if writeln!(out, "{e}").and_then(|()| out.flush()).is_err() {
            eprintln!("{e}");
        }
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
