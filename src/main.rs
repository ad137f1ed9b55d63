//! Command line driver for DFA minimization.
//! Reads one DFA description per file argument (or a single DFA from standard
//! input when no arguments are given), and prints each original automaton
//! followed by its minimized form.

use std::io::Read;
use std::process::ExitCode;
use std::{env, fs, io};

use dfamin::{Dfa, Result};

fn main() -> ExitCode {
    env_logger::init();

    let files: Vec<String> = env::args().skip(1).collect();
    if files.is_empty() {
        return match minimize_from(io::stdin(), "<stdin>") {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => {
                eprintln!("<stdin>: {}", error);
                ExitCode::FAILURE
            }
        };
    }

    let mut open_failure = false;
    for file in &files {
        let reader = match fs::File::open(file) {
            Ok(reader) => reader,
            // A file that cannot be opened is reported; the remaining files
            // are still processed.
            Err(error) => {
                eprintln!("{}: {}", file, error);
                open_failure = true;
                continue;
            }
        };
        if let Err(error) = minimize_from(reader, file) {
            // Malformed input aborts the whole run.
            eprintln!("{}: {}", file, error);
            return ExitCode::FAILURE;
        }
    }
    if open_failure {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn minimize_from<R: Read>(reader: R, name: &str) -> Result<()> {
    let dfa = Dfa::from_reader(reader)?;
    println!("=============== original DFA ({}) ===============", name);
    print!("{}", dfa);
    println!("=============== minimized DFA ({}) ==============", name);
    print!("{}", dfa.minimize());
    Ok(())
}
