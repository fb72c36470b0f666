mod cli;
mod repl;
mod rtpl;
mod run;
#[cfg(test)]
mod tests;

use std::{path::PathBuf, process::ExitCode, rc::Rc};

use clap::Parser;
use cli::{
    print_error, print_finished, print_running, print_warning
};
use cscm_core::utils::prelude::{Error, ErrorEmitter, ErrorEmitterIO};
use repl::{Options, Outcome, PROMPT};

#[derive(Parser)]
enum Command {
    /// Runs Read Eval Print Loop
    Repl {
        /// Prompt printed before every line
        #[arg(long, default_value = PROMPT)]
        prompt: String,
        /// Stop at the first line that fails to evaluate
        #[arg(long, default_value_t = false)]
        abort_on_error: bool,
    },
    /// Evaluates every line of a file and prints the results
    Run {
        /// Path of source file
        path: PathBuf,
        /// Stop at the first line that fails to evaluate
        #[arg(long, default_value_t = false)]
        abort_on_error: bool,
        /// Do not print status lines
        #[arg(short, long, default_value_t = false)]
        quiet: bool,
    },
    /// Runs Read Tokenize Print Loop
    Tokens
}

fn main() -> ExitCode {
    match Command::parse() {
        Command::Repl { prompt, abort_on_error } => {
            if let Err(err) = ctrlc::set_handler(|| {
                println!();
                std::process::exit(130);
            }) {
                print_warning(&format!("could not install Ctrl-C handler: {err}"));
            }

            let errors = ErrorEmitter::new(Rc::new(ConsoleErrorEmitter));
            let options = Options { prompt, abort_on_error };

            match repl::start(&options, &errors) {
                Ok(Outcome::Aborted) => ExitCode::FAILURE,
                Ok(_) => ExitCode::SUCCESS,
                Err(err) => {
                    print_error(&Error::from(err));
                    ExitCode::FAILURE
                }
            }
        },
        Command::Run { path, abort_on_error, quiet } => {
            let errors = ErrorEmitter::new(Rc::new(ConsoleErrorEmitter));

            if !quiet {
                print_running(&path.to_string_lossy());
            }
            let start = std::time::Instant::now();

            match run::start(&path, abort_on_error, &errors) {
                Ok(summary) => {
                    if !quiet {
                        print_finished(std::time::Instant::now() - start, summary.evaluated, summary.failed);
                    }

                    if summary.aborted {
                        ExitCode::FAILURE
                    } else {
                        ExitCode::SUCCESS
                    }
                },
                Err(err) => {
                    print_error(&err);
                    ExitCode::FAILURE
                }
            }
        },
        Command::Tokens => match rtpl::start() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                print_error(&Error::from(err));
                ExitCode::FAILURE
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConsoleErrorEmitter;

impl ErrorEmitterIO for ConsoleErrorEmitter {
    fn emit_error(&self, error: Error) {
        print_error(&error);
    }
}
