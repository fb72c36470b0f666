use std::io::{BufRead, Write};

use cscm_core::{
    environment::prelude::Environment,
    eval::prelude::eval_line,
    utils::prelude::{Error, ErrorEmitter}
};

pub const PROMPT: &str = "cscm> ";
const STDIN_PATH: &str = "<stdin>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub prompt: String,
    pub abort_on_error: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    EndOfInput,
    Exit,
    Aborted,
}

pub fn start(options: &Options, errors: &ErrorEmitter) -> std::io::Result<Outcome> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut env = Environment::new();

    run(stdin.lock(), &mut stdout, &mut env, options, errors)
}

/// Reads, evaluates and prints one line at a time until end of input or
/// `.exit`. A failing line is reported through `errors` and the loop moves on,
/// unless `abort_on_error` is set.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    env: &mut Environment,
    options: &Options,
    errors: &ErrorEmitter
) -> std::io::Result<Outcome> {
    loop {
        let mut line = String::from("");

        write!(output, "{}", options.prompt)?;
        output.flush()?;

        if input.read_line(&mut line)? == 0 {
            if !options.prompt.is_empty() {
                writeln!(output)?;
            }

            return Ok(Outcome::EndOfInput);
        }

        if let Some('\n') = line.chars().next_back() {
            line.pop();
        }
        if let Some('\r') = line.chars().next_back() {
            line.pop();
        }

        match line.trim() {
            "" => {},
            ".exit" => return Ok(Outcome::Exit),
            ".env" => print_bindings(output, env)?,
            _ => match eval_line(&line, env) {
                Ok(value) => writeln!(output, "{value}")?,
                Err(error) => {
                    errors.emit(Error::Eval {
                        path: STDIN_PATH.into(),
                        src: line.clone(),
                        error
                    });

                    if options.abort_on_error {
                        return Ok(Outcome::Aborted);
                    }
                }
            }
        }
    }
}

fn print_bindings<W: Write>(output: &mut W, env: &Environment) -> std::io::Result<()> {
    for binding in env.iter() {
        writeln!(output, "{} = {}", binding.name, binding.value)?;
    }

    Ok(())
}
