use std::{io::Write, path::Path};

use cscm_core::{
    environment::prelude::Environment,
    eval::prelude::eval_line,
    utils::prelude::{Error, ErrorEmitter}
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub evaluated: usize,
    pub failed: usize,
    pub aborted: bool,
}

pub fn start(path: &Path, abort_on_error: bool, errors: &ErrorEmitter) -> Result<Summary, Error> {
    let src = std::fs::read_to_string(path)?;
    let mut stdout = std::io::stdout().lock();
    let mut env = Environment::new();

    let summary = run_source(path, &src, &mut stdout, &mut env, abort_on_error, errors)?;

    Ok(summary)
}

/// Evaluates every non-blank line of `src` in order against one environment.
/// Error spans are moved to file offsets so diagnostics show real line numbers.
pub fn run_source<W: Write>(
    path: &Path,
    src: &str,
    output: &mut W,
    env: &mut Environment,
    abort_on_error: bool,
    errors: &ErrorEmitter
) -> std::io::Result<Summary> {
    let mut summary = Summary::default();
    let mut offset = 0u32;

    for raw_line in src.split_inclusive('\n') {
        let line_offset = offset;
        offset += raw_line.len() as u32;

        let line = raw_line.trim_end_matches(&['\n', '\r'][..]);

        if line.trim().is_empty() {
            continue;
        }

        match eval_line(line, env) {
            Ok(value) => {
                summary.evaluated += 1;
                writeln!(output, "{value}")?;
            },
            Err(error) => {
                summary.failed += 1;

                errors.emit(Error::Eval {
                    path: path.to_path_buf(),
                    src: src.to_string(),
                    error: error.offset(line_offset)
                });

                if abort_on_error {
                    summary.aborted = true;
                    break;
                }
            }
        }
    }

    Ok(summary)
}
