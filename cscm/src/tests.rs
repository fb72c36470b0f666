use std::{io::Cursor, path::Path, rc::Rc};

use cscm_core::{
    environment::prelude::Environment,
    eval::prelude::{EvalErrorType, SyntaxErrorType},
    utils::prelude::{Error, ErrorEmitter, SrcSpan, VectorErrorEmitterIO}
};

use crate::{
    repl::{self, Options, Outcome, PROMPT},
    run::{run_source, Summary}
};

fn repl_session(input: &str, abort_on_error: bool) -> (String, Outcome, Vec<Error>) {
    let errors = VectorErrorEmitterIO::new();
    let emitter = ErrorEmitter::new(Rc::new(errors.clone()));
    let options = Options { prompt: String::new(), abort_on_error };

    let mut output = Vec::new();
    let outcome = repl::run(
        Cursor::new(input),
        &mut output,
        &mut Environment::new(),
        &options,
        &emitter
    ).unwrap();

    (String::from_utf8(output).unwrap(), outcome, errors.take())
}

#[test]
fn test_repl_prints_results() {
    let (output, outcome, errors) = repl_session("(+ 1 2)\n(define x 10)\n(* x x)\n", false);

    assert_eq!(output, "3\n10\n100\n");
    assert_eq!(outcome, Outcome::EndOfInput);
    assert!(errors.is_empty());
}

#[test]
fn test_repl_continues_after_error() {
    let (output, outcome, errors) = repl_session("(/ 1 0)\ny\n(- 10 (+ 2 3))\n", false);

    assert_eq!(output, "5\n");
    assert_eq!(outcome, Outcome::EndOfInput);
    assert_eq!(errors.len(), 2);

    match &errors[0] {
        Error::Eval { src, error, .. } => {
            assert_eq!(src, "(/ 1 0)");
            assert_eq!(error.error, EvalErrorType::DivisionByZero);
        },
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_repl_abort_on_error() {
    let (output, outcome, errors) = repl_session("(+ 1 2\n(+ 1 2)\n", true);

    assert_eq!(output, "");
    assert_eq!(outcome, Outcome::Aborted);
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_repl_commands() {
    let (output, outcome, _) = repl_session(
        "\n   \n(define a 1)\r\n(define b 2)\n(define a 3)\n.env\n.exit\n(+ 1 1)\n",
        false
    );

    assert_eq!(output, "1\n2\n3\na = 3\nb = 2\n");
    assert_eq!(outcome, Outcome::Exit);
}

#[test]
fn test_repl_prompt() {
    let errors = ErrorEmitter::null();
    let options = Options { prompt: PROMPT.into(), abort_on_error: false };
    let mut output = Vec::new();

    repl::run(Cursor::new("7\n"), &mut output, &mut Environment::new(), &options, &errors).unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), "cscm> 7\ncscm> \n");
}

#[test]
fn test_run_source_offsets_spans() {
    let errors = VectorErrorEmitterIO::new();
    let emitter = ErrorEmitter::new(Rc::new(errors.clone()));
    let src = "(define x 2)\n\n(* x 4)\n(+ x\n";

    let mut output = Vec::new();
    let summary = run_source(
        Path::new("prog.scm"),
        src,
        &mut output,
        &mut Environment::new(),
        false,
        &emitter
    ).unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), "2\n8\n");
    assert_eq!(summary, Summary { evaluated: 2, failed: 1, aborted: false });

    let errors = errors.take();
    match &errors[..] {
        [Error::Eval { error, .. }] => {
            assert_eq!(error.error, EvalErrorType::Syntax(SyntaxErrorType::ExpectedCloseParen));
            assert_eq!(error.span, SrcSpan::at(26));
        },
        other => panic!("unexpected errors {other:?}"),
    }

    assert!(errors[0].pretty_string().contains("prog.scm:4:5"));
}

#[test]
fn test_run_source_abort() {
    let emitter = ErrorEmitter::null();
    let mut env = Environment::new();
    let mut output = Vec::new();

    let summary = run_source(
        Path::new("prog.scm"),
        "(define y 1)\n(+ y z)\n(define z 5)\n",
        &mut output,
        &mut env,
        true,
        &emitter
    ).unwrap();

    assert_eq!(summary, Summary { evaluated: 1, failed: 1, aborted: true });
    assert_eq!(emitter.count(), 1);
    assert_eq!(env.get("z"), None);
}
