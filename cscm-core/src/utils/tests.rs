use std::path::PathBuf;

use crate::{
    environment::prelude::Environment,
    eval::prelude::eval_line,
};

use super::prelude::{Error, SrcSpan};

fn eval_error(src: &str) -> Error {
    let error = eval_line(src, &mut Environment::new()).unwrap_err();

    Error::Eval {
        path: PathBuf::from("<stdin>"),
        src: src.to_string(),
        error
    }
}

#[test]
fn test_pretty_unbound_symbol() {
    let rendered = eval_error("(+ 1 y)").pretty_string();

    assert!(rendered.contains("error: Unbound symbol"), "{rendered}");
    assert!(rendered.contains("<stdin>:1:6"), "{rendered}");
    assert!(rendered.contains("Not defined"), "{rendered}");
    assert!(rendered.contains("Symbol `y` has no value"), "{rendered}");
}

#[test]
fn test_pretty_unsupported_operator() {
    let rendered = eval_error("(% 1 2)").pretty_string();

    assert!(rendered.contains("error: Unsupported operator"), "{rendered}");
    assert!(rendered.contains("Found `%`, expected one of:"), "{rendered}");
    assert!(rendered.contains("- define"), "{rendered}");
}

#[test]
fn test_pretty_missing_close_paren() {
    let rendered = eval_error("(+ 1 2").pretty_string();

    assert!(rendered.contains("error: Syntax error"), "{rendered}");
    assert!(rendered.contains("Expected `)`"), "{rendered}");
}

#[test]
fn test_pretty_io_error() {
    let error = Error::from(std::io::Error::from(std::io::ErrorKind::NotFound));
    let rendered = error.pretty_string();

    assert!(rendered.contains("error: Standard IO error"), "{rendered}");
    assert_eq!(error.to_string(), "IO operation failed");
}

#[test]
fn test_span_shift() {
    let span = SrcSpan::from(2, 5).shift(10);

    assert_eq!(span, SrcSpan::from(12, 15));
    assert_eq!(span.len(), 3);
    assert!(!span.is_empty());
    assert!(SrcSpan::at(4).is_empty());
    assert_eq!(format!("{span}"), "12..15");
}

#[test]
fn test_emitter_counts_and_collects() {
    use std::rc::Rc;

    use super::prelude::{ErrorEmitter, VectorErrorEmitterIO};

    let errors = VectorErrorEmitterIO::new();
    let emitter = ErrorEmitter::new(Rc::new(errors.clone()));

    emitter.emit(eval_error("x"));
    emitter.emit(eval_error("(/ 1 0)"));

    assert_eq!(emitter.count(), 2);
    assert_eq!(errors.take().len(), 2);
    assert!(errors.pop().is_none());

    emitter.reset_count();
    assert_eq!(emitter.count(), 0);

    ErrorEmitter::null().emit(eval_error(""));
}
