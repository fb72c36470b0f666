pub mod error;
pub mod operator;

pub mod prelude {
    pub use super::{
        error::*,
        operator::*,
        eval_expression,
        eval_line
    };
}


use crate::{
    environment::prelude::Environment,
    lexer::prelude::{tokenize, Token, TokenStream},
    utils::prelude::SrcSpan
};

use self::error::{EvalError, EvalErrorType, SyntaxErrorType};
use self::operator::{str_to_operator, Operator};

/// Evaluates a whole line as exactly one expression.
///
/// Bindings made by the line are kept only if the line succeeds; on error the
/// environment is restored to what it was before the call.
pub fn eval_line(line: &str, env: &mut Environment) -> Result<i64, EvalError> {
    let mut stream = tokenize(line);

    if stream.is_empty() {
        return Err(EvalError::new(EvalErrorType::EmptyInput, stream.eof_span()));
    }

    let checkpoint = env.checkpoint();

    let result = eval_expression(&mut stream, env).and_then(|value| {
        match stream.peek() {
            None => Ok(value),
            Some((start, _, end)) => Err(EvalError::syntax(
                SyntaxErrorType::UnexpectedTrailingToken,
                SrcSpan::from(*start, *end)
            )),
        }
    });

    if result.is_err() {
        env.rollback(checkpoint);
    }

    result
}

/// Evaluates the expression starting at the cursor and leaves the cursor just
/// past it.
pub fn eval_expression(stream: &mut TokenStream, env: &mut Environment) -> Result<i64, EvalError> {
    match stream.next_token() {
        Some((_, Token::Number(value), _)) => Ok(value),
        Some((start, Token::Symbol(name), end)) => match env.get(&name) {
            Some(value) => Ok(value),
            None => Err(EvalError::new(
                EvalErrorType::UnboundSymbol { name },
                SrcSpan::from(start, end)
            )),
        },
        Some((_, Token::OpenParen, _)) => eval_compound(stream, env),
        Some((start, Token::CloseParen, end)) => Err(EvalError::syntax(
            SyntaxErrorType::UnexpectedCloseParen,
            SrcSpan::from(start, end)
        )),
        None => Err(EvalError::syntax(SyntaxErrorType::UnexpectedEof, stream.eof_span())),
    }
}

fn eval_compound(stream: &mut TokenStream, env: &mut Environment) -> Result<i64, EvalError> {
    let operator = match stream.next_token() {
        Some((start, Token::Symbol(name), end)) => match str_to_operator(&name) {
            Some(operator) => operator,
            None => return Err(EvalError::new(
                EvalErrorType::UnsupportedOperator { name },
                SrcSpan::from(start, end)
            )),
        },
        Some((start, token, end)) => return Err(EvalError::new(
            EvalErrorType::UnsupportedOperator { name: token.as_literal() },
            SrcSpan::from(start, end)
        )),
        None => return Err(EvalError::syntax(SyntaxErrorType::ExpectedOperator, stream.eof_span())),
    };

    match operator {
        Operator::Define => {
            let (name, value) = parse_define(stream)?;
            expect_close_paren(stream)?;

            env.define(name, value);

            Ok(value)
        },
        _ => {
            let value = eval_arithmetic(operator, stream, env)?;
            expect_close_paren(stream)?;

            Ok(value)
        }
    }
}

fn at_list_end(stream: &TokenStream) -> bool {
    matches!(stream.peek_token(), Some(Token::CloseParen) | None)
}

// The first operand seeds the accumulator, the rest are folded strictly left to right.
fn eval_arithmetic(
    operator: Operator,
    stream: &mut TokenStream,
    env: &mut Environment
) -> Result<i64, EvalError> {
    if at_list_end(stream) {
        return Err(EvalError::syntax(SyntaxErrorType::ExpectedOperand, stream.current_span()));
    }

    let mut accumulator = eval_expression(stream, env)?;

    while !at_list_end(stream) {
        let operand_start = stream.position();
        let operand = eval_expression(stream, env)?;
        let operand_span = stream.span_from(operand_start);

        if operator == Operator::Div && operand == 0 {
            return Err(EvalError::new(EvalErrorType::DivisionByZero, operand_span));
        }

        accumulator = match operator.apply(accumulator, operand) {
            Some(value) => value,
            None => return Err(EvalError::new(
                EvalErrorType::Overflow { operator: operator.to_string() },
                operand_span
            )),
        };
    }

    Ok(accumulator)
}

// `(define <symbol> <number>)`; the value is a literal, never a sub-expression.
fn parse_define(stream: &mut TokenStream) -> Result<(String, i64), EvalError> {
    let name = match stream.next_token() {
        Some((_, Token::Symbol(name), _)) => name,
        Some((start, _, end)) => return Err(EvalError::syntax(
            SyntaxErrorType::ExpectedDefineName,
            SrcSpan::from(start, end)
        )),
        None => return Err(EvalError::syntax(SyntaxErrorType::ExpectedDefineName, stream.eof_span())),
    };

    let value = match stream.next_token() {
        Some((_, Token::Number(value), _)) => value,
        Some((start, _, end)) => return Err(EvalError::syntax(
            SyntaxErrorType::ExpectedDefineValue,
            SrcSpan::from(start, end)
        )),
        None => return Err(EvalError::syntax(SyntaxErrorType::ExpectedDefineValue, stream.eof_span())),
    };

    Ok((name, value))
}

fn expect_close_paren(stream: &mut TokenStream) -> Result<(), EvalError> {
    match stream.peek_token() {
        Some(Token::CloseParen) => {
            stream.step();

            Ok(())
        },
        _ => Err(EvalError::syntax(SyntaxErrorType::ExpectedCloseParen, stream.current_span())),
    }
}
