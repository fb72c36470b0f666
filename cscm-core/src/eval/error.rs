use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorType {
    ExpectedOperand,
    ExpectedOperator,
    ExpectedCloseParen,
    UnexpectedCloseParen,
    UnexpectedEof,
    ExpectedDefineName,
    ExpectedDefineValue,
    UnexpectedTrailingToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalErrorType {
    EmptyInput,
    UnboundSymbol { name: String },
    UnsupportedOperator { name: String },
    Syntax(SyntaxErrorType),
    DivisionByZero,
    Overflow { operator: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalError {
    pub error: EvalErrorType,
    pub span: SrcSpan
}

impl EvalError {
    pub fn new(error: EvalErrorType, span: SrcSpan) -> Self {
        Self { error, span }
    }

    pub fn syntax(error: SyntaxErrorType, span: SrcSpan) -> Self {
        Self { error: EvalErrorType::Syntax(error), span }
    }

    /// Moves the span by `offset` bytes, for lines that are part of a larger source.
    pub fn offset(self, offset: u32) -> Self {
        Self { error: self.error, span: self.span.shift(offset) }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self.error, EvalErrorType::Syntax(_))
    }

    pub fn title(&self) -> &'static str {
        match &self.error {
            EvalErrorType::EmptyInput => "Empty input",
            EvalErrorType::UnboundSymbol { .. } => "Unbound symbol",
            EvalErrorType::UnsupportedOperator { .. } => "Unsupported operator",
            EvalErrorType::Syntax(_) => "Syntax error",
            EvalErrorType::DivisionByZero => "Division by zero",
            EvalErrorType::Overflow { .. } => "Integer overflow",
        }
    }

    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            EvalErrorType::EmptyInput => ("Expected an expression", vec![]),
            EvalErrorType::UnboundSymbol { name } => (
                "Not defined",
                vec![format!("Symbol `{name}` has no value; bind it first with `(define {name} <number>)`")]
            ),
            EvalErrorType::UnsupportedOperator { name } => (
                "Unknown operator",
                vec![
                    format!("Found `{name}`, expected one of: "),
                    "- +".to_string(),
                    "- -".to_string(),
                    "- *".to_string(),
                    "- /".to_string(),
                    "- define".to_string(),
                ]
            ),
            EvalErrorType::Syntax(error) => match error {
                SyntaxErrorType::ExpectedOperand => ("Expected at least one operand", vec![]),
                SyntaxErrorType::ExpectedOperator => ("Expected operator", vec![]),
                SyntaxErrorType::ExpectedCloseParen => ("Expected `)`", vec![]),
                SyntaxErrorType::UnexpectedCloseParen => ("Unexpected `)`", vec![]),
                SyntaxErrorType::UnexpectedEof => ("Unexpected end of input", vec![]),
                SyntaxErrorType::ExpectedDefineName => (
                    "Expected symbol",
                    vec!["`define` takes a symbol and a number: `(define <symbol> <number>)`".to_string()]
                ),
                SyntaxErrorType::ExpectedDefineValue => (
                    "Expected number literal",
                    vec!["`define` takes a symbol and a number: `(define <symbol> <number>)`".to_string()]
                ),
                SyntaxErrorType::UnexpectedTrailingToken => (
                    "Unexpected token after expression",
                    vec!["Only one expression is allowed per line".to_string()]
                ),
            },
            EvalErrorType::DivisionByZero => ("Divisor evaluates to zero", vec![]),
            EvalErrorType::Overflow { operator } => (
                "Result does not fit in a 64-bit integer",
                vec![format!("Overflow while applying `{operator}`")]
            ),
        }
    }
}
