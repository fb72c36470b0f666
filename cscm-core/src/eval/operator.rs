use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
    Mult,
    Div,
    Define,
}

pub fn str_to_operator(word: &str) -> Option<Operator> {
    Some(match word {
        "+" => Operator::Plus,
        "-" => Operator::Minus,
        "*" => Operator::Mult,
        "/" => Operator::Div,
        "define" => Operator::Define,
        _ => return None
    })
}

impl Operator {
    pub fn as_literal(&self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Mult => "*",
            Operator::Div => "/",
            Operator::Define => "define",
        }
    }

    /// Applies an arithmetic operator to two operands. `None` on overflow,
    /// division by zero is checked by the caller. Division truncates toward zero.
    pub fn apply(&self, left: i64, right: i64) -> Option<i64> {
        match self {
            Operator::Plus => left.checked_add(right),
            Operator::Minus => left.checked_sub(right),
            Operator::Mult => left.checked_mul(right),
            Operator::Div => left.checked_div(right),
            Operator::Define => None,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_literal())
    }
}
