use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // (
    OpenParen,
    // )
    CloseParen,
    // any fragment that does not parse as an integer
    Symbol(String),
    // [+|-]{<digit>}
    Number(i64),
}

impl Token {
    pub fn as_literal(&self) -> String {
        match self {
            Token::OpenParen => "(".to_string(),
            Token::CloseParen => ")".to_string(),
            Token::Symbol(name) => name.clone(),
            Token::Number(value) => value.to_string(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_literal())
    }
}
