pub mod lexer;
pub mod environment;
pub mod eval;
pub mod utils;
