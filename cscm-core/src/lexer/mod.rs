pub mod token;
pub mod lexer;
pub mod stream;

pub mod prelude {
	pub use super::{
		token::*,
		lexer::*,
		stream::*
	};
}
