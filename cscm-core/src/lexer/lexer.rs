use std::iter::Peekable;

use super::stream::TokenStream;
use super::token::Token;

pub type Spanned = (u32, Token, u32);

/// Splits a line into tokens. Parentheses always stand alone, everything else
/// is delimited by whitespace.
pub fn tokenize(line: &str) -> TokenStream {
	let lexer = Lexer::new(line.char_indices().map(|(i, c)| (i as u32, c)));

	TokenStream::new(lexer.collect(), line.len() as u32)
}

pub fn classify(fragment: String) -> Token {
	match fragment.parse::<i64>() {
		Ok(value) => Token::Number(value),
		Err(_) => Token::Symbol(fragment),
	}
}

fn is_delimiter(ch: char) -> bool {
	ch.is_whitespace() || ch == '(' || ch == ')'
}

#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = (u32, char)>> {
	input: Peekable<T>,
}

impl<T: Iterator<Item = (u32, char)>> Lexer<T> {
	pub fn new(input: T) -> Self {
		Self {
			input: input.peekable(),
		}
	}

	pub fn next_token(&mut self) -> Option<Spanned> {
		self.skip_whitespace();

		let (start, ch) = self.input.next()?;

		Some(match ch {
			'(' => (start, Token::OpenParen, start + 1),
			')' => (start, Token::CloseParen, start + 1),
			ch => self.lex_fragment(start, ch),
		})
	}

	fn skip_whitespace(&mut self) {
		while let Some((_, ch)) = self.input.peek() {
			if !ch.is_whitespace() {
				break;
			}

			self.input.next();
		}
	}

	fn lex_fragment(&mut self, start: u32, first: char) -> Spanned {
		let mut fragment = String::from(first);
		let mut end = start + first.len_utf8() as u32;

		while let Some(&(pos, ch)) = self.input.peek() {
			if is_delimiter(ch) {
				break;
			}

			fragment.push(ch);
			end = pos + ch.len_utf8() as u32;
			self.input.next();
		}

		(start, classify(fragment), end)
	}
}

impl<T: Iterator<Item = (u32, char)>> Iterator for Lexer<T> {
	type Item = Spanned;

	fn next(&mut self) -> Option<Self::Item> {
		self.next_token()
	}
}
