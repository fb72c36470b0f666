use crate::utils::prelude::SrcSpan;

use super::lexer::Spanned;
use super::token::Token;

/// Tokens of one line plus a read cursor. The cursor never moves past
/// `len()`, and `len()` itself means the input is exhausted.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStream {
    tokens: Vec<Spanned>,
    cursor: usize,
    end: u32,
}

impl TokenStream {
    /// `end` is the length of the source line, used to point at end of input.
    pub fn new(tokens: Vec<Spanned>, end: u32) -> Self {
        Self {
            tokens,
            cursor: 0,
            end,
        }
    }

    pub fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.cursor)
    }

    pub fn peek_token(&self) -> Option<&Token> {
        self.peek().map(|(_, token, _)| token)
    }

    pub fn next_token(&mut self) -> Option<Spanned> {
        let token = self.tokens.get(self.cursor).cloned();

        if token.is_some() {
            self.cursor += 1;
        }

        token
    }

    pub fn step(&mut self) {
        let _ = self.next_token();
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn eof_span(&self) -> SrcSpan {
        SrcSpan::at(self.end)
    }

    /// Span of the token under the cursor, or the end of input.
    pub fn current_span(&self) -> SrcSpan {
        match self.peek() {
            Some((start, _, end)) => SrcSpan::from(*start, *end),
            None => self.eof_span(),
        }
    }

    /// Span covering every token consumed since `position`.
    pub fn span_from(&self, position: usize) -> SrcSpan {
        if position >= self.cursor {
            return self.current_span();
        }

        let (start, _, _) = &self.tokens[position];
        let (_, _, end) = &self.tokens[self.cursor - 1];

        SrcSpan::from(*start, *end)
    }

    pub fn tokens(&self) -> &[Spanned] {
        &self.tokens
    }
}
