use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SrcSpan {
    pub start: u32,
    pub end: u32,
}

impl SrcSpan {
	pub fn from(start: u32, end: u32) -> Self {
		Self { start, end }
	}

	/// Zero-width span, used for positions such as end of input.
	pub fn at(position: u32) -> Self {
		Self { start: position, end: position }
	}

	pub fn shift(self, offset: u32) -> Self {
		Self { start: self.start + offset, end: self.end + offset }
	}

	pub fn len(&self) -> u32 {
		self.end - self.start
	}

	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}
}

impl Display for SrcSpan {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}..{}", self.start, self.end)
	}
}
