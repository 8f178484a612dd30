use std::ops::Range;

/// Read-only view of the line being edited.
pub trait LineBuffer {
	/// Raw line text.
	fn text(&self) -> &str;

	/// Cursor position as a character index in `0..=len()`.
	fn cursor(&self) -> usize;

	/// Line length in characters.
	fn len(&self) -> usize {
		self.text().chars().count()
	}

	/// Returns true for an empty line.
	fn is_empty(&self) -> bool {
		self.text().is_empty()
	}
}

/// Owned line snapshot with a cached character vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
	text: String,
	chars: Vec<char>,
	cursor: usize,
}

impl Line {
	/// Creates a line; the cursor is clamped to the line length.
	pub fn new(text: impl Into<String>, cursor: usize) -> Self {
		let text = text.into();
		let chars: Vec<char> = text.chars().collect();
		let cursor = cursor.min(chars.len());
		Self { text, chars, cursor }
	}

	/// Creates a line with the cursor at its end.
	pub fn at_end(text: impl Into<String>) -> Self {
		Self::new(text, usize::MAX)
	}

	/// Snapshots any [`LineBuffer`].
	pub fn from_buffer(buffer: &impl LineBuffer) -> Self {
		Self::new(buffer.text(), buffer.cursor())
	}

	/// Line characters.
	pub fn chars(&self) -> &[char] {
		&self.chars
	}

	/// Collects a character range into a string, clipped to the line.
	pub fn slice(&self, range: Range<usize>) -> String {
		let end = range.end.min(self.chars.len());
		let start = range.start.min(end);
		self.chars[start..end].iter().collect()
	}
}

impl LineBuffer for Line {
	fn text(&self) -> &str {
		&self.text
	}

	fn cursor(&self) -> usize {
		self.cursor
	}

	fn len(&self) -> usize {
		self.chars.len()
	}
}
