use std::ops::Range;

use crate::tokenizer::QuotePair;

/// A word of the input line.
///
/// `delim_offset..offset` is the run of delimiter text (spaces, redirection
/// operators, command separators) between the previous word and this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word {
	pub offset: usize,
	pub length: usize,
	pub delim_offset: usize,
	/// First character of the preceding delimiter run, if any.
	pub delim: Option<char>,
	/// Word follows a redirection operator (`>file`, `2>&1`).
	pub redir_arg: bool,
	/// Word starts with the opening quote.
	pub quoted: bool,
	/// First word of a command that names an alias.
	pub is_alias: bool,
}

impl Word {
	/// One past the last character.
	pub const fn end(&self) -> usize {
		self.offset + self.length
	}

	pub const fn is_empty(&self) -> bool {
		self.length == 0
	}

	pub const fn range(&self) -> Range<usize> {
		self.offset..self.end()
	}

	/// Word text, including any quotes.
	pub fn text(&self, chars: &[char]) -> String {
		chars[self.range()].iter().collect()
	}

	/// Word text with quote characters removed.
	pub fn unquoted(&self, chars: &[char], quotes: QuotePair) -> String {
		chars[self.range()]
			.iter()
			.filter(|&&c| c != quotes.open && c != quotes.close)
			.collect()
	}

	/// The delimiter run preceding the word.
	pub fn delimiter_text(&self, chars: &[char]) -> String {
		chars[self.delim_offset..self.offset].iter().collect()
	}

	/// Returns true when `pos` lies within the word or at its end.
	pub const fn touches(&self, pos: usize) -> bool {
		self.offset <= pos && pos <= self.end()
	}
}

/// A contiguous run of words forming one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSegment {
	/// Indices into the line's word list.
	pub words: Range<usize>,
	/// Character offset where the command bound starts (just past the separator).
	pub offset: usize,
	/// Length of the command bound in characters.
	pub length: usize,
	/// Cursor relative to `offset`, for the one segment containing it.
	pub cursor: Option<usize>,
	/// Expansion of the first word when it names an alias.
	pub alias: Option<String>,
}

impl CommandSegment {
	/// Number of words in the segment.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	pub const fn end(&self) -> usize {
		self.offset + self.length
	}

	/// Global index of the command word.
	pub const fn command_word(&self) -> usize {
		self.words.start
	}

	/// The segment's words.
	pub fn slice<'a>(&self, words: &'a [Word]) -> &'a [Word] {
		&words[self.words.clone()]
	}
}
