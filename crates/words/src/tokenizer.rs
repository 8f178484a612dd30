use std::ops::Range;

/// Opening and closing quote characters.
///
/// Quoting toggles delimiter handling. There is no escape character, and an
/// unterminated quote runs to the end of the scanned range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotePair {
	pub open: char,
	pub close: char,
}

impl Default for QuotePair {
	fn default() -> Self {
		Self::new('"', '"')
	}
}

impl QuotePair {
	pub const fn new(open: char, close: char) -> Self {
		Self { open, close }
	}

	/// Parses `"x"` (same open and close) or `"xy"`.
	pub fn parse(spec: &str) -> Option<Self> {
		let mut chars = spec.chars();
		match (chars.next(), chars.next(), chars.next()) {
			(Some(open), None, None) => Some(Self::new(open, open)),
			(Some(open), Some(close), None) => Some(Self::new(open, close)),
			_ => None,
		}
	}
}

/// A word found by a [`WordTokenizer`], before collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawWord {
	pub offset: usize,
	pub length: usize,
	pub redir_arg: bool,
}

impl RawWord {
	pub const fn end(&self) -> usize {
		self.offset + self.length
	}
}

/// Splits one command's text into words.
pub trait WordTokenizer {
	/// Returns the words in `chars[range]`, ordered and non-overlapping.
	///
	/// Implementations must not return empty words.
	fn tokenize(&self, chars: &[char], range: Range<usize>, quotes: QuotePair) -> Vec<RawWord>;
}

/// Delimiter-set tokenizer with redirection awareness.
///
/// `<` and `>` (optionally `>>`, a leading file descriptor digit, and a
/// trailing `&`) are operators: they end the current word, are kept out of
/// every word, and flag the next word as a redirection argument.
#[derive(Debug, Clone)]
pub struct SimpleWordTokenizer {
	delimiters: Vec<char>,
}

impl Default for SimpleWordTokenizer {
	fn default() -> Self {
		Self::new(" \t")
	}
}

impl SimpleWordTokenizer {
	pub fn new(delimiters: &str) -> Self {
		Self {
			delimiters: delimiters.chars().collect(),
		}
	}

	fn is_delimiter(&self, c: char) -> bool {
		self.delimiters.contains(&c)
	}
}

impl WordTokenizer for SimpleWordTokenizer {
	fn tokenize(&self, chars: &[char], range: Range<usize>, quotes: QuotePair) -> Vec<RawWord> {
		let end = range.end.min(chars.len());
		let mut out = Vec::new();
		let mut i = range.start.min(end);
		let mut redir_pending = false;

		while i < end {
			if self.is_delimiter(chars[i]) {
				i += 1;
				continue;
			}
			if chars[i] != quotes.open
				&& let Some(len) = redirection_len(chars, i, end)
			{
				i += len;
				redir_pending = true;
				continue;
			}

			let start = i;
			let mut in_quote = false;
			while i < end {
				let c = chars[i];
				if in_quote {
					in_quote = c != quotes.close;
				} else if c == quotes.open {
					in_quote = true;
				} else if self.is_delimiter(c) || is_redirection_char(c) {
					break;
				}
				i += 1;
			}

			out.push(RawWord {
				offset: start,
				length: i - start,
				redir_arg: redir_pending,
			});
			redir_pending = false;
		}

		out
	}
}

pub(crate) const fn is_redirection_char(c: char) -> bool {
	matches!(c, '<' | '>')
}

/// Length of the redirection operator starting at `i`, if any.
fn redirection_len(chars: &[char], i: usize, end: usize) -> Option<usize> {
	let mut j = i;
	if chars[j].is_ascii_digit() && j + 1 < end && is_redirection_char(chars[j + 1]) {
		j += 1;
	}
	if !is_redirection_char(chars[j]) {
		return None;
	}
	let op = chars[j];
	j += 1;
	if op == '>' && j < end && chars[j] == '>' {
		j += 1;
	}
	if j < end && chars[j] == '&' {
		j += 1;
	}
	Some(j - i)
}
