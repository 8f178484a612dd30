use crate::tokenizer::{QuotePair, is_redirection_char};

/// Character bounds of one command, excluding the separators around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandBounds {
	pub offset: usize,
	pub length: usize,
}

impl CommandBounds {
	pub const fn end(&self) -> usize {
		self.offset + self.length
	}
}

/// Decides where command separators occur in a line.
pub trait CommandTokenizer {
	/// Returns the bounds of every command, in order. An empty line has none.
	///
	/// Bounds may be empty (e.g. the text after a trailing `&`).
	fn split(&self, chars: &[char], quotes: QuotePair) -> Vec<CommandBounds>;
}

/// Splits on `&`, `&&`, `|`, `||` and newlines outside quotes.
///
/// An `&` directly after a redirection operator (`2>&1`) is part of the
/// redirection, not a separator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellCommandTokenizer;

impl CommandTokenizer for ShellCommandTokenizer {
	fn split(&self, chars: &[char], quotes: QuotePair) -> Vec<CommandBounds> {
		let mut out = Vec::new();
		if chars.is_empty() {
			return out;
		}

		let mut start = 0usize;
		let mut in_quote = false;
		let mut i = 0usize;
		while i < chars.len() {
			let c = chars[i];
			if in_quote {
				in_quote = c != quotes.close;
				i += 1;
				continue;
			}
			if c == quotes.open {
				in_quote = true;
				i += 1;
				continue;
			}

			let op_len = match c {
				'&' if i > 0 && is_redirection_char(chars[i - 1]) => 0,
				'&' | '|' if chars.get(i + 1) == Some(&c) => 2,
				'&' | '|' | '\n' => 1,
				_ => 0,
			};
			if op_len == 0 {
				i += 1;
				continue;
			}

			out.push(CommandBounds {
				offset: start,
				length: i - start,
			});
			i += op_len;
			start = i;
		}

		out.push(CommandBounds {
			offset: start,
			length: chars.len() - start,
		});
		out
	}
}
