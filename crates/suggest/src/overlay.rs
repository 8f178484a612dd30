/// How much of a visible suggestion to insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptAction {
	/// Up to the end of the next word of the suggestion.
	NextWord,
	ToEnd,
}

/// The suggestion currently offered for the input line.
///
/// The suggestion stays visible while the line is a strict prefix of the
/// suggested text and the line still reaches the word the suggestion was
/// computed for. Any other edit should call [`SuggestionOverlay::invalidate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionOverlay {
	/// Line text with the suggestion applied.
	full: Option<String>,
	endword_offset: usize,
}

impl SuggestionOverlay {
	/// Records `suggestion` as replacing `line` from char `offset` onward.
	///
	/// An empty line, a missing suggestion, or one that does not extend the
	/// line leaves the overlay empty.
	pub fn set(&mut self, line: &str, endword_offset: usize, suggestion: Option<&str>, offset: usize) {
		self.invalidate();
		let Some(suggestion) = suggestion else {
			return;
		};
		if line.is_empty() {
			return;
		}

		let mut full: String = line.chars().take(offset).collect();
		full.push_str(suggestion);
		if full.len() > line.len() && full.starts_with(line) {
			self.full = Some(full);
			self.endword_offset = endword_offset;
		}
	}

	/// Text to draw after `line`, if the suggestion still applies.
	pub fn visible(&self, line: &str) -> Option<&str> {
		let full = self.full.as_deref()?;
		if line.is_empty() || line.chars().count() < self.endword_offset {
			return None;
		}
		full.strip_prefix(line).filter(|rest| !rest.is_empty())
	}

	pub fn endword_offset(&self) -> usize {
		self.endword_offset
	}

	/// Appends the visible suggestion (or its next word) to `buffer`.
	///
	/// Returns false when nothing was visible for `buffer`.
	pub fn accept(&mut self, action: AcceptAction, buffer: &mut String) -> bool {
		let Some(rest) = self.visible(buffer) else {
			return false;
		};
		let insert = match action {
			AcceptAction::ToEnd => rest,
			AcceptAction::NextWord => next_word(rest),
		};
		let insert = insert.to_string();
		buffer.push_str(&insert);
		if self.visible(buffer).is_none() {
			self.invalidate();
		}
		true
	}

	pub fn invalidate(&mut self) {
		self.full = None;
		self.endword_offset = 0;
	}

	pub fn is_empty(&self) -> bool {
		self.full.is_none()
	}
}

/// Leading whitespace of `rest` plus the word after it.
fn next_word(rest: &str) -> &str {
	let word_start = rest.len() - rest.trim_start().len();
	let word_len = rest[word_start..].find(char::is_whitespace).unwrap_or(rest.len() - word_start);
	&rest[..word_start + word_len]
}
