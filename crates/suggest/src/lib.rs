//! Inline suggestions for the input line.
//!
//! A [`Suggester`] asks its strategies in order (history first, then an
//! external [`SuggestionGenerator`]) for text that extends the current line.
//! The [`SuggestionOverlay`] holds the winning suggestion, reports the part to
//! draw after the line, and applies it when accepted.

mod history;
mod overlay;

pub use history::HistorySuggester;
pub use overlay::{AcceptAction, SuggestionOverlay};

/// A suggestion for the line: `text` replaces everything from char `offset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
	pub text: String,
	pub offset: usize,
}

/// Source of suggestions other than history.
pub trait SuggestionGenerator {
	/// `endword_offset` is the char offset where the line's last word starts.
	fn suggest(&mut self, line: &str, endword_offset: usize) -> Option<Suggestion>;
}

impl<F> SuggestionGenerator for F
where
	F: FnMut(&str, usize) -> Option<Suggestion>,
{
	fn suggest(&mut self, line: &str, endword_offset: usize) -> Option<Suggestion> {
		self(line, endword_offset)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
	History,
	Generator,
}

/// Runs suggestion strategies in order; the first answer wins.
#[derive(Debug, Clone)]
pub struct Suggester {
	strategies: Vec<Strategy>,
	history: HistorySuggester,
}

impl Default for Suggester {
	fn default() -> Self {
		Self::new(vec![Strategy::History, Strategy::Generator], HistorySuggester::default())
	}
}

impl Suggester {
	pub fn new(strategies: Vec<Strategy>, history: HistorySuggester) -> Self {
		Self { strategies, history }
	}

	pub fn strategies(&self) -> &[Strategy] {
		&self.strategies
	}

	/// Suggestion for `line`, or `None` for an empty line.
	///
	/// `history` is ordered oldest first.
	pub fn suggest(
		&self,
		line: &str,
		endword_offset: usize,
		history: &[String],
		mut generator: Option<&mut dyn SuggestionGenerator>,
	) -> Option<Suggestion> {
		if line.is_empty() {
			return None;
		}
		for strategy in &self.strategies {
			let found = match strategy {
				Strategy::History => self.history.suggest(line, history),
				Strategy::Generator => generator.as_mut().and_then(|generator| generator.suggest(line, endword_offset)),
			};
			if let Some(suggestion) = found {
				tracing::trace!(?strategy, offset = suggestion.offset, "suggestion found");
				return Some(suggestion);
			}
		}
		None
	}
}

#[cfg(test)]
mod tests;
