use std::collections::{BTreeMap, HashMap};

use rustc_hash::FxHashMap;

use crate::command::{CommandTokenizer, ShellCommandTokenizer};
use crate::line::LineBuffer;
use crate::tokenizer::{QuotePair, RawWord, SimpleWordTokenizer, WordTokenizer};
use crate::word::{CommandSegment, Word};

/// How far [`WordCollector::collect_words`] scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectMode {
	/// Stop after the word under the cursor; append an empty word when the
	/// cursor sits past the last word of its command.
	StopAtCursor,
	/// Scan the whole line; append an empty word when the line ends in
	/// delimiter text.
	DisplayFilter,
	/// Scan the whole line.
	WholeCommand,
}

/// Resolves alias names to their expansions.
pub trait AliasSource {
	fn alias(&self, name: &str) -> Option<String>;
}

impl AliasSource for BTreeMap<String, String> {
	fn alias(&self, name: &str) -> Option<String> {
		self.get(name).cloned()
	}
}

impl AliasSource for HashMap<String, String> {
	fn alias(&self, name: &str) -> Option<String> {
		self.get(name).cloned()
	}
}

/// Collects words and command segments from a line.
///
/// The collector is long-lived: alias lookups (hits and misses) are cached
/// across calls so repeated keystrokes do not repeat them.
pub struct WordCollector {
	command_tokenizer: Box<dyn CommandTokenizer>,
	word_tokenizer: Box<dyn WordTokenizer>,
	quotes: QuotePair,
	aliases: Option<Box<dyn AliasSource>>,
	alias_cache: FxHashMap<String, Option<String>>,
}

impl Default for WordCollector {
	fn default() -> Self {
		Self::new(QuotePair::default())
	}
}

impl std::fmt::Debug for WordCollector {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("WordCollector")
			.field("quotes", &self.quotes)
			.field("has_aliases", &self.aliases.is_some())
			.field("alias_cache", &self.alias_cache.len())
			.finish_non_exhaustive()
	}
}

impl WordCollector {
	/// Creates a collector using the shell command tokenizer and a space/tab
	/// word tokenizer.
	pub fn new(quotes: QuotePair) -> Self {
		Self {
			command_tokenizer: Box::new(ShellCommandTokenizer),
			word_tokenizer: Box::new(SimpleWordTokenizer::default()),
			quotes,
			aliases: None,
			alias_cache: FxHashMap::default(),
		}
	}

	pub fn with_command_tokenizer(mut self, tokenizer: impl CommandTokenizer + 'static) -> Self {
		self.command_tokenizer = Box::new(tokenizer);
		self
	}

	pub fn with_word_tokenizer(mut self, tokenizer: impl WordTokenizer + 'static) -> Self {
		self.word_tokenizer = Box::new(tokenizer);
		self
	}

	pub fn with_aliases(mut self, aliases: impl AliasSource + 'static) -> Self {
		self.aliases = Some(Box::new(aliases));
		self.alias_cache.clear();
		self
	}

	pub const fn quotes(&self) -> QuotePair {
		self.quotes
	}

	/// Forgets cached alias lookups.
	pub fn reset_alias_cache(&mut self) {
		self.alias_cache.clear();
	}

	/// Collects words from a [`LineBuffer`].
	pub fn collect_line(&mut self, line: &impl LineBuffer, mode: CollectMode) -> Vec<Word> {
		let chars: Vec<char> = line.text().chars().collect();
		self.collect_words(&chars, line.cursor(), mode)
	}

	/// Splits `chars` into words.
	pub fn collect_words(&mut self, chars: &[char], cursor: usize, mode: CollectMode) -> Vec<Word> {
		let mut words = Vec::new();
		if chars.is_empty() {
			return words;
		}

		let cursor = cursor.min(chars.len());
		let mut prev_end = 0usize;
		for bounds in self.command_tokenizer.split(chars, self.quotes) {
			let stop_here = mode == CollectMode::StopAtCursor && cursor <= bounds.end();
			let first = words.len();
			let mut reached = false;

			for raw in self.word_tokenizer.tokenize(chars, bounds.offset..bounds.end(), self.quotes) {
				words.push(make_word(chars, prev_end, raw, self.quotes));
				prev_end = raw.end();
				if stop_here && raw.end() >= cursor {
					reached = true;
					break;
				}
			}

			if let Some(command_word) = words.get(first) {
				let name = command_word.unquoted(chars, self.quotes);
				if !name.is_empty() && self.lookup_alias(&name).is_some() {
					words[first].is_alias = true;
				}
			}

			if stop_here {
				if !reached {
					words.push(empty_word(chars, prev_end, cursor));
				}
				tracing::trace!(words = words.len(), cursor, "collected words up to cursor");
				return words;
			}
		}

		if mode == CollectMode::DisplayFilter && prev_end < chars.len() {
			words.push(empty_word(chars, prev_end, chars.len()));
		}

		tracing::trace!(words = words.len(), ?mode, "collected words");
		words
	}

	/// Groups `words` into command segments.
	///
	/// The cursor is assigned to the first command whose bound ends at or after
	/// it; that segment's cursor is relative to its `offset`. Commands without
	/// words produce no segment.
	pub fn collect_commands(&self, chars: &[char], cursor: usize, words: &[Word]) -> Vec<CommandSegment> {
		let mut segments = Vec::new();
		let mut next = 0usize;
		let mut cursor_seen = false;

		for bounds in self.command_tokenizer.split(chars, self.quotes) {
			let start = next;
			while next < words.len() {
				let word = &words[next];
				let inside = word.offset < bounds.end() || (word.is_empty() && word.offset == bounds.end());
				if !inside {
					break;
				}
				next += 1;
			}

			let has_cursor = !cursor_seen && cursor <= bounds.end();
			cursor_seen |= has_cursor;
			if start == next {
				continue;
			}

			let alias = words[start]
				.is_alias
				.then(|| self.cached_alias(&words[start].unquoted(chars, self.quotes)))
				.flatten();

			segments.push(CommandSegment {
				words: start..next,
				offset: bounds.offset,
				length: bounds.length,
				cursor: has_cursor.then(|| cursor.saturating_sub(bounds.offset)),
				alias,
			});
		}

		segments
	}

	fn lookup_alias(&mut self, name: &str) -> Option<&String> {
		let aliases = self.aliases.as_ref()?;
		self.alias_cache
			.entry(name.to_string())
			.or_insert_with(|| {
				let found = aliases.alias(name);
				tracing::debug!(name, hit = found.is_some(), "alias lookup");
				found
			})
			.as_ref()
	}

	fn cached_alias(&self, name: &str) -> Option<String> {
		self.alias_cache.get(name).cloned().flatten()
	}
}

fn make_word(chars: &[char], delim_offset: usize, raw: RawWord, quotes: QuotePair) -> Word {
	Word {
		offset: raw.offset,
		length: raw.length,
		delim_offset,
		delim: (delim_offset < raw.offset).then(|| chars[delim_offset]),
		redir_arg: raw.redir_arg,
		quoted: raw.length > 0 && chars[raw.offset] == quotes.open,
		is_alias: false,
	}
}

fn empty_word(chars: &[char], delim_offset: usize, at: usize) -> Word {
	Word {
		offset: at,
		length: 0,
		delim_offset,
		delim: (delim_offset < at).then(|| chars[delim_offset]),
		redir_arg: false,
		quoted: false,
		is_alias: false,
	}
}

/// Rebuilds the line from delimiter runs and word text.
///
/// Text after the last word is appended verbatim, so for
/// [`CollectMode::WholeCommand`] output the result equals the line.
pub fn reconstruct(chars: &[char], words: &[Word]) -> String {
	let mut out = String::with_capacity(chars.len());
	let mut end = 0usize;
	for word in words {
		out.extend(&chars[word.delim_offset..word.end()]);
		end = word.end();
	}
	out.extend(&chars[end..]);
	out
}
