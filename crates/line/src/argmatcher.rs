use std::collections::BTreeMap;

use kerf_config::ArgMatcherConfig;
use kerf_faces::CommandClassifier;
use kerf_words::{QuotePair, Word};

use crate::generator::MatchGenerator;

/// Flags and arguments accepted by one command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgMatcher {
	pub flags: Vec<String>,
	pub args: Vec<String>,
}

impl ArgMatcher {
	/// Class code for a word following the command.
	fn class_code(&self, word: &str) -> &'static str {
		if self.flags.iter().any(|flag| flag == word) {
			"f"
		} else if is_flag_like(word) {
			"n"
		} else if self.args.iter().any(|arg| arg == word) {
			"a"
		} else {
			"o"
		}
	}
}

fn is_flag_like(word: &str) -> bool {
	word.len() > 1 && (word.starts_with('-') || word.starts_with('/'))
}

/// Match generator backed by per-command [`ArgMatcher`]s.
///
/// Command names match ASCII case-insensitively. The command word is marked
/// as having an argmatcher; later words are classified as flag, argument,
/// unexpected (an unknown flag), or other.
#[derive(Debug, Clone, Default)]
pub struct ArgMatchers {
	matchers: BTreeMap<String, ArgMatcher>,
	quotes: QuotePair,
}

impl ArgMatchers {
	pub fn new(quotes: QuotePair) -> Self {
		Self {
			matchers: BTreeMap::new(),
			quotes,
		}
	}

	pub fn from_config(configs: &BTreeMap<String, ArgMatcherConfig>, quotes: QuotePair) -> Self {
		let mut this = Self::new(quotes);
		for (name, config) in configs {
			this.insert(
				name,
				ArgMatcher {
					flags: config.flags.clone(),
					args: config.args.clone(),
				},
			);
		}
		this
	}

	pub fn insert(&mut self, command: &str, matcher: ArgMatcher) {
		self.matchers.insert(command.to_ascii_lowercase(), matcher);
	}

	pub fn get(&self, command: &str) -> Option<&ArgMatcher> {
		self.matchers.get(&command.to_ascii_lowercase())
	}

	pub fn is_empty(&self) -> bool {
		self.matchers.is_empty()
	}
}

impl MatchGenerator for ArgMatchers {
	fn classify(&mut self, line: &[char], words: &[Word], classifier: &mut CommandClassifier<'_>) -> bool {
		let command_index = classifier.command_word_index();
		let Some(command) = words.get(command_index) else {
			return false;
		};
		let Some(matcher) = self.get(&command.unquoted(line, self.quotes)) else {
			return false;
		};

		let mut applied = classifier.classify_word(command_index, "mo", false);
		for (index, word) in words.iter().enumerate().skip(command_index + 1) {
			if word.is_empty() || word.redir_arg {
				continue;
			}
			let text = word.unquoted(line, self.quotes);
			applied = applied.and_then(|()| classifier.classify_word(index, matcher.class_code(&text), false));
		}
		if let Err(error) = applied {
			tracing::debug!(%error, "argmatcher classification failed");
		}
		true
	}
}
