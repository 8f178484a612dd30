//! Configuration for the kerf line analysis pipeline.
//!
//! Configuration is written in TOML. Every section is optional and every field
//! has a default, so an empty document yields [`Config::default`].
//!
//! ```toml
//! [tokenizer]
//! quote_pair = "\""
//! delimiters = " \t"
//!
//! [aliases]
//! ll = "dir /w"
//!
//! [classify]
//! show_argmatchers = true
//! builtins = ["cd", "dir", "echo"]
//!
//! [argmatchers.git]
//! flags = ["--version", "-C"]
//! args = ["status", "commit", "push"]
//!
//! [recognizer]
//! executable_extensions = [".exe", ".bat", ".cmd"]
//! associations = [".py"]
//! end_line_grace_ms = 2000
//!
//! [suggest]
//! strategies = ["history", "generator"]
//! min_history_scan = 200
//! history_budget_ms = 15
//!
//! [colors]
//! command = "1;36"
//! argmatcher = "1;35"
//! ```

pub mod error;

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

pub use error::{ConfigError, Result};
use serde::Deserialize;

/// Parsed configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Word and command tokenizer policy.
	pub tokenizer: TokenizerConfig,
	/// Alias name to expansion, consulted for the first word of each command.
	pub aliases: BTreeMap<String, String>,
	/// Word classification settings.
	pub classify: ClassifyConfig,
	/// Command name to the flags and arguments it accepts.
	pub argmatchers: BTreeMap<String, ArgMatcherConfig>,
	/// Executable recognition settings.
	pub recognizer: RecognizerConfig,
	/// Inline suggestion settings.
	pub suggest: SuggestConfig,
	/// SGR parameter strings for the built-in faces.
	pub colors: ColorsConfig,
}

/// Word and command tokenizer policy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TokenizerConfig {
	/// One character (open and close are the same) or two characters (open, close).
	pub quote_pair: String,
	/// Characters separating words.
	pub delimiters: String,
}

impl Default for TokenizerConfig {
	fn default() -> Self {
		Self {
			quote_pair: "\"".to_string(),
			delimiters: " \t".to_string(),
		}
	}
}

impl TokenizerConfig {
	/// Returns the `(open, close)` quote characters.
	///
	/// Only meaningful after validation; falls back to `"` for malformed input.
	pub fn quotes(&self) -> (char, char) {
		let mut chars = self.quote_pair.chars();
		match (chars.next(), chars.next()) {
			(Some(open), Some(close)) => (open, close),
			(Some(open), None) => (open, open),
			_ => ('"', '"'),
		}
	}
}

/// Word classification settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifyConfig {
	/// Whether the input line is classified and colored at all.
	pub enabled: bool,
	/// Paint commands with an argmatcher using the argmatcher face.
	pub show_argmatchers: bool,
	/// Shell built-in command names, classified as commands without probing.
	pub builtins: Vec<String>,
}

impl Default for ClassifyConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			show_argmatchers: true,
			builtins: ["cd", "cls", "copy", "del", "dir", "echo", "exit", "md", "move", "rd", "ren", "set", "start", "type"]
				.into_iter()
				.map(str::to_string)
				.collect(),
		}
	}
}

/// Flags and arguments a command accepts.
///
/// Words after the command are classified as flag, argument, or unexpected
/// (a flag-like word not in `flags`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArgMatcherConfig {
	pub flags: Vec<String>,
	pub args: Vec<String>,
}

/// Executable recognition settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecognizerConfig {
	/// Whether command words are probed in the background.
	pub enabled: bool,
	/// Extensions appended to a word when searching `PATH` (e.g. `.exe`).
	pub executable_extensions: Vec<String>,
	/// Extensions that have an "open" association and therefore run when typed.
	pub associations: Vec<String>,
	/// How long `end_line` waits for an in-flight probe, in milliseconds.
	pub end_line_grace_ms: u64,
}

impl Default for RecognizerConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			executable_extensions: if cfg!(windows) {
				[".com", ".exe", ".bat", ".cmd"].into_iter().map(str::to_string).collect()
			} else {
				Vec::new()
			},
			associations: Vec::new(),
			end_line_grace_ms: 2000,
		}
	}
}

impl RecognizerConfig {
	/// Grace period for `end_line`.
	pub fn end_line_grace(&self) -> Duration {
		Duration::from_millis(self.end_line_grace_ms)
	}
}

/// A source of inline suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
	/// Newest history entry extending the current line.
	History,
	/// An externally registered generator.
	Generator,
}

/// Inline suggestion settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SuggestConfig {
	/// Whether suggestions are produced.
	pub enabled: bool,
	/// Strategies tried in order until one produces a suggestion.
	pub strategies: Vec<Strategy>,
	/// History entries always scanned before the time budget applies.
	pub min_history_scan: usize,
	/// Wall-clock budget for one history scan, in milliseconds.
	pub history_budget_ms: u64,
}

impl Default for SuggestConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			strategies: vec![Strategy::History, Strategy::Generator],
			min_history_scan: 200,
			history_budget_ms: 15,
		}
	}
}

impl SuggestConfig {
	/// Wall-clock budget for one history scan.
	pub fn history_budget(&self) -> Duration {
		Duration::from_millis(self.history_budget_ms)
	}
}

/// SGR parameter strings (the part between `ESC[` and `m`) for built-in faces.
///
/// `None` selects the renderer's fallback for that face.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorsConfig {
	pub input: Option<String>,
	pub command: Option<String>,
	pub alias: Option<String>,
	pub arg: Option<String>,
	pub flag: Option<String>,
	pub unexpected: Option<String>,
	pub argmatcher: Option<String>,
	pub executable: Option<String>,
	pub unrecognized: Option<String>,
	pub suggestion: Option<String>,
}

impl Config {
	/// Parse a TOML string into a validated [`Config`].
	pub fn parse(input: &str) -> Result<Self> {
		let config: Config = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	fn validate(&self) -> Result<()> {
		let quote_len = self.tokenizer.quote_pair.chars().count();
		if !(1..=2).contains(&quote_len) {
			return Err(ConfigError::InvalidQuotePair(self.tokenizer.quote_pair.clone()));
		}
		if self.tokenizer.delimiters.is_empty() {
			return Err(ConfigError::EmptyDelimiters);
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests;
