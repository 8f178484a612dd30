use kerf_config::{ColorsConfig, Config, Strategy as StrategyConfig};
use kerf_faces::{Classifications, CommandClassifier, Face, FacePalette, WordClass};
use kerf_recognizer::{AssociationLookup, ExecutableProbe, PathProbe, Recognizer, is_probe_candidate};
use kerf_suggest::{AcceptAction, HistorySuggester, Strategy, Suggester, SuggestionGenerator, SuggestionOverlay};
use kerf_words::{CollectMode, CommandSegment, LineBuffer, QuotePair, SimpleWordTokenizer, Word, WordCollector};
use rustc_hash::FxHashSet;

use crate::analysis::Analysis;
use crate::argmatcher::ArgMatchers;
use crate::generator::MatchGenerator;

/// Dim gray used for suggestion text when `colors.suggestion` is unset.
pub const DEFAULT_SUGGESTION_COLOR: &str = "0;90";

/// Analysis state for one editor instance.
pub struct Session {
	collector: WordCollector,
	classify_enabled: bool,
	show_argmatchers: bool,
	/// Lowercased built-in command names.
	builtins: FxHashSet<String>,
	generators: Vec<Box<dyn MatchGenerator>>,
	recognizer: Option<Recognizer>,
	palette: FacePalette,
	suggestion_color: String,
	suggester: Option<Suggester>,
	overlay: SuggestionOverlay,
	last: Option<Classifications>,
}

impl std::fmt::Debug for Session {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Session")
			.field("collector", &self.collector)
			.field("classify_enabled", &self.classify_enabled)
			.field("generators", &self.generators.len())
			.field("recognizer", &self.recognizer)
			.field("suggester", &self.suggester)
			.finish_non_exhaustive()
	}
}

impl Session {
	/// Builds a session that probes the process `PATH` for executables.
	pub fn new(config: &Config) -> Self {
		let probe = PathProbe::from_env()
			.with_extensions(config.recognizer.executable_extensions.iter().cloned())
			.with_associations(AssociationLookup::new(&config.recognizer.associations));
		Self::with_probe(config, probe)
	}

	/// Builds a session around a custom executable probe.
	pub fn with_probe(config: &Config, probe: impl ExecutableProbe + 'static) -> Self {
		let (open, close) = config.tokenizer.quotes();
		let quotes = QuotePair::new(open, close);
		let collector = WordCollector::new(quotes)
			.with_word_tokenizer(SimpleWordTokenizer::new(&config.tokenizer.delimiters))
			.with_aliases(config.aliases.clone());

		let recognizer = config
			.recognizer
			.enabled
			.then(|| Recognizer::new(probe).with_end_line_grace(config.recognizer.end_line_grace()));

		let suggester = config.suggest.enabled.then(|| {
			let strategies = config
				.suggest
				.strategies
				.iter()
				.map(|strategy| match strategy {
					StrategyConfig::History => Strategy::History,
					StrategyConfig::Generator => Strategy::Generator,
				})
				.collect();
			Suggester::new(
				strategies,
				HistorySuggester::with_limits(config.suggest.min_history_scan, config.suggest.history_budget()),
			)
		});

		let mut generators: Vec<Box<dyn MatchGenerator>> = Vec::new();
		if !config.argmatchers.is_empty() {
			generators.push(Box::new(ArgMatchers::from_config(&config.argmatchers, quotes)));
		}

		tracing::debug!(
			aliases = config.aliases.len(),
			builtins = config.classify.builtins.len(),
			argmatchers = config.argmatchers.len(),
			recognizer = recognizer.is_some(),
			suggest = suggester.is_some(),
			"session created"
		);

		Self {
			collector,
			classify_enabled: config.classify.enabled,
			show_argmatchers: config.classify.show_argmatchers,
			builtins: config.classify.builtins.iter().map(|name| name.to_lowercase()).collect(),
			generators,
			recognizer,
			palette: palette_from_config(&config.colors),
			suggestion_color: config
				.colors
				.suggestion
				.clone()
				.unwrap_or_else(|| DEFAULT_SUGGESTION_COLOR.to_string()),
			suggester,
			overlay: SuggestionOverlay::default(),
			last: None,
		}
	}

	/// Registers a generator; it runs after those already registered.
	pub fn add_generator(&mut self, generator: impl MatchGenerator + 'static) {
		self.generators.push(Box::new(generator));
	}

	pub fn palette(&self) -> &FacePalette {
		&self.palette
	}

	/// SGR parameters for drawing suggestion text.
	pub fn suggestion_color(&self) -> &str {
		&self.suggestion_color
	}

	pub fn recognizer(&self) -> Option<&Recognizer> {
		self.recognizer.as_ref()
	}

	/// Splits `line` into words and command segments.
	pub fn analyze(&mut self, line: &impl LineBuffer, mode: CollectMode) -> Analysis {
		let chars: Vec<char> = line.text().chars().collect();
		let words = self.collector.collect_words(&chars, line.cursor(), mode);
		let commands = self.collector.collect_commands(&chars, line.cursor(), &words);
		tracing::trace!(words = words.len(), commands = commands.len(), "analyzed line");
		Analysis { words, commands }
	}

	/// Classifies every word of `line` and builds its face buffer.
	pub fn classify(&mut self, line: &impl LineBuffer) -> Classifications {
		let chars: Vec<char> = line.text().chars().collect();
		let mut classifications = Classifications::new(chars.len());
		if !self.classify_enabled {
			return classifications;
		}

		let words = self.collector.collect_words(&chars, line.cursor(), CollectMode::WholeCommand);
		let segments = self.collector.collect_commands(&chars, line.cursor(), &words);
		for segment in &segments {
			let command_words = segment.slice(&words);
			let base = classifications.add_command(command_words);

			let mut classifier = CommandClassifier::new(&mut classifications, base, 0, command_words.len());
			for generator in &mut self.generators {
				if generator.classify(&chars, command_words, &mut classifier) {
					break;
				}
			}
			self.classify_defaults(&chars, segment, command_words, base, &mut classifications);
		}

		classifications.finish(self.show_argmatchers);
		tracing::trace!(commands = segments.len(), words = words.len(), "classified line");
		classifications
	}

	/// Re-classifies `line`; returns the buffer only when it differs from the
	/// last one returned.
	pub fn refresh(&mut self, line: &impl LineBuffer) -> Option<&Classifications> {
		let next = self.classify(line);
		if self.last.as_ref() == Some(&next) {
			return None;
		}
		self.last = Some(next);
		self.last.as_ref()
	}

	pub fn last_classifications(&self) -> Option<&Classifications> {
		self.last.as_ref()
	}

	/// Returns true (and resets the signal) when a recognition result has
	/// settled since the last poll.
	pub fn poll_recognizer(&self) -> bool {
		let Some(recognizer) = &self.recognizer else {
			return false;
		};
		let signal = recognizer.ready_signal();
		if !signal.is_set() {
			return false;
		}
		signal.reset();
		true
	}

	/// Computes a suggestion for `line` and returns the text to draw after it.
	///
	/// Only offered when the cursor is at the end of a non-empty line.
	/// `history` is ordered oldest first.
	pub fn suggest(
		&mut self,
		line: &impl LineBuffer,
		history: &[String],
		generator: Option<&mut dyn SuggestionGenerator>,
	) -> Option<&str> {
		self.overlay.invalidate();
		let suggester = self.suggester.as_ref()?;
		let text = line.text();
		if text.is_empty() || line.cursor() < line.len() {
			return None;
		}

		let chars: Vec<char> = text.chars().collect();
		let words = self.collector.collect_words(&chars, line.cursor(), CollectMode::DisplayFilter);
		let endword_offset = words.last().map_or(0, |word| word.offset);
		let suggestion = suggester.suggest(text, endword_offset, history, generator)?;

		self.overlay.set(text, endword_offset, Some(&suggestion.text), suggestion.offset);
		self.overlay.visible(text)
	}

	/// Suggestion text still applicable to `line`.
	pub fn visible_suggestion(&self, line: &str) -> Option<&str> {
		self.overlay.visible(line)
	}

	/// Inserts the current suggestion (or its next word) into `buffer`.
	pub fn accept_suggestion(&mut self, action: AcceptAction, buffer: &mut String) -> bool {
		self.overlay.accept(action, buffer)
	}

	/// Discards the current suggestion after an edit it does not survive.
	pub fn invalidate_suggestion(&mut self) {
		self.overlay.invalidate();
	}

	/// Finishes the current line: drains the recognizer and drops per-line state.
	pub fn end_line(&mut self) {
		if let Some(recognizer) = &self.recognizer {
			recognizer.end_line();
		}
		self.last = None;
		self.overlay.invalidate();
		self.collector.reset_alias_cache();
		tracing::debug!("line ended");
	}

	fn classify_defaults(
		&self,
		chars: &[char],
		segment: &CommandSegment,
		words: &[Word],
		base: usize,
		classifications: &mut Classifications,
	) {
		if let Some(command) = words.first()
			&& !command.is_empty()
			&& !command.redir_arg
			&& !classifications.is_word_classified(base)
		{
			let name = command.unquoted(chars, self.collector.quotes());
			if command.is_alias {
				tracing::trace!(name = name.as_str(), expansion = segment.alias.as_deref(), "alias command");
				classifications.classify_word(base, WordClass::Alias, false);
			} else if self.builtins.contains(&name.to_lowercase()) {
				classifications.classify_word(base, WordClass::Command, false);
			} else {
				if let Some(found) = self.recognize(&name) {
					let face = if found { Face::EXECUTABLE } else { Face::UNRECOGNIZED };
					classifications.apply_face(command.offset, command.length, face, false);
				}
				classifications.classify_word(base, WordClass::Other, false);
			}
		}

		for index in base..base + words.len() {
			classifications.classify_word(index, WordClass::Other, false);
		}
	}

	/// Settled recognition result for a command name; queues a probe when unknown.
	fn recognize(&self, name: &str) -> Option<bool> {
		let recognizer = self.recognizer.as_ref()?;
		if !is_probe_candidate(name) {
			return None;
		}
		if let Some(found) = recognizer.settled(name) {
			return Some(found);
		}
		// Re-queue on every pass: a queued probe may have been superseded by
		// another command of the same line.
		if let Err(error) = recognizer.enqueue(name, name) {
			tracing::debug!(%error, name, "recognition unavailable");
		}
		None
	}
}

fn palette_from_config(colors: &ColorsConfig) -> FacePalette {
	FacePalette {
		input: colors.input.clone(),
		command: colors.command.clone(),
		alias: colors.alias.clone(),
		arg: colors.arg.clone(),
		flag: colors.flag.clone(),
		unexpected: colors.unexpected.clone(),
		argmatcher: colors.argmatcher.clone(),
		executable: colors.executable.clone(),
		unrecognized: colors.unrecognized.clone(),
	}
}
