use kerf_faces::CommandClassifier;
use kerf_words::Word;

/// Classifies the words of one command.
///
/// Generators run in registration order for every command of the line.
/// Returning `true` claims the command: later generators are skipped, but the
/// default classifier still fills in any word left unclassified.
pub trait MatchGenerator {
	/// `line` is the whole line; `words` are the command's words, indexed the
	/// same way as `classifier`.
	fn classify(&mut self, line: &[char], words: &[Word], classifier: &mut CommandClassifier<'_>) -> bool;
}
