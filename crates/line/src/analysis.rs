use kerf_words::{CommandSegment, Word};

/// Words and command segments of one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
	pub words: Vec<Word>,
	pub commands: Vec<CommandSegment>,
}

impl Analysis {
	/// The command segment containing the cursor.
	pub fn cursor_command(&self) -> Option<&CommandSegment> {
		self.commands.iter().find(|segment| segment.cursor.is_some())
	}

	/// Words of `segment`.
	pub fn command_words(&self, segment: &CommandSegment) -> &[Word] {
		segment.slice(&self.words)
	}

	/// The last word of the line, usually the one being typed.
	pub fn end_word(&self) -> Option<&Word> {
		self.words.last()
	}
}
