use crate::classifications::Classifications;
use crate::error::ClassifyError;
use crate::face::WordClass;
use crate::registry::FACE_REGISTRY_CAPACITY;

/// Classification handle scoped to one command of the line.
///
/// Word indices are 0-based and relative to the command; they map onto the
/// line-wide classification entries starting at `index_offset`. Character
/// offsets passed to [`CommandClassifier::apply_color`] are line-wide.
#[derive(Debug)]
pub struct CommandClassifier<'a> {
	classifications: &'a mut Classifications,
	index_offset: usize,
	command_word_index: usize,
	num_words: usize,
}

impl<'a> CommandClassifier<'a> {
	pub fn new(classifications: &'a mut Classifications, index_offset: usize, command_word_index: usize, num_words: usize) -> Self {
		Self {
			classifications,
			index_offset,
			command_word_index,
			num_words,
		}
	}

	pub const fn num_words(&self) -> usize {
		self.num_words
	}

	/// Command-relative index of the command word.
	pub const fn command_word_index(&self) -> usize {
		self.command_word_index
	}

	/// Classifies a word from a class code.
	///
	/// Codes are `o c d a f n`; a leading `m` marks the command word as having
	/// an argmatcher (ignored for other words). Unknown codes classify as other.
	pub fn classify_word(&mut self, index: usize, code: &str, overwrite: bool) -> Result<(), ClassifyError> {
		self.check_index(index)?;

		let (has_argmatcher, code) = match code.strip_prefix('m') {
			Some(rest) => (true, rest),
			None => (false, code),
		};
		let class = code.chars().next().map_or(WordClass::Other, WordClass::from_code);

		let global = self.index_offset + index;
		self.classifications.classify_word(global, class, overwrite);
		if has_argmatcher && index == self.command_word_index {
			self.classifications.set_word_has_argmatcher(global);
		}
		Ok(())
	}

	/// Sets a word's class directly.
	pub fn set_class(&mut self, index: usize, class: WordClass, overwrite: bool) -> Result<(), ClassifyError> {
		self.check_index(index)?;
		self.classifications.classify_word(self.index_offset + index, class, overwrite);
		Ok(())
	}

	pub fn is_word_classified(&self, index: usize) -> bool {
		index < self.num_words && self.classifications.is_word_classified(self.index_offset + index)
	}

	/// Paints an SGR color over `length` characters starting at `start`.
	pub fn apply_color(&mut self, start: usize, length: usize, color: &str, overwrite: bool) -> Result<(), ClassifyError> {
		let face = self.classifications.ensure_face(color).ok_or(ClassifyError::RegistryFull {
			capacity: FACE_REGISTRY_CAPACITY,
		})?;
		self.classifications.apply_face(start, length, face, overwrite);
		Ok(())
	}

	/// Underlying line-wide buffer.
	pub fn classifications(&mut self) -> &mut Classifications {
		&mut *self.classifications
	}

	fn check_index(&self, index: usize) -> Result<(), ClassifyError> {
		if index >= self.num_words {
			return Err(ClassifyError::WordIndexOutOfBounds {
				index,
				num_words: self.num_words,
			});
		}
		Ok(())
	}
}
