use kerf_words::Word;

use crate::face::{Face, WordClass};
use crate::registry::FaceRegistry;

/// Classification of one word, indexed across all commands of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordInfo {
	pub start: usize,
	pub end: usize,
	pub class: WordClass,
	pub has_argmatcher: bool,
}

/// Word classes plus a face buffer for one version of the input line.
///
/// Equality compares only what the display sees: the face buffer and the
/// registry's color specs.
#[derive(Debug, Clone, Default)]
pub struct Classifications {
	info: Vec<WordInfo>,
	faces: Vec<Face>,
	registry: FaceRegistry,
}

impl PartialEq for Classifications {
	fn eq(&self, other: &Self) -> bool {
		self.faces == other.faces && self.registry == other.registry
	}
}

impl Eq for Classifications {}

impl Classifications {
	/// Creates a buffer for a line of `line_length` characters.
	pub fn new(line_length: usize) -> Self {
		let mut this = Self::default();
		this.init(line_length);
		this
	}

	/// Resets to a line of `line_length` unclassified characters.
	///
	/// If the face array cannot be allocated the buffer stays empty: every
	/// lookup returns [`Face::UNCLASSIFIED`] and painting is a no-op.
	pub fn init(&mut self, line_length: usize) {
		self.clear();
		if self.faces.try_reserve_exact(line_length).is_err() {
			tracing::warn!(line_length, "face buffer allocation failed; coloring disabled");
			return;
		}
		self.faces.resize(line_length, Face::UNCLASSIFIED);
	}

	pub fn clear(&mut self) {
		self.info.clear();
		self.faces.clear();
		self.registry.clear();
	}

	/// Number of characters covered by the face buffer.
	pub fn len(&self) -> usize {
		self.faces.len()
	}

	pub fn is_empty(&self) -> bool {
		self.faces.is_empty()
	}

	/// Appends one unclassified entry per word; returns the first entry's index.
	pub fn add_command(&mut self, words: &[Word]) -> usize {
		let base = self.info.len();
		self.info.extend(words.iter().map(|word| WordInfo {
			start: word.offset,
			end: word.end(),
			class: WordClass::Invalid,
			has_argmatcher: false,
		}));
		base
	}

	/// Sets a word's class. With `overwrite` false an already classified word
	/// keeps its class. Unknown indices are ignored.
	pub fn classify_word(&mut self, index: usize, class: WordClass, overwrite: bool) {
		let Some(info) = self.info.get_mut(index) else {
			tracing::debug!(index, "classify_word index out of range");
			return;
		};
		if overwrite || !info.class.is_classified() {
			info.class = class;
		}
	}

	pub fn set_word_has_argmatcher(&mut self, index: usize) {
		if let Some(info) = self.info.get_mut(index) {
			info.has_argmatcher = true;
		}
	}

	pub fn is_word_classified(&self, index: usize) -> bool {
		self.info.get(index).is_some_and(|info| info.class.is_classified())
	}

	/// Class of a classified word.
	pub fn word_class(&self, index: usize) -> Option<WordClass> {
		self.info
			.get(index)
			.map(|info| info.class)
			.filter(|class| class.is_classified())
	}

	pub fn entries(&self) -> &[WordInfo] {
		&self.info
	}

	/// Interns a color spec; `None` when the registry is full.
	pub fn ensure_face(&mut self, spec: &str) -> Option<Face> {
		self.registry.ensure(spec)
	}

	/// Paints `length` characters from `start`, clipped to the line.
	pub fn apply_face(&mut self, start: usize, length: usize, face: Face, overwrite: bool) {
		let end = start.saturating_add(length).min(self.faces.len());
		let start = start.min(end);
		for slot in &mut self.faces[start..end] {
			if overwrite || *slot == Face::UNCLASSIFIED {
				*slot = face;
			}
		}
	}

	/// Paints class faces onto characters that are still unclassified.
	///
	/// With `show_argmatchers`, words flagged as having an argmatcher are
	/// painted with [`Face::ARGMATCHER`] over any face already applied.
	pub fn finish(&mut self, show_argmatchers: bool) {
		for info in &self.info {
			let (face, overwrite) = if show_argmatchers && info.has_argmatcher {
				(Some(Face::ARGMATCHER), true)
			} else {
				(info.class.face(), false)
			};
			let Some(face) = face else {
				continue;
			};

			let end = info.end.min(self.faces.len());
			let start = info.start.min(end);
			for slot in &mut self.faces[start..end] {
				if overwrite || *slot == Face::UNCLASSIFIED {
					*slot = face;
				}
			}
		}
	}

	/// Face at a character position; [`Face::UNCLASSIFIED`] outside the line.
	pub fn get_face(&self, pos: usize) -> Face {
		self.faces.get(pos).copied().unwrap_or(Face::UNCLASSIFIED)
	}

	pub fn faces(&self) -> &[Face] {
		&self.faces
	}

	/// Color spec behind a registry face.
	pub fn face_output(&self, face: Face) -> Option<&str> {
		self.registry.output(face)
	}

	pub fn registry(&self) -> &FaceRegistry {
		&self.registry
	}
}
