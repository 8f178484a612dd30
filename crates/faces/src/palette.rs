use crate::classifications::Classifications;
use crate::face::Face;

const NORMAL: &str = "\x1b[m";

/// SGR parameter strings for the built-in faces.
///
/// A missing entry falls back the way the display layer expects: `arg` to
/// `input`, `argmatcher` to `command`, everything else to the normal style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacePalette {
	pub input: Option<String>,
	pub command: Option<String>,
	pub alias: Option<String>,
	pub arg: Option<String>,
	pub flag: Option<String>,
	pub unexpected: Option<String>,
	pub argmatcher: Option<String>,
	pub executable: Option<String>,
	pub unrecognized: Option<String>,
}

impl FacePalette {
	/// SGR parameters for `face`, or `None` for the normal style.
	pub fn sgr<'a>(&'a self, face: Face, classifications: &'a Classifications) -> Option<&'a str> {
		if face.is_custom() {
			return classifications.face_output(face);
		}
		let entry = match face {
			Face::UNCLASSIFIED | Face::OTHER => &self.input,
			Face::COMMAND => &self.command,
			Face::ALIAS => &self.alias,
			Face::ARG => return self.arg.as_deref().or(self.input.as_deref()),
			Face::FLAG => &self.flag,
			Face::NONE => &self.unexpected,
			Face::ARGMATCHER => return self.argmatcher.as_deref().or(self.command.as_deref()),
			Face::EXECUTABLE => &self.executable,
			Face::UNRECOGNIZED => &self.unrecognized,
			_ => return None,
		};
		entry.as_deref()
	}

	/// Escape sequence selecting `face`.
	pub fn sequence(&self, face: Face, classifications: &Classifications) -> String {
		match self.sgr(face, classifications) {
			Some(params) => format!("\x1b[{params}m"),
			None => NORMAL.to_string(),
		}
	}
}

/// Renders `chars` with an escape sequence wherever the style changes and a
/// reset at the end.
pub fn render_ansi(chars: &[char], classifications: &Classifications, palette: &FacePalette) -> String {
	let mut out = String::with_capacity(chars.len() * 2);
	let mut current: Option<String> = None;
	for (pos, &c) in chars.iter().enumerate() {
		let sequence = palette.sequence(classifications.get_face(pos), classifications);
		if current.as_ref() != Some(&sequence) {
			out.push_str(&sequence);
			current = Some(sequence);
		}
		out.push(c);
	}
	if current.is_some() {
		out.push_str(NORMAL);
	}
	out
}
