/// One-byte style tag for a character of the input line.
///
/// Bytes below 128 are built-in faces; `128..=255` are colors interned in a
/// [`FaceRegistry`](crate::FaceRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Face(pub u8);

impl Face {
	/// Not classified; drawn with the input color.
	pub const UNCLASSIFIED: Face = Face(b' ');
	pub const OTHER: Face = Face(b'o');
	pub const COMMAND: Face = Face(b'c');
	pub const ALIAS: Face = Face(b'd');
	pub const ARG: Face = Face(b'a');
	pub const FLAG: Face = Face(b'f');
	pub const NONE: Face = Face(b'n');
	/// Command word that has an argmatcher.
	pub const ARGMATCHER: Face = Face(b'm');
	/// Command word the recognizer found to be executable.
	pub const EXECUTABLE: Face = Face(b'x');
	/// Command word the recognizer could not find.
	pub const UNRECOGNIZED: Face = Face(b'u');

	/// First byte used for registry faces.
	pub const CUSTOM_BASE: u8 = 128;

	pub const fn is_custom(self) -> bool {
		self.0 >= Self::CUSTOM_BASE
	}
}

/// Semantic class of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WordClass {
	/// Not classified yet.
	#[default]
	Invalid,
	/// File names and words that fit no other class.
	Other,
	/// Shell built-in command.
	Command,
	/// Alias name.
	Alias,
	/// Argument matching a preset list.
	Arg,
	/// Flag matching a preset list.
	Flag,
	/// Word not expected by the input syntax.
	None,
}

impl WordClass {
	/// Maps a class code letter; unknown letters are [`WordClass::Other`].
	pub const fn from_code(code: char) -> Self {
		match code {
			'c' => Self::Command,
			'd' => Self::Alias,
			'a' => Self::Arg,
			'f' => Self::Flag,
			'n' => Self::None,
			_ => Self::Other,
		}
	}

	pub const fn code(self) -> Option<char> {
		match self {
			Self::Invalid => None,
			Self::Other => Some('o'),
			Self::Command => Some('c'),
			Self::Alias => Some('d'),
			Self::Arg => Some('a'),
			Self::Flag => Some('f'),
			Self::None => Some('n'),
		}
	}

	/// Face painted by [`Classifications::finish`](crate::Classifications::finish).
	pub const fn face(self) -> Option<Face> {
		match self {
			Self::Invalid => None,
			Self::Other => Some(Face::OTHER),
			Self::Command => Some(Face::COMMAND),
			Self::Alias => Some(Face::ALIAS),
			Self::Arg => Some(Face::ARG),
			Self::Flag => Some(Face::FLAG),
			Self::None => Some(Face::NONE),
		}
	}

	pub const fn is_classified(self) -> bool {
		!matches!(self, Self::Invalid)
	}
}
