//! Word and command segment tokenizer for interactive input lines.
//!
//! A line is split in two passes. A [`CommandTokenizer`] finds the bounds of
//! each command (text between `&`, `&&`, `|`, `||` and newlines), then a
//! [`WordTokenizer`] splits each command into words. [`WordCollector`] drives
//! both and produces [`Word`]s and [`CommandSegment`]s.
//!
//! All offsets are character indices into the line, never byte offsets.

/// Command bound detection.
pub mod command;
/// Word and segment collection.
pub mod collector;
/// Read-only line buffer abstraction.
pub mod line;
/// Word splitting within a command.
pub mod tokenizer;
/// Word and segment types.
pub mod word;

pub use collector::{AliasSource, CollectMode, WordCollector, reconstruct};
pub use command::{CommandBounds, CommandTokenizer, ShellCommandTokenizer};
pub use line::{Line, LineBuffer};
pub use tokenizer::{QuotePair, RawWord, SimpleWordTokenizer, WordTokenizer};
pub use word::{CommandSegment, Word};
