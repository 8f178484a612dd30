use thiserror::Error;

/// Errors reported to match generators through a [`CommandClassifier`](crate::CommandClassifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClassifyError {
	/// The command-relative word index is past the command's last word.
	#[error("word index {index} out of bounds (command has {num_words} words)")]
	WordIndexOutOfBounds { index: usize, num_words: usize },

	/// No more color specs can be interned for this line.
	#[error("face registry is full ({capacity} color specs)")]
	RegistryFull { capacity: usize },
}
