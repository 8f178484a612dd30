//! Error types for configuration parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or mapping it onto the schema.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The quote pair is not one or two characters.
	#[error("invalid quote pair {0:?} (expected one or two characters)")]
	InvalidQuotePair(String),

	/// The delimiter set is empty.
	#[error("tokenizer delimiters must not be empty")]
	EmptyDelimiters,
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
