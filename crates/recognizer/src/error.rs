use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecognizerError {
	/// The worker thread could not be started; recognition stays disabled.
	#[error("recognizer worker is unavailable")]
	Unavailable,

	#[error("recognizer has shut down")]
	ShutDown,
}

pub type Result<T> = std::result::Result<T, RecognizerError>;
