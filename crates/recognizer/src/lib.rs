//! Background recognition of executable command words.
//!
//! [`Recognizer`] keeps a cache of `key -> is executable` answers. Unknown
//! keys are answered with a `false` placeholder while a single worker thread
//! runs an [`ExecutableProbe`]; settled answers raise the [`ReadySignal`] so
//! the caller can re-classify the line.

mod error;
mod probe;
mod recognizer;
mod signal;

pub use error::{RecognizerError, Result};
pub use probe::{AssociationLookup, ExecutableProbe, PathProbe, is_probe_candidate};
pub use recognizer::{DEFAULT_END_LINE_GRACE, Recognizer};
pub use signal::ReadySignal;
