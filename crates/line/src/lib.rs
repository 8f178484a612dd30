//! Input line analysis session.
//!
//! A [`Session`] ties the pipeline together for one editor instance: it
//! tokenizes the line, runs registered [`MatchGenerator`]s and the default
//! classifier over each command, consults the background executable
//! recognizer, and produces inline suggestions. All per-instance state lives
//! in the session; nothing is global.

mod analysis;
mod argmatcher;
mod generator;
mod session;

pub use analysis::Analysis;
pub use argmatcher::{ArgMatcher, ArgMatchers};
pub use generator::MatchGenerator;
pub use kerf_faces::{Classifications, CommandClassifier, Face, FacePalette, WordClass, render_ansi};
pub use kerf_suggest::{AcceptAction, Suggestion, SuggestionGenerator};
pub use kerf_words::{CollectMode, CommandSegment, Line, LineBuffer, Word};
pub use session::{DEFAULT_SUGGESTION_COLOR, Session};
