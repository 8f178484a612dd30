use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Decides whether a command word names something that can be run.
///
/// Probes run on the recognizer's worker thread and may block on the file
/// system. A probe that cannot decide answers `false`.
pub trait ExecutableProbe: Send + Sync {
	fn is_executable(&self, word: &str) -> bool;
}

impl<F> ExecutableProbe for F
where
	F: Fn(&str) -> bool + Send + Sync,
{
	fn is_executable(&self, word: &str) -> bool {
		self(word)
	}
}

/// File extensions that have an "open" association.
///
/// Matching is ASCII case-insensitive; a leading dot is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssociationLookup {
	extensions: Vec<String>,
}

impl AssociationLookup {
	pub fn new<I, S>(extensions: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self {
			extensions: extensions
				.into_iter()
				.map(|ext| ext.as_ref().trim_start_matches('.').to_ascii_lowercase())
				.filter(|ext| !ext.is_empty())
				.collect(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.extensions.is_empty()
	}

	/// Returns true when `path` has an associated extension.
	pub fn has_open_command(&self, path: &Path) -> bool {
		path.extension()
			.and_then(|ext| ext.to_str())
			.is_some_and(|ext| self.extensions.iter().any(|known| known.eq_ignore_ascii_case(ext)))
	}
}

/// Probe backed by a PATH search.
///
/// Words containing a path separator resolve against the working directory;
/// bare names are searched in each PATH entry, first as given and then with
/// each configured executable extension appended. A word that names an
/// existing file with an associated extension also counts as runnable.
#[derive(Debug, Clone)]
pub struct PathProbe {
	paths: Option<OsString>,
	cwd: PathBuf,
	extensions: Vec<String>,
	associations: AssociationLookup,
}

impl PathProbe {
	/// Probe over an explicit search path and working directory.
	pub fn new(paths: impl Into<OsString>, cwd: impl Into<PathBuf>) -> Self {
		Self {
			paths: Some(paths.into()),
			cwd: cwd.into(),
			extensions: Vec::new(),
			associations: AssociationLookup::default(),
		}
	}

	/// Probe over the process `PATH`, resolving relative words against the
	/// current directory at construction time.
	pub fn from_env() -> Self {
		let cwd = env::current_dir().unwrap_or_else(|error| {
			tracing::debug!(%error, "current directory unavailable; probing relative to '.'");
			PathBuf::from(".")
		});
		Self {
			paths: env::var_os("PATH"),
			cwd,
			extensions: Vec::new(),
			associations: AssociationLookup::default(),
		}
	}

	pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.extensions = extensions.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_associations(mut self, associations: AssociationLookup) -> Self {
		self.associations = associations;
		self
	}

	fn search(&self, name: &str) -> Option<PathBuf> {
		which::which_in(name, self.paths.as_ref(), &self.cwd).ok()
	}

	fn has_association(&self, word: &str) -> bool {
		if self.associations.is_empty() {
			return false;
		}
		let path = self.cwd.join(word);
		self.associations.has_open_command(&path) && path.is_file()
	}
}

impl ExecutableProbe for PathProbe {
	fn is_executable(&self, word: &str) -> bool {
		if let Some(path) = self.search(word) {
			tracing::trace!(word, path = %path.display(), "resolved on search path");
			return true;
		}
		for ext in &self.extensions {
			if let Some(path) = self.search(&format!("{word}{ext}")) {
				tracing::trace!(word, path = %path.display(), "resolved with extension");
				return true;
			}
		}
		self.has_association(word)
	}
}

/// Returns false for words that are never worth a probe.
///
/// Rejects empty words, UNC paths, wildcard patterns, and relative directory
/// tokens (`.`, `..`, `...`, anything ending in a path separator).
pub fn is_probe_candidate(word: &str) -> bool {
	if word.is_empty() {
		return false;
	}
	if word.starts_with("\\\\") || word.starts_with("//") {
		return false;
	}
	if word.contains(['*', '?']) {
		return false;
	}
	if word.ends_with(['/', '\\']) {
		return false;
	}
	!word.chars().all(|c| c == '.')
}
