use std::time::{Duration, Instant};

use crate::Suggestion;

/// Suggests the newest history entry that extends the whole line.
///
/// Matching is exact and case-sensitive. The scan always covers at least
/// `min_scan` entries; past that it stops once `budget` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistorySuggester {
	pub min_scan: usize,
	pub budget: Duration,
}

impl Default for HistorySuggester {
	fn default() -> Self {
		Self {
			min_scan: 200,
			budget: Duration::from_millis(15),
		}
	}
}

impl HistorySuggester {
	pub fn with_limits(min_scan: usize, budget: Duration) -> Self {
		Self { min_scan, budget }
	}

	pub fn suggest(&self, line: &str, history: &[String]) -> Option<Suggestion> {
		if line.is_empty() {
			return None;
		}

		let started = Instant::now();
		for (scanned, entry) in history.iter().rev().enumerate() {
			if scanned >= self.min_scan && started.elapsed() >= self.budget {
				tracing::trace!(scanned, "history scan budget spent");
				return None;
			}
			if entry.len() > line.len() && entry.starts_with(line) {
				return Some(Suggestion {
					text: entry.clone(),
					offset: 0,
				});
			}
		}
		None
	}
}
