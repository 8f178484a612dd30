use std::time::Duration;

use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

fn history(entries: &[&str]) -> Vec<String> {
	entries.iter().map(|entry| entry.to_string()).collect()
}

#[test]
fn history_prefers_newest_extension() {
	let entries = history(&["git status", "git stash pop", "git stash", "ls"]);
	let suggester = HistorySuggester::default();
	assert_eq!(
		suggester.suggest("git st", &entries),
		Some(Suggestion {
			text: "git stash".to_string(),
			offset: 0,
		})
	);
	assert_eq!(suggester.suggest("git stash p", &entries).map(|s| s.text), Some("git stash pop".to_string()));
}

#[rstest]
#[case::empty_line("")]
#[case::exact_match_only("ls")]
#[case::case_sensitive("GIT")]
#[case::no_match("cargo")]
fn history_without_suggestion(#[case] line: &str) {
	let entries = history(&["git status", "ls"]);
	assert_eq!(HistorySuggester::default().suggest(line, &entries), None);
}

#[test]
fn history_scan_respects_min_scan_before_budget() {
	let mut entries = history(&["echo match me"]);
	entries.extend((0..5).map(|i| format!("noise {i}")));

	let exhausted = HistorySuggester::with_limits(2, Duration::ZERO);
	assert_eq!(exhausted.suggest("echo", &entries), None);

	let thorough = HistorySuggester::with_limits(10, Duration::ZERO);
	assert_eq!(thorough.suggest("echo", &entries).map(|s| s.text), Some("echo match me".to_string()));
}

#[test]
fn suggester_tries_strategies_in_order() {
	let entries = history(&["dir /w"]);
	let mut generator = |line: &str, _endword: usize| {
		Some(Suggestion {
			text: format!("{line} --generated"),
			offset: 0,
		})
	};

	let suggester = Suggester::default();
	let found = suggester.suggest("dir", 0, &entries, Some(&mut generator));
	assert_eq!(found.map(|s| s.text), Some("dir /w".to_string()));

	let found = suggester.suggest("type", 0, &entries, Some(&mut generator));
	assert_eq!(found.map(|s| s.text), Some("type --generated".to_string()));

	let generator_first = Suggester::new(vec![Strategy::Generator, Strategy::History], HistorySuggester::default());
	let found = generator_first.suggest("dir", 0, &entries, Some(&mut generator));
	assert_eq!(found.map(|s| s.text), Some("dir --generated".to_string()));

	assert_eq!(suggester.suggest("type", 0, &entries, None), None);
	assert_eq!(suggester.suggest("", 0, &entries, Some(&mut generator)), None);
}

#[test]
fn overlay_shows_remaining_text() {
	let mut overlay = SuggestionOverlay::default();
	overlay.set("git st", 4, Some("git stash pop"), 0);
	assert_eq!(overlay.visible("git st"), Some("ash pop"));
	assert_eq!(overlay.visible("git sta"), Some("sh pop"));
	assert_eq!(overlay.visible("git x"), None);
	assert_eq!(overlay.visible("git stash pop"), None);
	assert_eq!(overlay.visible("git"), None);
	assert_eq!(overlay.visible(""), None);
}

#[test]
fn overlay_applies_offset() {
	let mut overlay = SuggestionOverlay::default();
	overlay.set("cd Doc", 3, Some("Documents\\"), 3);
	assert_eq!(overlay.visible("cd Doc"), Some("uments\\"));
}

#[rstest]
#[case::empty_line("", Some("anything"))]
#[case::no_suggestion("git", None)]
#[case::not_an_extension("git", Some("ls -l"))]
#[case::same_text("git", Some("git"))]
fn overlay_rejects(#[case] line: &str, #[case] suggestion: Option<&str>) {
	let mut overlay = SuggestionOverlay::default();
	overlay.set(line, 0, suggestion, 0);
	assert!(overlay.is_empty());
	assert_eq!(overlay.visible(line), None);
}

#[test]
fn accept_next_word_then_rest() {
	let mut overlay = SuggestionOverlay::default();
	let mut buffer = "git".to_string();
	overlay.set(&buffer, 0, Some("git stash pop"), 0);

	assert!(overlay.accept(AcceptAction::NextWord, &mut buffer));
	assert_eq!(buffer, "git stash");
	assert!(overlay.accept(AcceptAction::NextWord, &mut buffer));
	assert_eq!(buffer, "git stash pop");
	assert!(overlay.is_empty());
	assert!(!overlay.accept(AcceptAction::ToEnd, &mut buffer));
}

#[test]
fn accept_to_end() {
	let mut overlay = SuggestionOverlay::default();
	let mut buffer = "ec".to_string();
	overlay.set(&buffer, 0, Some("echo hi"), 0);
	assert!(overlay.accept(AcceptAction::ToEnd, &mut buffer));
	assert_eq!(buffer, "echo hi");
	assert!(overlay.is_empty());
}

#[test]
fn invalidate_hides_suggestion() {
	let mut overlay = SuggestionOverlay::default();
	let mut buffer = "ec".to_string();
	overlay.set(&buffer, 0, Some("echo hi"), 0);
	overlay.invalidate();
	assert_eq!(overlay.visible(&buffer), None);
	assert!(!overlay.accept(AcceptAction::ToEnd, &mut buffer));
	assert_eq!(buffer, "ec");
}
