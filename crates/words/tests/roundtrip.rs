//! Property tests for word collection invariants.

use kerf_words::{CollectMode, WordCollector, reconstruct};
use proptest::prelude::*;

fn line_strategy() -> impl Strategy<Value = String> {
	proptest::collection::vec(
		prop_oneof![
			Just(" "),
			Just("\t"),
			Just("\""),
			Just("&"),
			Just("&&"),
			Just("|"),
			Just(">"),
			Just("2>&1"),
			Just("<"),
			Just("\n"),
			Just("git"),
			Just("-x"),
			Just("é"),
			Just("a"),
		],
		0..24,
	)
	.prop_map(|parts| parts.concat())
}

proptest! {
	#[test]
	fn whole_command_reconstructs_line(text in line_strategy()) {
		let chars: Vec<char> = text.chars().collect();
		let mut collector = WordCollector::default();
		let words = collector.collect_words(&chars, 0, CollectMode::WholeCommand);
		prop_assert_eq!(reconstruct(&chars, &words), text);
	}

	#[test]
	fn words_are_ordered_and_disjoint(text in line_strategy(), cursor in 0usize..64) {
		let chars: Vec<char> = text.chars().collect();
		let mut collector = WordCollector::default();
		for mode in [CollectMode::StopAtCursor, CollectMode::DisplayFilter, CollectMode::WholeCommand] {
			let words = collector.collect_words(&chars, cursor, mode);
			let mut prev_end = 0;
			for word in &words {
				prop_assert_eq!(word.delim_offset, prev_end);
				prop_assert!(word.offset >= word.delim_offset);
				prop_assert!(word.end() <= chars.len());
				prev_end = word.end();
			}
			prop_assert_eq!(reconstruct(&chars, &words), text.clone());
		}
	}

	#[test]
	fn at_most_one_segment_holds_cursor(text in line_strategy(), cursor in 0usize..64) {
		let chars: Vec<char> = text.chars().collect();
		let cursor = cursor.min(chars.len());
		let mut collector = WordCollector::default();
		let words = collector.collect_words(&chars, cursor, CollectMode::WholeCommand);
		let segments = collector.collect_commands(&chars, cursor, &words);

		prop_assert!(segments.iter().filter(|s| s.cursor.is_some()).count() <= 1);
		let mut next = 0;
		for segment in &segments {
			prop_assert_eq!(segment.words.start, next);
			prop_assert!(!segment.is_empty());
			next = segment.words.end;
		}
		prop_assert_eq!(next, words.len());
	}
}
