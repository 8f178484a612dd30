use kerf_words::{CollectMode, WordCollector};
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

fn faces_string(classifications: &Classifications) -> String {
	classifications.faces().iter().map(|f| f.0 as char).collect()
}

/// Builds a buffer for `text` with every command added.
fn classify(text: &str) -> (Classifications, Vec<kerf_words::CommandSegment>) {
	let chars: Vec<char> = text.chars().collect();
	let mut collector = WordCollector::default();
	let words = collector.collect_words(&chars, chars.len(), CollectMode::WholeCommand);
	let segments = collector.collect_commands(&chars, chars.len(), &words);
	let mut classifications = Classifications::new(chars.len());
	for segment in &segments {
		classifications.add_command(segment.slice(&words));
	}
	(classifications, segments)
}

#[test]
fn init_fills_unclassified() {
	let classifications = Classifications::new(4);
	assert_eq!(classifications.len(), 4);
	assert_eq!(faces_string(&classifications), "    ");
	assert_eq!(classifications.get_face(99), Face::UNCLASSIFIED);
}

#[test]
fn add_command_continues_global_index() {
	let (mut classifications, segments) = classify("dir /w & echo hi there");
	assert_eq!(segments.len(), 2);
	assert_eq!(classifications.entries().len(), 5);

	let base = classifications.add_command(&[]);
	assert_eq!(base, 5);
	classifications.classify_word(3, WordClass::Arg, true);
	assert_eq!(classifications.entries()[3].start, 14);
	assert_eq!(classifications.word_class(3), Some(WordClass::Arg));
}

#[rstest]
#[case(false, WordClass::Flag)]
#[case(true, WordClass::Arg)]
fn classify_word_overwrite(#[case] overwrite: bool, #[case] expected: WordClass) {
	let (mut classifications, _) = classify("git -x");
	classifications.classify_word(1, WordClass::from_code('f'), overwrite);
	classifications.classify_word(1, WordClass::from_code('a'), overwrite);
	assert_eq!(classifications.word_class(1), Some(expected));
}

#[test]
fn unclassified_words_report_none() {
	let (mut classifications, _) = classify("git");
	assert!(!classifications.is_word_classified(0));
	assert_eq!(classifications.word_class(0), None);
	classifications.classify_word(7, WordClass::Other, true);
	assert!(!classifications.is_word_classified(7));
}

#[test]
fn explicit_faces_win_over_class_faces() {
	let (mut classifications, _) = classify("abcdefg");
	let x = classifications.ensure_face("7").unwrap();
	classifications.apply_face(2, 3, x, true);
	classifications.classify_word(0, WordClass::Other, true);
	classifications.finish(false);

	for pos in 2..5 {
		assert_eq!(classifications.get_face(pos), x);
	}
	for pos in [0, 1, 5, 6] {
		assert_eq!(classifications.get_face(pos), Face::OTHER);
	}
}

#[test]
fn apply_face_respects_overwrite_and_clips() {
	let mut classifications = Classifications::new(5);
	let red = classifications.ensure_face("31").unwrap();
	let blue = classifications.ensure_face("34").unwrap();

	classifications.apply_face(0, 2, red, true);
	classifications.apply_face(1, 100, blue, false);
	assert_eq!(classifications.faces(), &[red, red, blue, blue, blue]);

	classifications.apply_face(10, 3, red, true);
	classifications.apply_face(usize::MAX, usize::MAX, red, true);
	assert_eq!(classifications.get_face(4), blue);
}

#[test]
fn finish_paints_class_faces() {
	let (mut classifications, _) = classify("dir /w x");
	classifications.classify_word(0, WordClass::Command, true);
	classifications.classify_word(1, WordClass::Flag, true);
	classifications.finish(true);
	assert_eq!(faces_string(&classifications), "ccc ff  ");
}

#[test]
fn argmatcher_face_only_when_shown() {
	let (mut classifications, _) = classify("git status");
	classifications.classify_word(0, WordClass::Other, true);
	classifications.set_word_has_argmatcher(0);

	let mut shown = classifications.clone();
	shown.finish(true);
	assert_eq!(faces_string(&shown), "mmm       ");

	classifications.finish(false);
	assert_eq!(faces_string(&classifications), "ooo       ");
}

#[test]
fn argmatcher_face_replaces_applied_color() {
	let (mut classifications, _) = classify("git status");
	let underline = classifications.ensure_face("4").unwrap();
	classifications.apply_face(0, 3, underline, true);
	classifications.set_word_has_argmatcher(0);

	let mut hidden = classifications.clone();
	hidden.finish(false);
	assert_eq!(hidden.get_face(0), underline);

	classifications.finish(true);
	assert_eq!(&faces_string(&classifications)[..3], "mmm");
	assert_eq!(classifications.get_face(2), Face::ARGMATCHER);
	assert_eq!(classifications.get_face(4), Face::UNCLASSIFIED);
}

#[test]
fn failed_allocation_leaves_blank_buffer() {
	let mut classifications = Classifications::new(usize::MAX);
	assert_eq!(classifications.len(), 0);
	assert!(classifications.is_empty());

	let base = classifications.add_command(&[]);
	classifications.apply_face(0, 10, Face::COMMAND, true);
	classifications.classify_word(base, WordClass::Command, true);
	classifications.finish(true);

	assert_eq!(classifications.len(), 0);
	assert_eq!(classifications.get_face(0), Face::UNCLASSIFIED);
	assert_eq!(classifications, Classifications::new(0));
}

#[test]
fn registry_dedupes_and_caps() {
	let mut registry = FaceRegistry::default();
	let a = registry.ensure("1;31").unwrap();
	assert_eq!(registry.ensure("1;31"), Some(a));
	assert_eq!(a, Face(128));
	assert_eq!(registry.output(a), Some("1;31"));
	assert_eq!(registry.output(Face::COMMAND), None);

	for i in 1..FACE_REGISTRY_CAPACITY {
		assert!(registry.ensure(&format!("38;5;{i}")).is_some());
	}
	assert_eq!(registry.len(), FACE_REGISTRY_CAPACITY);
	assert_eq!(registry.ensure("4"), None);
	assert_eq!(registry.ensure("1;31"), Some(a));
	assert_eq!(registry.output(Face(255)), Some("38;5;127"));
}

#[test]
fn equality_compares_faces_and_registry_order() {
	let mut a = Classifications::new(3);
	let mut b = Classifications::new(3);
	assert_eq!(a, b);

	let red = a.ensure_face("31").unwrap();
	a.ensure_face("32");
	b.ensure_face("32");
	b.ensure_face("31");
	assert_ne!(a, b);

	let mut c = Classifications::new(3);
	c.ensure_face("31");
	c.ensure_face("32");
	assert_eq!(a, c);

	a.apply_face(0, 1, red, true);
	assert_ne!(a, c);
}

#[test]
fn equality_ignores_word_entries() {
	let (mut a, _) = classify("git x");
	let b = Classifications::new(5);
	a.classify_word(0, WordClass::Command, true);
	assert_eq!(a, b);
	a.finish(false);
	assert_ne!(a, b);
}

#[test]
fn binding_maps_relative_indices() {
	let (mut classifications, segments) = classify("dir & git -x status");
	let segment = &segments[1];
	{
		let mut binding = CommandClassifier::new(&mut classifications, segment.words.start, 0, segment.len());
		binding.classify_word(0, "mc", true).unwrap();
		binding.classify_word(1, "f", true).unwrap();
		binding.classify_word(2, "ma", true).unwrap();
		binding.classify_word(2, "z", false).unwrap();
		assert_eq!(
			binding.classify_word(3, "a", true),
			Err(ClassifyError::WordIndexOutOfBounds { index: 3, num_words: 3 })
		);
	}

	assert_eq!(classifications.word_class(0), None);
	assert_eq!(classifications.word_class(1), Some(WordClass::Command));
	assert!(classifications.entries()[1].has_argmatcher);
	assert_eq!(classifications.word_class(2), Some(WordClass::Flag));
	assert_eq!(classifications.word_class(3), Some(WordClass::Arg));
	assert!(!classifications.entries()[3].has_argmatcher);
}

#[test]
fn binding_unknown_code_is_other() {
	let (mut classifications, _) = classify("x y");
	let mut binding = CommandClassifier::new(&mut classifications, 0, 0, 2);
	binding.classify_word(0, "q", true).unwrap();
	binding.classify_word(1, "m", true).unwrap();
	assert_eq!(classifications.word_class(0), Some(WordClass::Other));
	assert_eq!(classifications.word_class(1), Some(WordClass::Other));
}

#[test]
fn binding_apply_color_reports_full_registry() {
	let mut classifications = Classifications::new(4);
	let mut binding = CommandClassifier::new(&mut classifications, 0, 0, 0);
	for i in 0..FACE_REGISTRY_CAPACITY {
		binding.apply_color(0, 1, &format!("38;5;{i}"), true).unwrap();
	}
	assert_eq!(
		binding.apply_color(1, 1, "1", true),
		Err(ClassifyError::RegistryFull {
			capacity: FACE_REGISTRY_CAPACITY
		})
	);
	assert_eq!(classifications.get_face(1), Face::UNCLASSIFIED);
	assert_eq!(classifications.face_output(classifications.get_face(0)), Some("38;5;127"));
}

#[test]
fn render_groups_runs() {
	let chars: Vec<char> = "ls -l".chars().collect();
	let mut classifications = Classifications::new(chars.len());
	let custom = classifications.ensure_face("4").unwrap();
	classifications.apply_face(0, 2, Face::COMMAND, true);
	classifications.apply_face(3, 2, custom, true);

	let palette = FacePalette {
		command: Some("1".to_string()),
		..FacePalette::default()
	};
	let rendered = render_ansi(&chars, &classifications, &palette);
	assert_eq!(rendered, "\x1b[1mls\x1b[m \x1b[4m-l\x1b[m");
}

#[test]
fn palette_fallbacks() {
	let classifications = Classifications::new(0);
	let palette = FacePalette {
		input: Some("37".to_string()),
		command: Some("1".to_string()),
		..FacePalette::default()
	};
	assert_eq!(palette.sgr(Face::ARG, &classifications), Some("37"));
	assert_eq!(palette.sgr(Face::UNCLASSIFIED, &classifications), Some("37"));
	assert_eq!(palette.sgr(Face::ARGMATCHER, &classifications), Some("1"));
	assert_eq!(palette.sgr(Face::FLAG, &classifications), None);
	assert_eq!(palette.sequence(Face::FLAG, &classifications), "\x1b[m");
	assert_eq!(render_ansi(&[], &classifications, &palette), "");
}
