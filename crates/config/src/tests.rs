use std::io::Write;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn empty_document_is_default() {
	let config = Config::parse("").unwrap();
	assert_eq!(config, Config::default());
	assert_eq!(config.tokenizer.quotes(), ('"', '"'));
	assert_eq!(config.recognizer.end_line_grace(), Duration::from_secs(2));
}

#[test]
fn sections_override_defaults() {
	let config = Config::parse(
		r#"
		[tokenizer]
		quote_pair = "<>"

		[aliases]
		ll = "dir /w"

		[classify]
		show_argmatchers = false
		builtins = ["echo"]

		[argmatchers.git]
		flags = ["--version"]
		args = ["status"]

		[recognizer]
		executable_extensions = [".exe"]
		end_line_grace_ms = 250

		[suggest]
		strategies = ["generator"]
		history_budget_ms = 5

		[colors]
		command = "1;36"
		"#,
	)
	.unwrap();

	assert_eq!(config.tokenizer.quotes(), ('<', '>'));
	assert_eq!(config.tokenizer.delimiters, " \t");
	assert_eq!(config.aliases.get("ll").map(String::as_str), Some("dir /w"));
	assert!(!config.classify.show_argmatchers);
	assert_eq!(config.classify.builtins, vec!["echo".to_string()]);
	assert_eq!(
		config.argmatchers.get("git"),
		Some(&ArgMatcherConfig {
			flags: vec!["--version".to_string()],
			args: vec!["status".to_string()],
		})
	);
	assert_eq!(config.recognizer.executable_extensions, vec![".exe".to_string()]);
	assert_eq!(config.recognizer.end_line_grace(), Duration::from_millis(250));
	assert_eq!(config.suggest.strategies, vec![Strategy::Generator]);
	assert_eq!(config.suggest.min_history_scan, 200);
	assert_eq!(config.suggest.history_budget(), Duration::from_millis(5));
	assert_eq!(config.colors.command.as_deref(), Some("1;36"));
	assert_eq!(config.colors.flag, None);
}

#[test]
fn rejects_bad_quote_pair() {
	let err = Config::parse("[tokenizer]\nquote_pair = \"abc\"").unwrap_err();
	assert!(matches!(err, ConfigError::InvalidQuotePair(ref q) if q == "abc"));

	let err = Config::parse("[tokenizer]\nquote_pair = \"\"").unwrap_err();
	assert!(matches!(err, ConfigError::InvalidQuotePair(_)));
}

#[test]
fn rejects_empty_delimiters() {
	let err = Config::parse("[tokenizer]\ndelimiters = \"\"").unwrap_err();
	assert!(matches!(err, ConfigError::EmptyDelimiters));
}

#[test]
fn rejects_unknown_fields() {
	let err = Config::parse("[recognizer]\ngrace = 3").unwrap_err();
	assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn load_reads_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "[suggest]\nenabled = false").unwrap();

	let config = Config::load(file.path()).unwrap();
	assert!(!config.suggest.enabled);
}

#[test]
fn load_reports_missing_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("missing.toml");

	let err = Config::load(&path).unwrap_err();
	assert!(matches!(err, ConfigError::Io { path: ref p, .. } if *p == path));
}
