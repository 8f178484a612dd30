//! Text output for one analyzed line.

use kerf_line::{Analysis, Classifications, FacePalette, Line, LineBuffer, render_ansi};

/// The line drawn with its faces.
///
/// Without color, the line is followed by a second row holding one face code
/// per character (`*` for registry colors).
pub fn render(line: &Line, classifications: &Classifications, palette: &FacePalette, color: bool) -> String {
	if color {
		return render_ansi(line.chars(), classifications, palette);
	}
	let codes: String = classifications
		.faces()
		.iter()
		.map(|face| if face.is_custom() { '*' } else { char::from(face.0) })
		.collect();
	format!("{}\n{}", line.text(), codes.trim_end())
}

/// One row per command segment and word.
pub fn describe(line: &Line, analysis: &Analysis) -> Vec<String> {
	let chars = line.chars();
	let mut rows = Vec::new();
	for (index, segment) in analysis.commands.iter().enumerate() {
		let mut row = format!("command {index}: {}..{}", segment.offset, segment.end());
		if let Some(cursor) = segment.cursor {
			row.push_str(&format!(" cursor={cursor}"));
		}
		if let Some(alias) = &segment.alias {
			row.push_str(&format!(" alias={alias:?}"));
		}
		rows.push(row);

		for word in analysis.command_words(segment) {
			let mut row = format!("  word {}+{} {:?}", word.offset, word.length, word.text(chars));
			if word.redir_arg {
				row.push_str(" redir");
			}
			if word.quoted {
				row.push_str(" quoted");
			}
			if word.is_alias {
				row.push_str(" alias");
			}
			rows.push(row);
		}
	}
	rows
}

/// Suggestion row, drawn with `sgr` when colored.
pub fn suggestion(text: &str, sgr: &str, color: bool) -> String {
	if color {
		format!("suggest: \x1b[{sgr}m{text}\x1b[m")
	} else {
		format!("suggest: {text}")
	}
}

#[cfg(test)]
mod tests {
	use kerf_config::Config;
	use kerf_line::{CollectMode, Session};
	use pretty_assertions::assert_eq;

	use super::*;

	fn offline_session(config: &mut Config) -> Session {
		config.recognizer.enabled = false;
		Session::with_probe(config, |_word: &str| false)
	}

	#[test]
	fn plain_render_lists_face_codes() {
		let mut session = offline_session(&mut Config::default());
		let line = Line::at_end("dir x ");
		let classifications = session.classify(&line);
		assert_eq!(render(&line, &classifications, session.palette(), false), "dir x \nccc o");
	}

	#[test]
	fn describe_lists_segments_and_words() {
		let mut config = Config::default();
		config.aliases.insert("ll".to_string(), "dir /w".to_string());
		let mut session = offline_session(&mut config);

		let line = Line::at_end("ll \"a b\" & echo >out");
		let analysis = session.analyze(&line, CollectMode::WholeCommand);
		assert_eq!(
			describe(&line, &analysis),
			vec![
				"command 0: 0..9 alias=\"dir /w\"".to_string(),
				"  word 0+2 \"ll\" alias".to_string(),
				"  word 3+5 \"\\\"a b\\\"\" quoted".to_string(),
				"command 1: 10..20 cursor=10".to_string(),
				"  word 11+4 \"echo\"".to_string(),
				"  word 17+3 \"out\" redir".to_string(),
			]
		);
	}

	#[test]
	fn suggestion_row() {
		assert_eq!(suggestion("atus", "2", true), "suggest: \x1b[2matus\x1b[m");
		assert_eq!(suggestion("atus", "2", false), "suggest: atus");
	}

	#[test]
	fn suggestion_row_defaults_to_dim_gray() {
		let session = offline_session(&mut Config::default());
		assert_eq!(
			suggestion("atus", session.suggestion_color(), true),
			"suggest: \x1b[0;90matus\x1b[m"
		);
	}
}
