//! Kerf command-line driver.
//!
//! Reads command lines from stdin and, for each one, prints the line drawn
//! with its classification faces, optionally the word breakdown, and any
//! history suggestion. Executable recognition runs in the background; the
//! driver gives it a short window to settle before printing.

mod cli;
mod report;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use kerf_config::Config;
use kerf_line::{CollectMode, Line, LineBuffer, Session};

use crate::cli::Cli;

/// Re-classification passes after recognition results arrive.
const RECOGNIZER_PASSES: usize = 4;
const RECOGNIZER_WAIT: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let config = match &cli.config {
		Some(path) => Config::load(path).with_context(|| format!("failed to load config from {}", path.display()))?,
		None => Config::default(),
	};
	let mut history = match &cli.history {
		Some(path) => read_history(path)?,
		None => Vec::new(),
	};
	tracing::info!(history = history.len(), "starting kerf");

	let mut session = Session::new(&config);
	let stdin = io::stdin();
	let mut out = io::stdout().lock();
	for text in stdin.lock().lines() {
		let line = Line::at_end(text.context("failed to read stdin")?);
		print_line(&mut session, &line, &history, &cli, &mut out)?;
		session.end_line();
		if !line.is_empty() {
			history.push(line.text().to_string());
		}
	}
	Ok(())
}

fn print_line(session: &mut Session, line: &Line, history: &[String], cli: &Cli, out: &mut impl Write) -> Result<()> {
	let color = !cli.no_color;

	session.refresh(line);
	for _ in 0..RECOGNIZER_PASSES {
		let Some(recognizer) = session.recognizer() else {
			break;
		};
		if recognizer.is_idle() && !recognizer.ready_signal().is_set() {
			break;
		}
		if !recognizer.ready_signal().wait_timeout(RECOGNIZER_WAIT) {
			tracing::debug!("recognition still pending");
			break;
		}
		session.poll_recognizer();
		session.refresh(line);
	}

	if let Some(classifications) = session.last_classifications() {
		writeln!(out, "{}", report::render(line, classifications, session.palette(), color))?;
	}

	if cli.words {
		let analysis = session.analyze(line, CollectMode::WholeCommand);
		for row in report::describe(line, &analysis) {
			writeln!(out, "{row}")?;
		}
	}

	let shown = session.suggest(line, history, None).map(str::to_string);
	if let Some(shown) = shown {
		writeln!(out, "{}", report::suggestion(&shown, session.suggestion_color(), color))?;
	}
	Ok(())
}

fn read_history(path: &Path) -> Result<Vec<String>> {
	let content = std::fs::read_to_string(path).with_context(|| format!("failed to read history from {}", path.display()))?;
	Ok(content.lines().filter(|entry| !entry.trim().is_empty()).map(str::to_string).collect())
}

fn setup_tracing(verbose: bool) {
	use std::fs::OpenOptions;

	use tracing_subscriber::EnvFilter;
	use tracing_subscriber::prelude::*;

	let filter = || {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			if verbose {
				EnvFilter::new("kerf=debug,info")
			} else {
				EnvFilter::new("kerf=info,warn")
			}
		})
	};

	// KERF_LOG_DIR keeps stderr clean for piped output.
	if let Some(log_dir) = std::env::var("KERF_LOG_DIR").ok().map(PathBuf::from)
		&& std::fs::create_dir_all(&log_dir).is_ok()
	{
		let log_path = log_dir.join(format!("kerf.{}.log", std::process::id()));
		if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
			let file_layer = tracing_subscriber::fmt::layer()
				.with_writer(file)
				.with_ansi(false)
				.with_target(true);

			tracing_subscriber::registry().with(filter()).with(file_layer).init();
			tracing::info!(path = ?log_path, "tracing initialized");
			return;
		}
	}

	tracing_subscriber::fmt()
		.with_env_filter(filter())
		.with_writer(io::stderr)
		.init();
}
