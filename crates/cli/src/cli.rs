use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "kerf")]
#[command(about = "Classify, color and suggest completions for command lines read from stdin")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Configuration file (TOML)
	#[arg(short, long, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// History file, one command per line, oldest first
	#[arg(long, value_name = "PATH")]
	pub history: Option<PathBuf>,

	/// Print the words and command segments of each line
	#[arg(short, long)]
	pub words: bool,

	/// Print faces as plain text instead of ANSI colors
	#[arg(long)]
	pub no_color: bool,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}
