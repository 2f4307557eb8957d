use std::{error::Error, io::Write};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cubenotation::prelude::*;

/// Combine and simplify Rubik's Cube move sequences
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// The sequence to simplify, e.g. "R U U R' U2"
	#[arg(short, long, default_value_t = String::new())]
	sequence: String,

	/// Append a random scramble with the given number of moves
	#[arg(short, long, default_value_t = 0)]
	random: usize,

	/// Remove moves which cancelled out
	#[arg(long, default_value_t = false)]
	compact: bool,

	/// Output the sequence which undoes the result
	#[arg(long, default_value_t = false)]
	inverse: bool,

	/// Output the number of moves as well
	#[arg(short, long, default_value_t = false)]
	length: bool,

	/// Print the output to a file rather to the stdout
	#[arg(short, long, default_value_t = String::new())]
	output: String,
}

/// Log level used when RUST_LOG is unset or unusable
const DEFAULT_LOG_FILTER: &str = "warn";

/// The directives from RUST_LOG, or warnings only
fn log_filter(directives: Option<String>) -> EnvFilter {
	directives
		.filter(|d| !d.trim().is_empty())
		.and_then(|d| EnvFilter::try_new(d).ok())
		.unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> Result<(), Box<dyn Error>> {
	let args = Args::parse();

	tracing_subscriber::fmt()
		.with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
		.with_writer(std::io::stderr)
		.init();

	// Whether to redirect it to the stdout or a file
	let mut out: Box<dyn std::io::Write> = if args.output.is_empty() {
		Box::new(std::io::stdout())
	} else {
		Box::new(std::fs::File::create(&args.output)?)
	};

	let mut seq = MoveSequence::compose(parse_moves(&args.sequence)?);
	info!(moves = seq.len(), "composed input sequence");

	if args.random > 0 {
		seq = seq.append_all(&random_sequence(args.random));
	}

	if args.compact {
		seq = seq.compacted();
	}

	if args.inverse {
		seq = seq.inverse();
	}

	if args.length {
		writeln!(out, "{} (len={})", seq, seq.len())?;
	} else {
		writeln!(out, "{}", seq)?;
	}

	Ok(())
}
