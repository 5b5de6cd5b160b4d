use std::path::PathBuf;

use serde::Serialize;
use splinedoc::spline::{DecodeOptions, InspectOptions, Result};

/// Input file and decode behaviour shared by every subcommand.
#[derive(clap::Args)]
pub struct SourceArgs {
	/// Path to the .splinecode file.
	pub path: PathBuf,
	/// Analyse the values decoded before a fault instead of emitting error documents.
	#[arg(long)]
	pub partial: bool,
	/// Maximum container nesting depth before decoding faults.
	#[arg(long = "max-depth", default_value_t = DecodeOptions::DEFAULT_MAX_DEPTH)]
	pub max_depth: u32,
}

impl SourceArgs {
	/// Build pipeline options from command-line flags.
	pub(crate) fn options(&self) -> InspectOptions {
		let mut options = InspectOptions {
			partial: self.partial,
			..InspectOptions::default()
		};
		options.decode.max_depth = self.max_depth;
		options
	}
}

/// Pretty-print a document as JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(value: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}
