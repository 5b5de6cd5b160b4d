use splinedoc::spline::{Result, inspect_file};

use crate::cmd::util::{SourceArgs, emit_json};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub source: SourceArgs,
}

/// Decode a file and print its per-item translation.
pub fn run(args: Args) -> Result<()> {
	let inspection = inspect_file(&args.source.path, &args.source.options());
	emit_json(&inspection.translation)
}
