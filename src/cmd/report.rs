use splinedoc::spline::{Result, inspect_file};

use crate::cmd::util::{SourceArgs, emit_json};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub source: SourceArgs,
}

/// Decode and analyse a file, printing the insight report.
pub fn run(args: Args) -> Result<()> {
	let inspection = inspect_file(&args.source.path, &args.source.options());
	emit_json(&inspection.report)
}
