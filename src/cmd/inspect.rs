use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use splinedoc::spline::{Result, inspect_file};

use crate::cmd::util::SourceArgs;

/// Report file name inside the run directory.
pub const REPORT_FILENAME: &str = "spline_insight_report.json";
/// Translation file name inside the run directory.
pub const TRANSLATION_FILENAME: &str = "spline_translation.json";

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub source: SourceArgs,
	/// Parent directory for timestamped run directories.
	#[arg(long = "out-dir", default_value = "generated")]
	pub out_dir: PathBuf,
}

/// Inspect a file and write both documents into `<out-dir>/<timestamp>/`.
pub fn run(args: Args) -> Result<()> {
	let Args { source, out_dir } = args;

	let run_dir = out_dir.join(Utc::now().format("%Y-%m-%dT%H-%M-%S-%3fZ").to_string());
	fs::create_dir_all(&run_dir)?;
	log::info!("input: {}", source.path.display());
	log::info!("outputs in: {}", run_dir.display());

	let inspection = inspect_file(&source.path, &source.options());
	write_json(&run_dir.join(REPORT_FILENAME), &inspection.report)?;
	write_json(&run_dir.join(TRANSLATION_FILENAME), &inspection.translation)?;

	println!("{}", run_dir.display());
	Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(value)?;
	fs::write(path, text)?;
	log::info!("wrote {}", path.display());
	Ok(())
}
