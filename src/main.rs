#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "splinedoc", about = "Spline .splinecode inspection tools")]
struct Cli {
	/// Log debug detail to stderr.
	#[arg(short, long, global = true)]
	verbose: bool,
	/// Only log warnings and errors.
	#[arg(short, long, global = true, conflicts_with = "verbose")]
	quiet: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Write the insight report and translation into a timestamped directory.
	Inspect(cmd::inspect::Args),
	/// Print the insight report as JSON.
	Report(cmd::report::Args),
	/// Print the per-item translation as JSON.
	Translate(cmd::translate::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> splinedoc::spline::Result<()> {
	let cli = Cli::parse();
	init_logging(cli.verbose, cli.quiet);

	match cli.command {
		Commands::Inspect(args) => cmd::inspect::run(args),
		Commands::Report(args) => cmd::report::run(args),
		Commands::Translate(args) => cmd::translate::run(args),
	}
}

fn init_logging(verbose: bool, quiet: bool) {
	let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
	if quiet {
		builder.filter_level(log::LevelFilter::Warn);
	} else if verbose {
		builder.filter_level(log::LevelFilter::Debug);
	}
	builder.target(env_logger::Target::Stderr).init();
}
