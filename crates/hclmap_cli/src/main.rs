#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod error;
mod example;

#[derive(Parser)]
#[command(name = "hclmap", about = "Typed resource model to state tree mapping demo")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the resolved field descriptors of the example resource.
	Shape(cmd::shape::Args),
	/// Encode the object returned by the example read function.
	Read(cmd::read::Args),
	/// Run the example create/update function against a JSON state file.
	Apply(cmd::apply::Args),
}

fn main() {
	init_tracing();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_tracing() {
	let filter = EnvFilter::try_from_env("HCLMAP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn run() -> error::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Shape(args) => cmd::shape::run(args),
		Commands::Read(args) => cmd::read::run(args),
		Commands::Apply(args) => cmd::apply::run(args),
	}
}
