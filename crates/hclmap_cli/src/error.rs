use std::path::PathBuf;

use hclmap::sdk::MapError;
use thiserror::Error;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// State file could not be read.
	#[error("read {}: {source}", path.display())]
	Read {
		/// State file path.
		path: PathBuf,
		/// Underlying I/O failure.
		source: std::io::Error,
	},
	/// State file is not valid JSON.
	#[error("parse {}: {source}", path.display())]
	Parse {
		/// State file path.
		path: PathBuf,
		/// Underlying JSON failure.
		source: serde_json::Error,
	},
	/// Mapping failure from the engine.
	#[error(transparent)]
	Map(#[from] MapError),
}
