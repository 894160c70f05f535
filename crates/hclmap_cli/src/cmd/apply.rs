use std::path::PathBuf;

use hclmap::sdk::{Mapper, ResourceMetaData, to_json};

use crate::cmd::util::{emit_json, print_state};
use crate::error::{CliError, Result};
use crate::example::{self, ExampleObj};

#[derive(clap::Args)]
pub struct Args {
	pub state: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Feed a JSON state file through the example create/update function.
pub fn run(args: Args) -> Result<()> {
	let Args { state: path, json } = args;

	let bytes = std::fs::read(&path).map_err(|source| CliError::Read { path: path.clone(), source })?;
	let document: serde_json::Value = serde_json::from_slice(&bytes).map_err(|source| CliError::Parse { path: path.clone(), source })?;

	let mapper = Mapper::default();
	let state = mapper.object_from_json::<ExampleObj>(&document)?;
	let mut metadata = ResourceMetaData::new(state, mapper);
	example::create_update(&mut metadata)?;

	let id = metadata.id().map(str::to_owned);
	if json {
		return emit_json(&ApplyJson {
			id,
			state: to_json(metadata.state())?,
		});
	}

	println!("id: {}", id.as_deref().unwrap_or("<unset>"));
	print_state(metadata.state())
}

#[derive(serde::Serialize)]
struct ApplyJson {
	id: Option<String>,
	state: serde_json::Value,
}
