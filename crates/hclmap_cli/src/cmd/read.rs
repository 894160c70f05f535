use hclmap::sdk::{Mapper, Object, ResourceMetaData, to_json};

use crate::cmd::util::{emit_json, print_state};
use crate::error::Result;
use crate::example;

#[derive(clap::Args)]
pub struct Args {
	#[arg(long)]
	pub json: bool,
}

/// Run the example read function and print the resulting state.
pub fn run(args: Args) -> Result<()> {
	let mut metadata = ResourceMetaData::new(Object::new(), Mapper::default());
	example::read(&mut metadata)?;

	if args.json {
		return emit_json(&to_json(metadata.state())?);
	}
	print_state(metadata.state())
}
