use hclmap::sdk::{MapError, Object, to_json};
use serde::Serialize;

use crate::error::Result;

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload).map_err(MapError::from)?;
	println!("{text}");
	Ok(())
}

/// Print a state tree as `tag = value` lines.
pub(crate) fn print_state(state: &Object) -> Result<()> {
	let serde_json::Value::Object(rendered) = to_json(state)? else {
		return Ok(());
	};
	for (tag, value) in &rendered {
		let rendered = serde_json::to_string(value).map_err(MapError::from)?;
		println!("{tag} = {rendered}");
	}
	Ok(())
}
