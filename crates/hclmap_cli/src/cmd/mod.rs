/// Create/update command over a JSON state file.
pub mod apply;
/// Read command.
pub mod read;
/// Shape inspection command.
pub mod shape;
mod util;
