use crate::sdk::{Logger, Mapper, Model, Object, Result};

/// Boundary handed to resource lifecycle functions.
///
/// Holds the current state tree and the resource identifier; typed access
/// goes exclusively through [`ResourceMetaData::encode`] and
/// [`ResourceMetaData::decode`].
#[derive(Debug)]
pub struct ResourceMetaData<'a> {
	state: Object,
	id: Option<String>,
	mapper: Mapper<'a>,
}

impl<'a> ResourceMetaData<'a> {
	/// Wrap a state tree received from the host.
	pub fn new(state: Object, mapper: Mapper<'a>) -> Self {
		Self { state, id: None, mapper }
	}

	/// Replace the state with the encoded form of `value`.
	///
	/// On failure the previous state is left untouched.
	pub fn encode<T: Model>(&mut self, value: &T) -> Result<()> {
		self.state = self.mapper.encode(value)?;
		Ok(())
	}

	/// Decode the current state into `T`.
	pub fn decode<T: Model>(&self) -> Result<T> {
		self.mapper.decode(&self.state)
	}

	/// Record the resource identifier.
	pub fn set_id(&mut self, id: impl Into<String>) {
		self.id = Some(id.into());
	}

	/// Resource identifier, once set.
	pub fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}

	/// Current state tree.
	pub fn state(&self) -> &Object {
		&self.state
	}

	/// Consume the metadata, returning the state tree.
	pub fn into_state(self) -> Object {
		self.state
	}

	/// Injected logging collaborator.
	pub fn logger(&self) -> &'a dyn Logger {
		self.mapper.logger()
	}
}
