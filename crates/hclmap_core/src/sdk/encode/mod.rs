use std::collections::BTreeMap;

use crate::sdk::native::Direction;
use crate::sdk::{FieldDescriptor, FieldKind, MapError, Mapper, Model, Native, Object, Result, ScalarKind, ScalarList, ScalarMap, Value};

/// Encode a typed object with the global registry and the tracing logger.
pub fn encode<T: Model>(value: &T) -> Result<Object> {
	Mapper::default().encode(value)
}

impl Mapper<'_> {
	/// Encode a typed object into an object node.
	///
	/// Every tagged field produces a key, zero values and empty collections
	/// included. Computed fields are encoded like any other field.
	pub fn encode<T: Model>(&self, value: &T) -> Result<Object> {
		let shape = self.registry().resolve::<T>()?;
		let mut out = Object::new();

		for field in &shape.fields {
			let native = value
				.get_field(field.field, self)
				.map_err(|err| err.into_map_error(shape.name, field.tag, Direction::Encode))?;
			let node = encode_field(field, native)?;
			self.logger().trace(format_args!("encode {}.{}: {}", shape.name, field.tag, node.kind()));
			out.insert(field.tag.to_owned(), node);
		}

		Ok(out)
	}
}

fn encode_field(field: &FieldDescriptor, native: Native) -> Result<Value> {
	let encoded = match (field.kind, native) {
		(FieldKind::Scalar(kind), native) => encode_scalar(kind, native),
		(FieldKind::List(kind), Native::List(items)) => encode_list(kind, items).map(Value::List),
		(FieldKind::Map(kind), Native::Map(entries)) => encode_map(kind, entries).map(Value::Map),
		(FieldKind::NestedList(_), Native::List(items)) => items
			.into_iter()
			.map(|item| match item {
				Native::Object(object) => Ok(object),
				other => Err(other),
			})
			.collect::<std::result::Result<Vec<_>, _>>()
			.map(Value::Objects),
		(_, other) => Err(other),
	};

	encoded.map_err(|actual| MapError::TypeMismatch {
		tag: field.tag.to_owned(),
		expected: field.kind.to_string(),
		actual: actual.kind(),
	})
}

fn encode_scalar(kind: ScalarKind, native: Native) -> std::result::Result<Value, Native> {
	match kind {
		ScalarKind::String => native.into_string().map(Value::String),
		ScalarKind::Integer => native.into_int().map(Value::Int),
		ScalarKind::Float => native.into_float().map(Value::Float),
		ScalarKind::Bool => native.into_bool().map(Value::Bool),
	}
}

fn encode_list(kind: ScalarKind, items: Vec<Native>) -> std::result::Result<ScalarList, Native> {
	let items = items.into_iter();
	Ok(match kind {
		ScalarKind::String => ScalarList::String(items.map(Native::into_string).collect::<std::result::Result<_, _>>()?),
		ScalarKind::Integer => ScalarList::Int(items.map(Native::into_int).collect::<std::result::Result<_, _>>()?),
		ScalarKind::Float => ScalarList::Float(items.map(Native::into_float).collect::<std::result::Result<_, _>>()?),
		ScalarKind::Bool => ScalarList::Bool(items.map(Native::into_bool).collect::<std::result::Result<_, _>>()?),
	})
}

fn encode_map(kind: ScalarKind, entries: Vec<(Native, Native)>) -> std::result::Result<ScalarMap, Native> {
	Ok(match kind {
		ScalarKind::String => ScalarMap::String(collect_entries(entries, Native::into_string)?),
		ScalarKind::Integer => ScalarMap::Int(collect_entries(entries, Native::into_int)?),
		ScalarKind::Float => ScalarMap::Float(collect_entries(entries, Native::into_float)?),
		ScalarKind::Bool => ScalarMap::Bool(collect_entries(entries, Native::into_bool)?),
	})
}

fn collect_entries<T>(entries: Vec<(Native, Native)>, value: fn(Native) -> std::result::Result<T, Native>) -> std::result::Result<BTreeMap<String, T>, Native> {
	let mut out = BTreeMap::new();
	for (key, item) in entries {
		out.insert(key.into_string()?, value(item)?);
	}
	Ok(out)
}
