use crate::sdk::native::Direction;
use crate::sdk::{FieldDescriptor, FieldKind, MapError, Mapper, Model, Native, Object, Result, ScalarKind, Value};

/// Decode a typed object with the global registry and the tracing logger.
pub fn decode<T: Model>(node: &Object) -> Result<T> {
	Mapper::default().decode(node)
}

impl Mapper<'_> {
	/// Decode an object node into a typed object.
	///
	/// Absent keys leave the field at its `Default` value. The first field
	/// failure aborts the whole decode.
	pub fn decode<T: Model>(&self, node: &Object) -> Result<T> {
		let shape = self.registry().resolve::<T>()?;
		let mut out = T::default();

		for field in &shape.fields {
			let Some(value) = node.get(field.tag) else {
				self.logger().trace(format_args!("decode {}.{}: absent", shape.name, field.tag));
				continue;
			};
			let native = decode_field(field, value)?;
			out.set_field(field.field, native, self)
				.map_err(|err| err.into_map_error(shape.name, field.tag, Direction::Decode))?;
			self.logger().trace(format_args!("decode {}.{}: {}", shape.name, field.tag, value.kind()));
		}

		for key in node.keys().filter(|key| shape.field_by_tag(key).is_none()) {
			self.logger().trace(format_args!("decode {}: ignoring unknown key {key:?}", shape.name));
		}

		Ok(out)
	}
}

fn decode_field(field: &FieldDescriptor, value: &Value) -> Result<Native> {
	match (field.kind, value) {
		(FieldKind::Scalar(ScalarKind::String), Value::String(value)) => Ok(Native::String(value.clone())),
		(FieldKind::Scalar(ScalarKind::Integer), Value::Int(value)) => Ok(Native::Int(*value)),
		(FieldKind::Scalar(ScalarKind::Float), Value::Float(value)) => Ok(Native::Float(*value)),
		(FieldKind::Scalar(ScalarKind::Bool), Value::Bool(value)) => Ok(Native::Bool(*value)),
		(FieldKind::List(kind), Value::List(list)) if list.element_kind() == kind => Ok(Native::from(list)),
		(FieldKind::Map(kind), Value::Map(map)) if map.element_kind() == kind => Ok(Native::from(map)),
		(FieldKind::NestedList(_), Value::Objects(items)) => Ok(Native::List(items.iter().cloned().map(Native::Object).collect())),
		(kind, other) => Err(MapError::TypeMismatch {
			tag: field.tag.to_owned(),
			expected: kind.to_string(),
			actual: other.kind(),
		}),
	}
}

#[cfg(test)]
mod tests;
