use std::collections::BTreeMap;

use serde_json::Value as Json;

use crate::sdk::{FieldDescriptor, FieldKind, MapError, Mapper, Model, Object, Result, ScalarKind, ScalarList, ScalarMap, Shape, Value};

/// Render an object node as JSON.
///
/// NaN and infinite floats are rejected with [`MapError::NonFiniteFloat`];
/// serde would render them as `null`, which reads back as an absent key.
pub fn to_json(object: &Object) -> Result<Json> {
	ensure_finite(object, "")?;
	Ok(serde_json::to_value(object)?)
}

fn ensure_finite(object: &Object, prefix: &str) -> Result<()> {
	for (key, value) in object {
		let path = format!("{prefix}{key}");
		match value {
			Value::Float(item) => finite(&path, *item)?,
			Value::List(ScalarList::Float(items)) => {
				for (index, item) in items.iter().enumerate() {
					finite(&format!("{path}[{index}]"), *item)?;
				}
			}
			Value::Map(ScalarMap::Float(entries)) => {
				for (entry, item) in entries {
					finite(&format!("{path}.{entry}"), *item)?;
				}
			}
			Value::Objects(items) => {
				for (index, item) in items.iter().enumerate() {
					ensure_finite(item, &format!("{path}[{index}]."))?;
				}
			}
			Value::Object(item) => ensure_finite(item, &format!("{path}."))?,
			_ => {}
		}
	}
	Ok(())
}

fn finite(tag: &str, value: f64) -> Result<()> {
	if value.is_finite() {
		return Ok(());
	}
	Err(MapError::NonFiniteFloat { tag: tag.to_owned(), value })
}

impl Mapper<'_> {
	/// Convert a JSON state document into an object node following `T`'s shape.
	///
	/// JSON carries no element type for empty arrays, so the shape decides the
	/// container kind. `null` is treated like a missing key.
	pub fn object_from_json<T: Model>(&self, json: &Json) -> Result<Object> {
		let shape = self.registry().resolve::<T>()?;
		self.object_from_json_shape(&shape, json)
	}

	/// Convert a JSON state document and decode it into `T`.
	pub fn decode_json<T: Model>(&self, json: &Json) -> Result<T> {
		let object = self.object_from_json::<T>(json)?;
		self.decode(&object)
	}

	/// Encode `T` and render the result as JSON.
	pub fn encode_json<T: Model>(&self, value: &T) -> Result<Json> {
		to_json(&self.encode(value)?)
	}

	fn object_from_json_shape(&self, shape: &Shape, json: &Json) -> Result<Object> {
		let Json::Object(entries) = json else {
			return Err(MapError::NotAnObject { actual: json_kind(json) });
		};

		let mut out = Object::new();
		for field in &shape.fields {
			match entries.get(field.tag) {
				None | Some(Json::Null) => {}
				Some(value) => {
					out.insert(field.tag.to_owned(), self.field_from_json(field, value)?);
				}
			}
		}
		Ok(out)
	}

	fn field_from_json(&self, field: &FieldDescriptor, json: &Json) -> Result<Value> {
		let tag = field.tag;
		match field.kind {
			FieldKind::Scalar(kind) => scalar_from_json(kind, tag, json),
			FieldKind::List(kind) => {
				let items = expect_array(field, json)?;
				let at = |index: usize| format!("{tag}[{index}]");
				let list = match kind {
					ScalarKind::String => ScalarList::String(items.iter().enumerate().map(|(i, item)| json_string(&at(i), item)).collect::<Result<_>>()?),
					ScalarKind::Integer => ScalarList::Int(items.iter().enumerate().map(|(i, item)| json_int(&at(i), item)).collect::<Result<_>>()?),
					ScalarKind::Float => ScalarList::Float(items.iter().enumerate().map(|(i, item)| json_float(&at(i), item)).collect::<Result<_>>()?),
					ScalarKind::Bool => ScalarList::Bool(items.iter().enumerate().map(|(i, item)| json_bool(&at(i), item)).collect::<Result<_>>()?),
				};
				Ok(Value::List(list))
			}
			FieldKind::Map(kind) => {
				let Json::Object(entries) = json else {
					return Err(mismatch(field, json));
				};
				let map = match kind {
					ScalarKind::String => ScalarMap::String(map_from_json(tag, entries, json_string)?),
					ScalarKind::Integer => ScalarMap::Int(map_from_json(tag, entries, json_int)?),
					ScalarKind::Float => ScalarMap::Float(map_from_json(tag, entries, json_float)?),
					ScalarKind::Bool => ScalarMap::Bool(map_from_json(tag, entries, json_bool)?),
				};
				Ok(Value::Map(map))
			}
			FieldKind::NestedList(nested) => {
				let items = expect_array(field, json)?;
				let shape = self.registry().resolve_ref(nested)?;
				let mut objects = Vec::with_capacity(items.len());
				for (index, item) in items.iter().enumerate() {
					if !item.is_object() {
						return Err(MapError::TypeMismatch {
							tag: format!("{tag}[{index}]"),
							expected: "object".to_owned(),
							actual: json_kind(item),
						});
					}
					let object = self.object_from_json_shape(&shape, item).map_err(|err| MapError::NestedDecodeFailed {
						tag: tag.to_owned(),
						index,
						source: Box::new(err),
					})?;
					objects.push(object);
				}
				Ok(Value::Objects(objects))
			}
		}
	}
}

fn scalar_from_json(kind: ScalarKind, tag: &str, json: &Json) -> Result<Value> {
	match kind {
		ScalarKind::String => json_string(tag, json).map(Value::String),
		ScalarKind::Integer => json_int(tag, json).map(Value::Int),
		ScalarKind::Float => json_float(tag, json).map(Value::Float),
		ScalarKind::Bool => json_bool(tag, json).map(Value::Bool),
	}
}

fn map_from_json<T>(tag: &str, entries: &serde_json::Map<String, Json>, value: fn(&str, &Json) -> Result<T>) -> Result<BTreeMap<String, T>> {
	let mut out = BTreeMap::new();
	for (key, item) in entries {
		out.insert(key.clone(), value(&format!("{tag}.{key}"), item)?);
	}
	Ok(out)
}

fn expect_array<'j>(field: &FieldDescriptor, json: &'j Json) -> Result<&'j Vec<Json>> {
	json.as_array().ok_or_else(|| mismatch(field, json))
}

fn mismatch(field: &FieldDescriptor, json: &Json) -> MapError {
	MapError::TypeMismatch {
		tag: field.tag.to_owned(),
		expected: field.kind.to_string(),
		actual: json_kind(json),
	}
}

fn scalar_mismatch(tag: &str, expected: ScalarKind, json: &Json) -> MapError {
	MapError::TypeMismatch {
		tag: tag.to_owned(),
		expected: expected.as_str().to_owned(),
		actual: json_kind(json),
	}
}

fn json_string(tag: &str, json: &Json) -> Result<String> {
	json.as_str().map(str::to_owned).ok_or_else(|| scalar_mismatch(tag, ScalarKind::String, json))
}

fn json_int(tag: &str, json: &Json) -> Result<i64> {
	if let Some(value) = json.as_i64() {
		return Ok(value);
	}
	if let Some(value) = json.as_u64() {
		return Err(MapError::IntegerOverflow {
			tag: tag.to_owned(),
			value: i128::from(value),
			target: "i64",
		});
	}
	Err(scalar_mismatch(tag, ScalarKind::Integer, json))
}

fn json_float(tag: &str, json: &Json) -> Result<f64> {
	json.as_f64().ok_or_else(|| scalar_mismatch(tag, ScalarKind::Float, json))
}

fn json_bool(tag: &str, json: &Json) -> Result<bool> {
	json.as_bool().ok_or_else(|| scalar_mismatch(tag, ScalarKind::Bool, json))
}

fn json_kind(json: &Json) -> &'static str {
	match json {
		Json::Null => "null",
		Json::Bool(_) => "bool",
		Json::Number(number) if number.is_f64() => "float",
		Json::Number(_) => "integer",
		Json::String(_) => "string",
		Json::Array(_) => "array",
		Json::Object(_) => "object",
	}
}

#[cfg(test)]
mod tests;
