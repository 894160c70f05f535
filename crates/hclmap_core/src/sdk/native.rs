use thiserror::Error;

use crate::sdk::{MapError, Object, ScalarList, ScalarMap};

/// Type-erased view of one field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Native {
	/// String field.
	String(String),
	/// Integer field of any width, widened to `i64`.
	Int(i64),
	/// Float field, widened to `f64`.
	Float(f64),
	/// Boolean field.
	Bool(bool),
	/// Elements of a `Vec` field.
	List(Vec<Native>),
	/// Key/value pairs of a map field.
	Map(Vec<(Native, Native)>),
	/// Encoded nested struct.
	Object(Object),
}

impl Native {
	/// Logical kind label used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Native::String(_) => "string",
			Native::Int(_) => "integer",
			Native::Float(_) => "float",
			Native::Bool(_) => "bool",
			Native::List(_) => "list",
			Native::Map(_) => "map",
			Native::Object(_) => "object",
		}
	}

	pub(crate) fn into_string(self) -> Result<String, Native> {
		match self {
			Native::String(value) => Ok(value),
			other => Err(other),
		}
	}

	pub(crate) fn into_int(self) -> Result<i64, Native> {
		match self {
			Native::Int(value) => Ok(value),
			other => Err(other),
		}
	}

	pub(crate) fn into_float(self) -> Result<f64, Native> {
		match self {
			Native::Float(value) => Ok(value),
			other => Err(other),
		}
	}

	pub(crate) fn into_bool(self) -> Result<bool, Native> {
		match self {
			Native::Bool(value) => Ok(value),
			other => Err(other),
		}
	}
}

impl From<&ScalarList> for Native {
	fn from(list: &ScalarList) -> Self {
		match list {
			ScalarList::String(items) => Native::List(items.iter().cloned().map(Native::String).collect()),
			ScalarList::Int(items) => Native::List(items.iter().copied().map(Native::Int).collect()),
			ScalarList::Float(items) => Native::List(items.iter().copied().map(Native::Float).collect()),
			ScalarList::Bool(items) => Native::List(items.iter().copied().map(Native::Bool).collect()),
		}
	}
}

impl From<&ScalarMap> for Native {
	fn from(map: &ScalarMap) -> Self {
		fn entries<T: Clone>(items: &std::collections::BTreeMap<String, T>, wrap: fn(T) -> Native) -> Native {
			Native::Map(items.iter().map(|(key, value)| (Native::String(key.clone()), wrap(value.clone()))).collect())
		}

		match map {
			ScalarMap::String(items) => entries(items, Native::String),
			ScalarMap::Int(items) => entries(items, Native::Int),
			ScalarMap::Float(items) => entries(items, Native::Float),
			ScalarMap::Bool(items) => entries(items, Native::Bool),
		}
	}
}

/// Which half of the engine a field failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
	Encode,
	Decode,
}

/// Failure converting between a native field and its [`Native`] view.
///
/// Carries no tag; the encoder and decoder attach the field context.
#[derive(Debug, Error)]
pub enum NativeError {
	/// View kind does not fit the native type.
	#[error("expected {expected}, got {actual}")]
	Mismatch {
		/// Kind the native type accepts.
		expected: &'static str,
		/// Kind that was supplied.
		actual: &'static str,
	},
	/// Integer does not fit the target width.
	#[error("{value} does not fit in {target}")]
	Overflow {
		/// Offending value.
		value: i128,
		/// Target native type.
		target: &'static str,
	},
	/// Finite float does not fit the target width.
	#[error("{value} does not fit in {target}")]
	FloatOutOfRange {
		/// Offending value.
		value: f64,
		/// Target native type.
		target: &'static str,
	},
	/// Nested object element failed to map.
	#[error("element {index}: {source}")]
	Nested {
		/// Element index inside the enclosing list.
		index: usize,
		/// Inner failure.
		source: Box<MapError>,
	},
	/// `Model` accessor was asked for a field it does not declare.
	#[error("unknown field {0}")]
	UnknownField(String),
}

impl NativeError {
	/// Wrap a nested mapping failure; the index is fixed up by the enclosing list.
	pub fn nested(source: MapError) -> Self {
		Self::Nested {
			index: 0,
			source: Box::new(source),
		}
	}

	/// Record the element index for a nested failure.
	pub fn at(self, index: usize) -> Self {
		match self {
			Self::Nested { source, .. } => Self::Nested { index, source },
			other => other,
		}
	}

	/// Attach shape and tag context.
	pub(crate) fn into_map_error(self, shape: &'static str, tag: &str, direction: Direction) -> MapError {
		match self {
			Self::Mismatch { expected, actual } => MapError::TypeMismatch {
				tag: tag.to_owned(),
				expected: expected.to_owned(),
				actual,
			},
			Self::Overflow { value, target } => MapError::IntegerOverflow {
				tag: tag.to_owned(),
				value,
				target,
			},
			Self::FloatOutOfRange { value, target } => MapError::FloatOutOfRange {
				tag: tag.to_owned(),
				value,
				target,
			},
			Self::Nested { index, source } => match direction {
				Direction::Encode => MapError::NestedEncodeFailed {
					tag: tag.to_owned(),
					index,
					source,
				},
				Direction::Decode => MapError::NestedDecodeFailed {
					tag: tag.to_owned(),
					index,
					source,
				},
			},
			Self::UnknownField(field) => MapError::UnknownField { shape, field },
		}
	}

	pub(crate) fn mismatch(expected: &'static str, actual: &Native) -> Self {
		Self::Mismatch {
			expected,
			actual: actual.kind(),
		}
	}
}
