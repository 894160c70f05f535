use std::collections::BTreeMap;

use serde::Serialize;

use crate::sdk::ScalarKind;

/// One object node: tag name to value.
pub type Object = BTreeMap<String, Value>;

/// Dynamic value node exchanged with the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
	/// String scalar.
	String(String),
	/// Integer scalar.
	Int(i64),
	/// Float scalar.
	Float(f64),
	/// Boolean scalar.
	Bool(bool),
	/// List of scalars.
	List(ScalarList),
	/// Map of scalars.
	Map(ScalarMap),
	/// Nested objects, in element order.
	Objects(Vec<Object>),
	/// Single object; produced by hosts, never by encode.
	Object(Object),
}

/// Ordered list of one scalar kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalarList {
	/// Strings.
	String(Vec<String>),
	/// Integers.
	Int(Vec<i64>),
	/// Floats.
	Float(Vec<f64>),
	/// Booleans.
	Bool(Vec<bool>),
}

/// String-keyed map of one scalar kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalarMap {
	/// String values.
	String(BTreeMap<String, String>),
	/// Integer values.
	Int(BTreeMap<String, i64>),
	/// Float values.
	Float(BTreeMap<String, f64>),
	/// Boolean values.
	Bool(BTreeMap<String, bool>),
}

impl Value {
	/// Logical kind label used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Value::String(_) => "string",
			Value::Int(_) => "integer",
			Value::Float(_) => "float",
			Value::Bool(_) => "bool",
			Value::List(list) => list.kind(),
			Value::Map(map) => map.kind(),
			Value::Objects(_) => "list of object",
			Value::Object(_) => "object",
		}
	}
}

impl ScalarList {
	/// Create an empty list of the given element kind.
	pub fn empty(kind: ScalarKind) -> Self {
		match kind {
			ScalarKind::String => ScalarList::String(Vec::new()),
			ScalarKind::Integer => ScalarList::Int(Vec::new()),
			ScalarKind::Float => ScalarList::Float(Vec::new()),
			ScalarKind::Bool => ScalarList::Bool(Vec::new()),
		}
	}

	/// Element kind of the list.
	pub fn element_kind(&self) -> ScalarKind {
		match self {
			ScalarList::String(_) => ScalarKind::String,
			ScalarList::Int(_) => ScalarKind::Integer,
			ScalarList::Float(_) => ScalarKind::Float,
			ScalarList::Bool(_) => ScalarKind::Bool,
		}
	}

	/// Logical kind label used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			ScalarList::String(_) => "list of string",
			ScalarList::Int(_) => "list of integer",
			ScalarList::Float(_) => "list of float",
			ScalarList::Bool(_) => "list of bool",
		}
	}

	/// Number of elements.
	pub fn len(&self) -> usize {
		match self {
			ScalarList::String(items) => items.len(),
			ScalarList::Int(items) => items.len(),
			ScalarList::Float(items) => items.len(),
			ScalarList::Bool(items) => items.len(),
		}
	}

	/// Whether the list has no elements.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl ScalarMap {
	/// Create an empty map of the given value kind.
	pub fn empty(kind: ScalarKind) -> Self {
		match kind {
			ScalarKind::String => ScalarMap::String(BTreeMap::new()),
			ScalarKind::Integer => ScalarMap::Int(BTreeMap::new()),
			ScalarKind::Float => ScalarMap::Float(BTreeMap::new()),
			ScalarKind::Bool => ScalarMap::Bool(BTreeMap::new()),
		}
	}

	/// Value kind of the map.
	pub fn element_kind(&self) -> ScalarKind {
		match self {
			ScalarMap::String(_) => ScalarKind::String,
			ScalarMap::Int(_) => ScalarKind::Integer,
			ScalarMap::Float(_) => ScalarKind::Float,
			ScalarMap::Bool(_) => ScalarKind::Bool,
		}
	}

	/// Logical kind label used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			ScalarMap::String(_) => "map of string",
			ScalarMap::Int(_) => "map of integer",
			ScalarMap::Float(_) => "map of float",
			ScalarMap::Bool(_) => "map of bool",
		}
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		match self {
			ScalarMap::String(items) => items.len(),
			ScalarMap::Int(items) => items.len(),
			ScalarMap::Float(items) => items.len(),
			ScalarMap::Bool(items) => items.len(),
		}
	}

	/// Whether the map has no entries.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::String(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Float(value)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}
