use std::collections::HashSet;
use std::fmt;

use crate::sdk::{FieldDecl, MapError, Result, ShapeDecl, ShapeRef, TypeInfo};

/// Scalar element kind of a field or collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
	/// UTF-8 string.
	String,
	/// Integer normalized to `i64`.
	Integer,
	/// Float normalized to `f64`.
	Float,
	/// Boolean.
	Bool,
}

impl ScalarKind {
	/// Logical kind label used in diagnostics.
	pub fn as_str(self) -> &'static str {
		match self {
			ScalarKind::String => "string",
			ScalarKind::Integer => "integer",
			ScalarKind::Float => "float",
			ScalarKind::Bool => "bool",
		}
	}

	fn classify(ty: &TypeInfo) -> Option<Self> {
		match ty {
			TypeInfo::String => Some(ScalarKind::String),
			TypeInfo::Bool => Some(ScalarKind::Bool),
			TypeInfo::Float { bits: 32 | 64 } => Some(ScalarKind::Float),
			TypeInfo::Int { .. } => Some(ScalarKind::Integer),
			_ => None,
		}
	}
}

/// Mapping kind of one resolved field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
	/// Single scalar.
	Scalar(ScalarKind),
	/// Ordered list of scalars.
	List(ScalarKind),
	/// String-keyed map of scalars.
	Map(ScalarKind),
	/// List whose elements are themselves shapes; the only form of nesting.
	NestedList(ShapeRef),
}

impl fmt::Display for FieldKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FieldKind::Scalar(kind) => f.write_str(kind.as_str()),
			FieldKind::List(kind) => write!(f, "list of {}", kind.as_str()),
			FieldKind::Map(kind) => write!(f, "map of {}", kind.as_str()),
			FieldKind::NestedList(_) => f.write_str("list of object"),
		}
	}
}

/// Resolved metadata for one mappable field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
	/// Rust field identifier.
	pub field: &'static str,
	/// Output key.
	pub tag: &'static str,
	/// Mapping kind.
	pub kind: FieldKind,
	/// Host-managed, output-only field.
	pub computed: bool,
}

/// Ordered descriptors of one struct's mappable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
	/// Struct name.
	pub name: &'static str,
	/// Descriptors in declaration order.
	pub fields: Vec<FieldDescriptor>,
}

impl Shape {
	/// Look up a descriptor by tag.
	pub fn field_by_tag(&self, tag: &str) -> Option<&FieldDescriptor> {
		self.fields.iter().find(|field| field.tag == tag)
	}

	/// Shapes referenced by nested list fields, in declaration order.
	pub fn nested(&self) -> impl Iterator<Item = ShapeRef> + '_ {
		self.fields.iter().filter_map(|field| match field.kind {
			FieldKind::NestedList(shape) => Some(shape),
			_ => None,
		})
	}
}

/// Resolve a static declaration into field descriptors.
///
/// Untagged fields are skipped. Nested shapes are referenced, not resolved;
/// see [`crate::sdk::Registry`] for closure validation.
pub fn resolve(decl: &ShapeDecl) -> Result<Shape> {
	let mut seen = HashSet::new();
	let mut fields = Vec::with_capacity(decl.fields.len());

	for item in &decl.fields {
		let Some(tag) = item.tag else {
			continue;
		};
		if tag.is_empty() {
			return Err(MapError::EmptyTag {
				shape: decl.name,
				field: item.field,
			});
		}
		if !seen.insert(tag) {
			return Err(MapError::DuplicateTag { shape: decl.name, tag });
		}

		let kind = classify(&item.ty).ok_or_else(|| unrecognized(decl, item, tag))?;
		fields.push(FieldDescriptor {
			field: item.field,
			tag,
			kind,
			computed: item.computed,
		});
	}

	Ok(Shape { name: decl.name, fields })
}

fn classify(ty: &TypeInfo) -> Option<FieldKind> {
	if let Some(kind) = ScalarKind::classify(ty) {
		return Some(FieldKind::Scalar(kind));
	}

	match ty {
		TypeInfo::List(item) => match item.as_ref() {
			TypeInfo::Object(shape) => Some(FieldKind::NestedList(*shape)),
			other => ScalarKind::classify(other).map(FieldKind::List),
		},
		TypeInfo::Map { key, value } if **key == TypeInfo::String => ScalarKind::classify(value).map(FieldKind::Map),
		_ => None,
	}
}

fn unrecognized(decl: &ShapeDecl, item: &FieldDecl, tag: &'static str) -> MapError {
	MapError::UnrecognizedKind {
		shape: decl.name,
		field: item.field,
		tag,
		type_name: item.ty.describe(),
	}
}
