use std::any::TypeId;
use std::fmt;

use crate::sdk::{Mapper, Native, NativeError};

/// Static field list of one struct, as declared by its tags.
#[derive(Debug, Clone)]
pub struct ShapeDecl {
	/// Struct name.
	pub name: &'static str,
	/// Field declarations in source order.
	pub fields: Vec<FieldDecl>,
}

/// One declared struct field.
#[derive(Debug, Clone)]
pub struct FieldDecl {
	/// Rust field identifier.
	pub field: &'static str,
	/// Mapping-name tag; `None` excludes the field from mapping.
	pub tag: Option<&'static str>,
	/// Host-managed, output-only field.
	pub computed: bool,
	/// Native type description.
	pub ty: TypeInfo,
}

/// Closed description of a field's native type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeInfo {
	/// `String`.
	String,
	/// Primitive integer of any width.
	Int {
		/// Width in bits.
		bits: u8,
		/// `true` for `iN`, `false` for `uN`.
		signed: bool,
	},
	/// `f32` or `f64`.
	Float {
		/// Width in bits.
		bits: u8,
	},
	/// `bool`.
	Bool,
	/// `Vec<T>`.
	List(Box<TypeInfo>),
	/// `HashMap<K, V>` or `BTreeMap<K, V>`.
	Map {
		/// Key type; only `String` resolves.
		key: Box<TypeInfo>,
		/// Value type.
		value: Box<TypeInfo>,
	},
	/// Type implementing [`Model`].
	Object(ShapeRef),
	/// Type without mapping support; carries the rendered type name.
	Opaque(&'static str),
}

impl TypeInfo {
	/// Render the type for diagnostics.
	pub fn describe(&self) -> String {
		match self {
			TypeInfo::String => "String".to_owned(),
			TypeInfo::Int { bits, signed: true } => format!("i{bits}"),
			TypeInfo::Int { bits, signed: false } => format!("u{bits}"),
			TypeInfo::Float { bits } => format!("f{bits}"),
			TypeInfo::Bool => "bool".to_owned(),
			TypeInfo::List(item) => format!("Vec<{}>", item.describe()),
			TypeInfo::Map { key, value } => format!("Map<{}, {}>", key.describe(), value.describe()),
			TypeInfo::Object(shape) => shape.name().to_owned(),
			TypeInfo::Opaque(name) => (*name).to_owned(),
		}
	}
}

/// Reference to another shape, compared by type identity.
#[derive(Clone, Copy)]
pub struct ShapeRef {
	id: fn() -> TypeId,
	name: &'static str,
	decl: fn() -> ShapeDecl,
}

impl ShapeRef {
	/// Reference the shape of `T`.
	pub fn of<T: Model>() -> Self {
		Self {
			id: TypeId::of::<T>,
			name: std::any::type_name::<T>(),
			decl: T::shape,
		}
	}

	/// Type identity of the referenced shape.
	pub fn id(&self) -> TypeId {
		(self.id)()
	}

	/// Full Rust type name of the referenced shape.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Produce the referenced shape's declaration.
	pub fn decl(&self) -> ShapeDecl {
		(self.decl)()
	}
}

impl PartialEq for ShapeRef {
	fn eq(&self, other: &Self) -> bool {
		self.id() == other.id()
	}
}

impl Eq for ShapeRef {}

impl fmt::Debug for ShapeRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ShapeRef").field(&self.name).finish()
	}
}

/// Typed object with a tag-declared shape.
///
/// Implemented by `#[derive(Model)]`. The accessors only need to handle the
/// fields whose declaration carries a tag.
pub trait Model: Default + 'static {
	/// Static field declaration table.
	fn shape() -> ShapeDecl;

	/// Read one tagged field as a native view.
	fn get_field(&self, field: &str, mapper: &Mapper<'_>) -> Result<Native, NativeError>;

	/// Overwrite one tagged field from a native view.
	fn set_field(&mut self, field: &str, value: Native, mapper: &Mapper<'_>) -> Result<(), NativeError>;
}
