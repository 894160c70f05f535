use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::sdk::{Mapper, Native, NativeError, TypeInfo};

/// Native field type convertible to and from a [`Native`] view.
///
/// Implemented for strings, booleans, integers, floats, `Vec`, `HashMap` and
/// `BTreeMap`, and by `#[derive(Model)]` for nested structs. Whether a type
/// combination is actually mappable is decided by the resolver, not here.
pub trait Field: Sized {
	/// Describe the native type.
	fn type_info() -> TypeInfo;

	/// Build the native view of this value.
	fn to_native(&self, mapper: &Mapper<'_>) -> Result<Native, NativeError>;

	/// Rebuild a value from its native view.
	fn from_native(value: Native, mapper: &Mapper<'_>) -> Result<Self, NativeError>;
}

impl Field for String {
	fn type_info() -> TypeInfo {
		TypeInfo::String
	}

	fn to_native(&self, _mapper: &Mapper<'_>) -> Result<Native, NativeError> {
		Ok(Native::String(self.clone()))
	}

	fn from_native(value: Native, _mapper: &Mapper<'_>) -> Result<Self, NativeError> {
		match value {
			Native::String(value) => Ok(value),
			other => Err(NativeError::mismatch("string", &other)),
		}
	}
}

impl Field for bool {
	fn type_info() -> TypeInfo {
		TypeInfo::Bool
	}

	fn to_native(&self, _mapper: &Mapper<'_>) -> Result<Native, NativeError> {
		Ok(Native::Bool(*self))
	}

	fn from_native(value: Native, _mapper: &Mapper<'_>) -> Result<Self, NativeError> {
		match value {
			Native::Bool(value) => Ok(value),
			other => Err(NativeError::mismatch("bool", &other)),
		}
	}
}

impl Field for f64 {
	fn type_info() -> TypeInfo {
		TypeInfo::Float { bits: 64 }
	}

	fn to_native(&self, _mapper: &Mapper<'_>) -> Result<Native, NativeError> {
		Ok(Native::Float(*self))
	}

	fn from_native(value: Native, _mapper: &Mapper<'_>) -> Result<Self, NativeError> {
		match value {
			Native::Float(value) => Ok(value),
			other => Err(NativeError::mismatch("float", &other)),
		}
	}
}

impl Field for f32 {
	fn type_info() -> TypeInfo {
		TypeInfo::Float { bits: 32 }
	}

	fn to_native(&self, _mapper: &Mapper<'_>) -> Result<Native, NativeError> {
		Ok(Native::Float(f64::from(*self)))
	}

	fn from_native(value: Native, _mapper: &Mapper<'_>) -> Result<Self, NativeError> {
		match value {
			Native::Float(value) if value.is_finite() && value.abs() > f64::from(f32::MAX) => Err(NativeError::FloatOutOfRange { value, target: "f32" }),
			Native::Float(value) => Ok(value as f32),
			other => Err(NativeError::mismatch("float", &other)),
		}
	}
}

macro_rules! int_field {
	($($ty:ident: $signed:expr),* $(,)?) => {
		$(
			impl Field for $ty {
				fn type_info() -> TypeInfo {
					TypeInfo::Int {
						bits: $ty::BITS as u8,
						signed: $signed,
					}
				}

				fn to_native(&self, _mapper: &Mapper<'_>) -> Result<Native, NativeError> {
					i64::try_from(*self).map(Native::Int).map_err(|_| NativeError::Overflow {
						value: i128::try_from(*self).unwrap_or(i128::MAX),
						target: "i64",
					})
				}

				fn from_native(value: Native, _mapper: &Mapper<'_>) -> Result<Self, NativeError> {
					match value {
						Native::Int(value) => $ty::try_from(value).map_err(|_| NativeError::Overflow {
							value: i128::from(value),
							target: stringify!($ty),
						}),
						other => Err(NativeError::mismatch("integer", &other)),
					}
				}
			}
		)*
	};
}

int_field! {
	i8: true,
	i16: true,
	i32: true,
	i64: true,
	i128: true,
	isize: true,
	u8: false,
	u16: false,
	u32: false,
	u64: false,
	u128: false,
	usize: false,
}

impl<T: Field> Field for Vec<T> {
	fn type_info() -> TypeInfo {
		TypeInfo::List(Box::new(T::type_info()))
	}

	fn to_native(&self, mapper: &Mapper<'_>) -> Result<Native, NativeError> {
		let mut items = Vec::with_capacity(self.len());
		for (index, item) in self.iter().enumerate() {
			items.push(item.to_native(mapper).map_err(|err| err.at(index))?);
		}
		Ok(Native::List(items))
	}

	fn from_native(value: Native, mapper: &Mapper<'_>) -> Result<Self, NativeError> {
		let items = match value {
			Native::List(items) => items,
			other => return Err(NativeError::mismatch("list", &other)),
		};
		let mut out = Vec::with_capacity(items.len());
		for (index, item) in items.into_iter().enumerate() {
			out.push(T::from_native(item, mapper).map_err(|err| err.at(index))?);
		}
		Ok(out)
	}
}

impl<K: Field + Eq + Hash, V: Field> Field for HashMap<K, V> {
	fn type_info() -> TypeInfo {
		TypeInfo::Map {
			key: Box::new(K::type_info()),
			value: Box::new(V::type_info()),
		}
	}

	fn to_native(&self, mapper: &Mapper<'_>) -> Result<Native, NativeError> {
		map_to_native(self.iter(), mapper)
	}

	fn from_native(value: Native, mapper: &Mapper<'_>) -> Result<Self, NativeError> {
		Ok(map_from_native(value, mapper)?.into_iter().collect())
	}
}

impl<K: Field + Ord, V: Field> Field for BTreeMap<K, V> {
	fn type_info() -> TypeInfo {
		TypeInfo::Map {
			key: Box::new(K::type_info()),
			value: Box::new(V::type_info()),
		}
	}

	fn to_native(&self, mapper: &Mapper<'_>) -> Result<Native, NativeError> {
		map_to_native(self.iter(), mapper)
	}

	fn from_native(value: Native, mapper: &Mapper<'_>) -> Result<Self, NativeError> {
		Ok(map_from_native(value, mapper)?.into_iter().collect())
	}
}

fn map_to_native<'a, K: Field + 'a, V: Field + 'a>(entries: impl Iterator<Item = (&'a K, &'a V)>, mapper: &Mapper<'_>) -> Result<Native, NativeError> {
	let mut out = Vec::new();
	for (key, value) in entries {
		out.push((key.to_native(mapper)?, value.to_native(mapper)?));
	}
	Ok(Native::Map(out))
}

fn map_from_native<K: Field, V: Field>(value: Native, mapper: &Mapper<'_>) -> Result<Vec<(K, V)>, NativeError> {
	let entries = match value {
		Native::Map(entries) => entries,
		other => return Err(NativeError::mismatch("map", &other)),
	};
	let mut out = Vec::with_capacity(entries.len());
	for (key, value) in entries {
		out.push((K::from_native(key, mapper)?, V::from_native(value, mapper)?));
	}
	Ok(out)
}
