mod decode;
mod encode;
mod error;
mod field;
mod json;
mod logger;
mod mapper;
mod metadata;
mod model;
mod native;
mod registry;
mod resolve;
mod value;

/// Derive macro generating [`Model`] and [`Field`] impls from `#[hcl(...)]` tags.
pub use hclmap_derive::Model;
/// Free-function decode entry point using the global registry.
pub use decode::decode;
/// Free-function encode entry point using the global registry.
pub use encode::encode;
/// Error and result aliases.
pub use error::{ErrorClass, MapError, Result};
/// Native type conversion trait.
pub use field::Field;
/// JSON bridge helpers.
pub use json::to_json;
/// Logging collaborator trait and implementations.
pub use logger::{Logger, NullLogger, TracingLogger};
/// Registry and logger pair carrying the entry points.
pub use mapper::Mapper;
/// Resource-layer boundary object.
pub use metadata::ResourceMetaData;
/// Static shape declaration types.
pub use model::{FieldDecl, Model, ShapeDecl, ShapeRef, TypeInfo};
/// Type-erased field view and its conversion errors.
pub use native::{Native, NativeError};
/// Process-wide shape cache.
pub use registry::Registry;
/// Resolved descriptor types and the pure resolver.
pub use resolve::{FieldDescriptor, FieldKind, ScalarKind, Shape, resolve};
/// Dynamic value tree types.
pub use value::{Object, ScalarList, ScalarMap, Value};
