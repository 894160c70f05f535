use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, MapError>;

/// Coarse grouping of [`MapError`] variants by kind of failure.
///
/// Classes do not encode direction: a value that does not fit is
/// [`ErrorClass::Conversion`] whether encode or decode raised it. Nested
/// failures carry their direction in the variant itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
	/// Shape declaration could not be resolved into descriptors.
	Shape,
	/// One element of a nested list failed; see [`MapError::root_cause`].
	Nested,
	/// Field value does not fit the kind or width on the other side.
	Conversion,
	/// JSON conversion failure.
	Json,
}

/// Errors produced while resolving shapes and mapping values.
#[derive(Debug, Error)]
pub enum MapError {
	/// Tagged field type cannot be classified into a supported kind.
	#[error("unrecognized kind for {shape}.{field} (tag {tag:?}): {type_name}")]
	UnrecognizedKind {
		/// Owning shape name.
		shape: &'static str,
		/// Rust field identifier.
		field: &'static str,
		/// Declared mapping tag.
		tag: &'static str,
		/// Rendered native type.
		type_name: String,
	},
	/// Two fields of one shape declare the same tag.
	#[error("duplicate tag {tag:?} in {shape}")]
	DuplicateTag {
		/// Owning shape name.
		shape: &'static str,
		/// Repeated tag.
		tag: &'static str,
	},
	/// Field declares an empty mapping tag.
	#[error("empty tag on {shape}.{field}")]
	EmptyTag {
		/// Owning shape name.
		shape: &'static str,
		/// Rust field identifier.
		field: &'static str,
	},
	/// `Model` impl does not recognize a field listed in its own declaration.
	#[error("{shape} has no accessor for field {field}")]
	UnknownField {
		/// Owning shape name.
		shape: &'static str,
		/// Field identifier that was requested.
		field: String,
	},
	/// Encoding one element of a nested list failed.
	#[error("encode {tag}[{index}]: {source}")]
	NestedEncodeFailed {
		/// Tag of the nested list field.
		tag: String,
		/// Index of the failing element.
		index: usize,
		/// Inner failure.
		source: Box<MapError>,
	},
	/// Node kind does not match the field's expected kind.
	#[error("type mismatch at {tag}: expected {expected}, got {actual}")]
	TypeMismatch {
		/// Tag of the field being mapped.
		tag: String,
		/// Expected logical kind.
		expected: String,
		/// Actual logical kind.
		actual: &'static str,
	},
	/// Integer does not fit the target width.
	#[error("integer overflow at {tag}: {value} does not fit in {target}")]
	IntegerOverflow {
		/// Tag of the field being mapped.
		tag: String,
		/// Offending value.
		value: i128,
		/// Target native type.
		target: &'static str,
	},
	/// Finite float does not fit the target width.
	#[error("float out of range at {tag}: {value} does not fit in {target}")]
	FloatOutOfRange {
		/// Tag of the field being mapped.
		tag: String,
		/// Offending value.
		value: f64,
		/// Target native type.
		target: &'static str,
	},
	/// Decoding one element of a nested list failed.
	#[error("decode {tag}[{index}]: {source}")]
	NestedDecodeFailed {
		/// Tag of the nested list field.
		tag: String,
		/// Index of the failing element.
		index: usize,
		/// Inner failure.
		source: Box<MapError>,
	},
	/// JSON document handed to the bridge is not an object.
	#[error("expected JSON object, got {actual}")]
	NotAnObject {
		/// Actual JSON kind.
		actual: &'static str,
	},
	/// Tree holds a NaN or infinite float, which JSON cannot represent.
	#[error("non-finite float at {tag}: {value}")]
	NonFiniteFloat {
		/// Path of the offending value.
		tag: String,
		/// Offending value.
		value: f64,
	},
	/// JSON serialization failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}

impl MapError {
	/// Return the coarse class of this error.
	pub fn class(&self) -> ErrorClass {
		match self {
			Self::UnrecognizedKind { .. } | Self::DuplicateTag { .. } | Self::EmptyTag { .. } | Self::UnknownField { .. } => ErrorClass::Shape,
			Self::NestedEncodeFailed { .. } | Self::NestedDecodeFailed { .. } => ErrorClass::Nested,
			Self::TypeMismatch { .. } | Self::IntegerOverflow { .. } | Self::FloatOutOfRange { .. } => ErrorClass::Conversion,
			Self::NotAnObject { .. } | Self::NonFiniteFloat { .. } | Self::Json(_) => ErrorClass::Json,
		}
	}

	/// Follow nested element failures down to the innermost cause.
	pub fn root_cause(&self) -> &MapError {
		match self {
			Self::NestedEncodeFailed { source, .. } | Self::NestedDecodeFailed { source, .. } => source.root_cause(),
			other => other,
		}
	}
}
