//! Shape heuristics over single decoded values.
//!
//! Every predicate is an independent guess about the undocumented scene
//! format. Predicates overlap: a six-element numeric array is both a
//! `NumericList` and, if it had three elements, a `Transform`. Callers that
//! need the ambiguity keep per-predicate membership (see
//! [`IdentifierSets`](crate::spline::IdentifierSets)); [`semantic_tag`] is a
//! display view only.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::spline::Value;

static UUID_PATTERN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new("^[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}$").expect("uuid pattern compiles"));

/// Extension code observed wrapping what look like mesh buffers.
///
/// Unverified: nothing but frequency and payload size ties this code to
/// geometry, so matches may be false positives.
pub const GEOMETRY_BLOB_EXT_TYPE: i8 = 116;

/// Heuristic role guess for one value, used as the `potentialType` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SemanticTag {
	/// Canonical 8-4-4-4-12 hex identifier string.
	#[serde(rename = "UUID")]
	Uuid,
	/// Three-number array.
	Transform,
	/// Extension with the geometry code and a large payload.
	GeometryBlob,
	/// Non-empty array of strings.
	Schema,
	/// Array of numbers that is not a transform.
	NumericList,
	/// Any other extension value.
	ExtBuffer,
	/// Unclassified string.
	String,
	/// Any number.
	Number,
	/// Boolean.
	Boolean,
	/// `nil`.
	Null,
	/// Unclassified array.
	Array,
	/// Map.
	Object,
	/// No heuristic applies.
	Unknown,
}

impl SemanticTag {
	/// Render the tag as its stable label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Uuid => "UUID",
			Self::Transform => "Transform",
			Self::GeometryBlob => "GeometryBlob",
			Self::Schema => "Schema",
			Self::NumericList => "NumericList",
			Self::ExtBuffer => "ExtBuffer",
			Self::String => "String",
			Self::Number => "Number",
			Self::Boolean => "Boolean",
			Self::Null => "Null",
			Self::Array => "Array",
			Self::Object => "Object",
			Self::Unknown => "Unknown",
		}
	}
}

/// Lowercase, hyphen-grouped UUID string.
pub fn is_uuid(value: &Value) -> bool {
	matches!(value, Value::String(text) if UUID_PATTERN.is_match(text))
}

/// Array of exactly three numbers.
pub fn is_transform(value: &Value) -> bool {
	matches!(value, Value::Array(items) if items.len() == 3 && all_numbers(items))
}

/// Extension value carrying [`GEOMETRY_BLOB_EXT_TYPE`].
pub fn is_geometry_blob(value: &Value) -> bool {
	matches!(value, Value::Ext { type_code, .. } if *type_code == GEOMETRY_BLOB_EXT_TYPE)
}

/// Array of more than three strings, guessed to be a field-name table.
pub fn is_schema(value: &Value) -> bool {
	matches!(value, Value::Array(items) if items.len() > 3 && items.iter().all(|item| matches!(item, Value::String(_))))
}

/// Array of more than five numbers.
pub fn is_numeric_list(value: &Value) -> bool {
	matches!(value, Value::Array(items) if items.len() > 5 && all_numbers(items))
}

fn all_numbers(items: &[Value]) -> bool {
	items.iter().all(|item| matches!(item, Value::Number(_)))
}

/// Wire-type key; extension values key per code as `ext<code>`.
pub fn wire_type(value: &Value) -> Cow<'static, str> {
	match value {
		Value::Ext { type_code, .. } => Cow::Owned(format!("ext{type_code}")),
		other => Cow::Borrowed(other.kind()),
	}
}

/// Highest-priority heuristic label for `value`.
pub fn semantic_tag(value: &Value) -> SemanticTag {
	if is_uuid(value) {
		return SemanticTag::Uuid;
	}
	if is_transform(value) {
		return SemanticTag::Transform;
	}
	if is_geometry_blob(value) {
		return SemanticTag::GeometryBlob;
	}
	if is_schema(value) {
		return SemanticTag::Schema;
	}
	if is_numeric_list(value) {
		return SemanticTag::NumericList;
	}

	match value {
		Value::Ext { .. } => SemanticTag::ExtBuffer,
		Value::String(_) => SemanticTag::String,
		Value::Number(_) => SemanticTag::Number,
		Value::Bool(_) => SemanticTag::Boolean,
		Value::Null => SemanticTag::Null,
		Value::Array(_) => SemanticTag::Array,
		Value::Map(_) => SemanticTag::Object,
		Value::Binary(_) => SemanticTag::Unknown,
	}
}
