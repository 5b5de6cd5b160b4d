use std::fmt::Write as _;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value as Json};

use crate::spline::classify::{SemanticTag, semantic_tag, wire_type};
use crate::spline::{Number, Value};

const NOTES: &str = "This is a best-effort translation based on observed MessagePack items. Structure, relationships, and ExtBuffer contents are inferred. Display values are truncated previews: long strings, large buffers, and long arrays cannot be reconstructed from this document.";

/// Display truncation limits for translated values.
#[derive(Debug, Clone, Copy)]
pub struct TranslateOptions {
	/// Maximum UTF-16 units shown for strings and bytes shown for buffers.
	pub max_display_len: usize,
	/// Maximum elements shown for arrays.
	pub max_array_items: usize,
}

impl Default for TranslateOptions {
	fn default() -> Self {
		Self {
			max_display_len: 100,
			max_array_items: 20,
		}
	}
}

/// Exhaustive per-item structural dump.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationDocument {
	/// Provenance and caveats.
	pub metadata: TranslationMetadata,
	/// One entry per stream item, in order.
	pub items: Vec<TranslatedItem>,
}

/// Header of a translation document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationMetadata {
	/// RFC 3339 UTC timestamp.
	pub generated_at: String,
	/// Always `false`: display values are lossy.
	pub is_complete_representation: bool,
	/// Caveats about inference and truncation.
	pub notes: String,
	/// Number of translated items.
	pub total_items: usize,
	/// Source identifier of the input.
	pub input_file: String,
}

/// One stream item with its wire type, heuristic label, and preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedItem {
	/// Position in the stream.
	pub index: usize,
	/// Wire type key, e.g. `array` or `ext116`.
	pub msgpack_type: String,
	/// Heuristic role guess.
	pub potential_type: SemanticTag,
	/// Truncated display preview.
	pub value: Json,
}

/// Translate every item independently, preserving stream order.
pub fn build_translation(items: &[Value], input_file: &str, options: &TranslateOptions) -> TranslationDocument {
	let items: Vec<TranslatedItem> = items
		.iter()
		.enumerate()
		.map(|(index, item)| TranslatedItem {
			index,
			msgpack_type: wire_type(item).into_owned(),
			potential_type: semantic_tag(item),
			value: display_value(item, options),
		})
		.collect();

	TranslationDocument {
		metadata: TranslationMetadata {
			generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
			is_complete_representation: false,
			notes: NOTES.to_owned(),
			total_items: items.len(),
			input_file: input_file.to_owned(),
		},
		items,
	}
}

/// Lossy JSON preview of `value`; nested children get the same treatment.
pub fn display_value(value: &Value, options: &TranslateOptions) -> Json {
	match value {
		Value::Null => Json::Null,
		Value::Bool(v) => Json::Bool(*v),
		Value::Number(number) => number_json(*number),
		Value::String(text) => Json::String(truncate(text, options.max_display_len)),
		Value::Binary(bytes) => buffer_json(bytes, options),
		Value::Array(items) if items.len() > options.max_array_items => {
			Json::String(format!("Array(length={}, truncated)", items.len()))
		}
		Value::Array(items) => Json::Array(items.iter().map(|item| display_value(item, options)).collect()),
		Value::Map(entries) => {
			let mut out = Map::new();
			for (key, item) in entries {
				out.insert(key.to_string(), display_value(item, options));
			}
			Json::Object(out)
		}
		Value::Ext { type_code, payload } => {
			let mut out = Map::new();
			out.insert("type".to_owned(), Json::from(*type_code));
			out.insert("data".to_owned(), buffer_json(payload, options));
			Json::Object(out)
		}
	}
}

fn number_json(number: Number) -> Json {
	match number {
		Number::Int(v) => Json::from(v),
		Number::UInt(v) => Json::from(v),
		// non-finite floats become null
		Number::Float(v) => serde_json::Number::from_f64(v).map_or(Json::Null, Json::Number),
	}
}

fn buffer_json(bytes: &[u8], options: &TranslateOptions) -> Json {
	if bytes.len() > options.max_display_len {
		return Json::String(format!("Buffer(length={}, truncated)", bytes.len()));
	}

	let mut hex = String::with_capacity(bytes.len() * 2);
	for byte in bytes {
		let _ = write!(hex, "{byte:02x}");
	}
	Json::String(format!("Buffer<{hex}>"))
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.encode_utf16().count() <= max_len {
		return input.to_owned();
	}

	// cut on a char boundary; a pair that would straddle the limit is dropped whole
	let mut units = 0;
	let mut end = 0;
	for ch in input.chars() {
		units += ch.len_utf16();
		if units > max_len {
			break;
		}
		end += ch.len_utf8();
	}
	format!("{}... (truncated)", &input[..end])
}
