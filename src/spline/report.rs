use std::collections::BTreeMap;

use serde::Serialize;

use crate::spline::analysis::{StringLengthStats, count_ext_codes, count_types, find_identifiers, find_numeric_patterns, string_length_stats};
use crate::spline::probe::{ProbeHit, ProbeOptions, probe_ext_payloads};
use crate::spline::{Number, Value};

/// Sample caps applied when building the report.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
	/// Maximum UUID strings kept in the sample.
	pub uuid_sample: usize,
	/// Maximum transforms kept in the sample.
	pub transform_sample: usize,
}

impl Default for ReportOptions {
	fn default() -> Self {
		Self {
			uuid_sample: 10,
			transform_sample: 5,
		}
	}
}

/// Bounded statistical summary of one decode pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionReport {
	/// Source identifier of the input.
	pub file_path: String,
	/// Number of top-level items decoded.
	pub total_items: usize,
	/// Item count per wire type key.
	pub type_counts: BTreeMap<String, usize>,
	/// Item count per extension code.
	pub ext_freq: BTreeMap<i8, usize>,
	/// UUID strings.
	pub uuids: Sampled<String>,
	/// Three-number arrays.
	pub transforms: Sampled<[Number; 3]>,
	/// Geometry-coded extensions.
	pub geometry_blobs: Counted,
	/// String arrays.
	pub schemas: Counted,
	/// Numeric arrays.
	pub numeric_lists: Counted,
	/// Numeric arrays dominated by repeated values.
	pub repeated_lists: Counted,
	/// Successful decompression attempts.
	pub zlib_attempts: Vec<ProbeHit>,
	/// Top-level string length distribution.
	pub string_length_stats: StringLengthStats,
	/// Decode fault recorded when the report covers only a decoded prefix.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub errors: Vec<String>,
}

/// Population count plus a capped sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sampled<T> {
	/// Full population size.
	pub count: usize,
	/// First members in stream order.
	pub sample: Vec<T>,
}

/// Population count only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Counted {
	/// Full population size.
	pub count: usize,
}

/// Minimal document written in place of a report or translation when input cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDocument {
	/// Source identifier of the failed input.
	pub file_path: String,
	/// Human-readable failure messages.
	pub errors: Vec<String>,
}

impl ErrorDocument {
	/// Build a single-message error document.
	pub fn new(file_path: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			file_path: file_path.into(),
			errors: vec![message.into()],
		}
	}
}

/// Run every analysis pass over `items` and aggregate the results.
///
/// Each pass reads `items` independently; samples are resolved from the
/// membership sets and capped.
pub fn build_report(items: &[Value], file_path: &str, probe: &ProbeOptions, options: &ReportOptions) -> InspectionReport {
	let type_counts = count_types(items);
	let ext_freq = count_ext_codes(items);
	let identifiers = find_identifiers(items);
	let patterns = find_numeric_patterns(items);
	let zlib_attempts = probe_ext_payloads(items, probe);
	let string_length_stats = string_length_stats(items);

	let uuid_sample = identifiers
		.uuids
		.iter()
		.filter_map(|idx| items.get(*idx).and_then(Value::as_str))
		.take(options.uuid_sample)
		.map(str::to_owned)
		.collect();

	let transform_sample = identifiers
		.transforms
		.iter()
		.filter_map(|idx| items.get(*idx).and_then(transform_triple))
		.take(options.transform_sample)
		.collect();

	InspectionReport {
		file_path: file_path.to_owned(),
		total_items: items.len(),
		type_counts,
		ext_freq,
		uuids: Sampled {
			count: identifiers.uuids.len(),
			sample: uuid_sample,
		},
		transforms: Sampled {
			count: identifiers.transforms.len(),
			sample: transform_sample,
		},
		geometry_blobs: Counted {
			count: identifiers.geometry_blobs.len(),
		},
		schemas: Counted {
			count: identifiers.schemas.len(),
		},
		numeric_lists: Counted {
			count: patterns.numeric_lists.len(),
		},
		repeated_lists: Counted {
			count: patterns.repeated_lists.len(),
		},
		zlib_attempts,
		string_length_stats,
		errors: Vec::new(),
	}
}

fn transform_triple(value: &Value) -> Option<[Number; 3]> {
	match value.as_array()? {
		[x, y, z] => Some([x.as_number()?, y.as_number()?, z.as_number()?]),
		_ => None,
	}
}

#[cfg(test)]
mod tests;
