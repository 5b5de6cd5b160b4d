use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::spline::classify::{is_geometry_blob, is_numeric_list, is_schema, is_transform, is_uuid, wire_type};
use crate::spline::Value;

/// Distinct/length ratio below which a numeric list counts as repeated.
pub const REPEATED_RATIO_THRESHOLD: f64 = 0.8;

/// Tally items per wire-type key.
pub fn count_types(items: &[Value]) -> BTreeMap<String, usize> {
	let mut counts = BTreeMap::new();
	for item in items {
		*counts.entry(wire_type(item).into_owned()).or_insert(0) += 1;
	}
	counts
}

/// Tally extension items per type code.
pub fn count_ext_codes(items: &[Value]) -> BTreeMap<i8, usize> {
	let mut counts = BTreeMap::new();
	for item in items {
		if let Value::Ext { type_code, .. } = item {
			*counts.entry(*type_code).or_insert(0) += 1;
		}
	}
	counts
}

/// Per-predicate membership, as item indices in stream order.
///
/// One item may appear in several sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierSets {
	/// Items matching the UUID predicate.
	pub uuids: Vec<usize>,
	/// Items matching the transform predicate.
	pub transforms: Vec<usize>,
	/// Items matching the geometry-blob predicate.
	pub geometry_blobs: Vec<usize>,
	/// Items matching the schema predicate.
	pub schemas: Vec<usize>,
}

/// Run the identifier predicates over every item independently.
pub fn find_identifiers(items: &[Value]) -> IdentifierSets {
	IdentifierSets {
		uuids: indices_where(items, is_uuid),
		transforms: indices_where(items, is_transform),
		geometry_blobs: indices_where(items, is_geometry_blob),
		schemas: indices_where(items, is_schema),
	}
}

fn indices_where(items: &[Value], predicate: fn(&Value) -> bool) -> Vec<usize> {
	items.iter().enumerate().filter(|(_, item)| predicate(item)).map(|(idx, _)| idx).collect()
}

/// Numeric lists and the subset whose values mostly repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumericPatterns {
	/// Indices of items matching the numeric-list predicate.
	pub numeric_lists: Vec<usize>,
	/// Subset of `numeric_lists` with distinct/length below the threshold.
	pub repeated_lists: Vec<usize>,
}

/// Find numeric lists and flag low-uniqueness ones.
pub fn find_numeric_patterns(items: &[Value]) -> NumericPatterns {
	let mut patterns = NumericPatterns::default();
	for (idx, item) in items.iter().enumerate() {
		if !is_numeric_list(item) {
			continue;
		}
		let Some(list) = item.as_array() else {
			continue;
		};
		if list.is_empty() {
			continue;
		}

		patterns.numeric_lists.push(idx);
		if uniqueness_ratio(list) < REPEATED_RATIO_THRESHOLD {
			patterns.repeated_lists.push(idx);
		}
	}
	patterns
}

/// Distinct-value count over length; `list` must be non-empty.
fn uniqueness_ratio(list: &[Value]) -> f64 {
	let distinct: HashSet<u64> = list.iter().filter_map(Value::as_number).map(|number| number.distinct_key()).collect();
	distinct.len() as f64 / list.len() as f64
}

/// Length distribution over top-level string items, in UTF-16 code units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StringLengthStats {
	/// Shortest string length.
	pub min: usize,
	/// Longest string length.
	pub max: usize,
	/// Mean string length.
	pub avg: f64,
	/// Number of string items.
	pub count: usize,
}

/// Summarize string item lengths; all zero when there are no strings.
pub fn string_length_stats(items: &[Value]) -> StringLengthStats {
	let mut lengths = items.iter().filter_map(Value::as_str).map(|text| text.encode_utf16().count());
	let Some(first) = lengths.next() else {
		return StringLengthStats::default();
	};

	let mut stats = StringLengthStats {
		min: first,
		max: first,
		avg: 0.0,
		count: 1,
	};
	let mut sum = first;
	for len in lengths {
		stats.min = stats.min.min(len);
		stats.max = stats.max.max(len);
		stats.count += 1;
		sum += len;
	}
	stats.avg = sum as f64 / stats.count as f64;
	stats
}
