mod analysis;
mod bytes;
mod classify;
mod decode;
mod error;
mod inspect;
mod probe;
mod report;
#[cfg(test)]
mod test_support;
mod translation;
mod value;

/// Aggregate analysis passes over a decoded item list.
pub use analysis::{
	IdentifierSets, NumericPatterns, REPEATED_RATIO_THRESHOLD, StringLengthStats, count_ext_codes, count_types, find_identifiers, find_numeric_patterns,
	string_length_stats,
};
/// Per-value shape heuristics and labels.
pub use classify::{GEOMETRY_BLOB_EXT_TYPE, SemanticTag, is_geometry_blob, is_numeric_list, is_schema, is_transform, is_uuid, semantic_tag, wire_type};
/// Stream decoding entry points and options.
pub use decode::{DecodeOptions, DecodeOutcome, ValueIter, decode_stream};
/// Error and result aliases.
pub use error::{Result, SplineError};
/// End-to-end inspection pipeline.
pub use inspect::{InspectOptions, Inspection, ReportOutput, TranslationOutput, inspect_bytes, inspect_file};
/// Decompression probe over extension payloads.
pub use probe::{ProbeHit, ProbeMethod, ProbeOptions, probe_ext_payloads};
/// Statistical report types and builder.
pub use report::{Counted, ErrorDocument, InspectionReport, ReportOptions, Sampled, build_report};
/// Structural translation types and builder.
pub use translation::{TranslateOptions, TranslatedItem, TranslationDocument, TranslationMetadata, build_translation, display_value};
/// Decoded value types.
pub use value::{Number, Value};
