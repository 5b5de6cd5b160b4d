use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, SplineError>;

/// Errors produced while reading and decoding `.splinecode` data.
#[derive(Debug, Error)]
pub enum SplineError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Document serialization failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Marker byte reserved by the base encoding.
	#[error("invalid marker 0x{marker:02x} at offset {at}")]
	InvalidMarker {
		/// Offset of the marker byte.
		at: usize,
		/// Offending marker byte.
		marker: u8,
	},
	/// Declared string/binary length or container count exceeds remaining input.
	#[error("declared length {len} at offset {at} exceeds remaining {rem}")]
	LengthOutOfRange {
		/// Offset of the value header declaring the length.
		at: usize,
		/// Declared byte length or element count.
		len: u64,
		/// Bytes still available after the header.
		rem: usize,
	},
	/// String payload is not valid UTF-8.
	#[error("invalid utf-8 string at offset {at}")]
	InvalidUtf8 {
		/// Offset of the string header.
		at: usize,
	},
	/// Map key was neither a string nor a number.
	#[error("unsupported map key type {kind} at offset {at}")]
	InvalidMapKey {
		/// Offset of the key value.
		at: usize,
		/// Wire type of the rejected key.
		kind: &'static str,
	},
	/// Container nesting exceeded configured limit.
	#[error("decode depth exceeded at offset {at} (max={max_depth})")]
	DepthExceeded {
		/// Offset of the container header that went too deep.
		at: usize,
		/// Configured depth ceiling.
		max_depth: u32,
	},
}

impl SplineError {
	/// Byte offset at which decoding became impossible, when known.
	pub fn offset(&self) -> Option<usize> {
		match self {
			Self::UnexpectedEof { at, .. }
			| Self::InvalidMarker { at, .. }
			| Self::LengthOutOfRange { at, .. }
			| Self::InvalidUtf8 { at }
			| Self::InvalidMapKey { at, .. }
			| Self::DepthExceeded { at, .. } => Some(*at),
			Self::Io(_) | Self::Json(_) => None,
		}
	}
}
