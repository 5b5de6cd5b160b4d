//! Decompression probe over extension payloads.
//!
//! Tries each codec against every extension payload and records which ones
//! run to a clean end of stream. Failure is the normal outcome and is never
//! surfaced as an error. Several codecs accepting the same payload is itself
//! a signal and is kept.

use std::io::Read;

use flate2::read::MultiGzDecoder;
use flate2::{Decompress, FlushDecompress, Status};
use serde::Serialize;

use crate::spline::Value;

const INFLATE_BUF_SIZE: usize = 64 * 1024;

/// Limits for decompression attempts.
#[derive(Debug, Clone, Copy)]
pub struct ProbeOptions {
	/// Output bytes after which an attempt that is still error-free counts as a success.
	pub max_output: usize,
}

impl ProbeOptions {
	/// Default output cap per attempt.
	pub const DEFAULT_MAX_OUTPUT: usize = 64 * 1024 * 1024;
}

impl Default for ProbeOptions {
	fn default() -> Self {
		Self {
			max_output: Self::DEFAULT_MAX_OUTPUT,
		}
	}
}

/// Codec tried against a payload, in probe order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ProbeMethod {
	/// zlib-wrapped deflate.
	Inflate,
	/// Headerless deflate.
	InflateRaw,
	/// gzip member.
	Gunzip,
}

impl ProbeMethod {
	/// All codecs in the order they are attempted.
	pub const ALL: [ProbeMethod; 3] = [Self::Inflate, Self::InflateRaw, Self::Gunzip];

	/// Render method as its stable label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Inflate => "inflate",
			Self::InflateRaw => "inflateRaw",
			Self::Gunzip => "gunzip",
		}
	}

	fn attempt(self, payload: &[u8], max_output: usize) -> Result<usize, ProbeFailure> {
		match self {
			Self::Inflate => inflate(payload, true, max_output),
			Self::InflateRaw => inflate(payload, false, max_output),
			Self::Gunzip => gunzip(payload, max_output),
		}
	}
}

/// One codec that accepted one extension payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProbeHit {
	/// Stream index of the extension item.
	pub index: usize,
	/// Extension type code of the item.
	#[serde(rename = "type")]
	pub type_code: i8,
	/// Codec that decoded the payload.
	pub method: ProbeMethod,
}

/// Why a single attempt was rejected; stays local to the probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProbeFailure {
	Corrupt,
	Truncated,
	Stalled,
}

/// Try every codec against every extension payload, in stream order.
pub fn probe_ext_payloads(items: &[Value], options: &ProbeOptions) -> Vec<ProbeHit> {
	let mut hits = Vec::new();
	for (index, item) in items.iter().enumerate() {
		let Value::Ext { type_code, payload } = item else {
			continue;
		};

		for method in ProbeMethod::ALL {
			match method.attempt(payload, options.max_output) {
				Ok(produced) => {
					log::debug!("item {index} (ext{type_code}) decodes with {}: {produced} bytes", method.as_str());
					hits.push(ProbeHit {
						index,
						type_code: *type_code,
						method,
					});
				}
				Err(reason) => log::trace!("item {index} (ext{type_code}) rejects {}: {reason:?}", method.as_str()),
			}
		}
	}
	hits
}

/// Inflate until end of stream, returning output size; bytes after the stream are ignored.
fn inflate(input: &[u8], zlib_header: bool, max_output: usize) -> Result<usize, ProbeFailure> {
	let mut de = Decompress::new(zlib_header);
	let mut buf = vec![0_u8; INFLATE_BUF_SIZE];
	let mut in_pos = 0_usize;
	let mut out_total = 0_usize;

	loop {
		let before_in = de.total_in();
		let before_out = de.total_out();

		let status = de
			.decompress(&input[in_pos..], &mut buf, FlushDecompress::None)
			.map_err(|_| ProbeFailure::Corrupt)?;

		let consumed = (de.total_in() - before_in) as usize;
		let produced = (de.total_out() - before_out) as usize;
		in_pos += consumed;
		out_total = out_total.saturating_add(produced);

		if out_total >= max_output {
			return Ok(out_total);
		}

		match status {
			Status::StreamEnd => return Ok(out_total),
			Status::Ok | Status::BufError => {
				if consumed == 0 && produced == 0 {
					if in_pos >= input.len() {
						return Err(ProbeFailure::Truncated);
					}
					return Err(ProbeFailure::Stalled);
				}
			}
		}
	}
}

/// Decode every gzip member; each header, body, and CRC/size trailer must check out.
fn gunzip(input: &[u8], max_output: usize) -> Result<usize, ProbeFailure> {
	let mut decoder = MultiGzDecoder::new(input);
	let mut buf = vec![0_u8; INFLATE_BUF_SIZE];
	let mut out_total = 0_usize;

	loop {
		let read = decoder.read(&mut buf).map_err(|_| ProbeFailure::Corrupt)?;
		if read == 0 {
			break;
		}
		out_total = out_total.saturating_add(read);
		if out_total >= max_output {
			return Ok(out_total);
		}
	}

	// the decoder reports a clean EOF on empty input instead of a missing header.
	if decoder.header().is_none() {
		return Err(ProbeFailure::Truncated);
	}
	Ok(out_total)
}
