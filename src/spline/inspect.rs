use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;

use crate::spline::decode::{DecodeOptions, decode_stream};
use crate::spline::probe::ProbeOptions;
use crate::spline::report::{ErrorDocument, InspectionReport, ReportOptions, build_report};
use crate::spline::translation::{TranslateOptions, TranslationDocument, build_translation};
use crate::spline::SplineError;

/// Options for one end-to-end inspection run.
#[derive(Debug, Clone, Copy, Default)]
pub struct InspectOptions {
	/// Stream decoder limits.
	pub decode: DecodeOptions,
	/// Decompression probe limits.
	pub probe: ProbeOptions,
	/// Report sample caps.
	pub report: ReportOptions,
	/// Translation display limits.
	pub translate: TranslateOptions,
	/// Analyse the decoded prefix instead of failing on a decode fault.
	pub partial: bool,
}

/// Report output: the full report, or an error document when input was unusable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportOutput {
	/// Report over the decoded items.
	Report(Box<InspectionReport>),
	/// Input could not be used.
	Error(ErrorDocument),
}

/// Translation output: the full document, or an error document when input was unusable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TranslationOutput {
	/// Translation of the decoded items.
	Translation(TranslationDocument),
	/// Input could not be used.
	Error(ErrorDocument),
}

/// Both documents produced for one input, plus the decode fault if any.
#[derive(Debug)]
pub struct Inspection {
	/// Statistical summary.
	pub report: ReportOutput,
	/// Structural dump.
	pub translation: TranslationOutput,
	/// Read failure or decode fault, kept even when partial documents were built.
	pub fault: Option<SplineError>,
}

/// Decode, analyse, and translate an in-memory buffer.
pub fn inspect_bytes(bytes: &[u8], source: &str, options: &InspectOptions) -> Inspection {
	let outcome = decode_stream(bytes, &options.decode);
	log::info!("unpacked {} items from {} bytes", outcome.items.len(), bytes.len());

	let fault_message = outcome.fault.as_ref().map(|err| format!("Decoding failed: {err}"));
	if let Some(message) = &fault_message {
		log::warn!("{source}: {message}");
		if !options.partial {
			return Inspection {
				report: ReportOutput::Error(ErrorDocument::new(source, message.clone())),
				translation: TranslationOutput::Error(ErrorDocument::new(source, message.clone())),
				fault: outcome.fault,
			};
		}
	}

	log::info!("running analyses");
	let mut report = build_report(&outcome.items, source, &options.probe, &options.report);
	let mut translation = build_translation(&outcome.items, source, &options.translate);

	if let Some(message) = fault_message {
		report.errors.push(message);
		translation.metadata.notes.push_str(&format!(
			" Decoding stopped after {} bytes; only the {} items before the fault are listed.",
			outcome.consumed,
			outcome.items.len()
		));
	}

	Inspection {
		report: ReportOutput::Report(Box::new(report)),
		translation: TranslationOutput::Translation(translation),
		fault: outcome.fault,
	}
}

/// Read `path` and inspect its contents; read failures become error documents.
pub fn inspect_file(path: impl AsRef<Path>, options: &InspectOptions) -> Inspection {
	let path = path.as_ref();
	let source = path.display().to_string();

	let bytes = match fs::read(path) {
		Ok(bytes) => bytes,
		Err(err) => {
			let message = if err.kind() == ErrorKind::NotFound {
				format!("File not found at {source}")
			} else {
				format!("Read failed: {err}")
			};
			log::error!("{message}");
			return Inspection {
				report: ReportOutput::Error(ErrorDocument::new(&source, message.clone())),
				translation: TranslationOutput::Error(ErrorDocument::new(&source, message)),
				fault: Some(SplineError::Io(err)),
			};
		}
	};

	log::info!("read {} bytes from {source}", bytes.len());
	inspect_bytes(&bytes, &source, options)
}
