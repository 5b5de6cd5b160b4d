#![allow(missing_docs)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;

fn write_fixture(dir: &Path, name: &str, bytes: &[u8]) -> String {
	let path = dir.join(name);
	fs::write(&path, bytes).expect("fixture written");
	path.display().to_string()
}

fn sample_bytes() -> Vec<u8> {
	let mut bytes = vec![0xa5];
	bytes.extend_from_slice(b"scene");
	bytes.extend_from_slice(&[0x93, 0x01, 0x02, 0x03]);
	bytes.extend_from_slice(&[0xd6, 116, 0, 0, 0, 0]);
	bytes
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_splinedoc")).args(args).output().expect("command executes")
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);
	assert!(
		output.status.success(),
		"command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

#[test]
fn report_json_summarizes_items() {
	let dir = tempfile::tempdir().expect("tempdir");
	let fixture = write_fixture(dir.path(), "scene.splinecode", &sample_bytes());
	let json = run_json(&["report", &fixture, "--quiet"]);

	assert_eq!(json["filePath"], fixture.as_str());
	assert_eq!(json["totalItems"], 3);
	assert_eq!(json["transforms"]["sample"][0], serde_json::json!([1, 2, 3]));
	assert_eq!(json["geometryBlobs"]["count"], 1);
}

#[test]
fn translate_json_lists_every_item() {
	let dir = tempfile::tempdir().expect("tempdir");
	let fixture = write_fixture(dir.path(), "scene.splinecode", &sample_bytes());
	let json = run_json(&["translate", &fixture, "--quiet"]);

	assert_eq!(json["metadata"]["totalItems"], 3);
	assert_eq!(json["metadata"]["isCompleteRepresentation"], false);
	assert!(json["items"].as_array().is_some_and(|items| items.len() == 3));
	assert_eq!(json["items"][2]["value"]["data"], "Buffer<00000000>");
}

#[test]
fn partial_flag_keeps_prefix_of_truncated_input() {
	let dir = tempfile::tempdir().expect("tempdir");
	let mut bytes = sample_bytes();
	bytes.truncate(bytes.len() - 1);
	let fixture = write_fixture(dir.path(), "cut.splinecode", &bytes);

	let strict = run_json(&["report", &fixture, "--quiet"]);
	assert!(strict.get("totalItems").is_none());
	assert!(strict["errors"][0].as_str().is_some_and(|msg| msg.starts_with("Decoding failed: ")));

	let partial = run_json(&["report", &fixture, "--partial", "--quiet"]);
	assert_eq!(partial["totalItems"], 2);
	assert_eq!(partial["errors"].as_array().map(Vec::len), Some(1));
}

#[test]
fn inspect_writes_both_documents() {
	let dir = tempfile::tempdir().expect("tempdir");
	let fixture = write_fixture(dir.path(), "scene.splinecode", &sample_bytes());
	let out_dir = dir.path().join("generated");
	let out_arg = out_dir.display().to_string();

	let output = run(&["inspect", &fixture, "--out-dir", &out_arg, "--quiet"]);
	assert!(output.status.success(), "inspect should succeed");

	let run_dir = String::from_utf8_lossy(&output.stdout).trim().to_owned();
	let run_dir = Path::new(&run_dir);
	assert!(run_dir.starts_with(&out_dir), "run dir should live under --out-dir");

	let report: Value = serde_json::from_slice(&fs::read(run_dir.join("spline_insight_report.json")).expect("report written")).expect("report json");
	let translation: Value =
		serde_json::from_slice(&fs::read(run_dir.join("spline_translation.json")).expect("translation written")).expect("translation json");
	assert_eq!(report["totalItems"], 3);
	assert_eq!(translation["items"].as_array().map(Vec::len), Some(3));
}

#[test]
fn missing_input_still_produces_error_document() {
	let dir = tempfile::tempdir().expect("tempdir");
	let missing = dir.path().join("absent.splinecode").display().to_string();
	let json = run_json(&["report", &missing, "--quiet"]);

	assert_eq!(json["filePath"], missing.as_str());
	assert_eq!(json["errors"][0], format!("File not found at {missing}"));
}

#[test]
fn help_describes_every_source_argument() {
	let output = run(&["report", "--help"]);
	assert!(output.status.success());
	let help = String::from_utf8_lossy(&output.stdout);
	assert!(help.contains("Path to the .splinecode file"));
	assert!(help.contains("Maximum container nesting depth"));
	assert!(help.contains("--partial"));
}
