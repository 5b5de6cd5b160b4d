use serde_json::json;

use crate::spline::test_support::Pack;
use crate::spline::{DecodeOptions, ErrorDocument, Number, ProbeOptions, ReportOptions, Value, build_report, decode_stream};

fn report_for(items: &[Value]) -> serde_json::Value {
	let report = build_report(items, "scene.splinecode", &ProbeOptions::default(), &ReportOptions::default());
	serde_json::to_value(&report).expect("report serializes")
}

#[test]
fn empty_input_gives_all_zero_report() {
	let json = report_for(&[]);
	assert_eq!(
		json,
		json!({
			"filePath": "scene.splinecode",
			"totalItems": 0,
			"typeCounts": {},
			"extFreq": {},
			"uuids": { "count": 0, "sample": [] },
			"transforms": { "count": 0, "sample": [] },
			"geometryBlobs": { "count": 0 },
			"schemas": { "count": 0 },
			"numericLists": { "count": 0 },
			"repeatedLists": { "count": 0 },
			"zlibAttempts": [],
			"stringLengthStats": { "min": 0, "max": 0, "avg": 0.0, "count": 0 },
		})
	);
}

#[test]
fn uuid_transform_and_blob_scenario() {
	let bytes = Pack::new()
		.str("3fa85f64-5717-4562-b3fc-2c963f66afa6")
		.array(3)
		.f64(1.0)
		.f64(2.0)
		.f64(3.0)
		.ext(116, &[0; 4])
		.into_bytes();
	let items = decode_stream(&bytes, &DecodeOptions::default()).into_result().expect("scenario decodes");
	let json = report_for(&items);

	assert_eq!(json["totalItems"], 3);
	assert_eq!(json["uuids"]["count"], 1);
	assert_eq!(json["uuids"]["sample"], json!(["3fa85f64-5717-4562-b3fc-2c963f66afa6"]));
	assert_eq!(json["transforms"]["count"], 1);
	assert_eq!(json["transforms"]["sample"], json!([[1.0, 2.0, 3.0]]));
	assert_eq!(json["geometryBlobs"]["count"], 1);
	assert_eq!(json["typeCounts"], json!({ "string": 1, "array": 1, "ext116": 1 }));
	assert_eq!(json["extFreq"], json!({ "116": 1 }));
	assert_eq!(json["zlibAttempts"], json!([]));
	assert_eq!(json["stringLengthStats"]["count"], 1);
	assert_eq!(json["stringLengthStats"]["max"], 36);
}

#[test]
fn samples_are_capped_but_counts_are_not() {
	let mut items = Vec::new();
	for idx in 0..25_u64 {
		items.push(Value::String(format!("00000000-0000-0000-0000-{idx:012x}").into()));
		items.push(Value::Array(vec![Value::Number(Number::UInt(idx)); 3]));
	}

	let report = build_report(&items, "x", &ProbeOptions::default(), &ReportOptions::default());
	assert_eq!(report.uuids.count, 25);
	assert_eq!(report.uuids.sample.len(), 10);
	assert_eq!(report.uuids.sample[0], "00000000-0000-0000-0000-000000000000");
	assert_eq!(report.transforms.count, 25);
	assert_eq!(report.transforms.sample.len(), 5);
	assert_eq!(report.transforms.sample[4], [Number::UInt(4); 3]);

	let narrow = ReportOptions {
		uuid_sample: 2,
		transform_sample: 0,
	};
	let report = build_report(&items, "x", &ProbeOptions::default(), &narrow);
	assert_eq!(report.uuids.sample.len(), 2);
	assert!(report.transforms.sample.is_empty());
}

#[test]
fn repeated_numeric_list_scenario() {
	let list = Value::Array([1, 1, 1, 1, 1, 2].iter().map(|v| Value::Number(Number::UInt(*v))).collect());
	let report = build_report(&[list], "x", &ProbeOptions::default(), &ReportOptions::default());
	assert_eq!(report.numeric_lists.count, 1);
	assert_eq!(report.repeated_lists.count, 1);
	assert_eq!(report.transforms.count, 0);
}

#[test]
fn report_never_embeds_payload_bytes() {
	let items = vec![Value::Ext {
		type_code: 116,
		payload: vec![0xab; 100_000],
	}];
	let text = serde_json::to_string(&build_report(&items, "x", &ProbeOptions::default(), &ReportOptions::default())).expect("report serializes");
	assert!(text.len() < 1024, "report size should not track payload size");
}

#[test]
fn error_document_shape() {
	let json = serde_json::to_value(ErrorDocument::new("a.splinecode", "Decoding failed: boom")).expect("error doc serializes");
	assert_eq!(json, json!({ "filePath": "a.splinecode", "errors": ["Decoding failed: boom"] }));
}
