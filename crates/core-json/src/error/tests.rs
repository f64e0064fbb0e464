// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use serde_json::json;

use super::*;

fn translate(payload: &serde_json::Value) -> String {
    translate_error_payload(payload.to_string().as_bytes()).0
}

#[test]
fn translate_string_detail() {
    assert_eq!(
        "The selected file is empty.",
        translate(&json!({"detail": "Uploaded file is empty"}))
    );
}

#[test]
fn translate_validation_detail() {
    let message = translate(&json!({
        "detail": [
            {"loc": ["body", "user_id"], "msg": "field required", "type": "missing"},
        ],
    }));
    assert!(message.contains("field required"), "{message}");
}

#[test]
fn translate_empty_payload() {
    assert_eq!(
        "Import failed with an unknown error.",
        translate(&json!({}))
    );
}

#[test]
fn translate_unexpected_shapes() {
    for payload in [
        json!({"detail": null}),
        json!({"detail": 42}),
        json!({"detail": {"reason": "nope"}}),
        json!({"detail": [{"reason": "nope"}]}),
        json!({"detail": []}),
        json!(["detail"]),
        json!("Internal Server Error"),
    ] {
        assert_eq!(
            "Import failed with an unknown error.",
            translate(&payload),
            "{payload}"
        );
    }
}

#[test]
fn decode_validation_locations() {
    let decoded = decode_error_payload(
        json!({"detail": [{"loc": ["body", 0, "mode"], "msg": "invalid mode"}]})
            .to_string()
            .as_bytes(),
    );
    assert_eq!(
        _core::ErrorDetail::Validation(vec![_core::ValidationIssue {
            msg: "invalid mode".to_owned(),
            loc: vec!["body".to_owned(), "0".to_owned(), "mode".to_owned()],
        }]),
        decoded.detail
    );
}

#[test]
fn preserve_raw_payload() {
    let payload = json!({"detail": "Could not detect format", "request_id": "r-1"});
    let (message, raw) = translate_error_payload(payload.to_string().as_bytes());
    assert_eq!(
        "The file format could not be detected. Use a .json or .csv file.",
        message
    );
    assert_eq!(payload, raw);
}

#[test]
fn preserve_non_json_body_as_string() {
    let decoded = decode_error_payload(b"502 Bad Gateway");
    assert_eq!(_core::ErrorDetail::Unknown, decoded.detail);
    assert_eq!(json!("502 Bad Gateway"), decoded.raw);
}

#[test]
fn translate_first_validation_message_of_partial_list() {
    let payload = json!({
        "detail": [
            {"loc": ["body", "mode"], "msg": "invalid mode"},
            {"loc": ["body", "user_id"], "type": "missing"},
        ],
    });
    let decoded = decode_error_payload(payload.to_string().as_bytes());
    assert_eq!(
        _core::ErrorDetail::Validation(vec![_core::ValidationIssue {
            msg: "invalid mode".to_owned(),
            loc: vec!["body".to_owned(), "mode".to_owned()],
        }]),
        decoded.detail
    );
    let message = translate(&payload);
    assert!(message.contains("invalid mode"), "{message}");
}
