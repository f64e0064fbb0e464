// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use serde_json::json;

use super::*;

#[test]
fn decode_summary_with_cursor() {
    let batch_id = Uuid::new_v4();
    let body = json!({
        "import_batch_id": batch_id,
        "status": "completed",
        "dry_run": false,
        "processed_count": 120,
        "inserted_count": 100,
        "skipped_count": 15,
        "error_count": 5,
        "rejected_before_import": 2,
        "media_items_created": 7,
        "shows_created": 1,
        "cursor_before": null,
        "cursor_after": {
            "watched_at": "2025-01-31T23:00:00Z",
            "source_event_id": "evt-120",
        },
    })
    .to_string();
    let summary = decode_import_batch_summary(body.as_bytes()).unwrap();
    assert_eq!(
        Some(batch_id),
        summary.import_batch_id.map(|id| *id.as_uuid())
    );
    assert_eq!("inserted 100, skipped 15, errors 5", summary.digest());
    assert!(summary.cursor_before.is_none());
    assert_eq!(
        Some(&json!("evt-120")),
        summary
            .cursor_after
            .as_ref()
            .and_then(|cursor| cursor.as_value().get("source_event_id"))
    );
}

#[test]
fn decode_dry_run_summary_with_nil_batch_id_and_missing_counters() {
    let body = json!({
        "import_batch_id": "00000000-0000-0000-0000-000000000000",
        "status": "dry_run",
        "dry_run": true,
        "processed_count": 3,
    })
    .to_string();
    let summary = decode_import_batch_summary(body.as_bytes()).unwrap();
    assert!(summary.import_batch_id.is_none());
    assert!(summary.dry_run);
    assert_eq!(3, summary.processed_count);
    assert_eq!(0, summary.shows_created);
    assert_eq!(None, summary.batch_with_errors());
}

#[test]
fn reject_undecodable_summary() {
    assert!(decode_import_batch_summary(b"<html>Bad Gateway</html>").is_err());
    assert!(decode_import_batch_summary(br#"{"error_count": "many"}"#).is_err());
}

#[test]
fn upload_form_fields_in_request_order() {
    let settings = _core::ImportSettings {
        user_id: " 3f2b8c1e-5d4a-4b7e-9c21-0a6f1e2d3c4b ".to_owned(),
        mode: _core::ImportMode::Incremental,
        dry_run: false,
        resume_from_latest: true,
    };
    assert_eq!(
        vec![
            ("input_schema", "legacy_backup".to_owned()),
            ("file_format", "csv".to_owned()),
            ("mode", "incremental".to_owned()),
            ("dry_run", "false".to_owned()),
            ("resume_from_latest", "true".to_owned()),
            ("user_id", "3f2b8c1e-5d4a-4b7e-9c21-0a6f1e2d3c4b".to_owned()),
        ],
        upload_form_fields(_core::FileFormat::Csv, &settings)
    );
}
