// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use serde_json::json;

use super::*;

fn summary() -> ImportBatchSummary {
    ImportBatchSummary {
        import_batch_id: None,
        status: "dry_run".to_owned(),
        dry_run: true,
        processed_count: 2,
        inserted_count: 2,
        skipped_count: 0,
        error_count: 0,
        rejected_before_import: 0,
        media_items_created: 0,
        shows_created: 0,
        cursor_before: None,
        cursor_after: ImportCursor::from_value(json!({"source_event_id": "evt-2"})),
    }
}

#[test]
fn reject_reentrant_submission_without_side_effects() {
    let mut model = Model::default();
    let token = model.start_submit().unwrap();
    assert!(model.is_pending());
    assert!(!model.submit_control().is_enabled());

    let control_before = *model.submit_control();
    assert!(matches!(model.start_submit(), Err(SubmissionFailure::Busy)));
    assert_eq!(control_before, *model.submit_control());
    assert_eq!(&CursorDisplay::Pending, model.cursor_after());

    model.finish_submit(token, &Ok(summary()));
    assert!(!model.is_pending());
    assert!(model.start_submit().is_ok());
}

#[test]
fn submit_control_is_balanced() {
    let mut model = Model::default();
    let results = [
        Ok(summary()),
        Err(SubmissionFailure::Rejected {
            status: 400,
            message: "The selected file is empty.".to_owned(),
            payload: json!({"detail": "Uploaded file is empty"}),
        }),
        Err(SubmissionFailure::Transport(anyhow::anyhow!("connection refused"))),
    ];
    for result in &results {
        let token = model.start_submit().unwrap();
        model.finish_submit(token, result);
        assert!(model.submit_control().is_enabled());
    }
    assert_eq!(3, model.submit_control().disabled_count());
    assert_eq!(3, model.submit_control().enabled_count());
}

#[test]
fn display_cursors_after_success() {
    let mut model = Model::default();
    assert_eq!("-", model.cursor_before().to_string());
    let token = model.start_submit().unwrap();
    assert_eq!("pending", model.cursor_before().to_string());
    model.finish_submit(token, &Ok(summary()));
    assert_eq!("null", model.cursor_before().to_string());
    assert_eq!(
        r#"{"source_event_id":"evt-2"}"#,
        model.cursor_after().to_string()
    );
    assert_eq!(
        Some("inserted 2, skipped 0, errors 0"),
        model.status_message()
    );
    assert!(model.last_summary().is_some());
}

#[test]
fn cursors_unavailable_after_rejection() {
    let mut model = Model::default();
    let payload = json!({"detail": "Uploaded file is empty"});
    let token = model.start_submit().unwrap();
    model.finish_submit(
        token,
        &Err(SubmissionFailure::Rejected {
            status: 400,
            message: "The selected file is empty.".to_owned(),
            payload: payload.clone(),
        }),
    );
    assert_eq!(&CursorDisplay::Unavailable, model.cursor_before());
    assert_eq!(&CursorDisplay::Unavailable, model.cursor_after());
    assert_eq!(Some("The selected file is empty."), model.status_message());
    assert_eq!(Some(&payload), model.last_error_payload());
    assert!(model.last_summary().is_none());
}

#[test]
fn generic_message_after_transport_failure() {
    let mut model = Model::default();
    let token = model.start_submit().unwrap();
    model.finish_submit(
        token,
        &Err(SubmissionFailure::Transport(anyhow::anyhow!("timeout"))),
    );
    assert_eq!(Some(TRANSPORT_FAILURE_MESSAGE), model.status_message());
    assert_eq!("unavailable", model.cursor_after().to_string());
}

#[test]
fn transport_failure_displays_generic_message() {
    let failure = SubmissionFailure::Transport(anyhow::anyhow!("connection reset"));
    assert_eq!(TRANSPORT_FAILURE_MESSAGE, failure.to_string());
}
