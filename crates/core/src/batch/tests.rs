// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use uuid::Uuid;

use super::*;

fn entry(parameters: ImportBatchParameters, source_detail: Option<&str>) -> ImportBatchHistoryEntry {
    ImportBatchHistoryEntry {
        import_batch_id: ImportBatchId::from_uuid(Uuid::new_v4()).unwrap(),
        started_at: "2025-03-01T12:00:00Z".to_owned(),
        finished_at: None,
        status: "completed".to_owned(),
        source: "legacy_source_export".to_owned(),
        source_detail: source_detail.map(ToOwned::to_owned),
        watch_events_inserted: 3,
        errors_count: 0,
        notes: None,
        parameters,
    }
}

#[test]
fn explicit_mode_without_resume_disables_resume() {
    let entry = entry(
        ImportBatchParameters {
            mode: Some("incremental".to_owned()),
            ..Default::default()
        },
        Some("bootstrap"),
    );
    assert_eq!(
        ImportSettingsPatch {
            mode: Some(ImportMode::Incremental),
            dry_run: None,
            resume_from_latest: false,
        },
        entry.settings_patch()
    );
}

#[test]
fn fall_back_to_source_detail_as_mode() {
    let entry = entry(
        ImportBatchParameters {
            mode: None,
            dry_run: Some(true),
            resume_from_latest: Some(true),
        },
        Some("incremental"),
    );
    assert_eq!(
        ImportSettingsPatch {
            mode: Some(ImportMode::Incremental),
            dry_run: Some(true),
            resume_from_latest: true,
        },
        entry.settings_patch()
    );
}

#[test]
fn fall_back_to_source_detail_if_mode_is_unknown() {
    let entry = entry(
        ImportBatchParameters {
            mode: Some("replay".to_owned()),
            ..Default::default()
        },
        Some("bootstrap"),
    );
    assert_eq!(Some(ImportMode::Bootstrap), entry.mode());
}

#[test]
fn undetermined_mode() {
    let entry = entry(Default::default(), Some("nightly export"));
    assert_eq!(None, entry.mode());
    assert_eq!(None, entry.settings_patch().mode);
}

#[test]
fn parse_severity() {
    assert_eq!(Severity::Warning, Severity::parse("warning"));
    assert_eq!(Severity::Error, Severity::parse(" ERROR "));
    assert_eq!(Severity::Other("fatal".to_owned()), Severity::parse("fatal"));
}

#[test]
fn display_row_error_with_and_without_entity_ref() {
    let mut row_error = ImportRowError {
        severity: Severity::Error,
        entity_ref: Some("evt-17".to_owned()),
        message: "media item not found".to_owned(),
    };
    assert_eq!("error [evt-17] media item not found", row_error.to_string());
    row_error.entity_ref = None;
    assert_eq!("error media item not found", row_error.to_string());
    row_error.entity_ref = Some(String::new());
    assert_eq!("error media item not found", row_error.to_string());
}
