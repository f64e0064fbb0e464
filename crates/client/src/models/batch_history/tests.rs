// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use klug_core::ImportBatchParameters;

use super::*;

fn entry(id: &str) -> ImportBatchHistoryEntry {
    ImportBatchHistoryEntry {
        import_batch_id: id.parse().unwrap(),
        started_at: "2026-10-01T12:00:00Z".to_owned(),
        finished_at: None,
        status: "completed".to_owned(),
        source: "legacy_backup".to_owned(),
        source_detail: None,
        watch_events_inserted: 0,
        errors_count: 0,
        notes: None,
        parameters: ImportBatchParameters::default(),
    }
}

const FIRST_ID: &str = "6b1f0d7e-2c43-4d4e-9a51-3f8e2b7c1d90";

const SECOND_ID: &str = "0c9a4e55-8d1b-4f6a-b2e3-7a9d5c3e1f20";

#[test]
fn find_entries_of_current_table() {
    let mut model = Model::default();
    assert_eq!("", model.status_message());
    let token = model.start_refresh();
    assert_eq!("Loading import batches...", model.status_message());
    assert!(model.finish_refresh(token, Ok(vec![entry(FIRST_ID), entry(SECOND_ID)])));
    assert_eq!("Loaded 2 import batch(es)", model.status_message());
    let second_id = SECOND_ID.parse().unwrap();
    assert_eq!(second_id, model.find(&second_id).unwrap().import_batch_id);
}

#[test]
fn stale_id_after_second_refresh_is_not_found() {
    let mut model = Model::default();
    let first_id: ImportBatchId = FIRST_ID.parse().unwrap();
    let token = model.start_refresh();
    model.finish_refresh(token, Ok(vec![entry(FIRST_ID)]));
    assert!(model.find(&first_id).is_ok());

    let token = model.start_refresh();
    model.finish_refresh(token, Ok(vec![entry(SECOND_ID)]));
    let err = model.find(&first_id).unwrap_err();
    assert_eq!(LookupError::NotFound(first_id), err);
    assert_eq!("could not load settings", err.to_string());
}

#[test]
fn failed_refresh_empties_table() {
    let mut model = Model::default();
    let token = model.start_refresh();
    model.finish_refresh(token, Ok(vec![entry(FIRST_ID)]));
    let token = model.start_refresh();
    assert!(model.finish_refresh(token, Err(anyhow::anyhow!("HTTP status 503"))));
    assert!(model.entries().is_empty());
    assert!(model.find(&FIRST_ID.parse().unwrap()).is_err());
    assert_eq!("Failed to load import batches", model.status_message());
}

#[test]
fn empty_history() {
    let mut model = Model::default();
    let token = model.start_refresh();
    model.finish_refresh(token, Ok(vec![]));
    assert_eq!(ListingStatus::Empty, model.status());
    assert_eq!("No import batches yet", model.status_message());
}
