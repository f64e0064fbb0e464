// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use anyhow::anyhow;
use uuid::Uuid;

use crate::prelude::*;

mod _core {
    pub(super) use klug_core::{batch::*, import::ImportBatchId};
}

///////////////////////////////////////////////////////////////////////
// ImportBatchHistoryEntry
///////////////////////////////////////////////////////////////////////

#[derive(Debug, Default, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(rename_all = "snake_case")]
pub struct ImportBatchParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    dry_run: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    resume_from_latest: Option<bool>,
}

impl From<ImportBatchParameters> for _core::ImportBatchParameters {
    fn from(from: ImportBatchParameters) -> Self {
        let ImportBatchParameters {
            mode,
            dry_run,
            resume_from_latest,
        } = from;
        Self {
            mode,
            dry_run,
            resume_from_latest,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(rename_all = "snake_case")]
pub struct ImportBatchHistoryEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    import_batch_id: Option<Uuid>,

    #[serde(default)]
    started_at: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    finished_at: Option<String>,

    #[serde(default)]
    status: String,

    #[serde(default)]
    source: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_detail: Option<String>,

    #[serde(default)]
    watch_events_inserted: u64,

    #[serde(default)]
    errors_count: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,

    // Both missing and `null` parameters are accepted.
    #[serde(default)]
    parameters: Option<ImportBatchParameters>,
}

impl TryFrom<ImportBatchHistoryEntry> for _core::ImportBatchHistoryEntry {
    type Error = anyhow::Error;

    fn try_from(from: ImportBatchHistoryEntry) -> anyhow::Result<Self> {
        let ImportBatchHistoryEntry {
            import_batch_id,
            started_at,
            finished_at,
            status,
            source,
            source_detail,
            watch_events_inserted,
            errors_count,
            notes,
            parameters,
        } = from;
        let import_batch_id = import_batch_id
            .and_then(_core::ImportBatchId::from_uuid)
            .ok_or_else(|| anyhow!("missing import batch id"))?;
        let into = Self {
            import_batch_id,
            started_at,
            finished_at,
            status,
            source,
            source_detail,
            watch_events_inserted,
            errors_count,
            notes,
            parameters: parameters.unwrap_or_default().into(),
        };
        Ok(into)
    }
}

/// Decode a page of the batch history.
///
/// Entries without a batch id are skipped.
pub fn decode_import_batch_history(
    body: &[u8],
) -> anyhow::Result<Vec<_core::ImportBatchHistoryEntry>> {
    let entries = serde_json::from_slice::<Vec<ImportBatchHistoryEntry>>(body)?
        .into_iter()
        .filter_map(|entry| {
            _core::ImportBatchHistoryEntry::try_from(entry)
                .map_err(|err| log::warn!("Skipping import batch history entry: {err}"))
                .ok()
        })
        .collect();
    Ok(entries)
}

///////////////////////////////////////////////////////////////////////
// ImportRowError
///////////////////////////////////////////////////////////////////////

#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(rename_all = "snake_case")]
pub struct ImportRowError {
    #[serde(default)]
    severity: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    entity_ref: Option<String>,

    #[serde(default)]
    message: String,
}

impl From<ImportRowError> for _core::ImportRowError {
    fn from(from: ImportRowError) -> Self {
        let ImportRowError {
            severity,
            entity_ref,
            message,
        } = from;
        Self {
            severity: _core::Severity::parse(&severity),
            entity_ref,
            message,
        }
    }
}

/// Decode the row errors of a batch, preserving their order.
pub fn decode_import_row_errors(body: &[u8]) -> anyhow::Result<Vec<_core::ImportRowError>> {
    let row_errors = serde_json::from_slice::<Vec<ImportRowError>>(body)?;
    Ok(row_errors.into_iter().map(Into::into).collect())
}
