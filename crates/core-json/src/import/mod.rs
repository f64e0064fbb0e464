// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use uuid::Uuid;

use crate::prelude::*;

mod _core {
    pub(super) use klug_core::import::*;
}

///////////////////////////////////////////////////////////////////////
// ImportBatchSummary
///////////////////////////////////////////////////////////////////////

/// Response of a successful upload.
///
/// Counters that are missing in the response default to 0.
#[derive(Debug, Default, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
#[serde(rename_all = "snake_case")]
pub struct ImportBatchSummary {
    #[serde(default)]
    import_batch_id: Option<Uuid>,

    #[serde(default)]
    status: String,

    #[serde(default)]
    dry_run: bool,

    #[serde(default)]
    processed_count: u64,

    #[serde(default)]
    inserted_count: u64,

    #[serde(default)]
    skipped_count: u64,

    #[serde(default)]
    error_count: u64,

    #[serde(default)]
    rejected_before_import: u64,

    #[serde(default)]
    media_items_created: u64,

    #[serde(default)]
    shows_created: u64,

    #[serde(default)]
    cursor_before: Option<serde_json::Value>,

    #[serde(default)]
    cursor_after: Option<serde_json::Value>,
}

impl From<ImportBatchSummary> for _core::ImportBatchSummary {
    fn from(from: ImportBatchSummary) -> Self {
        let ImportBatchSummary {
            import_batch_id,
            status,
            dry_run,
            processed_count,
            inserted_count,
            skipped_count,
            error_count,
            rejected_before_import,
            media_items_created,
            shows_created,
            cursor_before,
            cursor_after,
        } = from;
        Self {
            import_batch_id: import_batch_id.and_then(_core::ImportBatchId::from_uuid),
            status,
            dry_run,
            processed_count,
            inserted_count,
            skipped_count,
            error_count,
            rejected_before_import,
            media_items_created,
            shows_created,
            cursor_before: cursor_before.and_then(_core::ImportCursor::from_value),
            cursor_after: cursor_after.and_then(_core::ImportCursor::from_value),
        }
    }
}

impl From<_core::ImportBatchSummary> for ImportBatchSummary {
    fn from(from: _core::ImportBatchSummary) -> Self {
        let _core::ImportBatchSummary {
            import_batch_id,
            status,
            dry_run,
            processed_count,
            inserted_count,
            skipped_count,
            error_count,
            rejected_before_import,
            media_items_created,
            shows_created,
            cursor_before,
            cursor_after,
        } = from;
        Self {
            import_batch_id: Some(
                import_batch_id.map_or_else(Uuid::nil, |batch_id| *batch_id.as_uuid()),
            ),
            status,
            dry_run,
            processed_count,
            inserted_count,
            skipped_count,
            error_count,
            rejected_before_import,
            media_items_created,
            shows_created,
            cursor_before: cursor_before.map(_core::ImportCursor::into_value),
            cursor_after: cursor_after.map(_core::ImportCursor::into_value),
        }
    }
}

/// Decode the body of a successful upload response.
pub fn decode_import_batch_summary(body: &[u8]) -> anyhow::Result<_core::ImportBatchSummary> {
    let summary = serde_json::from_slice::<ImportBatchSummary>(body)?;
    Ok(summary.into())
}

///////////////////////////////////////////////////////////////////////
// Upload form
///////////////////////////////////////////////////////////////////////

pub const UPLOAD_FILE_FIELD: &str = "input_file";

/// Text fields of the multipart upload form in request order.
///
/// Booleans are encoded as `true`/`false`.
#[must_use]
pub fn upload_form_fields(
    format: _core::FileFormat,
    settings: &_core::ImportSettings,
) -> Vec<(&'static str, String)> {
    let _core::ImportSettings {
        user_id,
        mode,
        dry_run,
        resume_from_latest,
    } = settings;
    vec![
        ("input_schema", _core::LEGACY_BACKUP_SCHEMA.to_owned()),
        ("file_format", format.as_str().to_owned()),
        ("mode", mode.as_str().to_owned()),
        ("dry_run", dry_run.to_string()),
        ("resume_from_latest", resume_from_latest.to_string()),
        ("user_id", user_id.trim().to_owned()),
    ]
}

#[cfg(test)]
mod tests;
