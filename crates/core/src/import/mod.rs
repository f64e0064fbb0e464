// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::Path;

use mime::Mime;
use uuid::Uuid;

pub mod validate;

/// The schema tag that identifies uploads of legacy backup files.
pub const LEGACY_BACKUP_SCHEMA: &str = "legacy_backup";

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ImportMode {
    /// (Re-)populate from scratch.
    #[default]
    Bootstrap,

    /// Continue from the cursor of a prior import.
    Incremental,
}

impl ImportMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// User-controlled parameters of the next import.
///
/// The user id is kept as entered and only validated and
/// trimmed right before submitting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSettings {
    pub user_id: String,
    pub mode: ImportMode,
    pub dry_run: bool,
    pub resume_from_latest: bool,
}

impl ImportSettings {
    /// Apply a patch, returning `true` if anything changed.
    pub fn apply_patch(&mut self, patch: ImportSettingsPatch) -> bool {
        let ImportSettingsPatch {
            mode,
            dry_run,
            resume_from_latest,
        } = patch;
        let before = self.clone();
        if let Some(mode) = mode {
            self.mode = mode;
        }
        self.resume_from_latest = resume_from_latest;
        if let Some(dry_run) = dry_run {
            self.dry_run = dry_run;
        }
        *self != before
    }
}

/// Settings that could be recovered from a past import batch.
///
/// The user id is never part of a patch. The mode and the dry run
/// flag are only overwritten if they are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSettingsPatch {
    pub mode: Option<ImportMode>,
    pub dry_run: Option<bool>,
    pub resume_from_latest: bool,
}

/// Opaque positional token of the backend.
///
/// Only stored and displayed, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportCursor(serde_json::Value);

impl ImportCursor {
    /// Wrap a JSON value, mapping `null` to `None`.
    #[must_use]
    pub fn from_value(value: serde_json::Value) -> Option<Self> {
        (!value.is_null()).then_some(Self(value))
    }

    #[must_use]
    pub const fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> serde_json::Value {
        self.0
    }

    /// Compact JSON text, both for display and for persistence.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        self.0.to_string()
    }

    /// Parse persisted JSON text.
    ///
    /// Returns `None` for malformed text or a `null` value.
    #[must_use]
    pub fn from_json_str(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok().and_then(Self::from_value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum FileFormat {
    Json,
    Csv,
}

impl FileFormat {
    /// Detect the format from the (case-insensitive) file name extension.
    #[must_use]
    pub fn detect(file_name: &str) -> Option<Self> {
        let extension = Path::new(file_name).extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if extension.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub fn mime_type(self) -> Mime {
        match self {
            Self::Json => mime::APPLICATION_JSON,
            Self::Csv => mime::TEXT_CSV,
        }
    }
}

/// Server-assigned identifier of an import batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImportBatchId(Uuid);

impl ImportBatchId {
    /// Dry runs are reported with the nil UUID, i.e. without a batch.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Option<Self> {
        (!uuid.is_nil()).then_some(Self(uuid))
    }

    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for ImportBatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl std::str::FromStr for ImportBatchId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Outcome of a single upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBatchSummary {
    /// `None` for dry runs that did not create a batch.
    pub import_batch_id: Option<ImportBatchId>,
    pub status: String,
    pub dry_run: bool,
    pub processed_count: u64,
    pub inserted_count: u64,
    pub skipped_count: u64,
    pub error_count: u64,
    pub rejected_before_import: u64,
    pub media_items_created: u64,
    pub shows_created: u64,
    pub cursor_before: Option<ImportCursor>,
    pub cursor_after: Option<ImportCursor>,
}

impl ImportBatchSummary {
    /// One-line digest of the counters.
    #[must_use]
    pub fn digest(&self) -> String {
        let Self {
            inserted_count,
            skipped_count,
            error_count,
            ..
        } = self;
        format!("inserted {inserted_count}, skipped {skipped_count}, errors {error_count}")
    }

    /// All fields, one per line.
    #[must_use]
    pub fn detail_lines(&self) -> Vec<String> {
        let Self {
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
        } = self;
        let import_batch_id = import_batch_id
            .as_ref()
            .map_or_else(|| "-".to_owned(), ToString::to_string);
        vec![
            format!("batch_id: {import_batch_id}"),
            format!("status: {status}"),
            format!("dry_run: {dry_run}"),
            format!("processed: {processed_count}"),
            format!("inserted: {inserted_count}"),
            format!("skipped: {skipped_count}"),
            format!("errors: {error_count}"),
            format!("rejected_before_import: {rejected_before_import}"),
            format!("media_items_created: {media_items_created}"),
            format!("shows_created: {shows_created}"),
            format!("cursor_before: {}", display_cursor(cursor_before.as_ref())),
            format!("cursor_after: {}", display_cursor(cursor_after.as_ref())),
        ]
    }

    /// Row-level errors are only worth fetching for a persisted batch.
    #[must_use]
    pub fn batch_with_errors(&self) -> Option<ImportBatchId> {
        if self.error_count > 0 {
            self.import_batch_id
        } else {
            None
        }
    }
}

/// Render an optional cursor like JSON, i.e. `null` if absent.
#[must_use]
pub fn display_cursor(cursor: Option<&ImportCursor>) -> String {
    cursor.map_or_else(|| "null".to_owned(), ImportCursor::to_json_string)
}
