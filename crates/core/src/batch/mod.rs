// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use crate::import::{ImportBatchId, ImportMode, ImportSettingsPatch};

/// Parameters that have been recorded when the batch was started.
///
/// Older batches may lack some or all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportBatchParameters {
    pub mode: Option<String>,
    pub dry_run: Option<bool>,
    pub resume_from_latest: Option<bool>,
}

/// Read-only projection of a past import batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBatchHistoryEntry {
    pub import_batch_id: ImportBatchId,
    pub started_at: String,
    pub finished_at: Option<String>,
    pub status: String,
    pub source: String,

    /// Used as the mode indicator by older batches.
    pub source_detail: Option<String>,

    pub watch_events_inserted: u64,
    pub errors_count: u64,
    pub notes: Option<String>,
    pub parameters: ImportBatchParameters,
}

impl ImportBatchHistoryEntry {
    /// The mode of the batch, if it could be determined.
    ///
    /// An explicitly recorded mode takes precedence over
    /// the legacy source detail.
    #[must_use]
    pub fn mode(&self) -> Option<ImportMode> {
        let parse_mode = |mode: &str| mode.trim().parse().ok();
        self.parameters
            .mode
            .as_deref()
            .and_then(parse_mode)
            .or_else(|| self.source_detail.as_deref().and_then(parse_mode))
    }

    /// Derive the settings for replaying this batch.
    ///
    /// Resuming is disabled unless it has been recorded explicitly.
    #[must_use]
    pub fn settings_patch(&self) -> ImportSettingsPatch {
        let ImportBatchParameters {
            dry_run,
            resume_from_latest,
            mode: _,
        } = self.parameters;
        ImportSettingsPatch {
            mode: self.mode(),
            dry_run,
            resume_from_latest: resume_from_latest.unwrap_or(false),
        }
    }

    /// One line for listing the batch.
    #[must_use]
    pub fn summary_line(&self) -> String {
        let Self {
            import_batch_id,
            started_at,
            status,
            source,
            watch_events_inserted,
            errors_count,
            ..
        } = self;
        let mode = self.mode().map_or("-", ImportMode::as_str);
        format!(
            "{import_batch_id} {started_at} {status} ({source}, {mode}): inserted {watch_events_inserted}, errors {errors_count}"
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
    Other(String),
}

impl Severity {
    #[must_use]
    pub fn parse(severity: &str) -> Self {
        let severity = severity.trim();
        if severity.eq_ignore_ascii_case("warning") {
            Self::Warning
        } else if severity.eq_ignore_ascii_case("error") {
            Self::Error
        } else {
            Self::Other(severity.to_owned())
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Other(other) => other,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An issue with a single row of an imported file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRowError {
    pub severity: Severity,
    pub entity_ref: Option<String>,
    pub message: String,
}

impl fmt::Display for ImportRowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            severity,
            entity_ref,
            message,
        } = self;
        match entity_ref.as_deref() {
            Some(entity_ref) if !entity_ref.is_empty() => {
                write!(f, "{severity} [{entity_ref}] {message}")
            }
            _ => write!(f, "{severity} {message}"),
        }
    }
}

#[cfg(test)]
mod tests;
