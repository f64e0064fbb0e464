// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Row errors of an import batch.

use klug_core::{ImportBatchId, ImportRowError};

use crate::util::{remote::RemoteData, roundtrip::PendingToken};

pub mod task;

pub const NO_ERRORS_MESSAGE: &str = "No errors recorded.";

pub const FETCH_FAILED_MESSAGE: &str = "Failed to load import errors.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ErrorPanel {
    #[default]
    NotLoaded,
    Loading {
        import_batch_id: ImportBatchId,
    },

    /// No errors have been recorded, e.g. after an import
    /// without errors.
    Empty {
        import_batch_id: Option<ImportBatchId>,
    },

    Loaded {
        import_batch_id: ImportBatchId,
        row_errors: Vec<ImportRowError>,
    },
    Failed,
}

impl ErrorPanel {
    /// Lines for displaying the panel.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::NotLoaded => vec![],
            Self::Loading { import_batch_id } => {
                vec![format!("Loading errors of batch {import_batch_id}...")]
            }
            Self::Empty { .. } => vec![NO_ERRORS_MESSAGE.to_owned()],
            Self::Loaded {
                import_batch_id,
                row_errors,
            } => {
                let mut lines = Vec::with_capacity(row_errors.len() + 1);
                lines.push(format!(
                    "{count} error(s) in batch {import_batch_id}",
                    count = row_errors.len()
                ));
                lines.extend(row_errors.iter().map(ToString::to_string));
                lines
            }
            Self::Failed => vec![FETCH_FAILED_MESSAGE.to_owned()],
        }
    }
}

#[derive(Debug, Default)]
pub struct Model {
    row_errors: RemoteData<(ImportBatchId, Vec<ImportRowError>)>,
    panel: ErrorPanel,
}

impl Model {
    #[must_use]
    pub const fn panel(&self) -> &ErrorPanel {
        &self.panel
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.row_errors.is_pending()
    }

    /// Clear the panel and discard any pending fetch.
    pub fn clear(&mut self) {
        self.row_errors.reset();
        self.panel = ErrorPanel::NotLoaded;
    }

    pub fn show_no_errors(&mut self, import_batch_id: Option<ImportBatchId>) {
        self.row_errors.reset();
        self.panel = ErrorPanel::Empty { import_batch_id };
    }

    /// Start fetching the errors of a batch.
    ///
    /// Supersedes a fetch that is still pending.
    #[must_use]
    pub fn start_fetch(&mut self, import_batch_id: ImportBatchId) -> PendingToken {
        self.panel = ErrorPanel::Loading { import_batch_id };
        self.row_errors.start_pending_now()
    }

    /// Returns `false` if the result is outdated and has been discarded.
    pub fn finish_fetch(
        &mut self,
        token: PendingToken,
        import_batch_id: ImportBatchId,
        result: anyhow::Result<Vec<ImportRowError>>,
    ) -> bool {
        match result {
            Ok(row_errors) => {
                let panel = if row_errors.is_empty() {
                    ErrorPanel::Empty {
                        import_batch_id: Some(import_batch_id),
                    }
                } else {
                    ErrorPanel::Loaded {
                        import_batch_id,
                        row_errors: row_errors.clone(),
                    }
                };
                if self
                    .row_errors
                    .finish_pending_with_value_now(token, (import_batch_id, row_errors))
                    .is_err()
                {
                    log::warn!("Discarding outdated errors of batch {import_batch_id}");
                    return false;
                }
                self.panel = panel;
            }
            Err(err) => {
                if !self.row_errors.finish_pending_with_failure(token) {
                    log::warn!("Discarding outdated failure: {err:#}");
                    return false;
                }
                log::warn!("Failed to fetch errors of batch {import_batch_id}: {err:#}");
                self.panel = ErrorPanel::Failed;
            }
        }
        true
    }
}
