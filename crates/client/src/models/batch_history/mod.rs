// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Recent import batches and their recorded settings.

use std::collections::HashMap;

use klug_core::{ImportBatchHistoryEntry, ImportBatchId};
use thiserror::Error;

use super::listing::{Listing, ListingLabels, ListingStatus};
use crate::util::roundtrip::PendingToken;

pub mod task;

pub const LABELS: ListingLabels = ListingLabels {
    loading: "Loading import batches...",
    empty: "No import batches yet",
    failed: "Failed to load import batches",
    loaded: "import batch(es)",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The batch is not contained in the current table.
    #[error("could not load settings")]
    NotFound(ImportBatchId),
}

#[derive(Debug, Default)]
pub struct Model {
    entries: Listing<ImportBatchHistoryEntry>,
    lookup: HashMap<ImportBatchId, usize>,
}

impl Model {
    #[must_use]
    pub fn entries(&self) -> &[ImportBatchHistoryEntry] {
        self.entries.items()
    }

    #[must_use]
    pub fn status(&self) -> ListingStatus {
        self.entries.status()
    }

    #[must_use]
    pub fn status_message(&self) -> String {
        LABELS.status_message(self.status())
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.entries.is_pending()
    }

    pub fn find(
        &self,
        import_batch_id: &ImportBatchId,
    ) -> Result<&ImportBatchHistoryEntry, LookupError> {
        self.lookup
            .get(import_batch_id)
            .and_then(|index| self.entries().get(*index))
            .ok_or(LookupError::NotFound(*import_batch_id))
    }

    #[must_use]
    pub fn start_refresh(&mut self) -> PendingToken {
        self.entries.start_pending_now()
    }

    /// Replace the table with the result of a refresh.
    ///
    /// The lookup is always rebuilt from scratch. A failed refresh
    /// leaves an empty table behind.
    pub fn finish_refresh(
        &mut self,
        token: PendingToken,
        result: anyhow::Result<Vec<ImportBatchHistoryEntry>>,
    ) -> bool {
        if !self.entries.finish_pending(token, result) {
            return false;
        }
        self.lookup = self
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.import_batch_id, index))
            .collect();
        true
    }
}

#[cfg(test)]
mod tests;
