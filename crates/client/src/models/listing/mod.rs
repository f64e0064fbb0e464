// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::util::{remote::RemoteData, roundtrip::PendingToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    NotLoaded,
    Loading,
    Empty,
    Loaded { count: usize },
    Failed,
}

/// Status texts of a listing.
#[derive(Debug, Clone, Copy)]
pub struct ListingLabels {
    pub loading: &'static str,
    pub empty: &'static str,
    pub failed: &'static str,

    /// Suffix after the number of loaded items.
    pub loaded: &'static str,
}

impl ListingLabels {
    #[must_use]
    pub fn status_message(&self, status: ListingStatus) -> String {
        let Self {
            loading,
            empty,
            failed,
            loaded,
        } = self;
        match status {
            ListingStatus::NotLoaded => String::new(),
            ListingStatus::Loading => (*loading).to_owned(),
            ListingStatus::Empty => (*empty).to_owned(),
            ListingStatus::Loaded { count } => format!("Loaded {count} {loaded}"),
            ListingStatus::Failed => (*failed).to_owned(),
        }
    }
}

/// A list of items that is always replaced as a whole.
#[derive(Debug)]
pub struct Listing<T> {
    items: RemoteData<Vec<T>>,
    failed: bool,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self {
            items: RemoteData::default(),
            failed: false,
        }
    }
}

impl<T> Listing<T> {
    /// The items of the last successful fetch.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.items.last_value().map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.items.is_pending()
    }

    #[must_use]
    pub fn status(&self) -> ListingStatus {
        if self.is_pending() {
            return ListingStatus::Loading;
        }
        if self.failed {
            return ListingStatus::Failed;
        }
        match self.items.last_value() {
            None => ListingStatus::NotLoaded,
            Some(items) if items.is_empty() => ListingStatus::Empty,
            Some(items) => ListingStatus::Loaded { count: items.len() },
        }
    }

    /// Start fetching, superseding a request that is still pending.
    #[must_use]
    pub fn start_pending_now(&mut self) -> PendingToken {
        self.items.start_pending_now()
    }

    /// Replace all items with the result of a fetch.
    ///
    /// A failure discards all items. Returns `false` if the result
    /// is outdated and has been discarded.
    pub fn finish_pending(&mut self, token: PendingToken, result: anyhow::Result<Vec<T>>) -> bool {
        match result {
            Ok(items) => {
                if self.items.finish_pending_with_value_now(token, items).is_err() {
                    log::warn!("Discarding outdated items");
                    return false;
                }
                self.failed = false;
            }
            Err(err) => {
                if !self.items.finish_pending_with_failure(token) {
                    log::warn!("Discarding outdated failure: {err:#}");
                    return false;
                }
                log::warn!("Failed to fetch items: {err:#}");
                self.failed = true;
            }
        }
        true
    }
}
