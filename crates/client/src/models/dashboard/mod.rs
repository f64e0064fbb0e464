// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Shows, watch progress, and watch history of the authenticated user.
//!
//! All parts are loaded and rendered independently of each other.

use klug_core::{HistoryQuery, Show, ShowDetail, ShowProgress, WatchEvent};

use super::listing::{Listing, ListingLabels};
use crate::util::{remote::RemoteData, roundtrip::PendingToken};

pub mod task;

pub const SHOWS_LABELS: ListingLabels = ListingLabels {
    loading: "Loading shows...",
    empty: "No shows found",
    failed: "Failed to load shows",
    loaded: "show(s)",
};

pub const PROGRESS_LABELS: ListingLabels = ListingLabels {
    loading: "Loading progress...",
    empty: "No watched progress yet",
    failed: "Failed to load progress",
    loaded: "progress row(s)",
};

pub const HISTORY_LABELS: ListingLabels = ListingLabels {
    loading: "Loading history...",
    empty: "No events for current filter/page",
    failed: "Failed to load history",
    loaded: "event(s)",
};

pub const SHOW_DETAIL_LOADING_MESSAGE: &str = "Loading detail...";

pub const SHOW_DETAIL_FAILED_MESSAGE: &str = "Failed to load show detail";

/// The detail of the most recently selected show.
#[derive(Debug, Default)]
pub struct ShowDetailView {
    detail: RemoteData<ShowDetail>,
    failed: bool,
}

impl ShowDetailView {
    #[must_use]
    pub fn detail(&self) -> Option<&ShowDetail> {
        self.detail.last_value()
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.detail.is_pending()
    }

    #[must_use]
    pub fn status_message(&self) -> String {
        if self.is_pending() {
            return SHOW_DETAIL_LOADING_MESSAGE.to_owned();
        }
        if self.failed {
            return SHOW_DETAIL_FAILED_MESSAGE.to_owned();
        }
        self.detail().map_or_else(String::new, |detail| {
            format!("Loaded {} episode(s)", detail.episodes.len())
        })
    }

    /// Start loading another show, discarding the current detail.
    #[must_use]
    pub fn start_pending_now(&mut self) -> PendingToken {
        self.detail.reset();
        self.failed = false;
        self.detail.start_pending_now()
    }

    /// Returns `false` if the result is outdated and has been discarded.
    pub fn finish_pending(
        &mut self,
        token: PendingToken,
        result: anyhow::Result<ShowDetail>,
    ) -> bool {
        match result {
            Ok(detail) => {
                if self.detail.finish_pending_with_value_now(token, detail).is_err() {
                    log::warn!("Discarding outdated show detail");
                    return false;
                }
            }
            Err(err) => {
                if !self.detail.finish_pending_with_failure(token) {
                    log::warn!("Discarding outdated failure: {err:#}");
                    return false;
                }
                log::warn!("Failed to fetch show detail: {err:#}");
                self.failed = true;
            }
        }
        true
    }
}

#[derive(Debug, Default)]
pub struct Model {
    pub shows: Listing<Show>,
    pub progress: Listing<ShowProgress>,
    pub history: Listing<WatchEvent>,
    pub show_detail: ShowDetailView,
    history_query: HistoryQuery,
}

impl Model {
    /// Starts browsing the history at the first page.
    #[must_use]
    pub fn with_history_page_size(history_page_size: u32) -> Self {
        Self {
            history_query: HistoryQuery {
                limit: history_page_size,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// The query of the current or most recent history request.
    #[must_use]
    pub const fn history_query(&self) -> &HistoryQuery {
        &self.history_query
    }

    #[must_use]
    pub fn has_next_history_page(&self) -> bool {
        self.history_query.has_next_page(self.history.items().len())
    }

    #[must_use]
    pub fn start_history(&mut self, query: HistoryQuery) -> PendingToken {
        self.history_query = query;
        self.history.start_pending_now()
    }

    /// Status lines of all parts in display order.
    #[must_use]
    pub fn status_messages(&self) -> [String; 3] {
        [
            SHOWS_LABELS.status_message(self.shows.status()),
            PROGRESS_LABELS.status_message(self.progress.status()),
            HISTORY_LABELS.status_message(self.history.status()),
        ]
    }
}
