// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::time::Instant;

use crate::util::roundtrip::{PendingToken, Watermark};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataSnapshot<T> {
    pub value: T,
    pub since: Instant,
}

impl<T> DataSnapshot<T> {
    #[must_use]
    pub fn now(value: impl Into<T>) -> Self {
        Self {
            value: value.into(),
            since: Instant::now(),
        }
    }

    #[must_use]
    pub fn as_ref(&self) -> DataSnapshot<&T> {
        let Self { since, value } = self;
        DataSnapshot {
            since: *since,
            value,
        }
    }
}

/// Data that is fetched from a remote source.
///
/// The last snapshot is retained while a new request is pending.
#[derive(Debug)]
pub struct RemoteData<T> {
    watermark: Watermark,
    pending_since: Option<Instant>,
    last_snapshot: Option<DataSnapshot<T>>,
}

impl<T> RemoteData<T> {
    #[must_use]
    pub const fn default() -> Self {
        Self {
            watermark: Watermark::INITIAL,
            pending_since: None,
            last_snapshot: None,
        }
    }

    #[must_use]
    pub const fn last_snapshot(&self) -> Option<&DataSnapshot<T>> {
        self.last_snapshot.as_ref()
    }

    #[must_use]
    pub fn last_value(&self) -> Option<&T> {
        self.last_snapshot.as_ref().map(|x| &x.value)
    }

    #[must_use]
    pub const fn pending_since(&self) -> Option<Instant> {
        self.pending_since
    }

    /// Discard both the pending request and the last snapshot.
    pub fn reset(&mut self) -> Option<DataSnapshot<T>> {
        self.watermark.reset();
        self.pending_since = None;
        self.last_snapshot.take()
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.watermark.is_pending()
    }

    /// Start the next round with a pending request now
    ///
    /// Requests that are already pending will be discarded when finished.
    #[must_use]
    pub fn start_pending_now(&mut self) -> PendingToken {
        self.pending_since = Some(Instant::now());
        self.watermark.start_pending()
    }

    /// Try to start the next round with a pending request
    ///
    /// Allows only a single pending request at a time.
    #[must_use]
    pub fn try_start_pending_now(&mut self) -> Option<PendingToken> {
        (!self.is_pending()).then(|| self.start_pending_now())
    }

    /// Finish a pending request without touching or updating any data
    pub fn finish_pending(&mut self, token: PendingToken) -> bool {
        if !self.watermark.finish_pending(token) {
            return false;
        }
        self.pending_since = None;
        true
    }

    /// Finish a pending request now
    ///
    /// Returns the last data snapshot if accepted or the given value if rejected.
    pub fn finish_pending_with_value_now(
        &mut self,
        token: PendingToken,
        value: impl Into<T>,
    ) -> Result<Option<DataSnapshot<T>>, T> {
        if !self.finish_pending(token) {
            return Err(value.into());
        }
        let last_snapshot = self.last_snapshot.replace(DataSnapshot::now(value));
        Ok(last_snapshot)
    }

    /// Finish a pending request that failed
    ///
    /// The last snapshot is discarded if accepted.
    pub fn finish_pending_with_failure(&mut self, token: PendingToken) -> bool {
        if !self.finish_pending(token) {
            return false;
        }
        self.last_snapshot = None;
        true
    }
}

impl<T> Default for RemoteData<T> {
    fn default() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests;
