// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Submitting a single upload at a time.

use std::fmt;

use bytes::Bytes;
use klug_core::{ImportBatchSummary, ImportCursor, import::display_cursor};
use thiserror::Error;

use crate::util::{remote::RemoteData, roundtrip::PendingToken};

pub mod task;

pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "Import request failed. Check the network connection and server status.";

/// The contents of the file to upload.
#[derive(Debug, Clone)]
pub struct ImportUpload {
    pub file_name: String,
    pub content: Bytes,
}

#[derive(Debug, Error)]
pub enum SubmissionFailure {
    /// Another submission is still pending.
    #[error("an import is already in progress")]
    Busy,

    /// The backend responded with an error status.
    #[error("{message}")]
    Rejected {
        status: u16,

        /// User-facing message.
        message: String,

        /// The raw error payload.
        payload: serde_json::Value,
    },

    #[error("{}", TRANSPORT_FAILURE_MESSAGE)]
    Transport(anyhow::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CursorDisplay {
    #[default]
    Idle,
    Pending,
    Unavailable,
    Value(Option<ImportCursor>),
}

impl fmt::Display for CursorDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("-"),
            Self::Pending => f.write_str("pending"),
            Self::Unavailable => f.write_str("unavailable"),
            Self::Value(cursor) => f.write_str(&display_cursor(cursor.as_ref())),
        }
    }
}

/// The control for starting a submission.
///
/// Counts all transitions to verify that every disabling
/// is followed by enabling it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    enabled: bool,
    disabled_count: usize,
    enabled_count: usize,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self {
            enabled: true,
            disabled_count: 0,
            enabled_count: 0,
        }
    }
}

impl SubmitControl {
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub const fn disabled_count(&self) -> usize {
        self.disabled_count
    }

    #[must_use]
    pub const fn enabled_count(&self) -> usize {
        self.enabled_count
    }

    fn disable(&mut self) {
        debug_assert!(self.enabled);
        self.enabled = false;
        self.disabled_count += 1;
    }

    fn enable(&mut self) {
        debug_assert!(!self.enabled);
        self.enabled = true;
        self.enabled_count += 1;
    }
}

#[derive(Debug, Default)]
pub struct Model {
    last_summary: RemoteData<ImportBatchSummary>,
    submit_control: SubmitControl,
    cursor_before: CursorDisplay,
    cursor_after: CursorDisplay,
    status_message: Option<String>,
    last_error_payload: Option<serde_json::Value>,
}

impl Model {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.last_summary.is_pending()
    }

    #[must_use]
    pub fn last_summary(&self) -> Option<&ImportBatchSummary> {
        self.last_summary.last_value()
    }

    #[must_use]
    pub const fn submit_control(&self) -> &SubmitControl {
        &self.submit_control
    }

    #[must_use]
    pub const fn cursor_before(&self) -> &CursorDisplay {
        &self.cursor_before
    }

    #[must_use]
    pub const fn cursor_after(&self) -> &CursorDisplay {
        &self.cursor_after
    }

    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// The raw payload of the last rejected submission.
    #[must_use]
    pub const fn last_error_payload(&self) -> Option<&serde_json::Value> {
        self.last_error_payload.as_ref()
    }

    /// Start a new submission.
    ///
    /// Rejected without any side effects while another
    /// submission is pending.
    pub fn start_submit(&mut self) -> Result<PendingToken, SubmissionFailure> {
        let Some(token) = self.last_summary.try_start_pending_now() else {
            log::warn!("Rejecting submission while pending");
            return Err(SubmissionFailure::Busy);
        };
        self.submit_control.disable();
        self.cursor_before = CursorDisplay::Pending;
        self.cursor_after = CursorDisplay::Pending;
        self.status_message = Some("Uploading...".to_owned());
        self.last_error_payload = None;
        Ok(token)
    }

    /// Finish the pending submission.
    ///
    /// The submit control is enabled again in any case.
    pub fn finish_submit(
        &mut self,
        token: PendingToken,
        result: &Result<ImportBatchSummary, SubmissionFailure>,
    ) {
        self.submit_control.enable();
        match result {
            Ok(summary) => {
                self.cursor_before = CursorDisplay::Value(summary.cursor_before.clone());
                self.cursor_after = CursorDisplay::Value(summary.cursor_after.clone());
                self.status_message = Some(summary.digest());
                if self
                    .last_summary
                    .finish_pending_with_value_now(token, summary.clone())
                    .is_err()
                {
                    log::warn!("Discarding summary while not pending");
                }
                return;
            }
            Err(SubmissionFailure::Busy) => {
                // Busy submissions have never been started
            }
            Err(SubmissionFailure::Rejected {
                status,
                message,
                payload,
            }) => {
                log::warn!("Import rejected with status {status}: {message}");
                self.status_message = Some(message.clone());
                self.last_error_payload = Some(payload.clone());
            }
            Err(SubmissionFailure::Transport(err)) => {
                log::warn!("Import request failed: {err:#}");
                self.status_message = Some(TRANSPORT_FAILURE_MESSAGE.to_owned());
            }
        }
        self.cursor_before = CursorDisplay::Unavailable;
        self.cursor_after = CursorDisplay::Unavailable;
        self.last_summary.finish_pending(token);
    }
}

#[cfg(test)]
mod tests;
