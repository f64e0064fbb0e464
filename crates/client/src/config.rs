// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use klug_core::{import::validate::DEFAULT_MAX_UPLOAD_BYTES, library::DEFAULT_HISTORY_PAGE_SIZE};

pub const DEFAULT_ERROR_PAGE_SIZE: u32 = 25;

pub const DEFAULT_BATCH_HISTORY_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientConfig {
    /// Files that are larger are rejected before uploading.
    pub max_upload_bytes: u64,

    /// Row errors that are fetched after an import.
    pub error_page_size: u32,

    pub batch_history_page_size: u32,

    pub history_page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            error_page_size: DEFAULT_ERROR_PAGE_SIZE,
            batch_history_page_size: DEFAULT_BATCH_HISTORY_PAGE_SIZE,
            history_page_size: DEFAULT_HISTORY_PAGE_SIZE,
        }
    }
}
