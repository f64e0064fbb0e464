// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

// Importing all enum variants into a narrow, local scope is acceptable.
#![allow(clippy::enum_glob_use)]

pub mod batch;
pub use self::batch::{ImportBatchHistoryEntry, ImportBatchParameters, ImportRowError, Severity};

pub mod error_message;
pub use self::error_message::{ErrorDetail, ValidationIssue, translate_error_detail};

pub mod import;
pub use self::import::{
    FileFormat, ImportBatchId, ImportBatchSummary, ImportCursor, ImportMode, ImportSettings,
    ImportSettingsPatch,
};

pub mod library;
pub use self::library::{
    Episode, HistoryQuery, MediaType, Show, ShowDetail, ShowProgress, WatchEvent,
};

pub mod prelude {
    pub use crate::{
        batch::*,
        error_message::*,
        import::{validate::*, *},
        library::*,
    };
}
