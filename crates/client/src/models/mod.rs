// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod batch_history;
pub mod dashboard;
pub mod import;
pub mod import_errors;
pub mod listing;
pub mod session;

/// All models of the workflow.
#[derive(Debug, Default)]
pub struct Models {
    pub session: session::Model,
    pub import: import::Model,
    pub import_errors: import_errors::Model,
    pub batch_history: batch_history::Model,
    pub dashboard: dashboard::Model,
}
