// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Client components of the import workflow.
//!
//! All requests are sent through the [`webapi::WebApi`] seam.
//! An implementation based on `reqwest` is provided by the
//! `webapi-backend` feature.

pub mod config;
pub use self::config::ClientConfig;

pub mod models;

pub mod prefs;
pub use self::prefs::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};

pub mod util;

pub mod webapi;
pub use self::webapi::WebApi;

pub mod workflow;
pub use self::workflow::Workflow;
