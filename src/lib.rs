// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! klug - Watch history import client
//!
//! Facade that re-exports the member crates of the workspace
//! depending on the enabled features.

pub use klug_core as core;

#[cfg(feature = "json")]
pub use klug_core_json as core_json;

#[cfg(feature = "client")]
pub use klug_client as client;
