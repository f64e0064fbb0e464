// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! JSON representation of the backend contract.
//!
//! Wire types deserialize leniently and are converted into the
//! corresponding `klug-core` types.

pub mod prelude {
    pub(crate) use serde::{Deserialize, Serialize};

    pub(crate) use crate::util::*;
}

pub mod batch;
pub mod error;
pub mod import;
pub mod library;
pub mod session;
pub mod util;
