// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A decimal number that is either encoded as a JSON number
/// or as a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(untagged)]
pub enum Decimal {
    Number(serde_json::Number),
    Text(String),
}

impl From<Decimal> for String {
    fn from(from: Decimal) -> Self {
        match from {
            Decimal::Number(number) => number.to_string(),
            Decimal::Text(text) => text,
        }
    }
}

/// The nil UUID is used as a placeholder for missing ids.
#[must_use]
pub fn non_nil_uuid(uuid: Option<Uuid>) -> Option<Uuid> {
    uuid.filter(|uuid| !uuid.is_nil())
}

#[cfg(test)]
mod tests;
