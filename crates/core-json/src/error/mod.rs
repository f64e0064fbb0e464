// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::prelude::*;

mod _core {
    pub(super) use klug_core::error_message::*;
}

#[derive(Debug, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
#[serde(rename_all = "snake_case")]
pub struct ValidationIssue {
    #[serde(default)]
    msg: Option<String>,

    #[serde(default)]
    loc: Vec<serde_json::Value>,
}

impl ValidationIssue {
    /// Issues without a message are dropped.
    fn into_core(self) -> Option<_core::ValidationIssue> {
        let Self { msg, loc } = self;
        let msg = msg?;
        Some(_core::ValidationIssue {
            msg,
            loc: loc
                .into_iter()
                .map(|segment| match segment {
                    serde_json::Value::String(segment) => segment,
                    segment => segment.to_string(),
                })
                .collect(),
        })
    }
}

/// The `detail` of an error response in any of its shapes.
#[derive(Debug, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Validation(Vec<ValidationIssue>),
    Other(serde_json::Value),
}

impl From<ErrorDetail> for _core::ErrorDetail {
    fn from(from: ErrorDetail) -> Self {
        match from {
            ErrorDetail::Message(message) => Self::Message(message),
            // Only the message of the first issue is required
            ErrorDetail::Validation(issues)
                if issues.first().is_some_and(|issue| issue.msg.is_some()) =>
            {
                Self::Validation(
                    issues
                        .into_iter()
                        .filter_map(ValidationIssue::into_core)
                        .collect(),
                )
            }
            ErrorDetail::Validation(_) | ErrorDetail::Other(_) => Self::Unknown,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    detail: Option<ErrorDetail>,
}

/// An error response of the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedErrorPayload {
    pub detail: _core::ErrorDetail,

    /// The raw payload for displaying.
    ///
    /// Bodies that are not valid JSON are preserved as a string.
    pub raw: serde_json::Value,
}

/// Decode the body of an error response.
///
/// Never fails. Bodies of an unexpected shape result in an
/// unknown detail.
#[must_use]
pub fn decode_error_payload(body: &[u8]) -> DecodedErrorPayload {
    let Ok(raw) = serde_json::from_slice::<serde_json::Value>(body) else {
        log::debug!("Error response body is not JSON");
        return DecodedErrorPayload {
            detail: _core::ErrorDetail::Unknown,
            raw: serde_json::Value::String(String::from_utf8_lossy(body).into_owned()),
        };
    };
    // Structs would also be deserialized from arrays.
    let detail = raw
        .is_object()
        .then(|| serde_json::from_value::<ErrorPayload>(raw.clone()).ok())
        .flatten()
        .and_then(|payload| payload.detail)
        .map_or(_core::ErrorDetail::Unknown, Into::into);
    DecodedErrorPayload { detail, raw }
}

/// Decode the body of an error response and translate it
/// into a user-facing message.
#[must_use]
pub fn translate_error_payload(body: &[u8]) -> (String, serde_json::Value) {
    let DecodedErrorPayload { detail, raw } = decode_error_payload(body);
    (_core::translate_error_detail(&detail), raw)
}

#[cfg(test)]
mod tests;
