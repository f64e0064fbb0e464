// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! User-facing messages for errors reported by the backend.
//!
//! The known fragments of the backend wording are a versioned
//! contract. Details that don't match any of them are passed
//! through verbatim and logged to detect drift.

use std::sync::LazyLock;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};

pub const UNKNOWN_ERROR_MESSAGE: &str = "Import failed with an unknown error.";

pub const REQUEST_VALIDATION_PREFIX: &str = "Request validation failed: ";

/// Known fragments of backend error details (matched case-insensitively)
/// and their user-facing replacements.
const KNOWN_DETAILS: [(&str, &str); 5] = [
    ("uploaded file is empty", "The selected file is empty."),
    (
        "could not detect format",
        "The file format could not be detected. Use a .json or .csv file.",
    ),
    ("no valid rows", "The file does not contain any valid rows."),
    (
        "user_id is required",
        "A user id is required for legacy backup imports.",
    ),
    (
        "exceeds maximum upload size",
        "The file exceeds the maximum upload size.",
    ),
];

static KNOWN_DETAILS_MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasickBuilder::new()
        .ascii_case_insensitive(true)
        .match_kind(MatchKind::LeftmostFirst)
        .build(KNOWN_DETAILS.map(|(fragment, _)| fragment))
        .expect("valid patterns")
});

/// A single entry of a request validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub msg: String,

    /// Path of the offending request field, if reported.
    pub loc: Vec<String>,
}

/// The `detail` of an error payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorDetail {
    Message(String),
    Validation(Vec<ValidationIssue>),

    /// Missing or of an unexpected shape.
    Unknown,
}

/// Map the detail of an error payload to a single message.
#[must_use]
pub fn translate_error_detail(detail: &ErrorDetail) -> String {
    match detail {
        ErrorDetail::Message(message) => translate_message(message),
        ErrorDetail::Validation(issues) => issues.first().map_or_else(
            || UNKNOWN_ERROR_MESSAGE.to_owned(),
            |issue| format!("{REQUEST_VALIDATION_PREFIX}{msg}", msg = issue.msg),
        ),
        ErrorDetail::Unknown => UNKNOWN_ERROR_MESSAGE.to_owned(),
    }
}

fn translate_message(message: &str) -> String {
    if let Some(found) = KNOWN_DETAILS_MATCHER.find(message) {
        let (_, translated) = KNOWN_DETAILS[found.pattern().as_usize()];
        return translated.to_owned();
    }
    log::warn!("Passing through unrecognized error detail: {message}");
    message.to_owned()
}
