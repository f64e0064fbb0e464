// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Pre-flight checks before uploading a file.
//!
//! All checks are local. The first failing rule determines the
//! rejection, no matter if subsequent rules would fail as well.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::{FileFormat, ImportSettings};

/// Upper bound for the size of uploaded files: 25 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 25 * BYTES_PER_MIB;

const BYTES_PER_MIB: u64 = 1024 * 1024;

/// Canonical textual UUID representation with version 1 to 5
/// and the RFC 4122 variant.
static USER_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("valid regex")
});

/// The file that has been chosen for uploading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportFile {
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub format: FileFormat,

    /// The trimmed user id.
    pub user_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("no file chosen")]
    NoFileChosen,

    #[error("user id required")]
    UserIdRequired,

    #[error("invalid user id format")]
    InvalidUserIdFormat,

    #[error("unsupported file type")]
    UnsupportedFileType,

    #[error("file exceeds size limit of {}", display_size(*.max_bytes))]
    FileTooLarge { max_bytes: u64 },
}

#[must_use]
pub fn is_valid_user_id(user_id: &str) -> bool {
    USER_ID_REGEX.is_match(user_id)
}

pub fn validate_import_input(
    file: Option<&ImportFile>,
    settings: &ImportSettings,
    max_upload_bytes: u64,
) -> Result<Accepted, Rejection> {
    let Some(file) = file else {
        return Err(Rejection::NoFileChosen);
    };
    let user_id = settings.user_id.trim();
    if user_id.is_empty() {
        return Err(Rejection::UserIdRequired);
    }
    if !is_valid_user_id(user_id) {
        return Err(Rejection::InvalidUserIdFormat);
    }
    let format = FileFormat::detect(&file.name).ok_or(Rejection::UnsupportedFileType)?;
    if file.size > max_upload_bytes {
        return Err(Rejection::FileTooLarge {
            max_bytes: max_upload_bytes,
        });
    }
    Ok(Accepted {
        format,
        user_id: user_id.to_owned(),
    })
}

fn display_size(bytes: u64) -> String {
    if bytes > 0 && bytes % BYTES_PER_MIB == 0 {
        format!("{} MiB", bytes / BYTES_PER_MIB)
    } else {
        format!("{bytes} bytes")
    }
}

#[cfg(test)]
mod tests;
