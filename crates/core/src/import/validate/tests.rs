// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use uuid::Uuid;

use super::*;
use crate::ImportMode;

const VALID_USER_ID: &str = "3f2b8c1e-5d4a-4b7e-9c21-0a6f1e2d3c4b";

fn settings(user_id: &str) -> ImportSettings {
    ImportSettings {
        user_id: user_id.to_owned(),
        mode: ImportMode::Incremental,
        dry_run: false,
        resume_from_latest: true,
    }
}

fn file(name: &str, size: u64) -> ImportFile {
    ImportFile {
        name: name.to_owned(),
        size,
    }
}

#[test]
fn accept_generated_user_ids() {
    for _ in 0..100 {
        let user_id = Uuid::new_v4().to_string();
        assert!(is_valid_user_id(&user_id), "{user_id}");
        assert!(is_valid_user_id(&user_id.to_uppercase()), "{user_id}");
    }
}

#[test]
fn accept_all_versions_and_variants() {
    for version in ['1', '2', '3', '4', '5'] {
        for variant in ['8', '9', 'a', 'b', 'A', 'B'] {
            let user_id = format!("3f2b8c1e-5d4a-{version}b7e-{variant}c21-0a6f1e2d3c4b");
            assert!(is_valid_user_id(&user_id), "{user_id}");
        }
    }
}

#[test]
fn reject_malformed_user_ids() {
    for user_id in [
        "",
        "not-a-uuid",
        // Too short
        "3f2b8c1e-5d4a-4b7e-9c21-0a6f1e2d3c4",
        // Too long
        "3f2b8c1e-5d4a-4b7e-9c21-0a6f1e2d3c4bb",
        // Missing hyphens
        "3f2b8c1e5d4a4b7e9c210a6f1e2d3c4b",
        // Version nibble 0 and 6
        "3f2b8c1e-5d4a-0b7e-9c21-0a6f1e2d3c4b",
        "3f2b8c1e-5d4a-6b7e-9c21-0a6f1e2d3c4b",
        // Variant nibble 7 and c
        "3f2b8c1e-5d4a-4b7e-7c21-0a6f1e2d3c4b",
        "3f2b8c1e-5d4a-4b7e-cc21-0a6f1e2d3c4b",
        // Non-hex digit
        "3f2b8c1e-5d4a-4b7e-9c21-0a6f1e2d3c4g",
        // Nil UUID
        "00000000-0000-0000-0000-000000000000",
    ] {
        assert!(!is_valid_user_id(user_id), "{user_id}");
    }
}

#[test]
fn accept_valid_input() {
    let accepted = validate_import_input(
        Some(&file("history.CSV", 2 * 1024 * 1024)),
        &settings(&format!("  {VALID_USER_ID}\n")),
        DEFAULT_MAX_UPLOAD_BYTES,
    );
    assert_eq!(
        Ok(Accepted {
            format: FileFormat::Csv,
            user_id: VALID_USER_ID.to_owned(),
        }),
        accepted
    );
}

#[test]
fn reject_missing_file_first() {
    assert_eq!(
        Err(Rejection::NoFileChosen),
        validate_import_input(None, &settings(""), DEFAULT_MAX_UPLOAD_BYTES)
    );
}

#[test]
fn reject_blank_user_id() {
    assert_eq!(
        Err(Rejection::UserIdRequired),
        validate_import_input(
            Some(&file("history.txt", u64::MAX)),
            &settings(" \t "),
            DEFAULT_MAX_UPLOAD_BYTES
        )
    );
}

#[test]
fn reject_invalid_user_id_before_file_type() {
    assert_eq!(
        Err(Rejection::InvalidUserIdFormat),
        validate_import_input(
            Some(&file("history.txt", 1)),
            &settings("user-42"),
            DEFAULT_MAX_UPLOAD_BYTES
        )
    );
}

#[test]
fn reject_unsupported_file_type_before_size() {
    for name in ["history.txt", "history", "history.json.zip"] {
        assert_eq!(
            Err(Rejection::UnsupportedFileType),
            validate_import_input(
                Some(&file(name, u64::MAX)),
                &settings(VALID_USER_ID),
                DEFAULT_MAX_UPLOAD_BYTES
            ),
            "{name}"
        );
    }
}

#[test]
fn size_limit_is_inclusive() {
    let at_limit = file("history.json", DEFAULT_MAX_UPLOAD_BYTES);
    assert!(
        validate_import_input(
            Some(&at_limit),
            &settings(VALID_USER_ID),
            DEFAULT_MAX_UPLOAD_BYTES
        )
        .is_ok()
    );
    let above_limit = file("history.json", DEFAULT_MAX_UPLOAD_BYTES + 1);
    assert_eq!(
        Err(Rejection::FileTooLarge {
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES
        }),
        validate_import_input(
            Some(&above_limit),
            &settings(VALID_USER_ID),
            DEFAULT_MAX_UPLOAD_BYTES
        )
    );
}

#[test]
fn rejection_messages() {
    assert_eq!("no file chosen", Rejection::NoFileChosen.to_string());
    assert_eq!("invalid user id format", Rejection::InvalidUserIdFormat.to_string());
    assert_eq!(
        "file exceeds size limit of 25 MiB",
        Rejection::FileTooLarge {
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES
        }
        .to_string()
    );
    assert_eq!(
        "file exceeds size limit of 1000 bytes",
        Rejection::FileTooLarge { max_bytes: 1000 }.to_string()
    );
}
