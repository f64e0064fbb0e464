// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn start_and_finish_pending() {
    let mut watermark = Watermark::new();
    assert!(!watermark.is_pending());
    let token = watermark.start_pending();
    assert!(watermark.is_pending());
    assert!(watermark.finish_pending(token));
    assert!(!watermark.is_pending());
    // Finishing twice is rejected
    assert!(!watermark.finish_pending(token));
}

#[test]
fn newer_request_supersedes_older() {
    let mut watermark = Watermark::new();
    let older = watermark.start_pending();
    let newer = watermark.start_pending();
    assert_ne!(older, newer);
    assert!(!watermark.finish_pending(older));
    assert!(watermark.is_pending());
    assert!(watermark.finish_pending(newer));
}

#[test]
fn reset_invalidates_pending_tokens() {
    let mut watermark = Watermark::new();
    let token = watermark.start_pending();
    watermark.reset();
    assert!(!watermark.is_pending());
    assert!(!watermark.finish_pending(token));
    // Same sequence in a new epoch
    let token = watermark.start_pending();
    assert!(watermark.finish_pending(token));
}
