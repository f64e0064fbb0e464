// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn single_pending_request() {
    let mut data = RemoteData::<u32>::default();
    let token = data.try_start_pending_now().unwrap();
    assert!(data.is_pending());
    assert!(data.pending_since().is_some());
    assert!(data.try_start_pending_now().is_none());
    assert_eq!(Ok(None), data.finish_pending_with_value_now(token, 1u32));
    assert!(!data.is_pending());
    assert!(data.pending_since().is_none());
    assert_eq!(Some(&1), data.last_value());
}

#[test]
fn discard_superseded_value() {
    let mut data = RemoteData::<u32>::default();
    let older = data.start_pending_now();
    let newer = data.start_pending_now();
    assert_eq!(Ok(None), data.finish_pending_with_value_now(newer, 2u32));
    assert_eq!(Err(1), data.finish_pending_with_value_now(older, 1u32));
    assert_eq!(Some(&2), data.last_value());
}

#[test]
fn failure_discards_last_snapshot() {
    let mut data = RemoteData::<u32>::default();
    let token = data.start_pending_now();
    data.finish_pending_with_value_now(token, 1u32).unwrap();
    let token = data.start_pending_now();
    // Retained while pending
    assert_eq!(Some(&1), data.last_value());
    assert!(data.finish_pending_with_failure(token));
    assert_eq!(None, data.last_value());
}

#[test]
fn reset_discards_pending_request() {
    let mut data = RemoteData::<u32>::default();
    let token = data.start_pending_now();
    assert_eq!(None, data.reset());
    assert!(!data.is_pending());
    assert!(!data.finish_pending(token));
}
