// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn decimal_from_number_or_string() {
    let number: Decimal = serde_json::from_str("33.5").unwrap();
    assert_eq!("33.5", String::from(number));
    let text: Decimal = serde_json::from_str(r#""33.50""#).unwrap();
    assert_eq!("33.50", String::from(text));
}

#[test]
fn nil_uuid_is_none() {
    assert_eq!(None, non_nil_uuid(Some(Uuid::nil())));
    assert_eq!(None, non_nil_uuid(None));
    let uuid = Uuid::new_v4();
    assert_eq!(Some(uuid), non_nil_uuid(Some(uuid)));
}
