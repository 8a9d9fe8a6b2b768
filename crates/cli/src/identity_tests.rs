// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn token_pair_round_trips_server_field_names() {
    let json = r#"{"access":"A1","refresh":"R1"}"#;
    let pair: TokenPair = serde_json::from_str(json).expect("parse");
    assert_eq!(pair.access, "A1");
    assert_eq!(pair.refresh, "R1");

    let out = serde_json::to_value(&pair).expect("serialize");
    assert_eq!(out["access"], "A1");
    assert_eq!(out["refresh"], "R1");
}

#[test]
fn profile_defaults_optional_fields() {
    // Minimal server response: staff flag and names absent.
    let json = r#"{"id":7,"email":"ops@example.com"}"#;
    let profile: Profile = serde_json::from_str(json).expect("parse");
    assert_eq!(profile.id, 7);
    assert!(!profile.is_staff);
    assert!(profile.phone_number.is_none());
    assert!(profile.first_name.is_none());
}

#[test]
fn profile_reads_staff_flag() {
    let json = r#"{"id":1,"email":"a@b.c","is_staff":true,"phone_number":"+54 11 5555"}"#;
    let profile: Profile = serde_json::from_str(json).expect("parse");
    assert!(profile.is_staff);
    assert_eq!(profile.phone_number.as_deref(), Some("+54 11 5555"));
}

#[test]
fn register_request_omits_absent_names() {
    let req = RegisterRequest {
        email: "a@b.c".to_owned(),
        password: "pw".to_owned(),
        phone_number: "+54 11 5555".to_owned(),
        first_name: None,
        last_name: None,
    };
    let out = serde_json::to_value(&req).expect("serialize");
    assert!(out.get("first_name").is_none());
    assert!(out.get("last_name").is_none());
    assert_eq!(out["phone_number"], "+54 11 5555");
}
