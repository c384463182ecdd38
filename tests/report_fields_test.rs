//! Behavior tests for the shift-report update payload: the JSON list fields
//! must distinguish "field omitted" from "field explicitly null" from
//! "field set to a list", and stored blobs must decode leniently.

use opsboard_backend::models::shift_reports::{
    CreatedAccountEntry, JsonListUpdate, OrderInProgress, UpdateShiftReport,
    parse_created_accounts, parse_orders_in_progress,
};

#[test]
fn omitted_field_deserializes_to_unchanged() {
    let payload: UpdateShiftReport = serde_json::from_str(r#"{"orders_completed": 3}"#).unwrap();

    assert_eq!(payload.orders_completed, Some(3));
    assert_eq!(payload.orders_in_progress, JsonListUpdate::Unchanged);
    assert_eq!(payload.accounts_created, JsonListUpdate::Unchanged);
}

#[test]
fn explicit_null_deserializes_to_clear() {
    let payload: UpdateShiftReport =
        serde_json::from_str(r#"{"orders_in_progress": null}"#).unwrap();

    assert_eq!(payload.orders_in_progress, JsonListUpdate::Clear);
    // The other JSON field was omitted, so it stays untouched.
    assert_eq!(payload.accounts_created, JsonListUpdate::Unchanged);
}

#[test]
fn a_list_deserializes_to_set() {
    let payload: UpdateShiftReport = serde_json::from_str(
        r#"{
            "orders_in_progress": [
                {"account": "client-a", "deadline": "2024-06-03", "handler_phone": "+15550100"}
            ]
        }"#,
    )
    .unwrap();

    match payload.orders_in_progress {
        JsonListUpdate::Set(list) => {
            assert_eq!(list.len(), 1);
            assert_eq!(list[0].account, "client-a");
            assert_eq!(list[0].handler_phone, "+15550100");
        }
        other => panic!("expected Set, got {other:?}"),
    }
}

#[test]
fn an_empty_list_is_set_not_clear() {
    let payload: UpdateShiftReport =
        serde_json::from_str(r#"{"accounts_created": []}"#).unwrap();

    assert_eq!(payload.accounts_created, JsonListUpdate::Set(vec![]));
}

#[test]
fn stored_blobs_decode_to_typed_lists() {
    let raw = serde_json::json!([
        {"account": "client-b", "deadline": "tomorrow", "handler_phone": "+15550101"}
    ]);
    let parsed: Vec<OrderInProgress> = parse_orders_in_progress(Some(&raw));
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].deadline, "tomorrow");
}

#[test]
fn legacy_type_key_is_accepted_for_created_accounts() {
    let raw = serde_json::json!([{"email": "new@example.com", "type": "fiverr"}]);
    let parsed: Vec<CreatedAccountEntry> = parse_created_accounts(Some(&raw));
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].platform, "fiverr");
}

#[test]
fn malformed_blobs_decode_to_an_empty_list() {
    // A legacy row holding a string where a list belongs.
    let garbage = serde_json::json!("not a list");
    assert!(parse_orders_in_progress(Some(&garbage)).is_empty());

    let wrong_shape = serde_json::json!([{"unexpected": true}]);
    assert!(parse_created_accounts(Some(&wrong_shape)).is_empty());

    assert!(parse_orders_in_progress(None).is_empty());
}
