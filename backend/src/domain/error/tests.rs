//! Tests for the domain error payload and its serialised envelope.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::duplicate("taken"), ErrorCode::Duplicate)]
#[case(Error::not_found("gone"), ErrorCode::NotFound)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
fn try_new_rejects_blank_messages(#[case] message: &str) {
    let result = Error::try_new(ErrorCode::InvalidRequest, message);
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn serialises_message_under_error_key() {
    let value = serde_json::to_value(Error::user_not_found()).expect("serialise error");
    assert_eq!(value, json!({ "error": "User not found", "code": "not_found" }));
}

#[rstest]
fn serialises_details_when_present() {
    let error = Error::invalid_request("Date is invalid").with_details(json!({ "field": "date" }));
    let value = serde_json::to_value(error).expect("serialise error");
    assert_eq!(value["details"]["field"], "date");
}

#[rstest]
fn display_uses_message() {
    assert_eq!(Error::duplicate("Username already exists").to_string(), "Username already exists");
}
