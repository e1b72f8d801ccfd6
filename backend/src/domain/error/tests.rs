//! Tests for error construction, trace capture, and envelope serialisation.

use super::*;
use crate::domain::validation::Rule;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[fixture]
fn base_error() -> Error {
    Error::invalid_request("bad")
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
#[case(Error::validation(Vec::new()), ErrorCode::ValidationFailed)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn try_with_trace_id_rejects_empty_values(base_error: Error) {
    let result = base_error.try_with_trace_id("   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyTraceId)));
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id
        .parse()
        .expect("fixtures provide a valid UUID");
    let error = TraceId::scope(trace_id, async move { Error::not_found("missing") }).await;

    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
#[tokio::test]
async fn deserialising_ignores_ambient_trace(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id
        .parse()
        .expect("fixtures provide a valid UUID");
    let error = TraceId::scope(trace_id, async move {
        serde_json::from_value::<Error>(json!({"code": "not_found", "message": "missing"}))
            .expect("payload without trace deserialises")
    })
    .await;

    assert!(error.trace_id().is_none());
}

#[rstest]
fn validation_keeps_violations_out_of_envelope(expected_trace_id: String) {
    let error = Error::validation(vec![
        Violation::new("name", Rule::MinLength(5)),
        Violation::new("email", Rule::Email),
    ])
    .with_trace_id(expected_trace_id.clone());

    assert_eq!(error.violations().len(), 2);
    assert_eq!(error.message(), "request validation failed");

    let value = serde_json::to_value(&error).expect("serialise error");
    assert_eq!(
        value,
        json!({
            "code": "validation_failed",
            "message": "request validation failed",
            "traceId": expected_trace_id,
        })
    );
}

#[rstest]
fn envelope_round_trips_details(expected_trace_id: String) {
    let error = Error::invalid_request("bad")
        .with_trace_id(expected_trace_id)
        .with_details(json!({"reason": "expected a string"}));

    let value = serde_json::to_value(&error).expect("serialise error");
    let decoded: Error = serde_json::from_value(value).expect("deserialise error");
    assert_eq!(decoded, error);
}

#[rstest]
fn unknown_envelope_fields_are_rejected() {
    let result = serde_json::from_value::<Error>(json!({
        "code": "not_found",
        "message": "missing",
        "extra": true,
    }));
    assert!(result.is_err());
}

#[rstest]
fn blank_envelope_message_is_rejected() {
    let result = serde_json::from_value::<Error>(json!({"code": "not_found", "message": " "}));
    assert!(result.is_err());
}
