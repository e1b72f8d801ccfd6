//! Tests for HTTP error mapping.

use super::*;
use crate::domain::Rule;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::{StatusCode, header};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[fixture]
fn internal_error_case(expected_trace_id: String) -> Error {
    Error::internal("boom")
        .with_trace_id(expected_trace_id)
        .with_details(json!({"secret": "x"}))
}

#[fixture]
fn invalid_request_case(expected_trace_id: String) -> Error {
    Error::invalid_request("bad")
        .with_trace_id(expected_trace_id)
        .with_details(json!({"reason": "expected a string"}))
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::validation(Vec::new()), StatusCode::UNPROCESSABLE_ENTITY)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

async fn assert_error_response(
    error: Error,
    expected_status: StatusCode,
    expected_trace_id: Option<&str>,
) -> Value {
    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), expected_status);

    let header = response.headers().get(TRACE_ID_HEADER);
    match expected_trace_id {
        Some(expected) => {
            let trace_id = header
                .expect("trace-id header is set by error_response")
                .to_str()
                .expect("trace-id not valid UTF-8");
            assert_eq!(trace_id, expected);
        }
        None => assert!(header.is_none(), "trace-id header should not be present"),
    }

    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");

    serde_json::from_slice(&bytes).expect("error JSON deserialisation succeeds")
}

#[rstest]
#[actix_web::test]
async fn error_responses_include_trace_id_and_payloads(
    #[from(internal_error_case)] internal_error: Error,
    #[from(invalid_request_case)] invalid_request: Error,
    expected_trace_id: String,
) {
    let redacted = assert_error_response(
        internal_error,
        StatusCode::INTERNAL_SERVER_ERROR,
        Some(expected_trace_id.as_str()),
    )
    .await;
    assert_eq!(
        redacted,
        json!({
            "code": "internal_error",
            "message": "Internal server error",
            "traceId": expected_trace_id,
        })
    );

    let payload: Error = serde_json::from_value(
        assert_error_response(
            invalid_request,
            StatusCode::BAD_REQUEST,
            Some(expected_trace_id.as_str()),
        )
        .await,
    )
    .expect("envelope parses");
    assert_eq!(payload.code(), ErrorCode::InvalidRequest);
    assert_eq!(payload.message(), "bad");
    assert_eq!(
        payload.details(),
        Some(&json!({"reason": "expected a string"}))
    );
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let error = Error::not_found("User not found");

    let payload = assert_error_response(error, StatusCode::NOT_FOUND, None).await;
    assert_eq!(
        payload,
        json!({"code": "not_found", "message": "User not found"})
    );
}

#[rstest]
#[actix_web::test]
async fn validation_errors_render_json_api_document(expected_trace_id: String) {
    let error = Error::validation(vec![
        Violation::new("name", Rule::MinLength(5)),
        Violation::new("email", Rule::Email),
    ])
    .with_trace_id(expected_trace_id.clone());

    let response = ResponseError::error_response(&error);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some(JSON_API_CONTENT_TYPE)
    );

    let document = assert_error_response(
        error,
        StatusCode::UNPROCESSABLE_ENTITY,
        Some(expected_trace_id.as_str()),
    )
    .await;
    assert_eq!(
        document,
        json!({
            "errors": [
                {
                    "status": 422,
                    "source": {"pointer": "/data/attributes/name"},
                    "title": "Invalid Attribute",
                    "detail": "min validation failed for field: name",
                },
                {
                    "status": 422,
                    "source": {"pointer": "/data/attributes/email"},
                    "title": "Invalid Attribute",
                    "detail": "email validation failed for field: email",
                },
            ]
        })
    );
}
