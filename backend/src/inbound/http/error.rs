//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent responses. Validation
//! failures render as a JSON:API `errors` document; everything else uses the
//! service-wide error envelope.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER, Violation};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Media type of success bodies and validation documents.
pub const JSON_API_CONTENT_TYPE: &str = "application/vnd.api+json";

/// Title shared by every validation error object.
pub const INVALID_ATTRIBUTE_TITLE: &str = "Invalid Attribute";

#[derive(Debug, Serialize)]
struct ErrorSource {
    pointer: String,
}

/// One entry of a JSON:API validation document.
#[derive(Debug, Serialize)]
struct ValidationErrorObject {
    status: u16,
    source: ErrorSource,
    title: &'static str,
    detail: String,
}

impl From<&Violation> for ValidationErrorObject {
    fn from(violation: &Violation) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY.as_u16(),
            source: ErrorSource {
                pointer: violation.pointer(),
            },
            title: INVALID_ATTRIBUTE_TITLE,
            detail: violation.detail(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ValidationDocument {
    errors: Vec<ValidationErrorObject>,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        error!(error = %error, trace_id = ?error.trace_id(), "internal error");
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        if matches!(self.code(), ErrorCode::ValidationFailed) {
            let document = ValidationDocument {
                errors: self.violations().iter().map(Into::into).collect(),
            };
            return match serde_json::to_vec(&document) {
                Ok(body) => builder.content_type(JSON_API_CONTENT_TYPE).body(body),
                Err(err) => {
                    error!(error = %err, "failed to encode validation document");
                    HttpResponse::InternalServerError().finish()
                }
            };
        }

        builder.json(redact_if_internal(self))
    }
}

#[cfg(test)]
mod tests;
