//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the wire shape of their domain counterparts but
//! live in the inbound adapter layer where framework concerns belong.

#![expect(
    dead_code,
    reason = "Schema wrappers are used only for OpenAPI generation via utoipa"
)]

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request body could not be parsed.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// One or more fields broke their rules.
    #[schema(rename = "validation_failed")]
    ValidationFailed,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// Error envelope for 400, 404 and 500 responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "User not found")]
    message: String,
    /// Correlation identifier, echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// Location of an invalid attribute.
#[derive(ToSchema)]
#[schema(as = ValidationErrorSource)]
pub struct ValidationErrorSourceSchema {
    #[schema(example = "/data/attributes/email")]
    pointer: String,
}

/// One failed field in a validation document.
#[derive(ToSchema)]
#[schema(as = ValidationError)]
pub struct ValidationErrorSchema {
    #[schema(example = 422)]
    status: u16,
    source: ValidationErrorSourceSchema,
    #[schema(example = "Invalid Attribute")]
    title: String,
    #[schema(example = "email validation failed for field: email")]
    detail: String,
}

/// JSON:API document returned with 422 responses.
#[derive(ToSchema)]
#[schema(as = ValidationDocument)]
pub struct ValidationDocumentSchema {
    errors: Vec<ValidationErrorSchema>,
}

/// Stored user.
#[derive(ToSchema)]
#[schema(as = User)]
pub struct UserSchema {
    #[schema(value_type = String, format = Uuid)]
    id: String,
    #[schema(example = "Jane Doe", min_length = 5, max_length = 100)]
    name: String,
    #[schema(example = "jane@example.com", format = Email)]
    email: String,
}

/// Writable user attributes.
#[derive(ToSchema)]
#[schema(as = UserAttributes)]
pub struct UserAttributesSchema {
    #[schema(example = "Jane Doe", min_length = 5, max_length = 100)]
    name: String,
    #[schema(example = "jane@example.com", format = Email)]
    email: String,
}

/// Stored article.
#[derive(ToSchema)]
#[schema(as = Article)]
pub struct ArticleSchema {
    #[schema(value_type = String, format = Uuid)]
    id: String,
    #[schema(example = "Hello BurzContent", max_length = 200)]
    title: String,
    #[schema(example = "Jane Doe", max_length = 100)]
    author: String,
    published: bool,
}

/// Writable article attributes.
#[derive(ToSchema)]
#[schema(as = ArticleAttributes)]
pub struct ArticleAttributesSchema {
    #[schema(example = "Hello BurzContent", max_length = 200)]
    title: String,
    #[schema(example = "Jane Doe", max_length = 100)]
    author: String,
    #[schema(default = false)]
    published: Option<bool>,
}

/// Stored comment.
#[derive(ToSchema)]
#[schema(as = Comment, rename_all = "camelCase")]
pub struct CommentSchema {
    #[schema(value_type = String, format = Uuid)]
    id: String,
    #[schema(value_type = String, format = Uuid)]
    article_id: String,
    #[schema(example = "Jane Doe", min_length = 5, max_length = 100)]
    name: String,
    #[schema(example = "jane@example.com", format = Email)]
    email: String,
    #[schema(example = "Great read.", max_length = 5000)]
    content: String,
}

/// Writable comment attributes.
#[derive(ToSchema)]
#[schema(as = CommentAttributes, rename_all = "camelCase")]
pub struct CommentAttributesSchema {
    #[schema(value_type = String, format = Uuid)]
    article_id: String,
    #[schema(example = "Jane Doe", min_length = 5, max_length = 100)]
    name: String,
    #[schema(example = "jane@example.com", format = Email)]
    email: String,
    #[schema(example = "Great read.", max_length = 5000)]
    content: String,
}
