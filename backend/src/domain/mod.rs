//! Domain primitives, resource kinds, and the services driving them.
//!
//! Purpose: define the transport-agnostic core of the CMS. Resource kinds are
//! plain field sets; a single generic controller applies validation and store
//! access to each of them.
//!
//! Public surface:
//! - Error / ErrorCode: failure payload shared by controllers and adapters.
//! - Validator / Rule / FieldCheck / Violation: collect-all field validation.
//! - ResourceId / ResourceKind / ResourceFields / Record: the resource model.
//! - UserFields / ArticleFields / CommentFields: the shipped resource kinds.
//! - ResourceController / ArticleComments: driving services.
//! - TraceId: request correlation identifier.

pub mod article;
pub mod article_comments;
pub mod comment;
pub mod controller;
pub mod error;
pub mod ports;
pub mod resource;
pub mod trace_id;
pub mod user;
pub mod validation;

pub use self::article::ArticleFields;
pub use self::article_comments::ArticleComments;
pub use self::comment::CommentFields;
pub use self::controller::ResourceController;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::resource::{Record, ResourceFields, ResourceId, ResourceKind};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::UserFields;
pub use self::validation::{FieldCheck, Rule, Validator, Violation};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use burzcontent::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
