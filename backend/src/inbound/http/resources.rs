//! Generic CRUD handlers mounted once per resource kind.
//!
//! ```text
//! GET    /{plural}        -> {"<plural>": [...]}
//! POST   /{plural}        -> 201 {"<singular>": {...}}
//! GET    /{plural}/{id}   -> {"<singular>": {...}}
//! PUT    /{plural}/{id}   -> {"<singular>": {...}}
//! DELETE /{plural}/{id}   -> 204
//! ```
//!
//! Bodies are read as raw bytes so the controller decides between a parse
//! failure (400) and a validation failure (422). Bodies larger than
//! [`MAX_BODY_BYTES`] are rejected as invalid requests before parsing.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::domain::{Error, ResourceController, ResourceFields};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::JSON_API_CONTENT_TYPE;

/// Largest request body the resource routes accept.
pub const MAX_BODY_BYTES: usize = 256 * 1024;

/// Body extraction outcome; extraction failures stay in the handler so they
/// render through the domain error envelope.
type Body = Result<web::Bytes, actix_web::Error>;

fn read_body(body: Body) -> ApiResult<web::Bytes> {
    body.map_err(|err| {
        Error::invalid_request("request body could not be read")
            .with_details(json!({ "reason": err.to_string(), "limit": MAX_BODY_BYTES }))
    })
}

/// Wrap `value` under `key` and render it with the JSON:API media type.
pub(crate) fn enveloped<T: Serialize>(
    status: StatusCode,
    key: &str,
    value: &T,
) -> ApiResult<HttpResponse> {
    let value = serde_json::to_value(value)
        .map_err(|err| Error::internal(format!("failed to serialise {key}: {err}")))?;
    let mut body = Map::new();
    body.insert(key.to_owned(), value);
    Ok(HttpResponse::build(status)
        .content_type(JSON_API_CONTENT_TYPE)
        .json(Value::Object(body)))
}

/// List every record of one kind.
pub async fn list_resources<F: ResourceFields>(
    controller: web::Data<ResourceController<F>>,
) -> ApiResult<HttpResponse> {
    let records = controller.list().await?;
    enveloped(StatusCode::OK, F::KIND.plural, &records)
}

/// Fetch one record by id.
pub async fn get_resource<F: ResourceFields>(
    controller: web::Data<ResourceController<F>>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let record = controller.get(&id).await?;
    enveloped(StatusCode::OK, F::KIND.singular, &record)
}

/// Create a record from the request body.
pub async fn create_resource<F: ResourceFields>(
    controller: web::Data<ResourceController<F>>,
    body: Body,
) -> ApiResult<HttpResponse> {
    let body = read_body(body)?;
    let record = controller.create(&body).await?;
    enveloped(StatusCode::CREATED, F::KIND.singular, &record)
}

/// Replace the fields of an existing record.
pub async fn update_resource<F: ResourceFields>(
    controller: web::Data<ResourceController<F>>,
    id: web::Path<String>,
    body: Body,
) -> ApiResult<HttpResponse> {
    let body = read_body(body)?;
    let record = controller.update(&id, &body).await?;
    enveloped(StatusCode::OK, F::KIND.singular, &record)
}

/// Delete a record.
pub async fn delete_resource<F: ResourceFields>(
    controller: web::Data<ResourceController<F>>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    controller.delete(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Mount the five CRUD routes for `F` under `/{plural}`.
///
/// The matching `web::Data<ResourceController<F>>` must be registered as app
/// data. Request bodies are capped at [`MAX_BODY_BYTES`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use burzcontent::domain::{ResourceController, UserFields, Validator};
/// use burzcontent::inbound::http::resources::resource_routes;
/// use burzcontent::outbound::memory::InMemoryResourceStore;
///
/// let controller = ResourceController::<UserFields>::new(
///     Arc::new(InMemoryResourceStore::new()),
///     Arc::new(Validator::new()),
/// );
/// let _app = App::new()
///     .app_data(web::Data::new(controller))
///     .configure(resource_routes::<UserFields>);
/// ```
pub fn resource_routes<F: ResourceFields>(cfg: &mut web::ServiceConfig) {
    let plural = F::KIND.plural;
    cfg.service(
        web::resource(format!("/{plural}"))
            .app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
            .route(web::get().to(list_resources::<F>))
            .route(web::post().to(create_resource::<F>)),
    )
    .service(
        web::resource(format!("/{plural}/{{id}}"))
            .app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
            .route(web::get().to(get_resource::<F>))
            .route(web::put().to(update_resource::<F>))
            .route(web::delete().to(delete_resource::<F>)),
    );
}
