//! Root greeting.

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

/// Body of `GET /`.
#[derive(Debug, Serialize, ToSchema)]
pub struct IndexResponse {
    #[schema(example = "Hello World!")]
    pub message: String,
}

/// Greet clients at the service root.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting", body = IndexResponse)),
    tags = ["index"],
    operation_id = "index"
)]
#[get("/")]
pub async fn index() -> web::Json<IndexResponse> {
    web::Json(IndexResponse {
        message: "Hello World!".to_owned(),
    })
}
