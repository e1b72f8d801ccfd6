//! Article comment listing.
//!
//! ```text
//! GET /articles/{id}/comments -> {"comments": [...]}
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};

use crate::domain::{ArticleComments, CommentFields, ResourceFields};
use crate::inbound::http::ApiResult;
use crate::inbound::http::resources::enveloped;

/// List the comments attached to an existing article.
pub async fn list_article_comments(
    service: web::Data<ArticleComments>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let comments = service.list_for_article(&id).await?;
    enveloped(StatusCode::OK, CommentFields::KIND.plural, &comments)
}

/// Mount `GET /articles/{id}/comments`.
pub fn article_comment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/articles/{id}/comments").route(web::get().to(list_article_comments)),
    );
}
