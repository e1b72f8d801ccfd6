//! Shared HTTP adapter state.
//!
//! HTTP handlers receive controllers via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use actix_web::web;

use crate::domain::ports::ResourceStore;
use crate::domain::{
    ArticleComments, ArticleFields, CommentFields, ResourceController, UserFields, Validator,
};
use crate::inbound::http::comments::article_comment_routes;
use crate::inbound::http::index::index;
use crate::inbound::http::resources::resource_routes;
use crate::outbound::memory::InMemoryResourceStore;

/// Parameter object bundling the store implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub users: Arc<dyn ResourceStore<UserFields>>,
    pub articles: Arc<dyn ResourceStore<ArticleFields>>,
    pub comments: Arc<dyn ResourceStore<CommentFields>>,
}

impl HttpStatePorts {
    /// Fresh in-process stores for every resource kind.
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryResourceStore::<UserFields>::new()),
            articles: Arc::new(InMemoryResourceStore::<ArticleFields>::new()),
            comments: Arc::new(InMemoryResourceStore::<CommentFields>::new()),
        }
    }
}

/// Dependency bundle for HTTP handlers.
///
/// Cloning is cheap; every clone shares the same stores.
#[derive(Clone)]
pub struct HttpState {
    pub users: web::Data<ResourceController<UserFields>>,
    pub articles: web::Data<ResourceController<ArticleFields>>,
    pub comments: web::Data<ResourceController<CommentFields>>,
    pub article_comments: web::Data<ArticleComments>,
}

impl HttpState {
    /// Build controllers over the given ports, sharing one validator.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use actix_web::App;
    /// use burzcontent::domain::Validator;
    /// use burzcontent::inbound::http::state::{HttpState, HttpStatePorts};
    ///
    /// let state = HttpState::new(HttpStatePorts::in_memory(), Arc::new(Validator::new()));
    /// let _app = App::new().configure(|cfg| state.configure(cfg));
    /// ```
    pub fn new(ports: HttpStatePorts, validator: Arc<Validator>) -> Self {
        let HttpStatePorts {
            users,
            articles,
            comments,
        } = ports;
        let article_comments = ArticleComments::new(articles.clone(), comments.clone());

        Self {
            users: web::Data::new(ResourceController::new(users, validator.clone())),
            articles: web::Data::new(ResourceController::new(articles, validator.clone())),
            comments: web::Data::new(ResourceController::new(comments, validator)),
            article_comments: web::Data::new(article_comments),
        }
    }

    /// State over fresh in-process stores.
    pub fn in_memory(validator: Arc<Validator>) -> Self {
        Self::new(HttpStatePorts::in_memory(), validator)
    }

    /// Register controllers and mount the content routes.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.users.clone())
            .app_data(self.articles.clone())
            .app_data(self.comments.clone())
            .app_data(self.article_comments.clone())
            .service(index)
            .configure(resource_routes::<UserFields>)
            .configure(resource_routes::<ArticleFields>)
            .configure(resource_routes::<CommentFields>)
            .configure(article_comment_routes);
    }
}
