//! Query joining comments to the article they were left on.

use std::sync::Arc;

use crate::domain::ports::{ResourceStore, ResourceStoreError};
use crate::domain::{ArticleFields, CommentFields, Error, Record, ResourceFields, ResourceId};

/// Lists the comments attached to one article.
#[derive(Clone)]
pub struct ArticleComments {
    articles: Arc<dyn ResourceStore<ArticleFields>>,
    comments: Arc<dyn ResourceStore<CommentFields>>,
}

impl ArticleComments {
    pub fn new(
        articles: Arc<dyn ResourceStore<ArticleFields>>,
        comments: Arc<dyn ResourceStore<CommentFields>>,
    ) -> Self {
        Self { articles, comments }
    }

    /// Comments whose `articleId` names the article, in creation order.
    ///
    /// Fails with not found when the id is malformed or the article is
    /// absent, so a deleted article never exposes its leftover comments.
    pub async fn list_for_article(&self, raw_id: &str) -> Result<Vec<Record<CommentFields>>, Error> {
        let not_found = || Error::not_found(ArticleFields::KIND.not_found_message());
        let article = ResourceId::parse(raw_id).ok_or_else(not_found)?;

        self.articles
            .get(article)
            .await
            .map_err(|err| match err {
                ResourceStoreError::NotFound { .. } => not_found(),
                ResourceStoreError::Unavailable { message } => {
                    Error::internal(format!("article store unavailable: {message}"))
                }
            })?;

        let comments = self.comments.list().await.map_err(|err| {
            Error::internal(format!("comment listing failed: {err}"))
        })?;

        Ok(comments
            .into_iter()
            .filter(|record| record.fields.belongs_to(&article))
            .collect())
    }
}
