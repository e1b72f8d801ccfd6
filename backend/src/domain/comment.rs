//! Comment resource fields.

use serde::{Deserialize, Serialize};

use super::resource::{ResourceFields, ResourceKind, null_as_default};
use super::validation::{FieldCheck, Rule};

const ARTICLE_ID_RULES: &[Rule] = &[Rule::Required, Rule::Uuid];
const NAME_RULES: &[Rule] = &[Rule::Required, Rule::MinLength(5), Rule::MaxLength(100)];
const EMAIL_RULES: &[Rule] = &[Rule::Required, Rule::Email];
const CONTENT_RULES: &[Rule] = &[Rule::Required, Rule::MaxLength(5000)];

/// Writable attributes of a comment left on an article.
///
/// `article_id` travels as `articleId` and only has to be UUID-shaped; the
/// referenced article is not required to exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentFields {
    #[serde(deserialize_with = "null_as_default")]
    pub article_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
}

impl CommentFields {
    /// Whether this comment references the given article identifier.
    pub fn belongs_to(&self, article: &super::ResourceId) -> bool {
        super::ResourceId::parse(&self.article_id).is_some_and(|id| id == *article)
    }
}

impl ResourceFields for CommentFields {
    const KIND: ResourceKind = ResourceKind {
        singular: "comment",
        plural: "comments",
        title: "Comment",
    };

    fn checks(&self) -> Vec<FieldCheck<'_>> {
        vec![
            FieldCheck::new("articleId", &self.article_id, ARTICLE_ID_RULES),
            FieldCheck::new("name", &self.name, NAME_RULES),
            FieldCheck::new("email", &self.email, EMAIL_RULES),
            FieldCheck::new("content", &self.content, CONTENT_RULES),
        ]
    }
}
