//! Article resource fields.

use serde::{Deserialize, Serialize};

use super::resource::{ResourceFields, ResourceKind, null_as_default};
use super::validation::{FieldCheck, Rule};

const TITLE_RULES: &[Rule] = &[Rule::Required, Rule::MaxLength(200)];
const AUTHOR_RULES: &[Rule] = &[Rule::Required, Rule::MaxLength(100)];

/// Writable attributes of an article.
///
/// `published` is not validated; it defaults to `false` when omitted or null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleFields {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub published: bool,
}

impl ResourceFields for ArticleFields {
    const KIND: ResourceKind = ResourceKind {
        singular: "article",
        plural: "articles",
        title: "Article",
    };

    fn checks(&self) -> Vec<FieldCheck<'_>> {
        vec![
            FieldCheck::new("title", &self.title, TITLE_RULES),
            FieldCheck::new("author", &self.author, AUTHOR_RULES),
        ]
    }
}
