//! User resource fields.

use serde::{Deserialize, Serialize};

use super::resource::{ResourceFields, ResourceKind, null_as_default};
use super::validation::{FieldCheck, Rule};

const NAME_RULES: &[Rule] = &[Rule::Required, Rule::MinLength(5), Rule::MaxLength(100)];
const EMAIL_RULES: &[Rule] = &[Rule::Required, Rule::Email];

/// Writable attributes of a CMS user.
///
/// # Examples
/// ```
/// use burzcontent::domain::{ResourceFields, UserFields};
///
/// let fields: UserFields = serde_json::from_str(r#"{"name":"Jane Doe"}"#).unwrap();
/// assert_eq!(fields.email, "");
/// assert_eq!(UserFields::KIND.plural, "users");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFields {
    /// Display name, 5 to 100 characters.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Contact address.
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
}

impl ResourceFields for UserFields {
    const KIND: ResourceKind = ResourceKind {
        singular: "user",
        plural: "users",
        title: "User",
    };

    fn checks(&self) -> Vec<FieldCheck<'_>> {
        vec![
            FieldCheck::new("name", &self.name, NAME_RULES),
            FieldCheck::new("email", &self.email, EMAIL_RULES),
        ]
    }
}
