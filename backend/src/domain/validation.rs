//! Field validation for resource payloads.
//!
//! A [`Validator`] is built once at startup and shared by every controller.
//! Each resource kind describes its fields as a list of [`FieldCheck`]s; the
//! validator walks all of them and reports one [`Violation`] per failing
//! field. Rules within a field are ordered and the first failure wins, so a
//! blank name reports `required` rather than `required` and `min`.

use std::fmt;

use regex::Regex;
use uuid::Uuid;

/// Pointer prefix locating an attribute inside a request document.
pub const ATTRIBUTE_POINTER_PREFIX: &str = "/data/attributes/";

/// A single constraint applied to a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must contain a non-whitespace character.
    Required,
    /// Value must be at least this many characters long.
    MinLength(usize),
    /// Value must be at most this many characters long.
    MaxLength(usize),
    /// Value must look like an email address.
    Email,
    /// Value must be a UUID in any of its textual forms.
    Uuid,
}

impl Rule {
    /// Stable tag naming the rule in validation reports.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength(_) => "min",
            Self::MaxLength(_) => "max",
            Self::Email => "email",
            Self::Uuid => "uuid",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One field of a payload together with the rules it must satisfy.
#[derive(Debug, Clone, Copy)]
pub struct FieldCheck<'a> {
    field: &'static str,
    value: &'a str,
    rules: &'static [Rule],
}

impl<'a> FieldCheck<'a> {
    /// Describe a field by its wire name, current value and ordered rules.
    #[must_use]
    pub const fn new(field: &'static str, value: &'a str, rules: &'static [Rule]) -> Self {
        Self {
            field,
            value,
            rules,
        }
    }
}

/// A failed rule on a named field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    field: &'static str,
    rule: Rule,
}

impl Violation {
    /// Record that `field` failed `rule`.
    #[must_use]
    pub const fn new(field: &'static str, rule: Rule) -> Self {
        Self { field, rule }
    }

    /// Wire name of the offending field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// Rule that failed.
    #[must_use]
    pub const fn rule(&self) -> Rule {
        self.rule
    }

    /// JSON-pointer-like location of the field, e.g. `/data/attributes/email`.
    #[must_use]
    pub fn pointer(&self) -> String {
        format!("{ATTRIBUTE_POINTER_PREFIX}{}", self.field)
    }

    /// Human-readable explanation of the failure.
    #[must_use]
    pub fn detail(&self) -> String {
        format!(
            "{} validation failed for field: {}",
            self.rule.tag(),
            self.field
        )
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.detail())
    }
}

/// Evaluates field checks against the configured rule set.
///
/// # Examples
/// ```
/// use burzcontent::domain::{FieldCheck, Rule, Validator};
///
/// const NAME: &[Rule] = &[Rule::Required, Rule::MinLength(5)];
/// const EMAIL: &[Rule] = &[Rule::Required, Rule::Email];
///
/// let validator = Validator::new();
/// let violations = validator.validate(&[
///     FieldCheck::new("name", "Jo", NAME),
///     FieldCheck::new("email", "not-an-email", EMAIL),
/// ]);
/// assert_eq!(violations.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    email: Regex,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Build a validator with the standard rule implementations.
    #[must_use]
    pub fn new() -> Self {
        // One `@`, no whitespace, and a dotted domain whose labels are non-empty.
        let pattern = r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$";
        let email = Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"));
        Self { email }
    }

    /// Evaluate every check and return all violations, one per failing field.
    ///
    /// An empty result means the payload is valid.
    #[must_use]
    pub fn validate(&self, checks: &[FieldCheck<'_>]) -> Vec<Violation> {
        checks
            .iter()
            .filter_map(|check| {
                check
                    .rules
                    .iter()
                    .find(|rule| !self.satisfies(**rule, check.value))
                    .map(|rule| Violation::new(check.field, *rule))
            })
            .collect()
    }

    fn satisfies(&self, rule: Rule, value: &str) -> bool {
        match rule {
            Rule::Required => !value.trim().is_empty(),
            Rule::MinLength(min) => value.chars().count() >= min,
            Rule::MaxLength(max) => value.chars().count() <= max,
            Rule::Email => self.email.is_match(value),
            Rule::Uuid => Uuid::parse_str(value).is_ok(),
        }
    }
}
