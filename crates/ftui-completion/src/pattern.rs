#![forbid(unsafe_code)]

//! Pattern templates instantiated per query.
//!
//! A template is a regular expression containing the [`PLACEHOLDER`] token.
//! Each query replaces every placeholder occurrence with the query text to
//! produce the concrete pattern that candidates are matched against.
//!
//! # Invariants
//!
//! 1. Template order is preserved; the matcher tries templates in sequence.
//! 2. Substitution is a single literal pass. Under [`QueryEscaping::Raw`]
//!    the query is spliced in as pattern syntax, so `.` or `*` typed by the
//!    user act as metacharacters.
//!
//! # Example
//!
//! ```
//! use ftui_completion::pattern::{PatternSet, QueryEscaping};
//!
//! let mut patterns = PatternSet::default();
//! patterns.push("^.*\\b#@");
//! assert_eq!(patterns.len(), 2);
//! assert_eq!(patterns.instantiate(0, "ap", QueryEscaping::Raw).as_deref(), Some("^ap"));
//! ```

use std::borrow::Cow;

/// Token replaced by the query text.
pub const PLACEHOLDER: &str = "#@";

/// Template used when none are supplied: anchored prefix match.
pub const DEFAULT_TEMPLATE: &str = "^#@";

/// How query text is spliced into a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "policy-config",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum QueryEscaping {
    /// Query is inserted verbatim and participates in pattern syntax.
    #[default]
    Raw,
    /// Query is escaped and always matches literally.
    Literal,
}

impl QueryEscaping {
    /// Prepare `query` for substitution.
    #[must_use]
    pub fn apply(self, query: &str) -> Cow<'_, str> {
        match self {
            Self::Raw => Cow::Borrowed(query),
            Self::Literal => Cow::Owned(regex::escape(query)),
        }
    }
}

/// Ordered list of pattern templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSet {
    templates: Vec<String>,
}

impl Default for PatternSet {
    fn default() -> Self {
        Self {
            templates: vec![DEFAULT_TEMPLATE.to_owned()],
        }
    }
}

impl PatternSet {
    /// A set with no templates. Every query yields an empty result list.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            templates: Vec::new(),
        }
    }

    /// Build from explicit templates, in order.
    #[must_use]
    pub fn from_templates<I, T>(templates: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            templates: templates.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a template after the existing ones.
    pub fn push(&mut self, template: impl Into<String>) {
        self.templates.push(template.into());
    }

    /// Builder form of [`push`](Self::push).
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.push(template);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    #[must_use]
    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(String::as_str)
    }

    /// Concrete pattern for the template at `index`, or `None` when out of range.
    #[must_use]
    pub fn instantiate(&self, index: usize, query: &str, escaping: QueryEscaping) -> Option<String> {
        self.templates
            .get(index)
            .map(|template| substitute(template, &escaping.apply(query)))
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}

/// Replace every placeholder in `template` with `value`.
///
/// A template without a placeholder is returned unchanged.
#[must_use]
pub fn substitute(template: &str, value: &str) -> String {
    template.replace(PLACEHOLDER, value)
}
