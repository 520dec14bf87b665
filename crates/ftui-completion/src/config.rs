#![forbid(unsafe_code)]

//! Runtime policy for completion queries and selection.
//!
//! With the `policy-config` feature, [`CompletionConfig`] can be loaded from
//! a JSON document. Missing fields take their defaults.
//!
//! ```
//! use ftui_completion::{CompletionConfig, Limit};
//!
//! let config = CompletionConfig::default()
//!     .with_max_results(Limit::AtMost(5))
//!     .with_max_selected(Limit::Unbounded)
//!     .with_show_selected(true);
//! assert_eq!(config.max_results, Limit::AtMost(5));
//! assert!(config.case_insensitive);
//! ```

use crate::limit::Limit;
use crate::pattern::QueryEscaping;

/// Policy parameters shared by the matcher, the selection tracker and the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "policy-config",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CompletionConfig {
    /// Global cap on results across all templates.
    pub max_results: Limit,
    /// Cap on concurrently selected candidates.
    pub max_selected: Limit,
    /// Maximum display height; `None` lets the list grow with its rows.
    pub max_height: Option<u16>,
    /// Keep already selected candidates eligible for matching.
    pub show_selected: bool,
    /// Compile patterns case-insensitively.
    pub case_insensitive: bool,
    /// How query text enters the pattern.
    pub escaping: QueryEscaping,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            max_results: Limit::Unbounded,
            max_selected: Limit::AtMost(1),
            max_height: None,
            show_selected: false,
            case_insensitive: true,
            escaping: QueryEscaping::Raw,
        }
    }
}

impl CompletionConfig {
    #[must_use]
    pub fn with_max_results(mut self, limit: Limit) -> Self {
        self.max_results = limit;
        self
    }

    #[must_use]
    pub fn with_max_selected(mut self, limit: Limit) -> Self {
        self.max_selected = limit;
        self
    }

    #[must_use]
    pub fn with_max_height(mut self, height: Option<u16>) -> Self {
        self.max_height = height;
        self
    }

    #[must_use]
    pub fn with_show_selected(mut self, show: bool) -> Self {
        self.show_selected = show;
        self
    }

    #[must_use]
    pub fn with_case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    #[must_use]
    pub fn with_escaping(mut self, escaping: QueryEscaping) -> Self {
        self.escaping = escaping;
        self
    }

    /// Parse a JSON policy document.
    #[cfg(feature = "policy-config")]
    pub fn from_json_str(json: &str) -> Result<Self, crate::CompletionError> {
        serde_json::from_str(json).map_err(|e| crate::CompletionError::InvalidConfig(e.to_string()))
    }

    /// Serialize to a pretty-printed JSON policy document.
    #[cfg(feature = "policy-config")]
    pub fn to_json_string(&self) -> Result<String, crate::CompletionError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| crate::CompletionError::InvalidConfig(e.to_string()))
    }
}
