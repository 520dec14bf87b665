#![forbid(unsafe_code)]

//! Rows shown by the completion list.

use ftui_completion::CompletionError;

/// Identifier used by plain rows.
pub const DEFAULT_ROW_IDENTIFIER: &str = "completion-row";

/// Row height in cells when no template overrides it.
pub const DEFAULT_ROW_HEIGHT: u16 = 1;

/// One rendered entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Text drawn on the row's first line.
    pub text: String,
    /// Template identifier the row was built from.
    pub identifier: String,
}

impl Row {
    /// Plain text row.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            identifier: DEFAULT_ROW_IDENTIFIER.to_owned(),
        }
    }

    #[must_use]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }
}

/// A custom row layout registered at construction.
///
/// A template is only usable together with an identifier; see
/// [`RowTemplate::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowTemplate {
    name: String,
    identifier: Option<String>,
    height: u16,
}

impl RowTemplate {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: None,
            height: DEFAULT_ROW_HEIGHT,
        }
    }

    #[must_use]
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Row height in cells. Clamped to at least 1.
    #[must_use]
    pub fn height(mut self, height: u16) -> Self {
        self.height = height.max(1);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn row_height(&self) -> u16 {
        self.height
    }

    /// Identifier, once the template has passed validation.
    #[must_use]
    pub fn identifier_str(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Check that the template carries a usable identifier.
    pub fn validate(&self) -> Result<&str, CompletionError> {
        match self.identifier.as_deref() {
            None => Err(CompletionError::MissingRowIdentifier {
                template: self.name.clone(),
            }),
            Some("") => Err(CompletionError::EmptyRowIdentifier),
            Some(id) => Ok(id),
        }
    }
}
