#![forbid(unsafe_code)]

//! Errors from completion configuration and construction.
//!
//! Runtime matching and selection never fail: malformed patterns abort the
//! current query softly and selection at capacity is a rejection, not an
//! error. Only misconfiguration surfaces here.

/// Errors from completion setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    /// A custom row template was given without an identifier.
    MissingRowIdentifier { template: String },
    /// A row identifier was given but is empty.
    EmptyRowIdentifier,
    /// A required collaborator was not supplied to a builder.
    MissingCollaborator(&'static str),
    /// A configuration document could not be parsed.
    InvalidConfig(String),
}

impl std::fmt::Display for CompletionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRowIdentifier { template } => {
                write!(f, "row template '{template}' requires an identifier")
            }
            Self::EmptyRowIdentifier => write!(f, "row identifier must not be empty"),
            Self::MissingCollaborator(name) => write!(f, "missing required {name}"),
            Self::InvalidConfig(msg) => write!(f, "invalid completion config: {msg}"),
        }
    }
}

impl std::error::Error for CompletionError {}
