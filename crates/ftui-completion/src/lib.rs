#![forbid(unsafe_code)]

//! Completion core for FrankenTUI text inputs.
//!
//! This crate is toolkit-free. It provides:
//! - [`Matcher`]: pattern-template matching over a fixed candidate pool with
//!   ordering, dedup, selection exclusion and a global result cap
//! - [`SelectionSet`]: bounded, insertion-ordered selection tracking
//! - [`CompletionConfig`] and [`Limit`]: runtime policy
//!
//! Presentation lives in `ftui-completion-view`.

pub mod config;
pub mod error;
pub mod limit;
pub mod matcher;
pub mod pattern;
pub mod selection;
pub mod stateful;

pub use config::CompletionConfig;
pub use error::CompletionError;
pub use limit::Limit;
pub use matcher::{CandidatePool, MatchOutcome, Matcher, ResultList, Termination};
pub use pattern::{PLACEHOLDER, PatternSet, QueryEscaping};
pub use selection::{SelectionSet, SelectionSnapshot};
pub use stateful::{StateKey, Stateful, VersionedState};
