#![forbid(unsafe_code)]

//! Dropdown completion list for FrankenTUI text inputs.
//!
//! The view owns no toolkit code. Hosts implement [`DisplaySurface`] and
//! [`InputSource`]; [`TextSurface`] and [`TextInput`] are headless
//! implementations for tests and simple terminals.

pub mod geometry;
pub mod input;
pub mod row;
pub mod surface;
pub mod transition;
pub mod view;

pub use geometry::Rect;
pub use input::{InputEvent, InputSource, TextInput};
pub use row::{DEFAULT_ROW_HEIGHT, DEFAULT_ROW_IDENTIFIER, Row, RowTemplate};
pub use surface::{DisplaySurface, TextSurface, clip_to_width};
pub use transition::{DEFAULT_TRANSITION, HeightTransition, Transition};
pub use view::{ActivationHandler, CompletionView, CompletionViewBuilder, RowBuilder};

pub use ftui_completion::{
    CompletionConfig, CompletionError, Limit, PatternSet, QueryEscaping, ResultList,
    SelectionSet,
};
