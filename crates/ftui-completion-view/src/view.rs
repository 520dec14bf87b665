#![forbid(unsafe_code)]

//! Dropdown completion list attached to a text input.
//!
//! [`CompletionView`] wires a [`Matcher`] and a [`SelectionSet`] to a
//! [`DisplaySurface`] and an [`InputSource`]:
//!
//! - `InputEvent::Changed(text)` runs the matcher. An empty query hides
//!   the list; otherwise rows are reloaded and the list is shown.
//! - `InputEvent::Ended` hides the list and clears the input text.
//! - [`activate_row`](CompletionView::activate_row) forwards the row value
//!   to the activation handler.
//!
//! The list sits directly beneath the input. Its height is
//! `row_height * results`, capped by `max_height`.
//!
//! # Example
//!
//! ```
//! use ftui_completion_view::{CompletionView, InputEvent, Rect, TextInput, TextSurface};
//!
//! let input_frame = Rect::new(0, 0, 20, 1);
//! let mut view = CompletionView::builder(["apple", "apricot", "banana"])
//!     .surface(TextSurface::new(input_frame.beneath()))
//!     .input(TextInput::new(input_frame))
//!     .build()
//!     .unwrap();
//!
//! view.handle_input(InputEvent::Changed("ap".into()));
//! assert_eq!(view.results().as_slice(), ["apple", "apricot"]);
//! ```

use ftui_completion::{
    CandidatePool, CompletionConfig, CompletionError, Limit, MatchOutcome, Matcher, PatternSet,
    ResultList, SelectionSet,
};

use crate::input::{InputEvent, InputSource};
use crate::row::{DEFAULT_ROW_HEIGHT, Row, RowTemplate};
use crate::surface::DisplaySurface;
use crate::transition::Transition;

/// Builds a row for the given index.
pub type RowBuilder<S, I> = Box<dyn Fn(&CompletionView<S, I>, usize) -> Row>;

/// Receives `(view, row_index, value)` when a row is activated.
pub type ActivationHandler<S, I> = Box<dyn FnMut(&mut CompletionView<S, I>, usize, &str)>;

/// Completion list bound to a display surface and an input.
pub struct CompletionView<S, I> {
    matcher: Matcher,
    selection: SelectionSet,
    config: CompletionConfig,
    results: ResultList,
    surface: S,
    input: I,
    row_template: Option<RowTemplate>,
    row_builder: Option<RowBuilder<S, I>>,
    on_activate: Option<ActivationHandler<S, I>>,
}

impl<S, I> std::fmt::Debug for CompletionView<S, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionView")
            .field("candidates", &self.matcher.candidates().len())
            .field("results", &self.results.as_slice())
            .field("selected", &self.selection.as_slice())
            .field("config", &self.config)
            .field("row_template", &self.row_template)
            .field("has_row_builder", &self.row_builder.is_some())
            .field("has_activation_handler", &self.on_activate.is_some())
            .finish()
    }
}

impl<S, I> CompletionView<S, I>
where
    S: DisplaySurface,
    I: InputSource,
{
    /// Start building a view over `candidates`.
    pub fn builder<C, T>(candidates: C) -> CompletionViewBuilder<S, I>
    where
        C: IntoIterator<Item = T>,
        T: Into<String>,
    {
        CompletionViewBuilder::new(CandidatePool::new(candidates))
    }

    // ── Events ──────────────────────────────────────────────────────

    /// React to an input event.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Changed(text) => self.try_completion(&text, true),
            InputEvent::Ended => {
                self.hide(true);
                self.input.clear_text();
            }
        }
    }

    /// Match `query` and show or hide the list accordingly.
    pub fn try_completion(&mut self, query: &str, animated: bool) {
        match self.matcher.complete(query, &self.config, &self.selection) {
            MatchOutcome::Inactive => self.hide(animated),
            MatchOutcome::Results(results) => {
                self.results = results;
                self.reload();
                self.surface.bring_to_front();
                self.show(animated);
            }
        }
    }

    /// Animate to the height implied by the current results.
    pub fn show(&mut self, animated: bool) {
        let frame = self.surface.frame().with_height(self.target_height());
        self.surface.set_frame(frame, Transition::from_flag(animated));
    }

    /// Collapse beneath the input.
    pub fn hide(&mut self, animated: bool) {
        let frame = self.input.frame().beneath();
        self.surface.set_frame(frame, Transition::from_flag(animated));
    }

    /// Height for the current results, capped by `max_height`.
    #[must_use]
    pub fn target_height(&self) -> u16 {
        let rows = u16::try_from(self.results.len()).unwrap_or(u16::MAX);
        let height = self.row_height().saturating_mul(rows);
        match self.config.max_height {
            Some(max) => height.min(max),
            None => height,
        }
    }

    /// Forward activation of row `index` to the handler.
    ///
    /// Returns `false` when `index` is out of range; the handler is not called.
    pub fn activate_row(&mut self, index: usize) -> bool {
        let Some(value) = self.results.get(index).map(str::to_owned) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(index, rows = self.results.len(), "ignoring activation of missing row");
            return false;
        };
        if let Some(mut handler) = self.on_activate.take() {
            handler(self, index, &value);
            // The handler may have installed a replacement.
            if self.on_activate.is_none() {
                self.on_activate = Some(handler);
            }
        }
        true
    }

    /// Rows are always highlightable.
    #[must_use]
    pub fn should_highlight(&self, _index: usize) -> bool {
        true
    }

    // ── Rows ────────────────────────────────────────────────────────

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn row_height(&self) -> u16 {
        self.row_template
            .as_ref()
            .map_or(DEFAULT_ROW_HEIGHT, RowTemplate::row_height)
    }

    /// Row for `index`, using the row builder when one is set.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<Row> {
        let value = self.results.get(index)?;
        if let Some(builder) = &self.row_builder {
            return Some(builder(self, index));
        }
        let row = Row::plain(value);
        Some(match self.row_template.as_ref().and_then(RowTemplate::identifier_str) {
            Some(id) => row.with_identifier(id),
            None => row,
        })
    }

    fn reload(&mut self) {
        let rows: Vec<Row> = (0..self.results.len()).filter_map(|i| self.row(i)).collect();
        let row_height = self.row_height();
        self.surface.reload(&rows, row_height);
    }

    pub fn set_row_builder(&mut self, builder: impl Fn(&Self, usize) -> Row + 'static) {
        self.row_builder = Some(Box::new(builder));
    }

    pub fn set_activation_handler(
        &mut self,
        handler: impl FnMut(&mut Self, usize, &str) + 'static,
    ) {
        self.on_activate = Some(Box::new(handler));
    }

    // ── Selection ───────────────────────────────────────────────────

    pub fn select(&mut self, element: &str) -> bool {
        self.selection.select(element)
    }

    pub fn select_or_else(&mut self, element: &str, on_full: impl FnOnce()) -> bool {
        self.selection.select_or_else(element, on_full)
    }

    pub fn deselect(&mut self, element: &str) {
        self.selection.deselect(element);
    }

    #[must_use]
    pub fn is_selected(&self, element: &str) -> bool {
        self.selection.is_selected(element)
    }

    // ── State ───────────────────────────────────────────────────────

    /// Results of the last active query.
    #[must_use]
    pub fn results(&self) -> &ResultList {
        &self.results
    }

    #[must_use]
    pub fn selected(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection
    }

    #[must_use]
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    #[must_use]
    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    // ── Runtime configuration ───────────────────────────────────────

    pub fn set_max_results(&mut self, limit: Limit) {
        self.config.max_results = limit;
    }

    /// Also applies to the live selection; existing members are kept.
    pub fn set_max_selected(&mut self, limit: Limit) {
        self.config.max_selected = limit;
        self.selection.set_limit(limit);
    }

    pub fn set_max_height(&mut self, height: Option<u16>) {
        self.config.max_height = height;
    }

    pub fn set_show_selected(&mut self, show: bool) {
        self.config.show_selected = show;
    }
}

/// Builder for [`CompletionView`].
pub struct CompletionViewBuilder<S, I> {
    candidates: CandidatePool,
    patterns: PatternSet,
    config: CompletionConfig,
    surface: Option<S>,
    input: Option<I>,
    row_template: Option<RowTemplate>,
    selection_id: Option<String>,
}

impl<S, I> CompletionViewBuilder<S, I>
where
    S: DisplaySurface,
    I: InputSource,
{
    fn new(candidates: CandidatePool) -> Self {
        Self {
            candidates,
            patterns: PatternSet::default(),
            config: CompletionConfig::default(),
            surface: None,
            input: None,
            row_template: None,
            selection_id: None,
        }
    }

    #[must_use]
    pub fn surface(mut self, surface: S) -> Self {
        self.surface = Some(surface);
        self
    }

    #[must_use]
    pub fn input(mut self, input: I) -> Self {
        self.input = Some(input);
        self
    }

    #[must_use]
    pub fn config(mut self, config: CompletionConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the pattern templates (default: prefix match).
    #[must_use]
    pub fn patterns(mut self, patterns: PatternSet) -> Self {
        self.patterns = patterns;
        self
    }

    /// Append a template after the current ones.
    #[must_use]
    pub fn pattern(mut self, template: impl Into<String>) -> Self {
        self.patterns.push(template);
        self
    }

    /// Use a custom row template. It must carry an identifier.
    #[must_use]
    pub fn row_template(mut self, template: RowTemplate) -> Self {
        self.row_template = Some(template);
        self
    }

    /// Instance id for the persisted selection key.
    #[must_use]
    pub fn selection_id(mut self, id: impl Into<String>) -> Self {
        self.selection_id = Some(id.into());
        self
    }

    pub fn build(self) -> Result<CompletionView<S, I>, CompletionError> {
        if let Some(template) = &self.row_template {
            template.validate()?;
        }
        let surface = self
            .surface
            .ok_or(CompletionError::MissingCollaborator("display surface"))?;
        let input = self
            .input
            .ok_or(CompletionError::MissingCollaborator("input source"))?;

        let mut selection = SelectionSet::new(self.config.max_selected);
        if let Some(id) = self.selection_id {
            selection = selection.with_instance_id(id);
        }

        let mut view = CompletionView {
            matcher: Matcher::from_parts(self.candidates, self.patterns),
            selection,
            config: self.config,
            results: ResultList::default(),
            surface,
            input,
            row_template: self.row_template,
            row_builder: None,
            on_activate: None,
        };
        view.hide(false);
        Ok(view)
    }
}
