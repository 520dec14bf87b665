#![forbid(unsafe_code)]

//! Display surfaces the completion list draws into.
//!
//! [`DisplaySurface`] is the seam between the completion view and a host
//! toolkit. [`TextSurface`] is a headless implementation that keeps rows as
//! plain text lines, clipped to the frame width.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;
use web_time::Instant;

use crate::geometry::Rect;
use crate::row::Row;
use crate::transition::{HeightTransition, Transition};

/// Host container for the completion list.
pub trait DisplaySurface {
    /// Current target frame.
    fn frame(&self) -> Rect;

    /// Move/resize toward `frame` using `transition`.
    fn set_frame(&mut self, frame: Rect, transition: Transition);

    /// Replace the displayed rows.
    fn reload(&mut self, rows: &[Row], row_height: u16);

    /// Raise the list above sibling content.
    fn bring_to_front(&mut self) {}
}

/// Headless surface that renders rows as text lines.
#[derive(Debug, Clone)]
pub struct TextSurface {
    frame: Rect,
    height: HeightTransition,
    rows: Vec<Row>,
    row_height: u16,
    raised: u32,
}

impl TextSurface {
    #[must_use]
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            height: HeightTransition::settled(frame.height, Instant::now()),
            rows: Vec::new(),
            row_height: 1,
            raised: 0,
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Times [`DisplaySurface::bring_to_front`] was called.
    #[must_use]
    pub fn raise_count(&self) -> u32 {
        self.raised
    }

    #[must_use]
    pub fn height_transition(&self) -> &HeightTransition {
        &self.height
    }

    /// Visible height at `now`.
    #[must_use]
    pub fn visible_height(&self, now: Instant) -> u16 {
        self.height.sample(now)
    }

    /// Text lines visible at `now`.
    ///
    /// Each row takes `row_height` lines; its text is on the first line and
    /// the remaining lines are blank. Text is clipped to the frame width.
    #[must_use]
    pub fn render_lines(&self, now: Instant) -> Vec<String> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "completion_render",
            x = self.frame.x,
            y = self.frame.y,
            w = self.frame.width,
            rows = self.rows.len()
        )
        .entered();

        let visible = usize::from(self.visible_height(now));
        let width = usize::from(self.frame.width);
        let mut lines = Vec::with_capacity(visible);

        'rows: for row in &self.rows {
            for line in 0..self.row_height {
                if lines.len() >= visible {
                    break 'rows;
                }
                if line == 0 {
                    lines.push(clip_to_width(&row.text, width));
                } else {
                    lines.push(String::new());
                }
            }
        }
        lines
    }
}

impl DisplaySurface for TextSurface {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect, transition: Transition) {
        let now = Instant::now();
        let current = self.height.sample(now);
        self.height = HeightTransition::new(current, frame.height, transition, now);
        self.frame = frame;
    }

    fn reload(&mut self, rows: &[Row], row_height: u16) {
        self.rows = rows.to_vec();
        self.row_height = row_height.max(1);
    }

    fn bring_to_front(&mut self) {
        self.raised = self.raised.saturating_add(1);
    }
}

/// Clip `text` to at most `max_width` display cells.
///
/// Whole grapheme clusters only; a wide grapheme that would straddle the
/// edge is dropped. Zero-width graphemes are skipped.
#[must_use]
pub fn clip_to_width(text: &str, max_width: usize) -> String {
    let mut out = String::with_capacity(text.len().min(max_width.saturating_mul(4)));
    let mut used = 0usize;
    for grapheme in text.graphemes(true) {
        let w = UnicodeWidthStr::width(grapheme);
        if w == 0 {
            continue;
        }
        if used + w > max_width {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out
}
