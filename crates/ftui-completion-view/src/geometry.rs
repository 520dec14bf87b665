#![forbid(unsafe_code)]

//! Cell-space rectangles for placing the completion list.

/// Axis-aligned rectangle in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    #[inline]
    #[must_use]
    pub const fn right(self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    #[inline]
    #[must_use]
    pub const fn bottom(self) -> u16 {
        self.y.saturating_add(self.height)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Zero-height rectangle directly below `self`, same x and width.
    #[must_use]
    pub const fn beneath(self) -> Self {
        Self::new(self.x, self.bottom(), self.width, 0)
    }

    #[must_use]
    pub const fn with_height(self, height: u16) -> Self {
        Self::new(self.x, self.y, self.width, height)
    }
}
