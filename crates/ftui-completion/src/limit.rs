#![forbid(unsafe_code)]

//! Explicit caps for result counts and selection sizes.
//!
//! Older completion widgets overload `0` to mean "no cap". [`Limit`] keeps
//! the two meanings apart: [`Limit::Unbounded`] never caps, while
//! `Limit::AtMost(0)` is a real cap of zero.

use core::fmt;

/// Upper bound on a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    any(feature = "state-persistence", feature = "policy-config"),
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Limit {
    /// No cap.
    #[default]
    Unbounded,
    /// At most `n` items.
    AtMost(usize),
}

impl Limit {
    /// Convert from the zero-means-unbounded convention.
    ///
    /// ```
    /// use ftui_completion::Limit;
    ///
    /// assert_eq!(Limit::from_legacy(0), Limit::Unbounded);
    /// assert_eq!(Limit::from_legacy(3), Limit::AtMost(3));
    /// ```
    #[must_use]
    pub const fn from_legacy(n: usize) -> Self {
        if n == 0 { Self::Unbounded } else { Self::AtMost(n) }
    }

    /// The bound, if any.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Option<usize> {
        match self {
            Self::Unbounded => None,
            Self::AtMost(n) => Some(n),
        }
    }

    /// Whether `count` items already fill this limit.
    #[inline]
    #[must_use]
    pub const fn is_reached(self, count: usize) -> bool {
        match self {
            Self::Unbounded => false,
            Self::AtMost(n) => count >= n,
        }
    }

    /// Clamp `count` to the limit.
    #[inline]
    #[must_use]
    pub const fn clamp(self, count: usize) -> usize {
        match self {
            Self::AtMost(n) if count > n => n,
            _ => count,
        }
    }
}

impl From<Option<usize>> for Limit {
    fn from(value: Option<usize>) -> Self {
        match value {
            Some(n) => Self::AtMost(n),
            None => Self::Unbounded,
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => write!(f, "unbounded"),
            Self::AtMost(n) => write!(f, "at most {n}"),
        }
    }
}
