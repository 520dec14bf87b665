#![forbid(unsafe_code)]

//! Height transitions for showing and hiding the list.
//!
//! Transitions are fire-and-forget: the view picks a target frame and the
//! surface animates toward it. Nothing in the matcher or selection depends
//! on transition progress.

use web_time::{Duration, Instant};

/// Duration used for animated show/hide.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(250);

/// How a frame change is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Jump to the new frame.
    Immediate,
    /// Interpolate to the new frame over the given duration.
    Animated(Duration),
}

impl Transition {
    /// Animated with [`DEFAULT_TRANSITION`] when `animated`, otherwise immediate.
    #[must_use]
    pub const fn from_flag(animated: bool) -> Self {
        if animated {
            Self::Animated(DEFAULT_TRANSITION)
        } else {
            Self::Immediate
        }
    }

    #[must_use]
    pub const fn duration(self) -> Duration {
        match self {
            Self::Immediate => Duration::ZERO,
            Self::Animated(d) => d,
        }
    }
}

/// Linear height interpolation between two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeightTransition {
    from: u16,
    to: u16,
    started: Instant,
    duration: Duration,
}

impl HeightTransition {
    #[must_use]
    pub fn new(from: u16, to: u16, transition: Transition, started: Instant) -> Self {
        Self {
            from,
            to,
            started,
            duration: transition.duration(),
        }
    }

    /// Already at `height`.
    #[must_use]
    pub fn settled(height: u16, now: Instant) -> Self {
        Self::new(height, height, Transition::Immediate, now)
    }

    #[must_use]
    pub fn target(&self) -> u16 {
        self.to
    }

    /// Height at `now`.
    #[must_use]
    pub fn sample(&self, now: Instant) -> u16 {
        let elapsed = now.saturating_duration_since(self.started);
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let from = f64::from(self.from);
        let to = f64::from(self.to);
        (from + (to - from) * t).round() as u16
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}
