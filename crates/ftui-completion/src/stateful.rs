//! Opt-in persistence contract for completion state.
//!
//! The [`Stateful`] trait lets user-facing completion state (currently the
//! selection) be saved and restored across sessions.
//!
//! # Design Invariants
//!
//! 1. **Round-trip fidelity**: `restore_state(save_state())` produces an
//!    equivalent selection, in the same order.
//!
//! 2. **Graceful version mismatch**: when [`VersionedState`] detects a
//!    version mismatch, the caller falls back to `State::default()`.
//!
//! 3. **Key uniqueness**: two completion instances must produce distinct
//!    [`StateKey`] values.
//!
//! 4. **Restore clamps**: restored data is validated against current
//!    limits rather than trusted.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Fallback |
//! |---------|-------|----------|
//! | Deserialization error | Schema drift, corrupt data | Use `Default::default()` |
//! | Version mismatch | Widget upgraded | Use `Default::default()` |
//! | Stored selection exceeds cap | Limit lowered since save | Truncate to cap |
//!
//! # Feature Gate
//!
//! Serde derives on [`VersionedState`] require the `state-persistence`
//! feature.

use core::fmt;

/// Identifier for persisted state: `(widget_type, instance_id)`.
///
/// ```
/// # use ftui_completion::stateful::StateKey;
/// let key = StateKey::new("CompletionSelection", "tags");
/// assert_eq!(key.canonical(), "CompletionSelection::tags");
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct StateKey {
    pub widget_type: &'static str,
    pub instance_id: String,
}

impl StateKey {
    #[must_use]
    pub fn new(widget_type: &'static str, id: impl Into<String>) -> Self {
        Self {
            widget_type,
            instance_id: id.into(),
        }
    }

    /// Canonical string representation: `"widget_type::instance_id"`.
    #[must_use]
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.widget_type, self.instance_id)
    }
}

/// State that can be saved and restored.
pub trait Stateful: Sized {
    /// Persisted form. `Default` is the fallback for missing or stale data.
    type State: Default;

    /// Unique key for this instance.
    fn state_key(&self) -> StateKey;

    /// Extract current state. Must be a pure read.
    fn save_state(&self) -> Self::State;

    /// Restore state, clamping to current limits.
    fn restore_state(&mut self, state: Self::State);

    /// Schema version; bump when `State` changes incompatibly.
    fn state_version() -> u32 {
        1
    }
}

/// Version-tagged envelope for persisted state.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct VersionedState<S> {
    pub version: u32,
    pub data: S,
}

impl<S> VersionedState<S> {
    /// Pack a widget's state into a versioned envelope.
    pub fn pack<W: Stateful<State = S>>(widget: &W) -> Self {
        Self {
            version: W::state_version(),
            data: widget.save_state(),
        }
    }

    /// Unpack, or `None` if the version does not match.
    pub fn unpack<W: Stateful<State = S>>(self) -> Option<S> {
        (self.version == W::state_version()).then_some(self.data)
    }

    /// Unpack, falling back to `S::default()` on version mismatch.
    pub fn unpack_or_default<W: Stateful<State = S>>(self) -> S
    where
        S: Default,
    {
        self.unpack::<W>().unwrap_or_default()
    }

    /// Restore `widget` from this envelope, using the default state on mismatch.
    pub fn restore_into<W: Stateful<State = S>>(self, widget: &mut W)
    where
        S: Default,
    {
        widget.restore_state(self.unpack_or_default::<W>());
    }
}
