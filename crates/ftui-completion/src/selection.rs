#![forbid(unsafe_code)]

//! Bounded, insertion-ordered selection tracking.
//!
//! # Invariants
//!
//! 1. An element is never present twice.
//! 2. `len() <= limit` while the limit is bounded, unless the limit was
//!    lowered below the current size with [`SelectionSet::set_limit`]. In
//!    that case existing members stay and every new `select` is rejected
//!    until enough members are deselected.
//! 3. Removal keeps the insertion order of the survivors.
//!
//! # Failure Modes
//!
//! | Call | Condition | Behavior |
//! |------|-----------|----------|
//! | `select` | already selected | `true`, no mutation |
//! | `select` | at capacity | `false`, `on_full` invoked, no mutation |
//! | `deselect` | not selected | no-op |
//!
//! # Example
//!
//! ```
//! use ftui_completion::{Limit, SelectionSet};
//!
//! let mut selection = SelectionSet::new(Limit::AtMost(2));
//! assert!(selection.select("apple"));
//! assert!(selection.select("apricot"));
//!
//! let mut notified = false;
//! assert!(!selection.select_or_else("banana", || notified = true));
//! assert!(notified);
//! assert_eq!(selection.as_slice(), ["apple", "apricot"]);
//! ```

use crate::limit::Limit;
use crate::stateful::{StateKey, Stateful};

/// Currently selected candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet {
    elements: Vec<String>,
    limit: Limit,
    instance_id: String,
}

impl Default for SelectionSet {
    fn default() -> Self {
        Self::new(Limit::AtMost(1))
    }
}

impl SelectionSet {
    /// Empty selection with the given cap.
    #[must_use]
    pub fn new(limit: Limit) -> Self {
        Self {
            elements: Vec::new(),
            limit,
            instance_id: "default".to_owned(),
        }
    }

    /// Set the instance id used for the persistence key.
    #[must_use]
    pub fn with_instance_id(mut self, id: impl Into<String>) -> Self {
        self.instance_id = id.into();
        self
    }

    #[must_use]
    pub fn limit(&self) -> Limit {
        self.limit
    }

    /// Change the cap. Existing members are kept even if they exceed it.
    pub fn set_limit(&mut self, limit: Limit) {
        self.limit = limit;
    }

    /// Select `element`; see [`select_or_else`](Self::select_or_else).
    pub fn select(&mut self, element: impl AsRef<str>) -> bool {
        self.select_or_else(element, || {})
    }

    /// Select `element`, calling `on_full` if the selection is at capacity.
    ///
    /// Returns `true` when `element` is selected after the call.
    pub fn select_or_else(&mut self, element: impl AsRef<str>, on_full: impl FnOnce()) -> bool {
        let element = element.as_ref();
        if self.is_selected(element) {
            return true;
        }
        if self.is_full() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                element,
                limit = %self.limit,
                selected = self.elements.len(),
                "selection at capacity"
            );
            on_full();
            return false;
        }
        self.elements.push(element.to_owned());
        true
    }

    #[must_use]
    pub fn is_selected(&self, element: &str) -> bool {
        self.elements.iter().any(|e| e == element)
    }

    /// Remove `element` if present.
    pub fn deselect(&mut self, element: &str) {
        if let Some(index) = self.elements.iter().position(|e| e == element) {
            self.elements.remove(index);
        }
    }

    /// Whether another distinct element would be rejected.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.limit.is_reached(self.elements.len())
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Selected elements in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.elements
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Persisted form of a [`SelectionSet`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct SelectionSnapshot {
    pub selected: Vec<String>,
}

impl Stateful for SelectionSet {
    type State = SelectionSnapshot;

    fn state_key(&self) -> StateKey {
        StateKey::new("CompletionSelection", &self.instance_id)
    }

    fn save_state(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            selected: self.elements.clone(),
        }
    }

    fn restore_state(&mut self, state: SelectionSnapshot) {
        self.elements.clear();
        for element in state.selected {
            if self.is_full() {
                break;
            }
            if !self.is_selected(&element) {
                self.elements.push(element);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_caps_at_one() {
        let mut s = SelectionSet::default();
        assert!(s.select("a"));
        assert!(!s.select("b"));
        assert_eq!(s.as_slice(), ["a"]);
    }

    #[test]
    fn select_then_is_selected() {
        let mut s = SelectionSet::new(Limit::Unbounded);
        assert!(s.select("apple"));
        assert!(s.is_selected("apple"));
    }

    #[test]
    fn deselect_then_not_selected() {
        let mut s = SelectionSet::new(Limit::Unbounded);
        s.select("apple");
        s.deselect("apple");
        assert!(!s.is_selected("apple"));
        assert!(s.is_empty());
    }

    #[test]
    fn reselect_is_idempotent() {
        let mut s = SelectionSet::new(Limit::AtMost(2));
        assert!(s.select("apple"));
        assert!(s.select("apple"));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn reselect_at_capacity_succeeds_without_callback() {
        let mut s = SelectionSet::new(Limit::AtMost(1));
        s.select("apple");
        let mut called = false;
        assert!(s.select_or_else("apple", || called = true));
        assert!(!called);
    }

    #[test]
    fn capacity_rejects_and_notifies() {
        let mut s = SelectionSet::new(Limit::AtMost(2));
        assert!(s.select("apple"));
        assert!(s.select("apricot"));
        let mut calls = 0;
        assert!(!s.select_or_else("banana", || calls += 1));
        assert_eq!(calls, 1);
        assert_eq!(s.as_slice(), ["apple", "apricot"]);
    }

    #[test]
    fn zero_cap_rejects_everything() {
        let mut s = SelectionSet::new(Limit::AtMost(0));
        assert!(!s.select("apple"));
        assert!(s.is_empty());
    }

    #[test]
    fn unbounded_accepts_many() {
        let mut s = SelectionSet::new(Limit::Unbounded);
        for i in 0..100 {
            assert!(s.select(format!("item-{i}")));
        }
        assert_eq!(s.len(), 100);
        assert!(!s.is_full());
    }

    #[test]
    fn deselect_absent_is_noop() {
        let mut s = SelectionSet::new(Limit::Unbounded);
        s.select("a");
        s.deselect("zzz");
        assert_eq!(s.as_slice(), ["a"]);
    }

    #[test]
    fn deselect_preserves_survivor_order() {
        let mut s = SelectionSet::new(Limit::Unbounded);
        for e in ["a", "b", "c", "d"] {
            s.select(e);
        }
        s.deselect("b");
        let order: Vec<&str> = s.iter().collect();
        assert_eq!(order, ["a", "c", "d"]);
    }

    #[test]
    fn deselect_frees_capacity() {
        let mut s = SelectionSet::new(Limit::AtMost(1));
        s.select("a");
        assert!(!s.select("b"));
        s.deselect("a");
        assert!(s.select("b"));
    }

    #[test]
    fn lowering_limit_keeps_members_and_rejects_new() {
        let mut s = SelectionSet::new(Limit::Unbounded);
        s.select("a");
        s.select("b");
        s.select("c");
        s.set_limit(Limit::AtMost(2));
        assert_eq!(s.len(), 3);
        assert!(!s.select("d"));
        s.deselect("a");
        assert!(!s.select("d"));
        s.deselect("b");
        assert!(s.select("d"));
    }

    #[test]
    fn clear_empties() {
        let mut s = SelectionSet::new(Limit::Unbounded);
        s.select("a");
        s.clear();
        assert!(s.is_empty());
    }

    #[test]
    fn state_key_uses_instance_id() {
        let s = SelectionSet::default().with_instance_id("tags");
        assert_eq!(s.state_key().canonical(), "CompletionSelection::tags");
    }

    #[test]
    fn save_restore_round_trip() {
        let mut s = SelectionSet::new(Limit::AtMost(3));
        s.select("a");
        s.select("b");
        let saved = s.save_state();
        s.clear();
        s.restore_state(saved);
        assert_eq!(s.as_slice(), ["a", "b"]);
    }

    #[test]
    fn restore_dedups_and_clamps() {
        let mut s = SelectionSet::new(Limit::AtMost(2));
        s.restore_state(SelectionSnapshot {
            selected: vec!["a".into(), "a".into(), "b".into(), "c".into()],
        });
        assert_eq!(s.as_slice(), ["a", "b"]);
    }
}
