//! Per-lesson completion checklist.
//!
//! Each tracked id is either `Pending` or `Done`. The persisted form is a
//! JSON object mapping item id to a boolean, with no version field: schema
//! drift is handled by pruning on restore.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use thiserror::Error;

use crate::model::{ItemId, ProgressKey};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("persisted checklist is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("persisted checklist is not a JSON object")]
    NotAnObject,

    #[error("failed to encode checklist: {0}")]
    Encode(serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemState {
    #[default]
    Pending,
    Done,
}

impl ItemState {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ItemState::Pending => ItemState::Done,
            ItemState::Done => ItemState::Pending,
        }
    }

    #[must_use]
    pub fn is_done(self) -> bool {
        matches!(self, ItemState::Done)
    }
}

impl From<bool> for ItemState {
    fn from(done: bool) -> Self {
        if done { ItemState::Done } else { ItemState::Pending }
    }
}

//
// ─── SAVED STATE ───────────────────────────────────────────────────────────────
//

/// Decoded persisted map, before it is reconciled with the current ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedState {
    entries: HashMap<String, bool>,
}

impl SavedState {
    /// Decode a stored value.
    ///
    /// Only a JSON `true` marks an item done; any other value inside the
    /// object reads as pending. That includes truthy values such as `1` or
    /// `"yes"`, which a looser reader would count as done.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the text is not JSON or not a JSON object.
    pub fn decode(raw: &str) -> Result<Self, ProgressError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        let serde_json::Value::Object(map) = value else {
            return Err(ProgressError::NotAnObject);
        };
        let entries = map
            .into_iter()
            .map(|(id, v)| (id, v == serde_json::Value::Bool(true)))
            .collect();
        Ok(Self { entries })
    }

    #[must_use]
    pub fn is_done(&self, id: &str) -> bool {
        self.entries.get(id).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//
// ─── CHECKLIST ─────────────────────────────────────────────────────────────────
//

/// Completion state for the current id set of one lesson checklist.
///
/// The id set is fixed at construction; toggling an id outside it is a
/// no-op, so the map never grows untracked keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    key: ProgressKey,
    items: Vec<(ItemId, ItemState)>,
}

impl Checklist {
    /// All ids pending.
    #[must_use]
    pub fn pending(key: ProgressKey, ids: impl IntoIterator<Item = ItemId>) -> Self {
        Self::restore(key, ids, &SavedState::default())
    }

    /// Seed each current id from saved state; saved ids not in `ids` are dropped.
    ///
    /// Repeated ids keep their first position.
    #[must_use]
    pub fn restore(
        key: ProgressKey,
        ids: impl IntoIterator<Item = ItemId>,
        saved: &SavedState,
    ) -> Self {
        let mut items: Vec<(ItemId, ItemState)> = Vec::new();
        for id in ids {
            if items.iter().any(|(existing, _)| *existing == id) {
                continue;
            }
            let state = ItemState::from(saved.is_done(id.as_str()));
            items.push((id, state));
        }
        Self { key, items }
    }

    #[must_use]
    pub fn key(&self) -> &ProgressKey {
        &self.key
    }

    /// Flip one item. Returns the new state, or `None` if `id` is not tracked.
    pub fn toggle(&mut self, id: &str) -> Option<ItemState> {
        let (_, state) = self.items.iter_mut().find(|(item, _)| item == id)?;
        *state = state.toggled();
        Some(*state)
    }

    /// Force every tracked item back to pending.
    pub fn reset(&mut self) {
        for (_, state) in &mut self.items {
            *state = ItemState::Pending;
        }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|(item, _)| item == id)
    }

    #[must_use]
    pub fn state(&self, id: &str) -> Option<ItemState> {
        self.items
            .iter()
            .find(|(item, _)| item == id)
            .map(|(_, state)| *state)
    }

    #[must_use]
    pub fn is_done(&self, id: &str) -> bool {
        self.state(id).is_some_and(ItemState::is_done)
    }

    pub fn items(&self) -> impl Iterator<Item = (&ItemId, ItemState)> {
        self.items.iter().map(|(id, state)| (id, *state))
    }

    #[must_use]
    pub fn done(&self) -> usize {
        self.items.iter().filter(|(_, s)| s.is_done()).count()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current state as an id-to-done map.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, bool> {
        self.items
            .iter()
            .map(|(id, state)| (id.as_str().to_owned(), state.is_done()))
            .collect()
    }

    /// Serialize to the persisted JSON object form.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Encode` if serialization fails.
    pub fn encode(&self) -> Result<String, ProgressError> {
        serde_json::to_string(&self.snapshot()).map_err(ProgressError::Encode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Slug, Track};

    fn key() -> ProgressKey {
        ProgressKey::progress(Track::Python, Slug::from("intro-setup"))
    }

    fn ids(raw: &[&str]) -> Vec<ItemId> {
        raw.iter().map(|s| ItemId::from(*s)).collect()
    }

    #[test]
    fn prunes_removed_ids_and_seeds_new_ones() {
        let saved = SavedState::decode(r#"{"a": true, "b": true}"#).unwrap();
        let list = Checklist::restore(key(), ids(&["a", "c"]), &saved);
        let expected: BTreeMap<String, bool> =
            [("a".to_string(), true), ("c".to_string(), false)].into();
        assert_eq!(list.snapshot(), expected);
        assert!(!list.contains("b"));
    }

    #[test]
    fn toggle_is_self_inverse() {
        let mut list = Checklist::pending(key(), ids(&["a", "b"]));
        let before = list.clone();
        assert_eq!(list.toggle("a"), Some(ItemState::Done));
        assert_eq!(list.toggle("a"), Some(ItemState::Pending));
        assert_eq!(list, before);
    }

    #[test]
    fn toggle_ignores_untracked_ids() {
        let mut list = Checklist::pending(key(), ids(&["a"]));
        assert_eq!(list.toggle("ghost"), None);
        assert_eq!(list.total(), 1);
        assert!(!list.snapshot().contains_key("ghost"));
    }

    #[test]
    fn reset_clears_everything() {
        let saved = SavedState::decode(r#"{"a": true, "b": true}"#).unwrap();
        let mut list = Checklist::restore(key(), ids(&["a", "b"]), &saved);
        assert_eq!(list.done(), 2);
        list.reset();
        assert_eq!(list.done(), 0);
        assert_eq!(list.total(), 2);
    }

    #[test]
    fn counters() {
        let mut list = Checklist::pending(key(), ids(&["a", "b", "c", "d", "e"]));
        list.toggle("a");
        list.toggle("c");
        list.toggle("e");
        assert_eq!((list.done(), list.total()), (3, 5));
    }

    #[test]
    fn decode_rejects_non_objects() {
        for raw in ["", "not json", "[true]", "true", "null", "{\"a\": tru"] {
            assert!(SavedState::decode(raw).is_err(), "{raw:?}");
        }
    }

    #[test]
    fn only_literal_true_counts_as_done() {
        let saved = SavedState::decode(r#"{"a": true, "b": "yes", "c": 1, "d": false}"#).unwrap();
        let list = Checklist::restore(key(), ids(&["a", "b", "c", "d"]), &saved);
        assert_eq!(list.done(), 1);
        assert!(list.is_done("a"));
    }

    #[test]
    fn encode_then_restore_returns_same_state() {
        let mut list = Checklist::pending(key(), ids(&["x", "y", "z"]));
        list.toggle("y");
        let raw = list.encode().unwrap();
        let restored = Checklist::restore(
            key(),
            ids(&["x", "y", "z"]),
            &SavedState::decode(&raw).unwrap(),
        );
        assert_eq!(restored, list);
    }

    #[test]
    fn repeated_ids_are_tracked_once() {
        let list = Checklist::pending(key(), ids(&["a", "b", "a"]));
        assert_eq!(list.total(), 2);
        let order: Vec<&str> = list.items().map(|(id, _)| id.as_str()).collect();
        assert_eq!(order, ["a", "b"]);
    }
}
