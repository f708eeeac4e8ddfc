use std::sync::Arc;

use log::{debug, warn};

use course_core::model::{ItemId, ProgressKey};
use course_core::{Checklist, ItemState, SavedState};
use storage::repository::ProgressRepository;

/// Outcome of writing a checklist back to storage.
///
/// A failed write is already logged; callers may ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistStatus {
    Saved,
    Failed,
}

impl PersistStatus {
    #[must_use]
    pub fn is_saved(self) -> bool {
        matches!(self, PersistStatus::Saved)
    }
}

/// Loads, mutates and persists lesson checklists.
///
/// Storage is a convenience here: unreadable or corrupt state loads as
/// all-pending, and failed writes are logged and swallowed.
#[derive(Clone)]
pub struct ChecklistService {
    progress: Arc<dyn ProgressRepository>,
}

impl ChecklistService {
    #[must_use]
    pub fn new(progress: Arc<dyn ProgressRepository>) -> Self {
        Self { progress }
    }

    /// Restore the checklist for `key`, tracking exactly `ids`.
    ///
    /// Saved ids outside `ids` are dropped. Nothing is written back.
    pub async fn load(&self, key: ProgressKey, ids: Vec<ItemId>) -> Checklist {
        let saved = self.read_saved(&key).await;
        let checklist = Checklist::restore(key, ids, &saved);
        debug!(
            "loaded checklist {}: {}/{} done",
            checklist.key(),
            checklist.done(),
            checklist.total()
        );
        checklist
    }

    async fn read_saved(&self, key: &ProgressKey) -> SavedState {
        let raw = match self.progress.read_progress(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return SavedState::default(),
            Err(err) => {
                warn!("could not read checklist {key}, starting fresh: {err}");
                return SavedState::default();
            }
        };
        match SavedState::decode(&raw) {
            Ok(saved) => saved,
            Err(err) => {
                warn!("ignoring corrupt checklist {key}: {err}");
                SavedState::default()
            }
        }
    }

    /// Flip one item and persist the result before returning.
    ///
    /// Returns `None`, without writing, when `id` is not tracked.
    pub async fn toggle(&self, checklist: &mut Checklist, id: &str) -> Option<ItemState> {
        let Some(state) = checklist.toggle(id) else {
            debug!("ignoring toggle of untracked id {id:?} in {}", checklist.key());
            return None;
        };
        self.persist(checklist).await;
        Some(state)
    }

    /// Mark every item pending and persist the result before returning.
    pub async fn reset(&self, checklist: &mut Checklist) -> PersistStatus {
        checklist.reset();
        self.persist(checklist).await
    }

    /// Write the full checklist under its key.
    pub async fn persist(&self, checklist: &Checklist) -> PersistStatus {
        let raw = match checklist.encode() {
            Ok(raw) => raw,
            Err(err) => {
                warn!("could not encode checklist {}: {err}", checklist.key());
                return PersistStatus::Failed;
            }
        };
        match self.progress.write_progress(checklist.key(), &raw).await {
            Ok(()) => {
                debug!("saved checklist {}", checklist.key());
                PersistStatus::Saved
            }
            Err(err) => {
                warn!("could not save checklist {}: {err}", checklist.key());
                PersistStatus::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::model::{Slug, Track};
    use storage::repository::InMemoryRepository;

    fn key() -> ProgressKey {
        ProgressKey::practice(Track::Python, Slug::from("intro-setup"))
    }

    fn ids(raw: &[&str]) -> Vec<ItemId> {
        raw.iter().map(|s| ItemId::from(*s)).collect()
    }

    #[tokio::test]
    async fn toggle_writes_before_returning() {
        let repo = InMemoryRepository::new();
        let service = ChecklistService::new(Arc::new(repo.clone()));

        let mut list = service.load(key(), ids(&["a", "b"])).await;
        assert_eq!(service.toggle(&mut list, "b").await, Some(ItemState::Done));

        let stored = repo.get_raw("pyd:python:practice:intro-setup").unwrap();
        assert_eq!(stored.as_deref(), Some(r#"{"a":false,"b":true}"#));
    }

    #[tokio::test]
    async fn untracked_toggle_writes_nothing() {
        let repo = InMemoryRepository::new();
        let service = ChecklistService::new(Arc::new(repo.clone()));

        let mut list = service.load(key(), ids(&["a"])).await;
        assert_eq!(service.toggle(&mut list, "ghost").await, None);
        assert_eq!(repo.get_raw("pyd:python:practice:intro-setup").unwrap(), None);
    }

    #[tokio::test]
    async fn reset_persists_all_pending() {
        let repo = InMemoryRepository::new();
        repo.put_raw("pyd:python:practice:intro-setup", r#"{"a":true,"b":true}"#)
            .unwrap();
        let service = ChecklistService::new(Arc::new(repo.clone()));

        let mut list = service.load(key(), ids(&["a", "b"])).await;
        assert_eq!(list.done(), 2);
        assert_eq!(service.reset(&mut list).await, PersistStatus::Saved);
        assert_eq!(list.done(), 0);

        let stored = repo.get_raw("pyd:python:practice:intro-setup").unwrap();
        assert_eq!(stored.as_deref(), Some(r#"{"a":false,"b":false}"#));
    }

    #[tokio::test]
    async fn quota_failure_is_reported_not_raised() {
        let repo = InMemoryRepository::with_quota(8);
        let service = ChecklistService::new(Arc::new(repo));

        let mut list = service.load(key(), ids(&["a"])).await;
        assert_eq!(service.toggle(&mut list, "a").await, Some(ItemState::Done));
        assert_eq!(service.persist(&list).await, PersistStatus::Failed);
        assert!(list.is_done("a"));
    }
}
