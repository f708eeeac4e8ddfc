use std::sync::Arc;

use async_trait::async_trait;
use course_core::ItemState;
use course_core::model::{ItemId, ProgressKey, Slug, Track};
use services::{ChecklistService, PersistStatus};
use storage::repository::{InMemoryRepository, ProgressRepository, StorageError};

fn key(slug: &str) -> ProgressKey {
    ProgressKey::progress(Track::Python, Slug::from(slug))
}

fn ids(raw: &[&str]) -> Vec<ItemId> {
    raw.iter().map(|s| ItemId::from(*s)).collect()
}

/// Backend where every call fails, as if storage were disabled.
struct UnavailableRepository;

#[async_trait]
impl ProgressRepository for UnavailableRepository {
    async fn read_progress(&self, _key: &ProgressKey) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    async fn write_progress(&self, _key: &ProgressKey, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[tokio::test]
async fn load_is_idempotent() {
    let repo = InMemoryRepository::new();
    repo.put_raw("pyd:python:progress:intro", r#"{"a":true}"#)
        .unwrap();
    let service = ChecklistService::new(Arc::new(repo));

    let first = service.load(key("intro"), ids(&["a", "b"])).await;
    let second = service.load(key("intro"), ids(&["a", "b"])).await;
    assert_eq!(first, second);
    assert!(first.is_done("a"));
}

#[tokio::test]
async fn persist_then_load_round_trips() {
    let service = ChecklistService::new(Arc::new(InMemoryRepository::new()));

    let mut list = service.load(key("intro"), ids(&["x", "y", "z"])).await;
    service.toggle(&mut list, "x").await;
    service.toggle(&mut list, "z").await;

    let restored = service.load(key("intro"), ids(&["x", "y", "z"])).await;
    assert_eq!(restored.snapshot(), list.snapshot());
    assert_eq!((restored.done(), restored.total()), (2, 3));
}

#[tokio::test]
async fn load_prunes_to_current_ids() {
    let repo = InMemoryRepository::new();
    repo.put_raw("pyd:python:progress:intro", r#"{"a":true,"b":true}"#)
        .unwrap();
    let service = ChecklistService::new(Arc::new(repo.clone()));

    let list = service.load(key("intro"), ids(&["a", "c"])).await;
    let snapshot: Vec<(String, bool)> = list.snapshot().into_iter().collect();
    assert_eq!(snapshot, [("a".into(), true), ("c".into(), false)]);

    // Loading alone does not rewrite what is stored.
    assert_eq!(
        repo.get_raw("pyd:python:progress:intro").unwrap().as_deref(),
        Some(r#"{"a":true,"b":true}"#)
    );
}

#[tokio::test]
async fn corrupt_storage_loads_all_pending() {
    for raw in ["not json", "[1,2]", "\"a\"", "{\"a\": tr"] {
        let repo = InMemoryRepository::new();
        repo.put_raw("pyd:python:progress:intro", raw).unwrap();
        let service = ChecklistService::new(Arc::new(repo));

        let list = service.load(key("intro"), ids(&["a", "b"])).await;
        assert_eq!(list.done(), 0, "{raw:?}");
        assert_eq!(list.total(), 2);
    }
}

#[tokio::test]
async fn corrupt_state_is_overwritten_on_next_toggle() {
    let repo = InMemoryRepository::new();
    repo.put_raw("pyd:python:progress:intro", "garbage").unwrap();
    let service = ChecklistService::new(Arc::new(repo.clone()));

    let mut list = service.load(key("intro"), ids(&["a"])).await;
    service.toggle(&mut list, "a").await;
    assert_eq!(
        repo.get_raw("pyd:python:progress:intro").unwrap().as_deref(),
        Some(r#"{"a":true}"#)
    );
}

#[tokio::test]
async fn unavailable_storage_never_blocks_the_checklist() {
    let service = ChecklistService::new(Arc::new(UnavailableRepository));

    let mut list = service.load(key("intro"), ids(&["a", "b"])).await;
    assert_eq!(list.done(), 0);

    assert_eq!(service.toggle(&mut list, "a").await, Some(ItemState::Done));
    assert!(list.is_done("a"));
    assert_eq!(service.persist(&list).await, PersistStatus::Failed);
    assert_eq!(service.reset(&mut list).await, PersistStatus::Failed);
    assert_eq!(list.done(), 0);
}

#[tokio::test]
async fn quota_exceeded_is_swallowed() {
    // Room for the key and an empty object, not for a real snapshot.
    let quota = "pyd:python:progress:intro".len() + 2;
    let service = ChecklistService::new(Arc::new(InMemoryRepository::with_quota(quota)));

    let mut list = service.load(key("intro"), ids(&["a"])).await;
    assert_eq!(service.toggle(&mut list, "a").await, Some(ItemState::Done));
    assert_eq!(service.persist(&list).await, PersistStatus::Failed);
}

#[tokio::test]
async fn tracks_do_not_share_progress() {
    let repo = InMemoryRepository::new();
    let service = ChecklistService::new(Arc::new(repo));

    let python = ProgressKey::progress(Track::Python, Slug::from("intro"));
    let pandas = ProgressKey::progress(Track::Pandas, Slug::from("intro"));

    let mut list = service.load(python, ids(&["a"])).await;
    service.toggle(&mut list, "a").await;

    let other = service.load(pandas, ids(&["a"])).await;
    assert_eq!(other.done(), 0);
}
