use course_core::model::{ProgressKey, Slug, Track};
use storage::repository::{ProgressRepository, Storage};
use storage::sqlite::SqliteRepository;

fn key(track: Track, slug: &str) -> ProgressKey {
    ProgressKey::progress(track, Slug::from(slug))
}

#[tokio::test]
async fn sqlite_roundtrip_persists_raw_checklist() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let k = key(Track::Python, "intro-setup");
    assert_eq!(repo.read_progress(&k).await.expect("read"), None);

    repo.write_progress(&k, r#"{"why-python":true}"#)
        .await
        .expect("write");
    let stored = repo.read_progress(&k).await.expect("read");
    assert_eq!(stored.as_deref(), Some(r#"{"why-python":true}"#));
}

#[tokio::test]
async fn sqlite_write_replaces_previous_value() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_replace?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let k = key(Track::Pandas, "pandas-intro-setup");
    repo.write_progress(&k, r#"{"a":true}"#).await.expect("first");
    repo.write_progress(&k, r#"{"a":false}"#).await.expect("second");

    let stored = repo.read_progress(&k).await.expect("read");
    assert_eq!(stored.as_deref(), Some(r#"{"a":false}"#));

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM checklist_state")
        .fetch_one(repo.pool())
        .await
        .expect("count");
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn sqlite_keeps_tracks_apart() {
    let storage = Storage::sqlite("sqlite:file:memdb_tracks?mode=memory&cache=shared")
        .await
        .expect("storage");

    storage
        .progress
        .write_progress(&key(Track::Python, "intro"), "{}")
        .await
        .expect("write");

    let other = storage
        .progress
        .read_progress(&key(Track::Pandas, "intro"))
        .await
        .expect("read");
    assert_eq!(other, None);
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");

    let versions: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schema_migrations")
        .fetch_one(repo.pool())
        .await
        .expect("count");
    assert_eq!(versions, 1);
}

#[tokio::test]
async fn private_memory_database_survives_across_calls() {
    let storage = Storage::sqlite("sqlite::memory:").await.expect("storage");
    let k = key(Track::Python, "functions");
    storage.progress.write_progress(&k, "{}").await.expect("write");
    let stored = storage.progress.read_progress(&k).await.expect("read");
    assert_eq!(stored.as_deref(), Some("{}"));
}
