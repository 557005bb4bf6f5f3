//! Tests for database initialization
//!
//! Covers automatic database file creation on first run, idempotent table
//! creation, and persistence across reopens.

use albumd::db::{init_database, AlbumStore};
use tempfile::tempdir;

#[tokio::test]
async fn test_database_creation_when_missing() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("albums.db");

    let result = init_database(&db_path).await;
    assert!(result.is_ok(), "Database initialization failed: {:?}", result.err());

    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_table_creation_is_idempotent() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("albums.db");

    // Initialize twice; the second run must not fail or clobber the table
    let pool = init_database(&db_path).await.unwrap();
    drop(pool);
    let pool = init_database(&db_path).await.unwrap();

    let store = AlbumStore::new(pool);
    let id = store.insert("Abbey Road", "Beatles", 12.5).await.unwrap();
    assert_eq!(id, 1);
}

#[tokio::test]
async fn test_rows_survive_reopen() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("albums.db");

    let pool = init_database(&db_path).await.unwrap();
    let store = AlbumStore::new(pool.clone());
    store.insert("Abbey Road", "Beatles", 12.5).await.unwrap();
    pool.close().await;

    let pool = init_database(&db_path).await.unwrap();
    let store = AlbumStore::new(pool);
    let albums = store.list_all().await.unwrap();
    assert_eq!(albums.len(), 1);
    assert_eq!(albums[0].title, "Abbey Road");
}
