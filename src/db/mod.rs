//! Database access layer for albumd
//!
//! Opens (creating if needed) the SQLite database file and keeps the
//! `album` table definition in one place. All queries run through the
//! connection pool with bound parameters.

use crate::error::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;

mod albums;
pub use albums::{Album, AlbumRequest, AlbumStore};

/// Initialize database connection and create the album table if needed
///
/// The database file is created on first run (`mode=rwc`). Failures here
/// are fatal to startup; the caller aborts the process.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new().connect(&db_url).await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;

    // WAL mode allows concurrent readers with one writer
    sqlx::query("PRAGMA journal_mode = WAL").execute(&pool).await?;

    // Back off instead of failing immediately on a locked database
    sqlx::query("PRAGMA busy_timeout = 5000").execute(&pool).await?;

    create_album_table(&pool).await?;

    Ok(pool)
}

/// Create the album table (idempotent - safe to call multiple times)
pub async fn create_album_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS album(
            ID INTEGER PRIMARY KEY AUTOINCREMENT,
            Title TEXT NOT NULL,
            Artist TEXT NOT NULL,
            Price FLOAT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
