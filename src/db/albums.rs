//! Album model and CRUD queries
//!
//! The store is a thin wrapper around the connection pool. It is constructed
//! once at startup and handed to the HTTP layer through `AppState`; there is
//! no process-wide singleton.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// One persisted album row
///
/// `Default` yields the zero-valued album (id 0, empty strings, price 0.0)
/// that get-by-id writes alongside a 404.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Album {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

/// Request body for create and update
///
/// Fields default to zero values when absent; decodability is the only
/// validation applied to incoming bodies. An `id` field in the body is
/// ignored (the path parameter wins on update, the store assigns on create).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AlbumRequest {
    pub title: String,
    pub artist: String,
    pub price: f64,
}

/// CRUD primitives over the album table
#[derive(Clone)]
pub struct AlbumStore {
    pool: SqlitePool,
}

impl AlbumStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Return every album in storage order
    pub async fn list_all(&self) -> Result<Vec<Album>> {
        let albums = sqlx::query_as::<_, Album>(
            "SELECT ID AS id, Title AS title, Artist AS artist, Price AS price FROM album",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(albums)
    }

    /// Fetch a single album, `None` when no row matches
    ///
    /// A query failure is an error, never conflated with absence.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Album>> {
        let album = sqlx::query_as::<_, Album>(
            "SELECT ID AS id, Title AS title, Artist AS artist, Price AS price \
             FROM album WHERE ID = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(album)
    }

    /// Insert an album and return the generated id
    pub async fn insert(&self, title: &str, artist: &str, price: f64) -> Result<i64> {
        let result = sqlx::query("INSERT INTO album (Title, Artist, Price) VALUES (?, ?, ?)")
            .bind(title)
            .bind(artist)
            .bind(price)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Overwrite all fields of the row with the given id
    ///
    /// Unconditional: zero rows affected is not distinguished from success.
    pub async fn update(&self, id: i64, title: &str, artist: &str, price: f64) -> Result<()> {
        sqlx::query("UPDATE album SET Title = ?, Artist = ?, Price = ? WHERE ID = ?")
            .bind(title)
            .bind(artist)
            .bind(price)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Delete the row with the given id, whether or not it exists
    pub async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM album WHERE ID = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
