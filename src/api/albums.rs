//! CRUD handlers for the album resource
//!
//! Each handler performs exactly one store operation and serializes the
//! result as JSON. Path ids are typed as integers, so a malformed id is
//! rejected with 400 before any SQL runs. Body decode failures are mapped
//! to 400 rather than axum's default rejection statuses.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

use crate::db::{Album, AlbumRequest};
use crate::error::Error;
use crate::AppState;

/// GET /albums/
///
/// Returns every album as a JSON array. A storage failure surfaces as 500.
pub async fn list_albums(State(state): State<AppState>) -> Result<Json<Vec<Album>>, Error> {
    let albums = state.store.list_all().await?;
    Ok(Json(albums))
}

/// GET /album/:id
///
/// Returns the matching album, or 404 with a zero-valued album body when no
/// row matches. The body shape is identical in both cases.
pub async fn get_album(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, Error> {
    let response = match state.store.get_by_id(id).await? {
        Some(album) => Json(album).into_response(),
        None => (StatusCode::NOT_FOUND, Json(Album::default())).into_response(),
    };
    Ok(response)
}

/// POST /album/
///
/// Inserts a new album and returns 201 with the generated id as a bare
/// JSON number. Undecodable bodies get 400 and no row is written.
pub async fn create_album(
    State(state): State<AppState>,
    payload: Result<Json<AlbumRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<i64>), Error> {
    let Json(req) = payload.map_err(|e| Error::BadRequest(e.to_string()))?;

    let id = state.store.insert(&req.title, &req.artist, req.price).await?;
    Ok((StatusCode::CREATED, Json(id)))
}

/// PUT /album/:id
///
/// Overwrites all fields of the row with the path id; responds 200 with an
/// empty body. No existence check, so updating an absent id also returns
/// 200. Storage failures report 400 here, matching the reference contract
/// for this route.
pub async fn update_album(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<AlbumRequest>, JsonRejection>,
) -> StatusCode {
    let Ok(Json(req)) = payload else {
        return StatusCode::BAD_REQUEST;
    };

    match state.store.update(id, &req.title, &req.artist, req.price).await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            warn!("update of album {} failed: {}", id, e);
            StatusCode::BAD_REQUEST
        }
    }
}

/// DELETE /album/:id
///
/// Deletes the row if present and returns 200 with the JSON string "ok"
/// either way. A storage failure surfaces as 500 with no body.
pub async fn delete_album(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<&'static str>, Error> {
    state.store.delete_by_id(id).await?;
    Ok(Json("ok"))
}
