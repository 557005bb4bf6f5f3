//! albumd library - REST CRUD service for an album catalog
//!
//! The store wraps the SQLite pool; the router maps five routes onto it.
//! CORS, the update route, and static client serving are runtime toggles
//! so one binary covers both variants of the original service.

use axum::routing::{delete, get, post, put};
use axum::Router;
use std::path::PathBuf;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

pub mod api;
pub mod db;
pub mod error;

pub use error::{Error, Result};

use db::AlbumStore;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Album persistence, injected rather than held in a global
    pub store: AlbumStore,
}

impl AppState {
    /// Create new application state
    pub fn new(store: AlbumStore) -> Self {
        Self { store }
    }
}

/// Feature toggles for the HTTP surface
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Attach a permissive CORS layer
    pub cors: bool,
    /// Expose PUT /album/:id
    pub update_route: bool,
    /// Serve this directory at / when set
    pub static_dir: Option<PathBuf>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            cors: true,
            update_route: true,
            static_dir: None,
        }
    }
}

/// Build application router
pub fn build_router(state: AppState, config: &RouterConfig) -> Router {
    let mut router = Router::new()
        .route("/albums/", get(api::list_albums))
        .route("/album/", post(api::create_album))
        .route("/album/:id", get(api::get_album))
        .route("/album/:id", delete(api::delete_album));

    if config.update_route {
        router = router.route("/album/:id", put(api::update_album));
    }

    let mut router = router.merge(api::health_routes()).with_state(state);

    if let Some(dir) = &config.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    if config.cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}
