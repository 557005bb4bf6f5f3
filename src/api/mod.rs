//! HTTP API handlers for albumd

pub mod albums;
pub mod health;

pub use albums::{create_album, delete_album, get_album, list_albums, update_album};
pub use health::health_routes;
