//! # Guru Routes Module
//!
//! Defines and wires up routes for the `/guru` endpoint group.
//!
//! ## Structure
//! - `get.rs` — GET handlers (list, read-one, resolve by user)
//! - `post.rs` — POST handlers (create)
//! - `put.rs` — PUT handlers (update)
//! - `delete.rs` — DELETE handlers (delete)

use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use delete::delete_guru;
use get::{get_guru, get_guru_by_user, list_guru};
use post::create_guru;
use put::update_guru;

pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/guru` route group, mapping HTTP methods to handlers.
///
/// - `GET /guru` → `list_guru`
/// - `POST /guru` → `create_guru`
/// - `GET /guru/{id}` → `get_guru`
/// - `PUT /guru/{id}` → `update_guru`
/// - `DELETE /guru/{id}` → `delete_guru`
/// - `GET /guru/user/{id_user}` → `get_guru_by_user`
pub fn guru_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_guru))
        .route("/", post(create_guru))
        .route("/{id}", get(get_guru))
        .route("/{id}", put(update_guru))
        .route("/{id}", delete(delete_guru))
        .route("/user/{id_user}", get(get_guru_by_user))
}
