//! # Kelas Routes Module
//!
//! Defines and wires up routes for the `/kelas` endpoint group. The composite
//! class-detail view lives in `get.rs` too but is mounted at its legacy
//! top-level path `/kelass/{id_kelas}` by the root router.

use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use delete::delete_kelas;
use get::{get_kelas, get_kelas_by_guru, list_kelas};
use post::create_kelas;
use put::update_kelas;

pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/kelas` route group, mapping HTTP methods to handlers.
///
/// - `GET /kelas` → `list_kelas`
/// - `POST /kelas` → `create_kelas`
/// - `GET /kelas/{id}` → `get_kelas`
/// - `PUT /kelas/{id}` → `update_kelas`
/// - `DELETE /kelas/{id}` → `delete_kelas`
/// - `GET /kelas/guru/{id_guru}` → `get_kelas_by_guru`
pub fn kelas_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_kelas))
        .route("/", post(create_kelas))
        .route("/{id}", get(get_kelas))
        .route("/{id}", put(update_kelas))
        .route("/{id}", delete(delete_kelas))
        .route("/guru/{id_guru}", get(get_kelas_by_guru))
}
