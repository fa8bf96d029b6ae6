//! # Mata Pelajaran Routes Module
//!
//! Defines and wires up routes for the `/matapelajaran` endpoint group. The
//! flattened subject summary is mounted at its legacy top-level path
//! `/mapel/simple-detail/{id_mapel}` by the root router.

use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use delete::delete_mata_pelajaran;
use get::{
    get_mata_pelajaran, get_mata_pelajaran_by_kelas, get_mata_pelajaran_by_siswa,
    list_mata_pelajaran,
};
use post::create_mata_pelajaran;
use put::update_mata_pelajaran;

pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/matapelajaran` route group, mapping HTTP methods to handlers.
///
/// - `GET /matapelajaran` → `list_mata_pelajaran`
/// - `POST /matapelajaran` → `create_mata_pelajaran`
/// - `GET /matapelajaran/{id}` → `get_mata_pelajaran`
/// - `PUT /matapelajaran/{id}` → `update_mata_pelajaran`
/// - `DELETE /matapelajaran/{id}` → `delete_mata_pelajaran`
/// - `GET /matapelajaran/bykelas/{id}` → `get_mata_pelajaran_by_kelas`
/// - `GET /matapelajaran/siswa/{id_siswa}` → `get_mata_pelajaran_by_siswa`
pub fn mata_pelajaran_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_mata_pelajaran))
        .route("/", post(create_mata_pelajaran))
        .route("/{id}", get(get_mata_pelajaran))
        .route("/{id}", put(update_mata_pelajaran))
        .route("/{id}", delete(delete_mata_pelajaran))
        .route("/bykelas/{id}", get(get_mata_pelajaran_by_kelas))
        .route("/siswa/{id_siswa}", get(get_mata_pelajaran_by_siswa))
}
