//! # Siswa Routes Module
//!
//! Defines and wires up routes for the `/siswa` endpoint group. Besides the
//! plain CRUD surface this group carries the enrollment-centric reads
//! (students by subject) and the class-assignment update.

use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use delete::delete_siswa;
use get::{get_siswa, get_siswa_by_mapel, get_siswa_by_user, list_siswa};
use post::create_siswa;
use put::{set_siswa_kelas, update_siswa};

pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/siswa` route group, mapping HTTP methods to handlers.
///
/// - `GET /siswa` → `list_siswa`
/// - `POST /siswa` → `create_siswa`
/// - `GET /siswa/{id}` → `get_siswa`
/// - `PUT /siswa/{id}` → `update_siswa`
/// - `DELETE /siswa/{id}` → `delete_siswa`
/// - `GET /siswa/user/{id_user}` → `get_siswa_by_user`
/// - `GET /siswa/by-mapel/{id_mapel}` → `get_siswa_by_mapel`
/// - `PUT /siswa/kelas/{id_siswa}` → `set_siswa_kelas`
pub fn siswa_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_siswa))
        .route("/", post(create_siswa))
        .route("/{id}", get(get_siswa))
        .route("/{id}", put(update_siswa))
        .route("/{id}", delete(delete_siswa))
        .route("/user/{id_user}", get(get_siswa_by_user))
        .route("/by-mapel/{id_mapel}", get(get_siswa_by_mapel))
        .route("/kelas/{id_siswa}", put(set_siswa_kelas))
}
