//! # Penilaian Routes Module
//!
//! Defines and wires up routes for the `/penilaian` endpoint group (grade
//! detail rows). The per-pair detail view (`/nilai-detail`) and the per-user
//! grade summary (`/nilai/user/{id_user}`) live in `get.rs` and are mounted
//! at their legacy top-level paths by the root router.
//!
//! Weights (`bobot`) cross this boundary as percentage strings ("30.00%")
//! and are stored as decimal fractions.

use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use delete::delete_penilaian;
use get::list_penilaian;
use post::create_penilaian;
use put::update_penilaian;

pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/penilaian` route group, mapping HTTP methods to handlers.
///
/// - `GET /penilaian` → `list_penilaian`
/// - `POST /penilaian` → `create_penilaian`
/// - `PUT /penilaian/{id}` → `update_penilaian`
/// - `DELETE /penilaian/{id}` → `delete_penilaian`
pub fn penilaian_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_penilaian))
        .route("/", post(create_penilaian))
        .route("/{id}", put(update_penilaian))
        .route("/{id}", delete(delete_penilaian))
}
