//! # User Routes Module
//!
//! Defines and wires up routes for the `/user` endpoint group
//! (authentication records).

use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use delete::delete_user;
use get::{get_user, list_users};
use post::create_user;
use put::update_user;

pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/user` route group, mapping HTTP methods to handlers.
///
/// - `GET /user` → `list_users`
/// - `POST /user` → `create_user`
/// - `GET /user/{id}` → `get_user`
/// - `PUT /user/{id}` → `update_user`
/// - `DELETE /user/{id}` → `delete_user`
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/", post(create_user))
        .route("/{id}", get(get_user))
        .route("/{id}", put(update_user))
        .route("/{id}", delete(delete_user))
}
