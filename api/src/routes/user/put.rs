use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::user::User;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub username: String,
    pub password: String,
    pub id_role: i64,
    pub tanggal_registrasi: String,
}

/// PUT /user/{id}
///
/// Overwrite every mutable column of a user.
pub async fn update_user(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> impl IntoResponse {
    match User::edit(
        app_state.db(),
        id,
        &req.username,
        &req.password,
        req.id_role,
        &req.tanggal_registrasi,
    )
    .await
    {
        Ok(Some(user)) => (
            StatusCode::OK,
            Json(ApiResponse::success(user, "User updated successfully")),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("User not found")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
