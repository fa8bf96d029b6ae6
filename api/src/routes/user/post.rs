use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::user::User;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub id_role: i64,
    pub tanggal_registrasi: String,
}

/// POST /user
///
/// Create an authentication record, returning the created row.
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> impl IntoResponse {
    match User::create(
        app_state.db(),
        &req.username,
        &req.password,
        req.id_role,
        &req.tanggal_registrasi,
    )
    .await
    {
        Ok(user) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(user, "User created successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
