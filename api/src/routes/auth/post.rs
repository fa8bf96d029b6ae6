use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::user::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Default)]
pub struct LoginResponse {
    pub id_user: i64,
    pub id_role: i64,
    pub token: String,
}

/// POST /login
///
/// Authenticate a user by username and password.
///
/// ### Request Body
/// ```json
/// { "username": "ani", "password": "rahasia" }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": { "id_user": 1, "id_role": 2, "token": "dummy-token" },
///   "message": "Login successful"
/// }
/// ```
///
/// - `401 Unauthorized` — an unknown username and a wrong password produce
///   the same response, so callers cannot probe which usernames exist
/// - `500 Internal Server Error` — Database error
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    match User::find_by_username(app_state.db(), &req.username).await {
        Ok(Some(user)) if user.password == req.password => (
            StatusCode::OK,
            Json(ApiResponse::success(
                LoginResponse {
                    id_user: user.id_user,
                    id_role: user.id_role,
                    token: "dummy-token".to_string(),
                },
                "Login successful",
            )),
        )
            .into_response(),
        Ok(_) => (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<()>::error("Invalid username or password")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
