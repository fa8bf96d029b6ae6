use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::kelas::Kelas;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateKelasRequest {
    pub id_guru: i64,
    pub nama_kelas: String,
    pub tahun_ajaran: String,
}

/// POST /kelas
///
/// Create a class, returning the created record.
pub async fn create_kelas(
    State(app_state): State<AppState>,
    Json(req): Json<CreateKelasRequest>,
) -> impl IntoResponse {
    match Kelas::create(app_state.db(), req.id_guru, &req.nama_kelas, &req.tahun_ajaran).await {
        Ok(kelas) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(kelas, "Kelas created successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
