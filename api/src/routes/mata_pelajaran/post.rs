use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::mata_pelajaran::MataPelajaran;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateMataPelajaranRequest {
    pub id_kelas: i64,
    pub nama_mata_pelajaran: String,
}

/// POST /matapelajaran
///
/// Create a subject, returning the created record.
pub async fn create_mata_pelajaran(
    State(app_state): State<AppState>,
    Json(req): Json<CreateMataPelajaranRequest>,
) -> impl IntoResponse {
    match MataPelajaran::create(app_state.db(), req.id_kelas, &req.nama_mata_pelajaran).await {
        Ok(mapel) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                mapel,
                "Mata pelajaran created successfully",
            )),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
