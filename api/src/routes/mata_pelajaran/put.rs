use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::mata_pelajaran::MataPelajaran;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateMataPelajaranRequest {
    pub id_kelas: i64,
    pub nama_mata_pelajaran: String,
}

/// PUT /matapelajaran/{id}
///
/// Overwrite every mutable column of a subject.
pub async fn update_mata_pelajaran(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateMataPelajaranRequest>,
) -> impl IntoResponse {
    match MataPelajaran::edit(app_state.db(), id, req.id_kelas, &req.nama_mata_pelajaran).await {
        Ok(Some(mapel)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                mapel,
                "Mata pelajaran updated successfully",
            )),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Mata pelajaran not found")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
