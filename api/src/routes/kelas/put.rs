use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::kelas::Kelas;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateKelasRequest {
    pub id_guru: i64,
    pub nama_kelas: String,
    pub tahun_ajaran: String,
}

/// PUT /kelas/{id}
///
/// Overwrite every mutable column of a class.
pub async fn update_kelas(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateKelasRequest>,
) -> impl IntoResponse {
    match Kelas::edit(
        app_state.db(),
        id,
        req.id_guru,
        &req.nama_kelas,
        &req.tahun_ajaran,
    )
    .await
    {
        Ok(Some(kelas)) => (
            StatusCode::OK,
            Json(ApiResponse::success(kelas, "Kelas updated successfully")),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Kelas not found")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
