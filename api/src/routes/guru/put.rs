use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::guru::Guru;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateGuruRequest {
    pub id_user: i64,
    pub id_mapel: i64,
    pub nama_guru: String,
    pub mata_pelajaran: String,
    pub nip: String,
    pub alamat: String,
    pub email: String,
    pub no_telp: String,
    #[serde(default)]
    pub foto: String,
}

/// PUT /guru/{id}
///
/// Overwrite every mutable column of a teacher.
///
/// ### Responses
/// - `200 OK` — the updated teacher object
/// - `404 Not Found` — no teacher with that ID
/// - `500 Internal Server Error` — Database error
pub async fn update_guru(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateGuruRequest>,
) -> impl IntoResponse {
    match Guru::edit(
        app_state.db(),
        id,
        req.id_user,
        req.id_mapel,
        &req.nama_guru,
        &req.mata_pelajaran,
        &req.nip,
        &req.alamat,
        &req.email,
        &req.no_telp,
        &req.foto,
    )
    .await
    {
        Ok(Some(guru)) => (
            StatusCode::OK,
            Json(ApiResponse::success(guru, "Guru updated successfully")),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Guru not found")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
