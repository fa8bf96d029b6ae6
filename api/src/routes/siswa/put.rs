use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::siswa::Siswa;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateSiswaRequest {
    pub id_user: i64,
    pub id_kelas: Option<i64>,
    pub nama_siswa: String,
    pub alamat: String,
    pub tanggal_lahir: String,
    pub nisn: String,
    #[serde(default)]
    pub foto: String,
}

#[derive(Debug, Deserialize)]
pub struct SetKelasRequest {
    pub id_kelas: i64,
}

/// PUT /siswa/{id}
///
/// Overwrite every mutable column of a student.
pub async fn update_siswa(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateSiswaRequest>,
) -> impl IntoResponse {
    match Siswa::edit(
        app_state.db(),
        id,
        req.id_user,
        req.id_kelas,
        &req.nama_siswa,
        &req.alamat,
        &req.tanggal_lahir,
        &req.nisn,
        &req.foto,
    )
    .await
    {
        Ok(Some(siswa)) => (
            StatusCode::OK,
            Json(ApiResponse::success(siswa, "Siswa updated successfully")),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Siswa not found")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}

/// PUT /siswa/kelas/{id_siswa}
///
/// Assign a student to a class.
///
/// ### Request Body
/// ```json
/// { "id_kelas": 3 }
/// ```
pub async fn set_siswa_kelas(
    State(app_state): State<AppState>,
    Path(id_siswa): Path<i64>,
    Json(req): Json<SetKelasRequest>,
) -> impl IntoResponse {
    match Siswa::set_kelas(app_state.db(), id_siswa, req.id_kelas).await {
        Ok(0) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Siswa not found")),
        ),
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Siswa assigned to kelas successfully")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        ),
    }
}
