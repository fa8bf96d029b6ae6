use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::siswa::Siswa;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct CreateSiswaRequest {
    pub id_user: i64,
    pub id_kelas: Option<i64>,
    pub nama_siswa: String,
    pub alamat: String,
    pub tanggal_lahir: String,
    pub nisn: String,
}

/// POST /siswa
///
/// Create a student. `id_kelas` may be omitted or zero, leaving the student
/// unassigned.
///
/// ### Responses
/// - `201 Created` — `{"id_siswa": N}` under `data`
/// - `400 Bad Request` — malformed JSON body
/// - `500 Internal Server Error` — Database error
pub async fn create_siswa(
    State(app_state): State<AppState>,
    Json(req): Json<CreateSiswaRequest>,
) -> impl IntoResponse {
    match Siswa::create(
        app_state.db(),
        req.id_user,
        req.id_kelas,
        &req.nama_siswa,
        &req.alamat,
        &req.tanggal_lahir,
        &req.nisn,
    )
    .await
    {
        Ok(id_siswa) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                json!({ "id_siswa": id_siswa }),
                "Siswa created successfully",
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
