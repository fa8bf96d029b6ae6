use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::guru::Guru;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct CreateGuruRequest {
    pub id_user: i64,
    pub id_mapel: i64,
    pub nama_guru: String,
    pub mata_pelajaran: String,
    pub nip: String,
    pub alamat: String,
    pub email: String,
    pub no_telp: String,
}

/// POST /guru
///
/// Create a teacher.
///
/// ### Request Body
/// ```json
/// {
///   "id_user": 1,
///   "id_mapel": 2,
///   "nama_guru": "Pak Budi",
///   "mata_pelajaran": "Matematika",
///   "nip": "19800101",
///   "alamat": "Jl. Melati 1",
///   "email": "budi@sekolah.id",
///   "no_telp": "081234567890"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` — `{"id_guru": N}` under `data`
/// - `400 Bad Request` — malformed JSON body
/// - `500 Internal Server Error` — Database error
pub async fn create_guru(
    State(app_state): State<AppState>,
    Json(req): Json<CreateGuruRequest>,
) -> impl IntoResponse {
    match Guru::create(
        app_state.db(),
        req.id_user,
        req.id_mapel,
        &req.nama_guru,
        &req.mata_pelajaran,
        &req.nip,
        &req.alamat,
        &req.email,
        &req.no_telp,
    )
    .await
    {
        Ok(id_guru) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                json!({ "id_guru": id_guru }),
                "Guru created successfully",
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
