use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::nilai::Nilai;
use db::models::penilaian::{Penilaian, format_bobot, parse_bobot};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreatePenilaianRequest {
    pub id_mapel: i64,
    pub id_siswa: i64,
    pub nama_nilai: String,
    pub nilai: i64,
    pub bobot: String,
}

#[derive(Debug, Serialize)]
pub struct PenilaianCreatedResponse {
    pub id_penilaian: i64,
    pub id_nilai: i64,
    pub id_mapel: i64,
    pub id_siswa: i64,
    pub nama_nilai: String,
    pub nilai: i64,
    pub bobot: String,
}

/// POST /penilaian
///
/// Record a graded component for a (student, subject) pair.
///
/// Resolves (or lazily creates) the aggregate `nilai` row for the pair, then
/// inserts the detail row under it. The `bobot` percentage string is parsed
/// into the stored fraction and rendered back in the response.
///
/// ### Request Body
/// ```json
/// {
///   "id_mapel": 2,
///   "id_siswa": 7,
///   "nama_nilai": "Kuis 1",
///   "nilai": 85,
///   "bobot": "30.00%"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` — the created detail row, `bobot` as a percentage string
/// - `400 Bad Request` — malformed body or `bobot` string
/// - `500 Internal Server Error` — Database error
pub async fn create_penilaian(
    State(app_state): State<AppState>,
    Json(req): Json<CreatePenilaianRequest>,
) -> impl IntoResponse {
    let bobot = match parse_bobot(&req.bobot) {
        Ok(bobot) => bobot,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error("Invalid bobot format")),
            )
                .into_response();
        }
    };

    let db = app_state.db();

    let nilai = match Nilai::find_or_create(db, req.id_mapel, req.id_siswa).await {
        Ok(nilai) => nilai,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
            )
                .into_response();
        }
    };

    match Penilaian::create(db, nilai.id_nilai, &req.nama_nilai, req.nilai, bobot).await {
        Ok(created) => {
            let response = PenilaianCreatedResponse {
                id_penilaian: created.id_penilaian,
                id_nilai: created.id_nilai,
                id_mapel: req.id_mapel,
                id_siswa: req.id_siswa,
                nama_nilai: created.nama_nilai,
                nilai: created.nilai,
                bobot: format_bobot(created.bobot),
            };
            (
                StatusCode::CREATED,
                Json(ApiResponse::success(
                    response,
                    "Penilaian created successfully",
                )),
            )
                .into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
