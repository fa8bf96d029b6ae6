use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::nilai::Nilai;
use db::models::penilaian::{Penilaian, format_bobot};
use db::models::siswa::Siswa;
use serde::{Deserialize, Serialize};

/// Display range attached to every grade detail row.
const NILAI_RANGE: &str = "0 - 100";

#[derive(Debug, Deserialize)]
pub struct NilaiDetailQuery {
    pub id_siswa: Option<i64>,
    pub id_mapel: Option<i64>,
}

/// One grade detail row with the weight rendered back into its boundary
/// representation.
#[derive(Debug, Serialize)]
pub struct PenilaianItem {
    pub id_penilaian: i64,
    pub id_nilai: i64,
    pub nama_nilai: String,
    pub nilai: i64,
    pub bobot: String,
    pub range: String,
}

impl From<Penilaian> for PenilaianItem {
    fn from(p: Penilaian) -> Self {
        Self {
            id_penilaian: p.id_penilaian,
            id_nilai: p.id_nilai,
            nama_nilai: p.nama_nilai,
            nilai: p.nilai,
            bobot: format_bobot(p.bobot),
            range: NILAI_RANGE.to_string(),
        }
    }
}

/// Detail list + running total for one (student, subject) pair.
#[derive(Debug, Serialize, Default)]
pub struct NilaiDetailResponse {
    pub penilaian: Vec<PenilaianItem>,
    pub total_nilai: String,
}

/// GET /penilaian
///
/// Retrieve all grade detail rows.
pub async fn list_penilaian(State(app_state): State<AppState>) -> impl IntoResponse {
    match Penilaian::get_all(app_state.db()).await {
        Ok(list) => {
            let items: Vec<PenilaianItem> = list.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    items,
                    "Penilaian retrieved successfully",
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

/// GET /nilai-detail?id_siswa=&id_mapel=
///
/// Grade details and total for a (student, subject) pair.
///
/// A pair with no aggregate row yet is a valid empty result, not an error:
/// the response carries an empty list and a total of "0".
///
/// ### Responses
/// - `200 OK` — `{"penilaian": [...], "total_nilai": "..."}` under `data`
/// - `400 Bad Request` — missing `id_siswa` or `id_mapel`
/// - `500 Internal Server Error` — Database error
pub async fn get_penilaian_by_siswa_and_mapel(
    State(app_state): State<AppState>,
    Query(query): Query<NilaiDetailQuery>,
) -> impl IntoResponse {
    let (Some(id_siswa), Some(id_mapel)) = (query.id_siswa, query.id_mapel) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error("Missing id_siswa or id_mapel")),
        )
            .into_response();
    };

    let db = app_state.db();

    let nilai = match Nilai::find_by_pair(db, id_mapel, id_siswa).await {
        Ok(Some(nilai)) => nilai,
        Ok(None) => {
            return (
                StatusCode::OK,
                Json(ApiResponse::success(
                    NilaiDetailResponse {
                        penilaian: Vec::new(),
                        total_nilai: "0".to_string(),
                    },
                    "Penilaian retrieved successfully",
                )),
            )
                .into_response();
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
            )
                .into_response();
        }
    };

    match Penilaian::list_by_nilai(db, nilai.id_nilai).await {
        Ok(list) => {
            let response = NilaiDetailResponse {
                penilaian: list.into_iter().map(Into::into).collect(),
                total_nilai: nilai.total_nilai,
            };
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    response,
                    "Penilaian retrieved successfully",
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

/// GET /nilai/user/{id_user}
///
/// Per-subject aggregate totals for the student owned by a user account.
pub async fn get_nilai_by_user(
    State(app_state): State<AppState>,
    Path(id_user): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    let id_siswa = match Siswa::id_by_user(db, id_user).await {
        Ok(Some(id)) => id,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Siswa not found")),
            )
                .into_response();
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
            )
                .into_response();
        }
    };

    match Nilai::summary_for_siswa(db, id_siswa).await {
        Ok(list) => (
            StatusCode::OK,
            Json(ApiResponse::success(list, "Nilai retrieved successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
