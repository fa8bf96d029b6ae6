use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::mata_pelajaran::MataPelajaran;
use db::models::siswa::Siswa;
use serde::Serialize;

/// Flattened subject summary: subject, teacher and class joined into one
/// object for display.
#[derive(Debug, Serialize)]
pub struct SimpleSubjectDetailResponse {
    pub id_mapel: i64,
    pub nama_mata_pelajaran: String,
    pub nama_guru: String,
    pub tahun_ajaran: String,
    pub jumlah_siswa: i64,
}

/// GET /matapelajaran
///
/// Retrieve all subjects.
pub async fn list_mata_pelajaran(State(app_state): State<AppState>) -> impl IntoResponse {
    match MataPelajaran::get_all(app_state.db()).await {
        Ok(list) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                list,
                "Mata pelajaran retrieved successfully",
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

/// GET /matapelajaran/{id}
///
/// Retrieve one subject by ID, 404 when absent.
pub async fn get_mata_pelajaran(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match MataPelajaran::get_by_id(app_state.db(), id).await {
        Ok(Some(mapel)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                mapel,
                "Mata pelajaran retrieved successfully",
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

/// GET /matapelajaran/bykelas/{id}
///
/// List the subjects taught in a class.
pub async fn get_mata_pelajaran_by_kelas(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match MataPelajaran::get_by_kelas(app_state.db(), id).await {
        Ok(list) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                list,
                "Mata pelajaran retrieved successfully",
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

/// GET /matapelajaran/siswa/{id_siswa}
///
/// List the subjects of the class the student is enrolled in. An unassigned
/// or unknown student yields an empty list.
pub async fn get_mata_pelajaran_by_siswa(
    State(app_state): State<AppState>,
    Path(id_siswa): Path<i64>,
) -> impl IntoResponse {
    match MataPelajaran::get_by_siswa(app_state.db(), id_siswa).await {
        Ok(list) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                list,
                "Mata pelajaran retrieved successfully",
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

/// GET /mapel/simple-detail/{id_mapel}
///
/// Flattened subject summary (subject name, teacher name, academic year,
/// student count). A failing student count degrades to zero.
pub async fn get_simple_subject_detail(
    State(app_state): State<AppState>,
    Path(id_mapel): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    let detail = match MataPelajaran::simple_detail(db, id_mapel).await {
        Ok(Some(detail)) => detail,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Mata pelajaran not found")),
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

    let jumlah_siswa = Siswa::count_in_kelas(db, detail.id_kelas).await.unwrap_or(0);

    let response = SimpleSubjectDetailResponse {
        id_mapel,
        nama_mata_pelajaran: detail.nama_mata_pelajaran,
        nama_guru: detail.nama_guru,
        tahun_ajaran: detail.tahun_ajaran,
        jumlah_siswa,
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            response,
            "Mata pelajaran retrieved successfully",
        )),
    )
        .into_response()
}
