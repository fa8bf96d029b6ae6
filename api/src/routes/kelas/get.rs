use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::kelas::Kelas;
use db::models::mata_pelajaran::MataPelajaran;
use db::models::siswa::Siswa;
use serde::Serialize;

/// Composite class view: the class row, its subjects and how many students
/// are enrolled.
#[derive(Debug, Serialize)]
pub struct KelasDetailResponse {
    pub id_kelas: i64,
    pub id_guru: i64,
    pub nama_kelas: String,
    pub tahun_ajaran: String,
    pub mata_pelajaran: Vec<MataPelajaran>,
    pub jumlah_siswa: i64,
}

/// GET /kelas
///
/// Retrieve all classes.
pub async fn list_kelas(State(app_state): State<AppState>) -> impl IntoResponse {
    match Kelas::get_all(app_state.db()).await {
        Ok(kelass) => (
            StatusCode::OK,
            Json(ApiResponse::success(kelass, "Kelas retrieved successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}

/// GET /kelas/{id}
///
/// Retrieve one class by ID, 404 when absent.
pub async fn get_kelas(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match Kelas::get_by_id(app_state.db(), id).await {
        Ok(Some(kelas)) => (
            StatusCode::OK,
            Json(ApiResponse::success(kelas, "Kelas retrieved successfully")),
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

/// GET /kelas/guru/{id_guru}
///
/// List the classes owned by a teacher, each with its student count.
pub async fn get_kelas_by_guru(
    State(app_state): State<AppState>,
    Path(id_guru): Path<i64>,
) -> impl IntoResponse {
    match Kelas::get_by_guru(app_state.db(), id_guru).await {
        Ok(kelass) => (
            StatusCode::OK,
            Json(ApiResponse::success(kelass, "Kelas retrieved successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}

/// GET /kelass/{id_kelas}
///
/// Class detail with the nested subject list and student count.
///
/// A missing class is terminal (404). A failing student count degrades to
/// zero instead of failing the whole request.
pub async fn get_kelas_with_subjects(
    State(app_state): State<AppState>,
    Path(id_kelas): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    let kelas = match Kelas::get_by_id(db, id_kelas).await {
        Ok(Some(kelas)) => kelas,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Kelas not found")),
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

    let mata_pelajaran = match MataPelajaran::get_by_kelas(db, id_kelas).await {
        Ok(list) => list,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
            )
                .into_response();
        }
    };

    let jumlah_siswa = Siswa::count_in_kelas(db, id_kelas).await.unwrap_or(0);

    let detail = KelasDetailResponse {
        id_kelas: kelas.id_kelas,
        id_guru: kelas.id_guru,
        nama_kelas: kelas.nama_kelas,
        tahun_ajaran: kelas.tahun_ajaran,
        mata_pelajaran,
        jumlah_siswa,
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success(detail, "Kelas retrieved successfully")),
    )
        .into_response()
}
