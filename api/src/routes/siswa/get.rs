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
use serde_json::json;

/// GET /siswa
///
/// Retrieve all students.
pub async fn list_siswa(State(app_state): State<AppState>) -> impl IntoResponse {
    match Siswa::get_all(app_state.db()).await {
        Ok(siswas) => (
            StatusCode::OK,
            Json(ApiResponse::success(siswas, "Siswa retrieved successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}

/// GET /siswa/{id}
///
/// Retrieve one student by ID, 404 when absent.
pub async fn get_siswa(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match Siswa::get_by_id(app_state.db(), id).await {
        Ok(Some(siswa)) => (
            StatusCode::OK,
            Json(ApiResponse::success(siswa, "Siswa retrieved successfully")),
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

/// GET /siswa/user/{id_user}
///
/// Resolve the student ID owned by a user account.
pub async fn get_siswa_by_user(
    State(app_state): State<AppState>,
    Path(id_user): Path<i64>,
) -> impl IntoResponse {
    match Siswa::id_by_user(app_state.db(), id_user).await {
        Ok(Some(id_siswa)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                json!({ "id_siswa": id_siswa }),
                "Siswa retrieved successfully",
            )),
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

/// GET /siswaa/{id_kelas}
///
/// List the students enrolled in a class. An unknown class simply yields an
/// empty list.
pub async fn get_siswa_by_kelas(
    State(app_state): State<AppState>,
    Path(id_kelas): Path<i64>,
) -> impl IntoResponse {
    match Siswa::get_by_kelas(app_state.db(), id_kelas).await {
        Ok(siswas) => (
            StatusCode::OK,
            Json(ApiResponse::success(siswas, "Siswa retrieved successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}

/// GET /siswa/by-mapel/{id_mapel}
///
/// Resolve the class a subject belongs to, then list that class's students.
/// 404 when the subject itself is absent.
pub async fn get_siswa_by_mapel(
    State(app_state): State<AppState>,
    Path(id_mapel): Path<i64>,
) -> impl IntoResponse {
    let id_kelas = match MataPelajaran::kelas_id(app_state.db(), id_mapel).await {
        Ok(Some(id)) => id,
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

    match Siswa::get_by_kelas(app_state.db(), id_kelas).await {
        Ok(siswas) => (
            StatusCode::OK,
            Json(ApiResponse::success(siswas, "Siswa retrieved successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
