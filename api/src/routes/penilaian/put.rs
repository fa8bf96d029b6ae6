use crate::response::ApiResponse;
use crate::routes::penilaian::get::PenilaianItem;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::penilaian::{Penilaian, parse_bobot};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdatePenilaianRequest {
    pub nama_nilai: String,
    pub nilai: i64,
    pub bobot: String,
}

/// PUT /penilaian/{id}
///
/// Overwrite the mutable columns of a grade detail row. The `bobot`
/// percentage string is parsed into the stored fraction.
pub async fn update_penilaian(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdatePenilaianRequest>,
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

    match Penilaian::edit(app_state.db(), id, &req.nama_nilai, req.nilai, bobot).await {
        Ok(Some(updated)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                PenilaianItem::from(updated),
                "Penilaian updated successfully",
            )),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Penilaian not found")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
