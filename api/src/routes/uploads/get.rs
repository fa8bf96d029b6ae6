use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    body::Body,
    extract::{Path as AxumPath, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::path::Path;
use tokio::fs::File;
use tokio_util::io::ReaderStream;

/// GET /uploads/{kind}/{filename}
///
/// Stream a stored photo back to the client. `kind` must be one of the
/// upload subdirectories; filenames are generated server-side and never
/// contain path separators, so anything else is rejected outright.
pub async fn get_foto(
    State(app_state): State<AppState>,
    AxumPath((kind, filename)): AxumPath<(String, String)>,
) -> Response {
    if kind != "guru" && kind != "siswa" {
        return not_found();
    }
    if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
        return not_found();
    }

    let path = Path::new(&app_state.config().photo_storage_root)
        .join(&kind)
        .join(&filename);

    let file = match File::open(&path).await {
        Ok(file) => file,
        Err(_) => return not_found(),
    };

    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    let body = Body::from_stream(ReaderStream::new(file));

    ([(header::CONTENT_TYPE, mime.to_string())], body).into_response()
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error("Foto not found")),
    )
        .into_response()
}
