use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    body::Bytes,
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::guru::Guru;
use db::models::siswa::Siswa;
use serde_json::json;
use std::path::Path;

/// Parsed multipart form for a photo upload: the file bytes, the file
/// extension taken from the uploaded filename, and the owning entity ID.
struct FotoForm {
    data: Bytes,
    ext: String,
    id: i64,
}

/// Reads the `foto` file field and the `id_field` text field out of a
/// multipart form.
async fn read_foto_form(
    multipart: &mut Multipart,
    id_field: &'static str,
) -> Result<FotoForm, Response> {
    let mut data = None;
    let mut ext = String::from("bin");
    let mut id = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(_) => {
                return Err(bad_request("Failed to parse multipart form"));
            }
        };

        let name = field.name().map(|name| name.to_string());
        match name.as_deref() {
            Some("foto") => {
                if let Some(file_name) = field.file_name() {
                    if let Some(e) = Path::new(file_name).extension() {
                        ext = e.to_string_lossy().to_string();
                    }
                }
                data = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|_| bad_request("Failed to read foto file"))?,
                );
            }
            Some(name) if name == id_field => {
                let text = field
                    .text()
                    .await
                    .map_err(|_| bad_request("Failed to read form field"))?;
                id = Some(
                    text.trim()
                        .parse::<i64>()
                        .map_err(|_| bad_request(format!("{id_field} must be a number")))?,
                );
            }
            _ => {}
        }
    }

    let Some(data) = data else {
        return Err(bad_request("foto file is required"));
    };
    let Some(id) = id else {
        return Err(bad_request(format!("{id_field} is required")));
    };

    Ok(FotoForm { data, ext, id })
}

/// Writes the uploaded bytes under `<photo_storage_root>/<kind>/` and
/// returns the public URL for the stored file.
async fn store_foto(
    app_state: &AppState,
    kind: &str,
    form: &FotoForm,
) -> Result<String, Response> {
    let config = app_state.config();
    let filename = format!(
        "{kind}_{}_{}.{}",
        form.id,
        chrono::Utc::now().timestamp(),
        form.ext
    );

    let dir = Path::new(&config.photo_storage_root).join(kind);
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|_| internal_error("Failed to store foto"))?;
    tokio::fs::write(dir.join(&filename), &form.data)
        .await
        .map_err(|_| internal_error("Failed to store foto"))?;

    Ok(format!(
        "{}/uploads/{kind}/{filename}",
        config.public_base_url
    ))
}

fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error(message)),
    )
        .into_response()
}

fn internal_error(message: impl Into<String>) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error(message)),
    )
        .into_response()
}

/// POST /upload-foto-guru
///
/// Multipart upload of a teacher photo.
///
/// ### Form Fields
/// - `foto` — the image file
/// - `id_guru` — the owning teacher ID
///
/// ### Responses
/// - `200 OK` — `{"url": "..."}` under `data`; the URL is also stored on the
///   teacher row
/// - `400 Bad Request` — missing/unreadable field, or non-numeric `id_guru`
/// - `404 Not Found` — no teacher with that ID
/// - `500 Internal Server Error` — storage or database failure
pub async fn upload_foto_guru(
    State(app_state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    let form = match read_foto_form(&mut multipart, "id_guru").await {
        Ok(form) => form,
        Err(response) => return response,
    };

    let url = match store_foto(&app_state, "guru", &form).await {
        Ok(url) => url,
        Err(response) => return response,
    };

    match Guru::set_foto(app_state.db(), form.id, &url).await {
        Ok(0) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Guru not found")),
        )
            .into_response(),
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                json!({ "url": url }),
                "Foto guru uploaded successfully",
            )),
        )
            .into_response(),
        Err(e) => internal_error(format!("Database error: {e}")),
    }
}

/// POST /upload-foto-siswa
///
/// Multipart upload of a student photo; same contract as the guru variant
/// with the `id_siswa` form field.
pub async fn upload_foto_siswa(
    State(app_state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    let form = match read_foto_form(&mut multipart, "id_siswa").await {
        Ok(form) => form,
        Err(response) => return response,
    };

    let url = match store_foto(&app_state, "siswa", &form).await {
        Ok(url) => url,
        Err(response) => return response,
    };

    match Siswa::set_foto(app_state.db(), form.id, &url).await {
        Ok(0) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Siswa not found")),
        )
            .into_response(),
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                json!({ "url": url }),
                "Foto siswa uploaded successfully",
            )),
        )
            .into_response(),
        Err(e) => internal_error(format!("Database error: {e}")),
    }
}
