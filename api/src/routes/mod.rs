//! HTTP route entry point.
//!
//! This module defines all HTTP entry points of the service. Routes are
//! organized by resource (guru, siswa, kelas, mata pelajaran, penilaian,
//! user), with the cross-resource read views and upload endpoints mounted at
//! their legacy top-level paths for compatibility.

use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub mod auth;
pub mod guru;
pub mod health;
pub mod kelas;
pub mod mata_pelajaran;
pub mod penilaian;
pub mod siswa;
pub mod uploads;
pub mod user;

/// Builds the complete application router.
///
/// # Route Structure:
/// - `/health` → Health check endpoint.
/// - `/guru`, `/siswa`, `/kelas`, `/matapelajaran`, `/penilaian`, `/user` →
///   resource CRUD groups, each with list/create at the root and
///   read-one/update/delete at `/{id}`.
/// - `/kelass/{id_kelas}` → class detail with nested subjects and student count.
/// - `/siswaa/{id_kelas}` → students enrolled in a class.
/// - `/mapel/simple-detail/{id_mapel}` → flattened subject summary.
/// - `/nilai-detail` → grade details + total for a (student, subject) pair.
/// - `/nilai/user/{id_user}` → per-subject grade totals for a user's student.
/// - `/login` → credential check.
/// - `/upload-foto-guru`, `/upload-foto-siswa` → multipart photo uploads.
/// - `/uploads/{kind}/{filename}` → stored photo retrieval.
///
/// The legacy double-letter paths (`/kelass`, `/siswaa`) are kept verbatim:
/// existing clients depend on them.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health::health_routes())
        .nest("/guru", guru::guru_routes())
        .nest("/siswa", siswa::siswa_routes())
        .nest("/kelas", kelas::kelas_routes())
        .nest("/matapelajaran", mata_pelajaran::mata_pelajaran_routes())
        .nest("/penilaian", penilaian::penilaian_routes())
        .nest("/user", user::user_routes())
        .route(
            "/kelass/{id_kelas}",
            get(kelas::get::get_kelas_with_subjects),
        )
        .route("/siswaa/{id_kelas}", get(siswa::get::get_siswa_by_kelas))
        .route(
            "/mapel/simple-detail/{id_mapel}",
            get(mata_pelajaran::get::get_simple_subject_detail),
        )
        .route(
            "/nilai-detail",
            get(penilaian::get::get_penilaian_by_siswa_and_mapel),
        )
        .route("/nilai/user/{id_user}", get(penilaian::get::get_nilai_by_user))
        .route("/login", post(auth::post::login))
        .route("/upload-foto-guru", post(uploads::post::upload_foto_guru))
        .route("/upload-foto-siswa", post(uploads::post::upload_foto_siswa))
        .route("/uploads/{kind}/{filename}", get(uploads::get::get_foto))
        .with_state(app_state)
}
