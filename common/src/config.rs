//! Application configuration loaded once at process start.
//!
//! `AppConfig` collects every runtime setting from `.env` and environment
//! variables. The resolved struct is handed to the components that need it
//! (server startup, `AppState`) instead of being read ad hoc at request time.

use std::env;

/// Runtime configuration resolved from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
    /// Directory photos are written into, one subdirectory per entity kind.
    pub photo_storage_root: String,
    /// Base URL prefixed onto stored photo paths when building `foto` links.
    pub public_base_url: String,
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Missing optional variables fall back to development defaults; a
    /// malformed `PORT` panics, since the process cannot start without one.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a number");

        Self {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "sekolah-api".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "api=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "api.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            database_path: env::var("DATABASE_PATH").unwrap_or_else(|_| "data/sekolah.db".into()),
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| format!("http://{host}:{port}")),
            photo_storage_root: env::var("PHOTO_STORAGE_ROOT")
                .unwrap_or_else(|_| "data/foto".into()),
            host,
            port,
        }
    }
}
