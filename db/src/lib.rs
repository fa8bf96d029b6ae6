pub mod models;
pub mod test_utils;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Embedded schema migrations, one file per table.
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Opens the SQLite pool for `path_or_url` and brings the schema up to date.
///
/// Accepts either a full DSN (`sqlite:...`) or a bare file path. For file
/// paths the parent directory is created first, since SQLite will not create
/// intermediate directories on its own.
pub async fn connect(path_or_url: &str) -> SqlitePool {
    let url = if path_or_url.starts_with("sqlite:") {
        path_or_url.to_string()
    } else {
        if let Some(parent) = Path::new(path_or_url).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        format!("sqlite://{path_or_url}")
    };

    let options = SqliteConnectOptions::from_str(&url)
        .expect("Invalid database URL")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .expect("Failed to connect to database");

    MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}
