use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// Builds a fresh in-memory database with all migrations applied.
///
/// The pool is capped at a single connection: every connection to
/// `sqlite::memory:` gets its own database, so the one connection is the
/// database for the lifetime of the test.
pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory db");

    crate::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}
