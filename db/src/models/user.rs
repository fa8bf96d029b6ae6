use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// Represents an authentication record in the `user` table.
///
/// Passwords are stored and compared as plaintext, matching the upstream
/// system this service replaces.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id_user: i64,
    pub username: String,
    pub password: String,
    pub id_role: i64,
    pub tanggal_registrasi: String,
}

impl User {
    /// Inserts a new user and returns the created row.
    pub async fn create(
        pool: &SqlitePool,
        username: &str,
        password: &str,
        id_role: i64,
        tanggal_registrasi: &str,
    ) -> sqlx::Result<Self> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO user (username, password, id_role, tanggal_registrasi)
            VALUES (?, ?, ?, ?)
            RETURNING id_user, username, password, id_role, tanggal_registrasi
            "#,
        )
        .bind(username)
        .bind(password)
        .bind(id_role)
        .bind(tanggal_registrasi)
        .fetch_one(pool)
        .await
    }

    pub async fn get_all(pool: &SqlitePool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, User>(
            "SELECT id_user, username, password, id_role, tanggal_registrasi FROM user",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, User>(
            "SELECT id_user, username, password, id_role, tanggal_registrasi FROM user WHERE id_user = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Case-sensitive exact-match lookup by username.
    pub async fn find_by_username(pool: &SqlitePool, username: &str) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, User>(
            "SELECT id_user, username, password, id_role, tanggal_registrasi FROM user WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(pool)
        .await
    }

    /// Overwrites every mutable column by ID, returning the updated row or
    /// `None` when no row matched.
    pub async fn edit(
        pool: &SqlitePool,
        id: i64,
        username: &str,
        password: &str,
        id_role: i64,
        tanggal_registrasi: &str,
    ) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE user
            SET username = ?, password = ?, id_role = ?, tanggal_registrasi = ?
            WHERE id_user = ?
            RETURNING id_user, username, password, id_role, tanggal_registrasi
            "#,
        )
        .bind(username)
        .bind(password)
        .bind(id_role)
        .bind(tanggal_registrasi)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<u64> {
        let result = sqlx::query("DELETE FROM user WHERE id_user = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
