use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use thiserror::Error;

/// Grade detail row: one graded component (quiz, assignment, ...) under an
/// aggregate `nilai` row. `bobot` is the stored decimal fraction; the API
/// boundary exchanges it as a percentage string, see [`parse_bobot`] and
/// [`format_bobot`].
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Penilaian {
    pub id_penilaian: i64,
    pub id_nilai: i64,
    pub nama_nilai: String,
    pub nilai: i64,
    pub bobot: f64,
}

/// A weight string that does not parse as a percentage.
#[derive(Debug, Error)]
#[error("invalid weight percentage: {0:?}")]
pub struct WeightError(pub String);

/// Parses a percentage string such as `"30.00%"` into the stored decimal
/// fraction (`0.3`). The `%` suffix is optional on input.
pub fn parse_bobot(s: &str) -> Result<f64, WeightError> {
    let trimmed = s.trim().trim_end_matches('%');
    let pct: f64 = trimmed
        .parse()
        .map_err(|_| WeightError(s.to_string()))?;
    Ok(pct / 100.0)
}

/// Renders a stored fraction back into the boundary representation,
/// `"30.00%"` for `0.3`.
pub fn format_bobot(bobot: f64) -> String {
    format!("{:.2}%", bobot * 100.0)
}

impl Penilaian {
    /// Inserts a grade detail under an aggregate row and returns it.
    pub async fn create(
        pool: &SqlitePool,
        id_nilai: i64,
        nama_nilai: &str,
        nilai: i64,
        bobot: f64,
    ) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Penilaian>(
            r#"
            INSERT INTO penilaian (id_nilai, nama_nilai, nilai, bobot)
            VALUES (?, ?, ?, ?)
            RETURNING id_penilaian, id_nilai, nama_nilai, nilai, bobot
            "#,
        )
        .bind(id_nilai)
        .bind(nama_nilai)
        .bind(nilai)
        .bind(bobot)
        .fetch_one(pool)
        .await
    }

    pub async fn get_all(pool: &SqlitePool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Penilaian>(
            "SELECT id_penilaian, id_nilai, nama_nilai, nilai, bobot FROM penilaian",
        )
        .fetch_all(pool)
        .await
    }

    /// Lists the details belonging to one aggregate row.
    pub async fn list_by_nilai(pool: &SqlitePool, id_nilai: i64) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Penilaian>(
            "SELECT id_penilaian, id_nilai, nama_nilai, nilai, bobot FROM penilaian WHERE id_nilai = ?",
        )
        .bind(id_nilai)
        .fetch_all(pool)
        .await
    }

    /// Overwrites the mutable columns of a detail row, returning the updated
    /// row or `None` when no row matched.
    pub async fn edit(
        pool: &SqlitePool,
        id: i64,
        nama_nilai: &str,
        nilai: i64,
        bobot: f64,
    ) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Penilaian>(
            r#"
            UPDATE penilaian
            SET nama_nilai = ?, nilai = ?, bobot = ?
            WHERE id_penilaian = ?
            RETURNING id_penilaian, id_nilai, nama_nilai, nilai, bobot
            "#,
        )
        .bind(nama_nilai)
        .bind(nilai)
        .bind(bobot)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<u64> {
        let result = sqlx::query("DELETE FROM penilaian WHERE id_penilaian = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
