use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// Aggregate grade row: at most one per (subject, student) pair, holding the
/// running total. Created lazily on the first grade-detail insert.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Nilai {
    pub id_nilai: i64,
    pub id_mapel: i64,
    pub id_siswa: i64,
    pub total_nilai: String,
}

/// Per-subject aggregate total for one student, used by the grades-by-user
/// summary view.
#[derive(Debug, Serialize, FromRow)]
pub struct NilaiMapel {
    pub id_nilai: i64,
    pub nilai: String,
    pub mapel: String,
}

impl Nilai {
    /// Looks up the aggregate row for a (subject, student) pair.
    pub async fn find_by_pair(
        pool: &SqlitePool,
        id_mapel: i64,
        id_siswa: i64,
    ) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Nilai>(
            "SELECT id_nilai, id_mapel, id_siswa, total_nilai FROM nilai WHERE id_mapel = ? AND id_siswa = ?",
        )
        .bind(id_mapel)
        .bind(id_siswa)
        .fetch_optional(pool)
        .await
    }

    /// Returns the aggregate row for a (subject, student) pair, creating it
    /// with a zero total when absent.
    ///
    /// The UNIQUE constraint on (id_mapel, id_siswa) plus `ON CONFLICT DO
    /// NOTHING` makes two concurrent first-time submissions converge on one
    /// row; the re-select after the insert picks up whichever row won.
    pub async fn find_or_create(
        pool: &SqlitePool,
        id_mapel: i64,
        id_siswa: i64,
    ) -> sqlx::Result<Self> {
        if let Some(existing) = Self::find_by_pair(pool, id_mapel, id_siswa).await? {
            return Ok(existing);
        }

        tracing::debug!(id_mapel, id_siswa, "creating nilai aggregate");
        sqlx::query(
            r#"
            INSERT INTO nilai (id_mapel, id_siswa, total_nilai)
            VALUES (?, ?, '0')
            ON CONFLICT (id_mapel, id_siswa) DO NOTHING
            "#,
        )
        .bind(id_mapel)
        .bind(id_siswa)
        .execute(pool)
        .await?;

        match Self::find_by_pair(pool, id_mapel, id_siswa).await? {
            Some(row) => Ok(row),
            None => Err(sqlx::Error::RowNotFound),
        }
    }

    /// Lists a student's aggregate totals joined with the subject names.
    pub async fn summary_for_siswa(
        pool: &SqlitePool,
        id_siswa: i64,
    ) -> sqlx::Result<Vec<NilaiMapel>> {
        sqlx::query_as::<_, NilaiMapel>(
            r#"
            SELECT n.id_nilai, n.total_nilai AS nilai, m.nama_mata_pelajaran AS mapel
            FROM nilai n
            JOIN mata_pelajaran m ON n.id_mapel = m.id_mapel
            WHERE n.id_siswa = ?
            "#,
        )
        .bind(id_siswa)
        .fetch_all(pool)
        .await
    }
}
