use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// Represents a subject in the `mata_pelajaran` table.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct MataPelajaran {
    pub id_mapel: i64,
    pub id_kelas: i64,
    pub nama_mata_pelajaran: String,
}

/// Flattened subject summary: subject joined through its class to the
/// owning teacher.
#[derive(Debug, FromRow)]
pub struct SimpleDetail {
    pub nama_mata_pelajaran: String,
    pub nama_guru: String,
    pub tahun_ajaran: String,
    pub id_kelas: i64,
}

impl MataPelajaran {
    /// Inserts a new subject and returns the created row.
    pub async fn create(
        pool: &SqlitePool,
        id_kelas: i64,
        nama_mata_pelajaran: &str,
    ) -> sqlx::Result<Self> {
        sqlx::query_as::<_, MataPelajaran>(
            r#"
            INSERT INTO mata_pelajaran (id_kelas, nama_mata_pelajaran)
            VALUES (?, ?)
            RETURNING id_mapel, id_kelas, nama_mata_pelajaran
            "#,
        )
        .bind(id_kelas)
        .bind(nama_mata_pelajaran)
        .fetch_one(pool)
        .await
    }

    pub async fn get_all(pool: &SqlitePool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, MataPelajaran>(
            "SELECT id_mapel, id_kelas, nama_mata_pelajaran FROM mata_pelajaran",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, MataPelajaran>(
            "SELECT id_mapel, id_kelas, nama_mata_pelajaran FROM mata_pelajaran WHERE id_mapel = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Lists the subjects taught in a class.
    pub async fn get_by_kelas(pool: &SqlitePool, id_kelas: i64) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, MataPelajaran>(
            "SELECT id_mapel, id_kelas, nama_mata_pelajaran FROM mata_pelajaran WHERE id_kelas = ?",
        )
        .bind(id_kelas)
        .fetch_all(pool)
        .await
    }

    /// Lists the subjects of the class a student is enrolled in.
    pub async fn get_by_siswa(pool: &SqlitePool, id_siswa: i64) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, MataPelajaran>(
            r#"
            SELECT mp.id_mapel, mp.id_kelas, mp.nama_mata_pelajaran
            FROM siswa s
            JOIN mata_pelajaran mp ON s.id_kelas = mp.id_kelas
            WHERE s.id_siswa = ?
            "#,
        )
        .bind(id_siswa)
        .fetch_all(pool)
        .await
    }

    /// Resolves the class a subject belongs to.
    pub async fn kelas_id(pool: &SqlitePool, id_mapel: i64) -> sqlx::Result<Option<i64>> {
        let row: Option<(i64,)> =
            sqlx::query_as("SELECT id_kelas FROM mata_pelajaran WHERE id_mapel = ?")
                .bind(id_mapel)
                .fetch_optional(pool)
                .await?;
        Ok(row.map(|(id,)| id))
    }

    /// Joins subject, class and teacher into a flattened summary row.
    pub async fn simple_detail(
        pool: &SqlitePool,
        id_mapel: i64,
    ) -> sqlx::Result<Option<SimpleDetail>> {
        sqlx::query_as::<_, SimpleDetail>(
            r#"
            SELECT mp.nama_mata_pelajaran, g.nama_guru, k.tahun_ajaran, k.id_kelas
            FROM mata_pelajaran mp
            JOIN kelas k ON mp.id_kelas = k.id_kelas
            JOIN guru g ON k.id_guru = g.id_guru
            WHERE mp.id_mapel = ?
            "#,
        )
        .bind(id_mapel)
        .fetch_optional(pool)
        .await
    }

    /// Overwrites every mutable column by ID, returning the updated row or
    /// `None` when no row matched.
    pub async fn edit(
        pool: &SqlitePool,
        id: i64,
        id_kelas: i64,
        nama_mata_pelajaran: &str,
    ) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, MataPelajaran>(
            r#"
            UPDATE mata_pelajaran
            SET id_kelas = ?, nama_mata_pelajaran = ?
            WHERE id_mapel = ?
            RETURNING id_mapel, id_kelas, nama_mata_pelajaran
            "#,
        )
        .bind(id_kelas)
        .bind(nama_mata_pelajaran)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<u64> {
        let result = sqlx::query("DELETE FROM mata_pelajaran WHERE id_mapel = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
