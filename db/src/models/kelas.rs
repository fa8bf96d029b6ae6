use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// Represents a class in the `kelas` table.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Kelas {
    pub id_kelas: i64,
    pub id_guru: i64,
    pub nama_kelas: String,
    pub tahun_ajaran: String,
}

/// A class row joined with its enrolled-student count, used by the
/// classes-by-teacher listing.
#[derive(Debug, Serialize, FromRow)]
pub struct KelasWithCount {
    pub id_kelas: i64,
    pub id_guru: i64,
    pub nama_kelas: String,
    pub tahun_ajaran: String,
    pub jumlah_siswa: i64,
}

impl Kelas {
    /// Inserts a new class and returns the created row.
    pub async fn create(
        pool: &SqlitePool,
        id_guru: i64,
        nama_kelas: &str,
        tahun_ajaran: &str,
    ) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Kelas>(
            r#"
            INSERT INTO kelas (id_guru, nama_kelas, tahun_ajaran)
            VALUES (?, ?, ?)
            RETURNING id_kelas, id_guru, nama_kelas, tahun_ajaran
            "#,
        )
        .bind(id_guru)
        .bind(nama_kelas)
        .bind(tahun_ajaran)
        .fetch_one(pool)
        .await
    }

    pub async fn get_all(pool: &SqlitePool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Kelas>("SELECT id_kelas, id_guru, nama_kelas, tahun_ajaran FROM kelas")
            .fetch_all(pool)
            .await
    }

    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Kelas>(
            "SELECT id_kelas, id_guru, nama_kelas, tahun_ajaran FROM kelas WHERE id_kelas = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Lists the classes owned by a teacher, each with its student count.
    pub async fn get_by_guru(pool: &SqlitePool, id_guru: i64) -> sqlx::Result<Vec<KelasWithCount>> {
        sqlx::query_as::<_, KelasWithCount>(
            r#"
            SELECT k.id_kelas, k.id_guru, k.nama_kelas, k.tahun_ajaran,
                   (SELECT COUNT(*) FROM siswa s WHERE s.id_kelas = k.id_kelas) AS jumlah_siswa
            FROM kelas k
            WHERE k.id_guru = ?
            "#,
        )
        .bind(id_guru)
        .fetch_all(pool)
        .await
    }

    /// Overwrites every mutable column by ID, returning the updated row or
    /// `None` when no row matched.
    pub async fn edit(
        pool: &SqlitePool,
        id: i64,
        id_guru: i64,
        nama_kelas: &str,
        tahun_ajaran: &str,
    ) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Kelas>(
            r#"
            UPDATE kelas
            SET id_guru = ?, nama_kelas = ?, tahun_ajaran = ?
            WHERE id_kelas = ?
            RETURNING id_kelas, id_guru, nama_kelas, tahun_ajaran
            "#,
        )
        .bind(id_guru)
        .bind(nama_kelas)
        .bind(tahun_ajaran)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<u64> {
        let result = sqlx::query("DELETE FROM kelas WHERE id_kelas = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::Kelas;
    use crate::models::siswa::Siswa;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_kelas_create_and_find() {
        let pool = setup_test_db().await;

        let created = Kelas::create(&pool, 1, "VII-A", "2024/2025").await.unwrap();
        let found = Kelas::get_by_id(&pool, created.id_kelas)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.nama_kelas, "VII-A");
        assert_eq!(found.tahun_ajaran, "2024/2025");
    }

    #[tokio::test]
    async fn test_kelas_update_and_delete() {
        let pool = setup_test_db().await;

        let created = Kelas::create(&pool, 1, "VII-A", "2024/2025").await.unwrap();
        let updated = Kelas::edit(&pool, created.id_kelas, 2, "VII-B", "2025/2026")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.nama_kelas, "VII-B");
        assert_eq!(updated.id_guru, 2);

        assert_eq!(Kelas::delete_by_id(&pool, created.id_kelas).await.unwrap(), 1);
        assert_eq!(Kelas::delete_by_id(&pool, created.id_kelas).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_kelas_by_guru_counts_students() {
        let pool = setup_test_db().await;

        let kelas = Kelas::create(&pool, 9, "VIII-C", "2024/2025").await.unwrap();
        Kelas::create(&pool, 9, "VIII-D", "2024/2025").await.unwrap();
        Siswa::create(&pool, 1, Some(kelas.id_kelas), "Ani", "a", "2010-01-01", "1")
            .await
            .unwrap();
        Siswa::create(&pool, 2, Some(kelas.id_kelas), "Budi", "b", "2010-01-02", "2")
            .await
            .unwrap();

        let list = Kelas::get_by_guru(&pool, 9).await.unwrap();
        assert_eq!(list.len(), 2);
        let counted = list.iter().find(|k| k.id_kelas == kelas.id_kelas).unwrap();
        assert_eq!(counted.jumlah_siswa, 2);
        let empty = list.iter().find(|k| k.id_kelas != kelas.id_kelas).unwrap();
        assert_eq!(empty.jumlah_siswa, 0);
    }
}
