use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// Represents a teacher in the `guru` table.
///
/// `mata_pelajaran` is the denormalized subject label carried alongside
/// `id_mapel`; `foto` is coalesced to an empty string when no photo has been
/// uploaded yet.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Guru {
    pub id_guru: i64,
    pub id_user: i64,
    pub id_mapel: i64,
    pub nama_guru: String,
    pub mata_pelajaran: String,
    pub nip: String,
    pub alamat: String,
    pub email: String,
    pub no_telp: String,
    pub foto: String,
}

const GURU_COLUMNS: &str =
    "id_guru, id_user, id_mapel, nama_guru, mata_pelajaran, nip, alamat, email, no_telp, COALESCE(foto, '') AS foto";

impl Guru {
    /// Inserts a new teacher and returns the generated `id_guru`.
    ///
    /// # Errors
    ///
    /// Returns a `sqlx::Error` if the insert fails.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &SqlitePool,
        id_user: i64,
        id_mapel: i64,
        nama_guru: &str,
        mata_pelajaran: &str,
        nip: &str,
        alamat: &str,
        email: &str,
        no_telp: &str,
    ) -> sqlx::Result<i64> {
        let (id_guru,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO guru (id_user, id_mapel, nama_guru, mata_pelajaran, nip, alamat, email, no_telp)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id_guru
            "#,
        )
        .bind(id_user)
        .bind(id_mapel)
        .bind(nama_guru)
        .bind(mata_pelajaran)
        .bind(nip)
        .bind(alamat)
        .bind(email)
        .bind(no_telp)
        .fetch_one(pool)
        .await?;

        Ok(id_guru)
    }

    /// Retrieves all teachers in unspecified database order.
    pub async fn get_all(pool: &SqlitePool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Guru>(&format!("SELECT {GURU_COLUMNS} FROM guru"))
            .fetch_all(pool)
            .await
    }

    /// Retrieves a teacher by ID, or `None` if no matching row exists.
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Guru>(&format!(
            "SELECT {GURU_COLUMNS} FROM guru WHERE id_guru = ?"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Overwrites every mutable column of a teacher by ID.
    ///
    /// Returns the updated row, or `None` when no row matched the ID.
    #[allow(clippy::too_many_arguments)]
    pub async fn edit(
        pool: &SqlitePool,
        id: i64,
        id_user: i64,
        id_mapel: i64,
        nama_guru: &str,
        mata_pelajaran: &str,
        nip: &str,
        alamat: &str,
        email: &str,
        no_telp: &str,
        foto: &str,
    ) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Guru>(
            r#"
            UPDATE guru
            SET id_user = ?, id_mapel = ?, nama_guru = ?, mata_pelajaran = ?, nip = ?,
                alamat = ?, email = ?, no_telp = ?, foto = ?
            WHERE id_guru = ?
            RETURNING id_guru, id_user, id_mapel, nama_guru, mata_pelajaran, nip, alamat, email, no_telp,
                      COALESCE(foto, '') AS foto
            "#,
        )
        .bind(id_user)
        .bind(id_mapel)
        .bind(nama_guru)
        .bind(mata_pelajaran)
        .bind(nip)
        .bind(alamat)
        .bind(email)
        .bind(no_telp)
        .bind(foto)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Deletes a teacher by ID and returns the number of rows removed.
    pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<u64> {
        let result = sqlx::query("DELETE FROM guru WHERE id_guru = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Resolves the `id_guru` owned by a user account, if any.
    pub async fn id_by_user(pool: &SqlitePool, id_user: i64) -> sqlx::Result<Option<i64>> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT id_guru FROM guru WHERE id_user = ?")
            .bind(id_user)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(|(id,)| id))
    }

    /// Stores the photo URL for a teacher, returning the rows affected.
    pub async fn set_foto(pool: &SqlitePool, id: i64, foto: &str) -> sqlx::Result<u64> {
        let result = sqlx::query("UPDATE guru SET foto = ? WHERE id_guru = ?")
            .bind(foto)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::Guru;
    use crate::test_utils::setup_test_db;

    async fn sample_guru(pool: &sqlx::SqlitePool) -> i64 {
        Guru::create(
            pool,
            1,
            1,
            "Pak Budi",
            "Matematika",
            "19800101",
            "Jl. Melati 1",
            "budi@sekolah.id",
            "081234567890",
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_guru_create_and_find() {
        let pool = setup_test_db().await;

        let id = sample_guru(&pool).await;
        let found = Guru::get_by_id(&pool, id).await.unwrap().unwrap();

        assert_eq!(found.id_guru, id);
        assert_eq!(found.nama_guru, "Pak Budi");
        assert_eq!(found.mata_pelajaran, "Matematika");
        assert_eq!(found.foto, "");
    }

    #[tokio::test]
    async fn test_guru_edit() {
        let pool = setup_test_db().await;

        let id = sample_guru(&pool).await;
        let updated = Guru::edit(
            &pool,
            id,
            2,
            3,
            "Pak Budi S.Pd",
            "Fisika",
            "19800101",
            "Jl. Melati 2",
            "budi@sekolah.id",
            "081234567891",
            "http://localhost:8080/uploads/guru/guru_1.jpg",
        )
        .await
        .unwrap()
        .unwrap();

        assert_eq!(updated.nama_guru, "Pak Budi S.Pd");
        assert_eq!(updated.mata_pelajaran, "Fisika");
        assert_eq!(updated.foto, "http://localhost:8080/uploads/guru/guru_1.jpg");

        let missing = Guru::edit(
            &pool, 9999, 1, 1, "x", "x", "x", "x", "x", "x", "",
        )
        .await
        .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_guru_deletion() {
        let pool = setup_test_db().await;

        let id = sample_guru(&pool).await;
        assert_eq!(Guru::delete_by_id(&pool, id).await.unwrap(), 1);
        assert!(Guru::get_by_id(&pool, id).await.unwrap().is_none());
        assert_eq!(Guru::delete_by_id(&pool, id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_guru_id_by_user() {
        let pool = setup_test_db().await;

        let id = sample_guru(&pool).await;
        assert_eq!(Guru::id_by_user(&pool, 1).await.unwrap(), Some(id));
        assert_eq!(Guru::id_by_user(&pool, 42).await.unwrap(), None);
    }
}
