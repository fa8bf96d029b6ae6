use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// Represents a student in the `siswa` table.
///
/// `id_kelas` is nullable: a freshly registered student is unassigned until
/// placed into a class.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Siswa {
    pub id_siswa: i64,
    pub id_user: i64,
    pub id_kelas: Option<i64>,
    pub nama_siswa: String,
    pub alamat: String,
    pub tanggal_lahir: String,
    pub nisn: String,
    pub foto: String,
}

const SISWA_COLUMNS: &str =
    "id_siswa, id_user, id_kelas, nama_siswa, alamat, tanggal_lahir, nisn, COALESCE(foto, '') AS foto";

impl Siswa {
    /// Inserts a new student and returns the generated `id_siswa`.
    ///
    /// The insert statement varies with the class assignment: an absent or
    /// zero `id_kelas` leaves the column NULL.
    pub async fn create(
        pool: &SqlitePool,
        id_user: i64,
        id_kelas: Option<i64>,
        nama_siswa: &str,
        alamat: &str,
        tanggal_lahir: &str,
        nisn: &str,
    ) -> sqlx::Result<i64> {
        let (id_siswa,): (i64,) = match id_kelas {
            Some(id_kelas) if id_kelas != 0 => {
                sqlx::query_as(
                    r#"
                    INSERT INTO siswa (id_user, id_kelas, nama_siswa, alamat, tanggal_lahir, nisn)
                    VALUES (?, ?, ?, ?, ?, ?)
                    RETURNING id_siswa
                    "#,
                )
                .bind(id_user)
                .bind(id_kelas)
                .bind(nama_siswa)
                .bind(alamat)
                .bind(tanggal_lahir)
                .bind(nisn)
                .fetch_one(pool)
                .await?
            }
            _ => {
                sqlx::query_as(
                    r#"
                    INSERT INTO siswa (id_user, nama_siswa, alamat, tanggal_lahir, nisn)
                    VALUES (?, ?, ?, ?, ?)
                    RETURNING id_siswa
                    "#,
                )
                .bind(id_user)
                .bind(nama_siswa)
                .bind(alamat)
                .bind(tanggal_lahir)
                .bind(nisn)
                .fetch_one(pool)
                .await?
            }
        };

        Ok(id_siswa)
    }

    /// Retrieves all students.
    pub async fn get_all(pool: &SqlitePool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Siswa>(&format!("SELECT {SISWA_COLUMNS} FROM siswa"))
            .fetch_all(pool)
            .await
    }

    /// Retrieves a student by ID.
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Siswa>(&format!(
            "SELECT {SISWA_COLUMNS} FROM siswa WHERE id_siswa = ?"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Lists the students enrolled in a class.
    pub async fn get_by_kelas(pool: &SqlitePool, id_kelas: i64) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Siswa>(&format!(
            "SELECT {SISWA_COLUMNS} FROM siswa WHERE id_kelas = ?"
        ))
        .bind(id_kelas)
        .fetch_all(pool)
        .await
    }

    /// Counts the students enrolled in a class.
    pub async fn count_in_kelas(pool: &SqlitePool, id_kelas: i64) -> sqlx::Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM siswa WHERE id_kelas = ?")
            .bind(id_kelas)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Overwrites every mutable column of a student by ID.
    ///
    /// Returns the updated row, or `None` when no row matched.
    #[allow(clippy::too_many_arguments)]
    pub async fn edit(
        pool: &SqlitePool,
        id: i64,
        id_user: i64,
        id_kelas: Option<i64>,
        nama_siswa: &str,
        alamat: &str,
        tanggal_lahir: &str,
        nisn: &str,
        foto: &str,
    ) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Siswa>(
            r#"
            UPDATE siswa
            SET id_user = ?, id_kelas = ?, nama_siswa = ?, alamat = ?, tanggal_lahir = ?,
                nisn = ?, foto = ?
            WHERE id_siswa = ?
            RETURNING id_siswa, id_user, id_kelas, nama_siswa, alamat, tanggal_lahir, nisn,
                      COALESCE(foto, '') AS foto
            "#,
        )
        .bind(id_user)
        .bind(id_kelas)
        .bind(nama_siswa)
        .bind(alamat)
        .bind(tanggal_lahir)
        .bind(nisn)
        .bind(foto)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Deletes a student by ID and returns the number of rows removed.
    pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<u64> {
        let result = sqlx::query("DELETE FROM siswa WHERE id_siswa = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Resolves the `id_siswa` owned by a user account, if any.
    pub async fn id_by_user(pool: &SqlitePool, id_user: i64) -> sqlx::Result<Option<i64>> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT id_siswa FROM siswa WHERE id_user = ?")
            .bind(id_user)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(|(id,)| id))
    }

    /// Assigns a student to a class, returning the rows affected.
    pub async fn set_kelas(pool: &SqlitePool, id: i64, id_kelas: i64) -> sqlx::Result<u64> {
        let result = sqlx::query("UPDATE siswa SET id_kelas = ? WHERE id_siswa = ?")
            .bind(id_kelas)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Stores the photo URL for a student, returning the rows affected.
    pub async fn set_foto(pool: &SqlitePool, id: i64, foto: &str) -> sqlx::Result<u64> {
        let result = sqlx::query("UPDATE siswa SET foto = ? WHERE id_siswa = ?")
            .bind(foto)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::Siswa;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_siswa_create_without_kelas() {
        let pool = setup_test_db().await;

        let id = Siswa::create(&pool, 5, None, "Ani", "Jl. Mawar 2", "2010-02-03", "0051")
            .await
            .unwrap();
        let found = Siswa::get_by_id(&pool, id).await.unwrap().unwrap();

        assert_eq!(found.nama_siswa, "Ani");
        assert_eq!(found.id_kelas, None);

        // A zero assignment means "unassigned" as well.
        let id = Siswa::create(&pool, 6, Some(0), "Budi", "Jl. Mawar 3", "2010-04-05", "0052")
            .await
            .unwrap();
        let found = Siswa::get_by_id(&pool, id).await.unwrap().unwrap();
        assert_eq!(found.id_kelas, None);
    }

    #[tokio::test]
    async fn test_siswa_create_with_kelas_and_count() {
        let pool = setup_test_db().await;

        Siswa::create(&pool, 5, Some(3), "Ani", "Jl. Mawar 2", "2010-02-03", "0051")
            .await
            .unwrap();
        Siswa::create(&pool, 6, Some(3), "Budi", "Jl. Mawar 3", "2010-04-05", "0052")
            .await
            .unwrap();

        assert_eq!(Siswa::count_in_kelas(&pool, 3).await.unwrap(), 2);
        assert_eq!(Siswa::count_in_kelas(&pool, 4).await.unwrap(), 0);
        assert_eq!(Siswa::get_by_kelas(&pool, 3).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_siswa_set_kelas() {
        let pool = setup_test_db().await;

        let id = Siswa::create(&pool, 5, None, "Ani", "Jl. Mawar 2", "2010-02-03", "0051")
            .await
            .unwrap();
        assert_eq!(Siswa::set_kelas(&pool, id, 7).await.unwrap(), 1);

        let found = Siswa::get_by_id(&pool, id).await.unwrap().unwrap();
        assert_eq!(found.id_kelas, Some(7));
    }

    #[tokio::test]
    async fn test_siswa_deletion() {
        let pool = setup_test_db().await;

        let id = Siswa::create(&pool, 5, None, "Ani", "Jl. Mawar 2", "2010-02-03", "0051")
            .await
            .unwrap();
        assert_eq!(Siswa::delete_by_id(&pool, id).await.unwrap(), 1);
        assert!(Siswa::get_by_id(&pool, id).await.unwrap().is_none());
    }
}
