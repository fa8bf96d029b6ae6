mod helpers;

#[cfg(test)]
mod tests {
    use crate::helpers::app::{
        delete_request, get_json_body, get_request, json_request, make_test_app,
    };
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    async fn create_mapel(app: &crate::helpers::app::TestApp, id_kelas: i64, nama: &str) -> i64 {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/matapelajaran",
                json!({ "id_kelas": id_kelas, "nama_mata_pelajaran": nama }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        get_json_body(response).await["data"]["id_mapel"]
            .as_i64()
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_mapel_returns_full_record() {
        let (app, _state) = make_test_app().await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/matapelajaran",
                json!({ "id_kelas": 1, "nama_mata_pelajaran": "Matematika" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = get_json_body(response).await;
        assert!(json["data"]["id_mapel"].as_i64().unwrap() > 0);
        assert_eq!(json["data"]["nama_mata_pelajaran"], "Matematika");
    }

    #[tokio::test]
    async fn test_mapel_crud_cycle() {
        let (app, _state) = make_test_app().await;

        let id_mapel = create_mapel(&app, 1, "Matematika").await;

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/matapelajaran/{id_mapel}"),
                json!({ "id_kelas": 2, "nama_mata_pelajaran": "Fisika" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["nama_mata_pelajaran"], "Fisika");
        assert_eq!(json["data"]["id_kelas"], 2);

        let response = app
            .clone()
            .oneshot(delete_request(&format!("/matapelajaran/{id_mapel}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(get_request(&format!("/matapelajaran/{id_mapel}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_mapel_by_kelas() {
        let (app, _state) = make_test_app().await;

        create_mapel(&app, 3, "Matematika").await;
        create_mapel(&app, 3, "Biologi").await;
        create_mapel(&app, 4, "Kimia").await;

        let response = app
            .oneshot(get_request("/matapelajaran/bykelas/3"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_mapel_by_siswa_follows_enrollment() {
        let (app, _state) = make_test_app().await;

        create_mapel(&app, 3, "Matematika").await;
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/siswa",
                json!({
                    "id_user": 1,
                    "id_kelas": 3,
                    "nama_siswa": "Ani",
                    "alamat": "Jl. Mawar",
                    "tanggal_lahir": "2010-01-01",
                    "nisn": "0001"
                }),
            ))
            .await
            .unwrap();
        let id_siswa = get_json_body(response).await["data"]["id_siswa"]
            .as_i64()
            .unwrap();

        let response = app
            .oneshot(get_request(&format!("/matapelajaran/siswa/{id_siswa}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
        assert_eq!(json["data"][0]["nama_mata_pelajaran"], "Matematika");
    }

    #[tokio::test]
    async fn test_simple_subject_detail() {
        let (app, _state) = make_test_app().await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/guru",
                json!({
                    "id_user": 1,
                    "id_mapel": 1,
                    "nama_guru": "Bu Sari",
                    "mata_pelajaran": "Kimia",
                    "nip": "19750101",
                    "alamat": "Jl. Anggrek",
                    "email": "sari@sekolah.id",
                    "no_telp": "0812"
                }),
            ))
            .await
            .unwrap();
        let id_guru = get_json_body(response).await["data"]["id_guru"]
            .as_i64()
            .unwrap();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/kelas",
                json!({ "id_guru": id_guru, "nama_kelas": "IX-B", "tahun_ajaran": "2024/2025" }),
            ))
            .await
            .unwrap();
        let id_kelas = get_json_body(response).await["data"]["id_kelas"]
            .as_i64()
            .unwrap();

        let id_mapel = create_mapel(&app, id_kelas, "Kimia").await;

        let response = app
            .clone()
            .oneshot(get_request(&format!("/mapel/simple-detail/{id_mapel}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["id_mapel"], id_mapel);
        assert_eq!(json["data"]["nama_mata_pelajaran"], "Kimia");
        assert_eq!(json["data"]["nama_guru"], "Bu Sari");
        assert_eq!(json["data"]["tahun_ajaran"], "2024/2025");
        assert_eq!(json["data"]["jumlah_siswa"], 0);

        let response = app
            .oneshot(get_request("/mapel/simple-detail/999"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
