mod helpers;

#[cfg(test)]
mod tests {
    use crate::helpers::app::{
        get_json_body, get_request, json_request, make_test_app_with_storage,
    };
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    const BOUNDARY: &str = "X-SEKOLAH-TEST-BOUNDARY";
    const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn multipart_upload(uri: &str, id_field: &str, id: i64) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{id_field}\"\r\n\r\n{id}\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"foto\"; filename=\"foto.png\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(PNG_BYTES);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn seed_guru(app: &crate::helpers::app::TestApp) -> i64 {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/guru",
                serde_json::json!({
                    "id_user": 1,
                    "id_mapel": 2,
                    "nama_guru": "Pak Budi",
                    "mata_pelajaran": "Matematika",
                    "nip": "19800101",
                    "alamat": "Jl. Melati 1",
                    "email": "budi@sekolah.id",
                    "no_telp": "0812"
                }),
            ))
            .await
            .unwrap();
        get_json_body(response).await["data"]["id_guru"]
            .as_i64()
            .unwrap()
    }

    #[tokio::test]
    async fn test_upload_foto_guru_stores_file_and_links_row() {
        let (app, _state, _tmp) = make_test_app_with_storage().await;
        let id_guru = seed_guru(&app).await;

        let response = app
            .clone()
            .oneshot(multipart_upload("/upload-foto-guru", "id_guru", id_guru))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        let url = json["data"]["url"].as_str().unwrap().to_string();
        assert!(url.contains("/uploads/guru/"));

        // The teacher row now carries the URL.
        let response = app
            .clone()
            .oneshot(get_request(&format!("/guru/{id_guru}")))
            .await
            .unwrap();
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["foto"], url);

        // And the stored file resolves through the uploads route.
        let filename = url.rsplit('/').next().unwrap();
        let response = app
            .oneshot(get_request(&format!("/uploads/guru/{filename}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], PNG_BYTES);
    }

    #[tokio::test]
    async fn test_upload_foto_guru_unknown_id_is_not_found() {
        let (app, _state, _tmp) = make_test_app_with_storage().await;

        let response = app
            .oneshot(multipart_upload("/upload-foto-guru", "id_guru", 999))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_upload_foto_siswa_links_row() {
        let (app, _state, _tmp) = make_test_app_with_storage().await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/siswa",
                serde_json::json!({
                    "id_user": 5,
                    "id_kelas": null,
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
            .clone()
            .oneshot(multipart_upload("/upload-foto-siswa", "id_siswa", id_siswa))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        let url = json["data"]["url"].as_str().unwrap().to_string();
        assert!(url.contains("/uploads/siswa/"));

        let response = app
            .oneshot(get_request(&format!("/siswa/{id_siswa}")))
            .await
            .unwrap();
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["foto"], url);
    }

    #[tokio::test]
    async fn test_upload_without_file_is_bad_request() {
        let (app, _state, _tmp) = make_test_app_with_storage().await;

        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"id_guru\"\r\n\r\n1\r\n--{BOUNDARY}--\r\n"
            )
            .as_bytes(),
        );

        let request = Request::builder()
            .method("POST")
            .uri("/upload-foto-guru")
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_foto_rejects_unknown_kind_and_traversal() {
        let (app, _state, _tmp) = make_test_app_with_storage().await;

        let response = app
            .clone()
            .oneshot(get_request("/uploads/lainnya/foto.png"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(get_request("/uploads/guru/..%2Fsecret.txt"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
