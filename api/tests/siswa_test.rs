mod helpers;

#[cfg(test)]
mod tests {
    use crate::helpers::app::{
        delete_request, get_json_body, get_request, json_request, make_test_app,
    };
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    fn siswa_body(id_kelas: Option<i64>) -> serde_json::Value {
        json!({
            "id_user": 5,
            "id_kelas": id_kelas,
            "nama_siswa": "Ani",
            "alamat": "Jl. Mawar 2",
            "tanggal_lahir": "2010-02-03",
            "nisn": "0051"
        })
    }

    async fn create_siswa(app: &crate::helpers::app::TestApp, id_kelas: Option<i64>) -> i64 {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/siswa", siswa_body(id_kelas)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        get_json_body(response).await["data"]["id_siswa"]
            .as_i64()
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_siswa_without_kelas_roundtrips() {
        let (app, _state) = make_test_app().await;

        let id_siswa = create_siswa(&app, None).await;

        let response = app
            .oneshot(get_request(&format!("/siswa/{id_siswa}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["nama_siswa"], "Ani");
        assert_eq!(json["data"]["id_kelas"], serde_json::Value::Null);
        assert_eq!(json["data"]["nisn"], "0051");
    }

    #[tokio::test]
    async fn test_create_siswa_with_kelas_roundtrips() {
        let (app, _state) = make_test_app().await;

        let id_siswa = create_siswa(&app, Some(3)).await;

        let response = app
            .oneshot(get_request(&format!("/siswa/{id_siswa}")))
            .await
            .unwrap();
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["id_kelas"], 3);
    }

    #[tokio::test]
    async fn test_list_siswa_by_kelas() {
        let (app, _state) = make_test_app().await;

        create_siswa(&app, Some(3)).await;
        create_siswa(&app, Some(3)).await;
        create_siswa(&app, None).await;

        let response = app.clone().oneshot(get_request("/siswaa/3")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 2);

        // An unknown class is an empty list, not an error.
        let response = app.oneshot(get_request("/siswaa/44")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_list_siswa_by_mapel() {
        let (app, _state) = make_test_app().await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/matapelajaran",
                json!({ "id_kelas": 3, "nama_mata_pelajaran": "Matematika" }),
            ))
            .await
            .unwrap();
        let id_mapel = get_json_body(response).await["data"]["id_mapel"]
            .as_i64()
            .unwrap();

        create_siswa(&app, Some(3)).await;
        create_siswa(&app, Some(4)).await;

        let response = app
            .clone()
            .oneshot(get_request(&format!("/siswa/by-mapel/{id_mapel}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);

        // A missing subject is terminal.
        let response = app.oneshot(get_request("/siswa/by-mapel/999")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_assign_siswa_to_kelas() {
        let (app, _state) = make_test_app().await;

        let id_siswa = create_siswa(&app, None).await;

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/siswa/kelas/{id_siswa}"),
                json!({ "id_kelas": 7 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(get_request(&format!("/siswa/{id_siswa}")))
            .await
            .unwrap();
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["id_kelas"], 7);

        let response = app
            .oneshot(json_request(
                "PUT",
                "/siswa/kelas/9999",
                json!({ "id_kelas": 7 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_resolve_siswa_by_user() {
        let (app, _state) = make_test_app().await;

        let id_siswa = create_siswa(&app, None).await;

        let response = app.clone().oneshot(get_request("/siswa/user/5")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["id_siswa"], id_siswa);

        let response = app.oneshot(get_request("/siswa/user/99")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_siswa_then_gone() {
        let (app, _state) = make_test_app().await;

        let id_siswa = create_siswa(&app, None).await;

        let response = app
            .clone()
            .oneshot(delete_request(&format!("/siswa/{id_siswa}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(get_request(&format!("/siswa/{id_siswa}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
