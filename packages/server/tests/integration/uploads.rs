use crate::common::{PNG_BYTES, TestApp};

#[tokio::test]
async fn uploaded_file_is_served_at_its_url() {
    let app = TestApp::spawn().await;
    let res = app.upload_banner("hero.png", "image/png", PNG_BYTES).await;
    assert_eq!(res.status, 201);

    let (status, content_type, bytes) = app.get_bytes(res.file_url()).await;

    assert_eq!(status, 200);
    assert_eq!(content_type.as_deref(), Some("image/png"));
    assert_eq!(bytes, PNG_BYTES);
}

#[tokio::test]
async fn deleted_file_is_no_longer_served() {
    let app = TestApp::spawn().await;
    let res = app.upload_banner("hero.png", "image/png", PNG_BYTES).await;
    let file_url = res.file_url().to_string();

    app.delete(&format!("/banners/{}", res.id())).await;

    let (status, _, _) = app.get_bytes(&file_url).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn unknown_file_is_not_found() {
    let app = TestApp::spawn().await;

    let res = app.get("/uploads/1700000000000_missing.png").await;

    assert_eq!(res.status, 404);
    assert_eq!(res.error(), "File not found");
}

#[tokio::test]
async fn filename_with_space_is_served_at_its_url() {
    let app = TestApp::spawn().await;
    let res = app.upload_banner("my photo.png", "image/png", PNG_BYTES).await;
    assert_eq!(res.status, 201, "{}", res.text);

    let (status, _, bytes) = app.get_bytes(res.file_url()).await;

    assert_eq!(status, 200);
    assert_eq!(bytes, PNG_BYTES);
}

#[tokio::test]
async fn url_reserved_characters_in_filename_are_rejected() {
    let app = TestApp::spawn().await;

    for name in ["a%20b.png", "a#1.png", "a?v=1.png"] {
        let res = app.upload_banner(name, "image/png", PNG_BYTES).await;
        assert_eq!(res.status, 400, "{name}: {}", res.text);
        assert!(res.error().starts_with("Invalid filename"));
    }

    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn undecodable_name_is_json_bad_request() {
    let app = TestApp::spawn().await;

    let res = app.get("/uploads/%FF.png").await;

    assert_eq!(res.status, 400);
    assert_eq!(res.error(), "Invalid file name");
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let app = TestApp::spawn().await;

    let res = app.get("/api-docs/openapi.json").await;

    assert_eq!(res.status, 200);
    let paths = res.body["paths"].as_object().unwrap();
    for path in [
        "/upload",
        "/banners",
        "/banners/{id}",
        "/projects/upload",
        "/projects",
        "/projects/{id}",
        "/uploads/{name}",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
}

#[tokio::test]
async fn cors_is_permissive_by_default() {
    let app = TestApp::spawn().await;

    let res = app
        .client
        .get(app.url("/banners"))
        .header("Origin", "http://example.com")
        .send()
        .await
        .unwrap();

    assert_eq!(
        res.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn configured_cors_origins_are_enforced() {
    let app = TestApp::spawn_with(|config| {
        config.server.cors.allow_origins = vec!["http://allowed.example".into()];
    })
    .await;

    let allow_origin = |origin: &'static str| {
        let request = app.client.get(app.url("/banners")).header("Origin", origin);
        async move {
            let res = request.send().await.unwrap();
            res.headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok())
                .map(String::from)
        }
    };

    assert_eq!(
        allow_origin("http://allowed.example").await.as_deref(),
        Some("http://allowed.example")
    );
    assert_eq!(allow_origin("http://other.example").await, None);
}
