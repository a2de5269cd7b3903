use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use ::common::storage::filesystem::FilesystemBlobStore;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tempfile::TempDir;

use server::config::{AppConfig, CorsConfig, DatabaseConfig, ServerConfig, StorageConfig};
use server::records::RecordStore;
use server::state::AppState;

pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

pub mod routes {
    pub const UPLOAD_BANNER: &str = "/upload";
    pub const BANNERS: &str = "/banners";
    pub const UPLOAD_PROJECT: &str = "/projects/upload";
    pub const PROJECTS: &str = "/projects";

    pub fn banner(id: i64) -> String {
        format!("/banners/{id}")
    }

    pub fn project(id: i64) -> String {
        format!("/projects/{id}")
    }
}

/// A running test server backed by a temporary SQLite file and uploads directory.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub records: RecordStore,
    pub uploads_dir: PathBuf,
    _dir: TempDir,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    /// Spawn with `configure` applied on top of the test configuration.
    pub async fn spawn_with(configure: impl FnOnce(&mut AppConfig)) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let uploads_dir = dir.path().join("uploads");
        let db_url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();
        let public_url = format!("http://{addr}");

        let mut app_config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                public_url: public_url.clone(),
                cors: CorsConfig::default(),
            },
            database: DatabaseConfig {
                url: db_url,
                max_connections: 5,
            },
            storage: StorageConfig {
                uploads_dir: uploads_dir.clone(),
                max_upload_size: 1024 * 1024,
            },
        };
        configure(&mut app_config);

        let records = RecordStore::connect(&app_config.database)
            .await
            .expect("Failed to initialize test database");

        let state = AppState {
            blob_store: Arc::new(FilesystemBlobStore::new(uploads_dir.clone(), public_url)),
            records: records.clone(),
            config: app_config,
        };

        let app = server::build_router(state);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            records,
            uploads_dir,
            _dir: dir,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Names of the files currently in the uploads directory.
    pub fn stored_files(&self) -> Vec<String> {
        match std::fs::read_dir(&self.uploads_dir) {
            Ok(entries) => entries
                .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn get_bytes(&self, url: &str) -> (u16, Option<String>, Vec<u8>) {
        let res = self
            .client
            .get(url)
            .send()
            .await
            .expect("Failed to send GET request");
        let status = res.status().as_u16();
        let content_type = res
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let bytes = res.bytes().await.unwrap_or_default().to_vec();
        (status, content_type, bytes)
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("Failed to send DELETE request");

        TestResponse::from_response(res).await
    }

    pub async fn post_form(&self, path: &str, form: Form) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await
            .expect("Failed to send multipart upload request");

        TestResponse::from_response(res).await
    }

    /// Upload a banner image and return the response.
    pub async fn upload_banner(&self, file_name: &str, mime: &str, bytes: &[u8]) -> TestResponse {
        let form = Form::new().part("file", file_part(file_name, mime, bytes));
        self.post_form(routes::UPLOAD_BANNER, form).await
    }

    /// Upload a project image with its name and year.
    pub async fn upload_project(
        &self,
        file_name: &str,
        mime: &str,
        project: &str,
        year: &str,
    ) -> TestResponse {
        let form = Form::new()
            .text("project", project.to_string())
            .text("year", year.to_string())
            .part("file", file_part(file_name, mime, PNG_BYTES));
        self.post_form(routes::UPLOAD_PROJECT, form).await
    }

    /// Upload a PNG banner and return its `id`.
    pub async fn create_banner(&self, file_name: &str) -> i64 {
        let res = self.upload_banner(file_name, "image/png", PNG_BYTES).await;
        assert_eq!(res.status, 201, "create_banner failed: {}", res.text);
        res.id()
    }

    /// Upload a PNG project and return its `id`.
    pub async fn create_project(&self, name: &str, year: &str) -> i64 {
        let res = self.upload_project("x.png", "image/png", name, year).await;
        assert_eq!(res.status, 201, "create_project failed: {}", res.text);
        res.id()
    }
}

pub fn file_part(file_name: &str, mime: &str, bytes: &[u8]) -> Part {
    Part::bytes(bytes.to_vec())
        .file_name(file_name.to_string())
        .mime_str(mime)
        .expect("Failed to set MIME type")
}

impl TestResponse {
    pub async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }

    pub fn id(&self) -> i64 {
        self.body["id"]
            .as_i64()
            .expect("response body should contain 'id'")
    }

    pub fn error(&self) -> &str {
        self.body["error"]
            .as_str()
            .expect("response body should contain 'error'")
    }

    pub fn file_url(&self) -> &str {
        self.body["fileUrl"]
            .as_str()
            .expect("response body should contain 'fileUrl'")
    }
}
