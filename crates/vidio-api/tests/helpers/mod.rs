//! Shared test helpers for the HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use vidio_api::{AppState, build_app};
use vidio_core::config::{AllowlistSeed, AppConfig};
use vidio_database::{AudioFileRepo, MemoryStore, Repositories};
use vidio_entity::audio::CreateAudioFile;
use vidio_service::AllowlistService;
use vidio_storage::LocalStorageProvider;

/// A password that passes every strength rule.
pub const PASSWORD: &str = "violet-Harbor-91-quartz";

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Direct handle on the record store.
    pub store: MemoryStore,
    /// Keeps the media root alive for the test.
    pub media: tempfile::TempDir,
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// `Location` header, for redirects.
    pub location: Option<String>,
    /// Parsed JSON body, or `Null`.
    pub body: Value,
    /// Raw body bytes.
    pub bytes: Vec<u8>,
}

impl TestApp {
    /// Create a test application on the memory store with "Ada Lovelace"
    /// on the admin allowlist.
    pub async fn new() -> Self {
        Self::with_max_upload(1024 * 1024).await
    }

    /// Same as [`TestApp::new`] with a custom upload size limit.
    pub async fn with_max_upload(max_upload_size_bytes: u64) -> Self {
        let media = tempfile::tempdir().expect("Failed to create media root");

        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret-0123456789".to_string();
        config.storage.media_root = media.path().display().to_string();
        config.storage.max_upload_size_bytes = max_upload_size_bytes;
        config.registration.admin_allowlist = vec![AllowlistSeed {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
        }];

        let store = MemoryStore::new();
        let repos = Repositories::memory(store.clone());
        AllowlistService::new(Arc::clone(&repos.admin_allowlist))
            .seed(&config.registration.admin_allowlist)
            .await
            .expect("Failed to seed allowlist");

        let storage = LocalStorageProvider::new(media.path())
            .await
            .expect("Failed to init storage");

        let state = AppState::new(config, repos, Arc::new(storage));
        Self {
            router: build_app(state),
            store,
            media,
        }
    }

    /// Register an ordinary member.
    pub async fn register_member(&self, username: &str) -> TestResponse {
        self.register(username, "Grace", "Hopper", false).await
    }

    /// Register through the form endpoint.
    pub async fn register(
        &self,
        username: &str,
        first_name: &str,
        last_name: &str,
        is_admin: bool,
    ) -> TestResponse {
        let email = format!("{username}@example.com");
        let mut fields = vec![
            ("username", username),
            ("email", email.as_str()),
            ("first_name", first_name),
            ("last_name", last_name),
            ("password1", PASSWORD),
            ("password2", PASSWORD),
        ];
        if is_admin {
            fields.push(("is_admin", "on"));
        }
        self.post_form("/register/", &fields, None).await
    }

    /// Login and return the bearer token.
    pub async fn login(&self, username: &str) -> String {
        let response = self
            .post_form(
                "/login/",
                &[("username", username), ("password", PASSWORD)],
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Register a member and return their token.
    pub async fn member_token(&self, username: &str) -> String {
        let response = self.register_member(username).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER, "{:?}", response.body);
        self.login(username).await
    }

    /// Register an allowlisted staff user and return their token.
    pub async fn staff_token(&self, username: &str) -> String {
        let response = self.register(username, "Ada", "Lovelace", true).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER, "{:?}", response.body);
        self.login(username).await
    }

    /// Insert `n` records directly into the store.
    pub async fn seed_audio(&self, n: usize) {
        for i in 1..=n {
            let data = CreateAudioFile {
                title: format!("Recording {i}"),
                description: format!("Description {i}"),
                audio: format!("audio/rec{i}.mp3"),
                village: None,
            };
            AudioFileRepo::create(&self.store, &data)
                .await
                .expect("Failed to seed audio");
        }
    }

    /// GET with an optional bearer token.
    pub async fn get(&self, path: &str, token: Option<&str>) -> TestResponse {
        let req = with_token(Request::builder().method("GET").uri(path), token)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(req).await
    }

    /// POST an urlencoded form.
    pub async fn post_form(
        &self,
        path: &str,
        fields: &[(&str, &str)],
        token: Option<&str>,
    ) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let req = with_token(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded"),
            token,
        )
        .body(Body::from(body))
        .expect("Failed to build request");
        self.send(req).await
    }

    /// POST a multipart upload. `file` is `(file name, content)`.
    pub async fn upload(
        &self,
        fields: &[(&str, &str)],
        file: Option<(&str, &[u8])>,
        token: Option<&str>,
    ) -> TestResponse {
        let file = file.map(|(file_name, data)| ("audio", file_name, data));
        self.post_multipart("/upload/", fields, file, token).await
    }

    /// POST a multipart body. `file` is `(part name, file name, content)`.
    pub async fn post_multipart(
        &self,
        uri: &str,
        fields: &[(&str, &str)],
        file: Option<(&str, &str, &[u8])>,
        token: Option<&str>,
    ) -> TestResponse {
        const BOUNDARY: &str = "vidio-test-boundary";

        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some((part, file_name, data)) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{part}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        let req = with_token(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                ),
            token,
        )
        .body(Body::from(body))
        .expect("Failed to build request");
        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let bytes = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
            .await
            .expect("Failed to read body")
            .to_vec();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            location,
            body,
            bytes,
        }
    }
}

fn with_token(
    builder: axum::http::request::Builder,
    token: Option<&str>,
) -> axum::http::request::Builder {
    match token {
        Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {token}")),
        None => builder,
    }
}

/// Minimal `application/x-www-form-urlencoded` encoding.
fn encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'*' => {
                out.push(b as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}
