//! Integration tests for registration, login, the login guard, and profiles.

mod helpers;

use axum::http::StatusCode;

use helpers::{PASSWORD, TestApp};

#[tokio::test]
async fn test_register_redirects_to_login() {
    let app = TestApp::new().await;

    let response = app.register_member("grace").await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/login/"));
}

#[tokio::test]
async fn test_register_form_lists_fields() {
    let app = TestApp::new().await;

    let response = app.get("/register/", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let fields = response.body["data"]["fields"].as_array().unwrap();
    assert!(fields.iter().any(|f| f["name"] == "is_admin"));
}

#[tokio::test]
async fn test_authenticated_register_goes_home() {
    let app = TestApp::new().await;
    let token = app.member_token("grace").await;

    let response = app.get("/register/", Some(&token)).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/"));
}

#[tokio::test]
async fn test_register_mismatched_passwords() {
    let app = TestApp::new().await;

    let response = app
        .post_form(
            "/register/",
            &[
                ("username", "grace"),
                ("email", "grace@example.com"),
                ("first_name", "Grace"),
                ("last_name", "Hopper"),
                ("password1", PASSWORD),
                ("password2", "something-else-entirely-77"),
            ],
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["details"]["password2"].is_array());
}

#[tokio::test]
async fn test_register_missing_fields_reports_each() {
    let app = TestApp::new().await;

    let response = app.post_form("/register/", &[("username", "grace")], None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let details = &response.body["details"];
    for field in ["email", "first_name", "last_name", "password1", "password2"] {
        assert!(details[field].is_array(), "missing error for {field}");
    }
}

#[tokio::test]
async fn test_register_duplicate_username_conflicts() {
    let app = TestApp::new().await;
    app.register_member("grace").await;

    let response = app.register_member("grace").await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_admin_registration_requires_allowlist() {
    let app = TestApp::new().await;

    let response = app.register("mallory", "Mallory", "Smith", true).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "ADMIN_ELIGIBILITY");
    assert_eq!(
        response.body["message"],
        "You cannot register as an admin, please register as a user."
    );

    // Nothing was created.
    let login = app
        .post_form(
            "/login/",
            &[("username", "mallory"), ("password", PASSWORD)],
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_allowlisted_admin_becomes_staff() {
    let app = TestApp::new().await;
    let response = app.register("ada", "Ada", "Lovelace", true).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let login = app
        .post_form("/login/", &[("username", "ada"), ("password", PASSWORD)], None)
        .await;

    assert_eq!(login.status, StatusCode::OK);
    assert_eq!(login.body["data"]["user"]["is_staff"], true);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    app.register_member("grace").await;

    let response = app
        .post_form(
            "/login/",
            &[("username", "grace"), ("password", "not-the-password")],
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_routes_require_login() {
    let app = TestApp::new().await;

    for path in ["/audio_list/", "/search/?q=a", "/profile/", "/upload/", "/audio/1/file"] {
        let response = app.get(path, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{path}");
    }

    let response = app.post_form("/delete-audio/1/", &[], None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let app = TestApp::new().await;

    let response = app.get("/audio_list/", Some("not-a-jwt")).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_view_and_update() {
    let app = TestApp::new().await;
    let token = app.member_token("grace").await;

    let response = app.get("/profile/", Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["user"]["username"], "grace");
    assert_eq!(response.body["data"]["profile"]["avatar"], "default.jpg");

    let response = app
        .post_form(
            "/profile/",
            &[
                ("username", "grace"),
                ("email", "rear.admiral@example.com"),
                ("bio", "Compilers and nanoseconds"),
            ],
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/profile/"));

    let response = app.get("/profile/", Some(&token)).await;
    assert_eq!(response.body["data"]["user"]["email"], "rear.admiral@example.com");
    assert_eq!(response.body["data"]["profile"]["bio"], "Compilers and nanoseconds");
}

#[tokio::test]
async fn test_profile_avatar_upload() {
    let app = TestApp::new().await;
    let token = app.member_token("grace").await;
    let png = &b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR"[..];

    let response = app
        .post_multipart(
            "/profile/",
            &[("username", "grace"), ("email", "grace@example.com"), ("bio", "")],
            Some(("avatar", "portrait.png", png)),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/profile/"));

    let response = app.get("/profile/", Some(&token)).await;
    let avatar = response.body["data"]["profile"]["avatar"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(avatar.starts_with("profile_pics/"), "{avatar}");
    let stored = std::fs::read(app.media.path().join(&avatar)).unwrap();
    assert_eq!(stored, png);

    // An empty file input keeps the picture.
    let response = app
        .post_multipart(
            "/profile/",
            &[("username", "grace"), ("email", "grace@example.com"), ("bio", "Hi")],
            Some(("avatar", "", &b""[..])),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    let response = app.get("/profile/", Some(&token)).await;
    assert_eq!(response.body["data"]["profile"]["avatar"], avatar.as_str());
    assert_eq!(response.body["data"]["profile"]["bio"], "Hi");
}

#[tokio::test]
async fn test_profile_rejects_non_image_avatar() {
    let app = TestApp::new().await;
    let token = app.member_token("grace").await;

    let response = app
        .post_multipart(
            "/profile/",
            &[("username", "grace"), ("email", "grace@example.com")],
            Some(("avatar", "song.png", &b"ID3\x04"[..])),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["details"]["avatar"].is_array());
    let response = app.get("/profile/", Some(&token)).await;
    assert_eq!(response.body["data"]["profile"]["avatar"], "default.jpg");
}

#[tokio::test]
async fn test_home_and_health_are_public() {
    let app = TestApp::new().await;

    let home = app.get("/", None).await;
    assert_eq!(home.status, StatusCode::OK);
    assert!(home.body["data"]["user"].is_null());

    let health = app.get("/health", None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["data"]["status"], "ok");
}
