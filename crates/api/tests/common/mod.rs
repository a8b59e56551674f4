#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use roadclips_api::auth::jwt::{generate_access_token, JwtConfig};
use roadclips_api::config::ServerConfig;
use roadclips_api::router::build_app_router;
use roadclips_api::state::AppState;
use roadclips_core::moderation::VideoStatus;
use roadclips_core::roles::ROLE_USER;
use roadclips_core::types::DbId;
use roadclips_db::models::user::{CreateUser, User};
use roadclips_db::models::video::{CreateVideo, Video};
use roadclips_db::repositories::{UserRepo, VideoRepo};
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "correct-horse-battery";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-that-is-long-enough-for-hs256".to_string(),
        access_token_expiry_mins: 15,
        refresh_token_expiry_days: 7,
    }
}

/// Test configuration with a private media directory per call.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
        jwt: test_jwt_config(),
        maps_api_key: Some("test-maps-key".to_string()),
        media_root: std::env::temp_dir().join(format!("roadclips-test-{}", uuid::Uuid::new_v4())),
        public_base_url: "http://localhost:3000".to_string(),
        max_upload_bytes: 1024 * 1024,
        bootstrap_admin: None,
    }
}

/// The production router and middleware stack over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<serde_json::Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, request(Method::GET, uri, None, None)).await
}

pub async fn get_auth(app: &Router, uri: &str, token: &str) -> Response {
    send(app, request(Method::GET, uri, Some(token), None)).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, request(Method::POST, uri, None, Some(body))).await
}

pub async fn post_json_auth(app: &Router, uri: &str, token: &str, body: serde_json::Value) -> Response {
    send(app, request(Method::POST, uri, Some(token), Some(body))).await
}

pub async fn post_auth(app: &Router, uri: &str, token: &str) -> Response {
    send(app, request(Method::POST, uri, Some(token), None)).await
}

pub async fn put_json_auth(app: &Router, uri: &str, token: &str, body: serde_json::Value) -> Response {
    send(app, request(Method::PUT, uri, Some(token), Some(body))).await
}

pub async fn patch_json_auth(app: &Router, uri: &str, token: &str, body: serde_json::Value) -> Response {
    send(app, request(Method::PATCH, uri, Some(token), Some(body))).await
}

pub async fn delete_auth(app: &Router, uri: &str, token: &str) -> Response {
    send(app, request(Method::DELETE, uri, Some(token), None)).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a profile with [`TEST_PASSWORD`].
pub async fn create_user(pool: &PgPool, email: &str, role: &str) -> User {
    let password_hash = roadclips_api::auth::password::hash_password(TEST_PASSWORD).unwrap();
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash,
            role: role.to_string(),
        },
    )
    .await
    .unwrap()
}

/// A valid access token for `user`.
pub fn token_for(user: &User) -> String {
    generate_access_token(user.id, &user.role, &test_jwt_config()).unwrap()
}

/// A signed-in regular user.
pub async fn user_with_token(pool: &PgPool, email: &str) -> (User, String) {
    let user = create_user(pool, email, ROLE_USER).await;
    let token = token_for(&user);
    (user, token)
}

/// Insert a YouTube video directly with the given status.
pub async fn create_video(pool: &PgPool, owner: DbId, title: &str, status: VideoStatus) -> Video {
    let slug = roadclips_core::slug::base_slug(title);
    let video = VideoRepo::create_with_free_slug(
        pool,
        &slug,
        CreateVideo {
            title: title.to_string(),
            description: None,
            slug: slug.clone(),
            video_url: "https://www.youtube.com/embed/dQw4w9WgXcQ".to_string(),
            thumbnail_url: Some("https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg".to_string()),
            source: "youtube".to_string(),
            latitude: 47.6062,
            longitude: -122.3321,
            user_id: owner,
        },
    )
    .await
    .unwrap();

    if status == VideoStatus::Pending {
        return video;
    }
    VideoRepo::set_status(pool, video.id, status.as_str())
        .await
        .unwrap()
        .unwrap()
}
