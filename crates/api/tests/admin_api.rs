//! Admin moderation, edits, vote cleanup and profile roles.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, get, get_auth, patch_json_auth, put_json_auth, user_with_token,
};
use roadclips_core::moderation::VideoStatus;
use roadclips_core::roles::{ROLE_ADMIN, ROLE_USER};
use roadclips_db::models::user::User;
use roadclips_db::repositories::{CommentRepo, VideoRepo, VoteRepo};
use serde_json::json;
use sqlx::PgPool;

async fn admin_with_token(pool: &PgPool) -> (User, String) {
    let admin = common::create_user(pool, "admin@example.com", ROLE_ADMIN).await;
    let token = common::token_for(&admin);
    (admin, token)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_routes_forbid_regular_users(pool: PgPool) {
    let (_, token) = user_with_token(&pool, "user@example.com").await;
    let app = common::build_test_app(pool);

    for uri in [
        "/api/v1/admin/videos",
        "/api/v1/admin/votes",
        "/api/v1/admin/location-reports",
        "/api/v1/admin/profiles",
    ] {
        let response = get_auth(&app, uri, &token).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{uri}");
    }

    let anonymous = get(&app, "/api/v1/admin/videos").await;
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_videos_with_status_filter(pool: PgPool) {
    let (admin, token) = admin_with_token(&pool).await;
    common::create_video(&pool, admin.id, "One", VideoStatus::Pending).await;
    common::create_video(&pool, admin.id, "Two", VideoStatus::Approved).await;
    let app = common::build_test_app(pool);

    let all = body_json(get_auth(&app, "/api/v1/admin/videos", &token).await).await;
    assert_eq!(all["data"].as_array().unwrap().len(), 2);

    let pending = body_json(get_auth(&app, "/api/v1/admin/videos?status=pending", &token).await).await;
    assert_eq!(pending["data"].as_array().unwrap().len(), 1);
    assert_eq!(pending["data"][0]["title"], "One");

    let bogus = get_auth(&app, "/api/v1/admin/videos?status=deleted", &token).await;
    assert_eq!(bogus.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_approve_publishes_and_reject_hides(pool: PgPool) {
    let (admin, token) = admin_with_token(&pool).await;
    let video = common::create_video(&pool, admin.id, "Moderate me", VideoStatus::Pending).await;
    let app = common::build_test_app(pool);
    let status_uri = format!("/api/v1/admin/videos/{}/status", video.id);

    // Cache the empty public list first.
    assert!(body_json(get(&app, "/api/v1/videos").await).await["data"]
        .as_array()
        .unwrap()
        .is_empty());

    let approved = put_json_auth(&app, &status_uri, &token, json!({ "status": "approved" })).await;
    assert_eq!(approved.status(), StatusCode::OK);
    let listed = body_json(get(&app, "/api/v1/videos").await).await;
    assert_eq!(listed["data"][0]["id"], video.id);

    let rejected = put_json_auth(&app, &status_uri, &token, json!({ "status": "rejected" })).await;
    assert_eq!(body_json(rejected).await["data"]["status"], "rejected");
    assert!(body_json(get(&app, "/api/v1/videos").await).await["data"]
        .as_array()
        .unwrap()
        .is_empty());
    assert_eq!(
        get(&app, &format!("/api/v1/videos/{}", video.id)).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_status_cannot_return_to_pending(pool: PgPool) {
    let (admin, token) = admin_with_token(&pool).await;
    let video = common::create_video(&pool, admin.id, "Clip", VideoStatus::Approved).await;
    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/admin/videos/{}/status", video.id);

    let pending = put_json_auth(&app, &uri, &token, json!({ "status": "pending" })).await;
    assert_eq!(pending.status(), StatusCode::BAD_REQUEST);

    let missing = put_json_auth(
        &app,
        "/api/v1/admin/videos/999999/status",
        &token,
        json!({ "status": "approved" }),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_edit_keeps_slug(pool: PgPool) {
    let (admin, token) = admin_with_token(&pool).await;
    let video = common::create_video(&pool, admin.id, "Original title", VideoStatus::Approved).await;
    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/admin/videos/{}", video.id);

    let response = patch_json_auth(
        &app,
        &uri,
        &token,
        json!({ "title": "Better title", "latitude": 10.0, "longitude": 20.0 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Better title");
    assert_eq!(json["data"]["slug"], "original-title");
    assert_eq!(json["data"]["latitude"], 10.0);

    let half = patch_json_auth(&app, &uri, &token, json!({ "latitude": 5.0 })).await;
    assert_eq!(half.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_video_cascades(pool: PgPool) {
    let (admin, token) = admin_with_token(&pool).await;
    let video = common::create_video(&pool, admin.id, "Doomed", VideoStatus::Approved).await;
    VoteRepo::upsert(&pool, video.id, admin.id, true).await.unwrap();
    let app = common::build_test_app(pool.clone());

    let response = delete_auth(&app, &format!("/api/v1/admin/videos/{}", video.id), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert!(VideoRepo::find_by_id(&pool, video.id).await.unwrap().is_none());
    assert!(VoteRepo::vote_types_for_video(&pool, video.id).await.unwrap().is_empty());
    assert!(CommentRepo::list_for_video(&pool, video.id).await.unwrap().is_empty());

    let again = delete_auth(&app, &format!("/api/v1/admin/videos/{}", video.id), &token).await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_and_delete_votes(pool: PgPool) {
    let (admin, token) = admin_with_token(&pool).await;
    let video = common::create_video(&pool, admin.id, "Voted", VideoStatus::Approved).await;
    let vote = VoteRepo::upsert(&pool, video.id, admin.id, false).await.unwrap();
    let app = common::build_test_app(pool);

    let json = body_json(get_auth(&app, "/api/v1/admin/votes", &token).await).await;
    assert_eq!(json["data"][0]["video_title"], "Voted");
    assert_eq!(json["data"][0]["user_email"], "admin@example.com");
    assert_eq!(json["data"][0]["vote_type"], false);

    let votes_uri = format!("/api/v1/videos/{}/votes", video.id);
    assert_eq!(body_json(get(&app, &votes_uri).await).await["data"]["score"], -1);

    let response = delete_auth(&app, &format!("/api/v1/admin/votes/{}", vote.id), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(body_json(get(&app, &votes_uri).await).await["data"]["score"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_profiles_and_roles(pool: PgPool) {
    let (admin, token) = admin_with_token(&pool).await;
    let (user, _) = user_with_token(&pool, "user@example.com").await;
    let app = common::build_test_app(pool);

    let profiles = body_json(get_auth(&app, "/api/v1/admin/profiles", &token).await).await;
    let profiles = profiles["data"].as_array().unwrap();
    assert_eq!(profiles.len(), 2);
    assert!(profiles.iter().all(|p| p.get("password_hash").is_none()));

    let promoted = put_json_auth(
        &app,
        &format!("/api/v1/admin/profiles/{}/role", user.id),
        &token,
        json!({ "role": ROLE_ADMIN }),
    )
    .await;
    assert_eq!(body_json(promoted).await["data"]["role"], ROLE_ADMIN);

    let invalid = put_json_auth(
        &app,
        &format!("/api/v1/admin/profiles/{}/role", user.id),
        &token,
        json!({ "role": "superuser" }),
    )
    .await;
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

    let self_demote = put_json_auth(
        &app,
        &format!("/api/v1/admin/profiles/{}/role", admin.id),
        &token,
        json!({ "role": ROLE_USER }),
    )
    .await;
    assert_eq!(self_demote.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_demoted_admin_loses_access_immediately(pool: PgPool) {
    let (_, token) = admin_with_token(&pool).await;
    let colleague = common::create_user(&pool, "colleague@example.com", ROLE_ADMIN).await;
    let colleague_token = common::token_for(&colleague);
    let app = common::build_test_app(pool);

    let before = get_auth(&app, "/api/v1/admin/videos", &colleague_token).await;
    assert_eq!(before.status(), StatusCode::OK);

    let demoted = put_json_auth(
        &app,
        &format!("/api/v1/admin/profiles/{}/role", colleague.id),
        &token,
        json!({ "role": ROLE_USER }),
    )
    .await;
    assert_eq!(demoted.status(), StatusCode::OK);

    let after = get_auth(&app, "/api/v1/admin/videos", &colleague_token).await;
    assert_eq!(after.status(), StatusCode::FORBIDDEN);
}
