use chrono::{Duration, Utc};
use roadclips_core::roles::{ROLE_ADMIN, ROLE_USER};
use roadclips_db::models::session::CreateSession;
use roadclips_db::models::user::CreateUser;
use roadclips_db::repositories::{SessionRepo, UserRepo};
use sqlx::PgPool;

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        password_hash: "hash".to_string(),
        role: ROLE_USER.to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_email_is_unique(pool: PgPool) {
    UserRepo::create(&pool, &new_user("dup@example.com")).await.unwrap();
    let err = UserRepo::create(&pool, &new_user("dup@example.com"))
        .await
        .unwrap_err();

    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.constraint(), Some("uq_users_email"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_role_check_constraint(pool: PgPool) {
    let mut input = new_user("x@example.com");
    input.role = "superuser".into();
    assert!(UserRepo::create(&pool, &input).await.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_set_role(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("a@example.com")).await.unwrap();
    assert!(!user.is_admin());

    let promoted = UserRepo::set_role(&pool, user.id, ROLE_ADMIN)
        .await
        .unwrap()
        .unwrap();
    assert!(promoted.is_admin());

    assert!(UserRepo::set_role(&pool, 9999, ROLE_ADMIN)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ensure_admin_creates_then_promotes(pool: PgPool) {
    let created = UserRepo::ensure_admin(&pool, "boss@example.com", "h1")
        .await
        .unwrap();
    assert!(created.is_admin());

    let existing = UserRepo::create(&pool, &new_user("later@example.com"))
        .await
        .unwrap();
    let promoted = UserRepo::ensure_admin(&pool, "later@example.com", "other")
        .await
        .unwrap();
    assert_eq!(promoted.id, existing.id);
    assert!(promoted.is_admin());
    assert_eq!(promoted.password_hash, "hash");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_session_lifecycle(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("s@example.com")).await.unwrap();

    let session = SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: "abc".into(),
            expires_at: Utc::now() + Duration::days(1),
            user_agent: None,
        },
    )
    .await
    .unwrap();

    let found = SessionRepo::find_active_by_hash(&pool, "abc").await.unwrap();
    assert_eq!(found.map(|s| s.id), Some(session.id));

    assert!(SessionRepo::revoke(&pool, session.id).await.unwrap());
    assert!(!SessionRepo::revoke(&pool, session.id).await.unwrap());
    assert!(SessionRepo::find_active_by_hash(&pool, "abc")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_expired_session_is_inactive(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("e@example.com")).await.unwrap();
    SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: "old".into(),
            expires_at: Utc::now() - Duration::minutes(1),
            user_agent: None,
        },
    )
    .await
    .unwrap();

    assert!(SessionRepo::find_active_by_hash(&pool, "old")
        .await
        .unwrap()
        .is_none());
    assert_eq!(SessionRepo::revoke_all_for_user(&pool, user.id).await.unwrap(), 1);
}
