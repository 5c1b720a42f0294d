//! Integration tests for refresh-token sessions.

use chrono::{Duration, Utc};
use faal_core::types::DbId;
use faal_db::models::session::CreateSession;
use faal_db::models::user::CreateUser;
use faal_db::repositories::{SessionRepo, UserRepo};
use sqlx::PgPool;

async fn create_user(pool: &PgPool, username: &str) -> DbId {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@test.com"),
            password_hash: "not-a-real-hash".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

fn session(user_id: DbId, hash: &str, ttl: Duration) -> CreateSession {
    CreateSession {
        user_id,
        refresh_token_hash: hash.to_string(),
        expires_at: Utc::now() + ttl,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_session_lookup_and_single_revoke(pool: PgPool) {
    let user_id = create_user(&pool, "reader").await;
    let created = SessionRepo::create(&pool, &session(user_id, "hash-a", Duration::days(7)))
        .await
        .unwrap();
    assert!(!created.is_revoked);

    let found = SessionRepo::find_by_refresh_token_hash(&pool, "hash-a")
        .await
        .unwrap()
        .expect("active session should be found");
    assert_eq!(found.id, created.id);
    assert_eq!(found.user_id, user_id);

    assert!(SessionRepo::revoke(&pool, created.id).await.unwrap());
    assert!(!SessionRepo::revoke(&pool, created.id).await.unwrap());
    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "hash-a")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_expired_sessions_are_hidden_and_cleaned_up(pool: PgPool) {
    let user_id = create_user(&pool, "stale").await;
    SessionRepo::create(&pool, &session(user_id, "old", Duration::minutes(-1)))
        .await
        .unwrap();
    let live = SessionRepo::create(&pool, &session(user_id, "live", Duration::days(1)))
        .await
        .unwrap();

    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "old")
        .await
        .unwrap()
        .is_none());

    assert_eq!(SessionRepo::cleanup_expired(&pool).await.unwrap(), 1);
    assert_eq!(
        SessionRepo::revoke_all_for_user(&pool, user_id).await.unwrap(),
        1
    );
    assert!(!SessionRepo::revoke(&pool, live.id).await.unwrap());
}
