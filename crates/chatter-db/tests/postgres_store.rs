use chatter_core::StoreError;
use chatter_db::{CredentialStore, PgCredentialStore};
use chatter_models::NewUser;
use sqlx::PgPool;

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password_hash: "$2b$12$digest".to_string(),
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_then_fetch(pool: PgPool) {
    let store = PgCredentialStore::new(pool);

    let created = store.create(new_user("testuser")).await.unwrap();
    let fetched = store.fetch("testuser").await.unwrap();

    assert_eq!(created, fetched);
    assert_eq!(fetched.username, "testuser");
    assert_eq!(fetched.password, "$2b$12$digest");
    assert_eq!(fetched.created_at, fetched.updated_at);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_fetch_missing_is_not_found(pool: PgPool) {
    let store = PgCredentialStore::new(pool);

    assert!(matches!(
        store.fetch("ghost").await,
        Err(StoreError::NotFound)
    ));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_duplicate_insert_conflicts(pool: PgPool) {
    let store = PgCredentialStore::new(pool.clone());
    store.create(new_user("testuser")).await.unwrap();

    let result = store
        .create(NewUser {
            username: "testuser".to_string(),
            password_hash: "$2b$12$other".to_string(),
        })
        .await;

    assert!(matches!(result, Err(StoreError::Conflict)));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = $1")
        .bind("testuser")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_exists_is_exact_match(pool: PgPool) {
    let store = PgCredentialStore::new(pool);
    store.create(new_user("testuser")).await.unwrap();

    assert!(store.exists("testuser").await);
    assert!(!store.exists("TestUser").await);
    assert!(!store.exists("testuser ").await);
    assert!(!store.exists("ghost").await);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_exists_is_false_when_pool_is_closed(pool: PgPool) {
    let store = PgCredentialStore::new(pool.clone());
    pool.close().await;

    assert!(!store.exists("testuser").await);
    assert!(matches!(
        store.fetch("testuser").await,
        Err(StoreError::Backend(_))
    ));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_concurrent_creates_store_one_record(pool: PgPool) {
    let store = PgCredentialStore::new(pool);

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..4 {
        let store = store.clone();
        tasks.spawn(async move { store.create(new_user("racer")).await });
    }

    let mut created = 0;
    while let Some(result) = tasks.join_next().await {
        match result.unwrap() {
            Ok(_) => created += 1,
            Err(e) => assert!(matches!(e, StoreError::Conflict), "unexpected error: {e}"),
        }
    }

    assert_eq!(created, 1);
}
