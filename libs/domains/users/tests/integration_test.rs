//! Integration tests for the Users domain
//!
//! These run against a real PostgreSQL via testcontainers to check the SQL,
//! the unique email constraint and the role default. They need Docker:
//!
//! ```text
//! cargo test -p domain_users --test integration_test -- --ignored
//! ```

use core_auth::{JwtConfig, TokenCodec};
use domain_users::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

const SECRET: &str = "integration-test-secret-long-enough-000";

fn codec() -> TokenCodec {
    TokenCodec::new(&JwtConfig::new(SECRET))
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_and_find_user() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_find");

    let email = builder.email("john");
    let created = repo
        .create(NewUser {
            name: builder.name("user", "john"),
            email: email.clone(),
            password_hash: None,
            role: "user".to_string(),
        })
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.email, email);
    assert!(created.password_hash.is_none());

    let by_id = assert_some(repo.find_by_id(created.id).await.unwrap(), "user by id");
    assert_eq!(by_id, created);

    let by_email = assert_some(repo.find_by_email(&email).await.unwrap(), "user by email");
    assert_eq!(by_email.id, created.id);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_unique_email_constraint() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("unique_email");

    let email = builder.email("dup");
    let input = NewUser {
        name: "First".to_string(),
        email: email.clone(),
        password_hash: None,
        role: "user".to_string(),
    };

    let first = repo.create(input.clone()).await.unwrap();

    let result = repo
        .create(NewUser {
            name: "Second".to_string(),
            ..input
        })
        .await;
    assert!(matches!(result, Err(UserError::DuplicateEmail(_))));

    let stored = assert_some(repo.find_by_id(first.id).await.unwrap(), "first user");
    assert_eq!(stored.name, "First");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_and_delete_rows_affected() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("update_delete");

    let user = repo
        .create(NewUser {
            name: "Old".to_string(),
            email: builder.email("old"),
            password_hash: Some("hash".to_string()),
            role: "admin".to_string(),
        })
        .await
        .unwrap();

    let update = UpdateUser {
        name: "New".to_string(),
        email: builder.email("new"),
    };
    assert_eq!(repo.update(user.id, &update).await.unwrap(), 1);
    assert_eq!(repo.update(i32::MAX, &update).await.unwrap(), 0);

    let stored = assert_some(repo.find_by_id(user.id).await.unwrap(), "updated user");
    assert_eq!(stored.name, "New");
    assert_eq!(stored.role, "admin");
    assert_eq!(stored.password_hash.as_deref(), Some("hash"));

    assert_eq!(repo.delete(user.id).await.unwrap(), 1);
    assert_eq!(repo.delete(user.id).await.unwrap(), 0);
}

// ============================================================================
// Service Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_register_then_login() {
    let db = TestDatabase::new().await;
    let service = UserService::new(PgUserRepository::new(db.connection()), codec());
    let builder = TestDataBuilder::from_test_name("register_login");

    let email = builder.email("john");
    let user = service
        .register(RegisterUser::new("John", email.clone(), "hunter22", ""))
        .await
        .unwrap();
    assert_eq!(user.role, DEFAULT_ROLE);

    let token = service.login(&email, "hunter22").await.unwrap();
    let claims = codec().verify(&token).unwrap();
    assert_eq!(claims.email, email);
    assert_eq!(claims.role, "user");

    assert!(matches!(
        service.login(&email, "wrong").await,
        Err(UserError::InvalidCredentials)
    ));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_get_missing_user() {
    let db = TestDatabase::new().await;
    let service = UserService::new(PgUserRepository::new(db.connection()), codec());

    assert!(matches!(
        service.get_user(9999).await,
        Err(UserError::NotFound(9999))
    ));
}
