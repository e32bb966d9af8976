mod common;

use common::{create_anonymous_account, create_linked_account, create_test_pool};

use acct_db::AccountRepository;

use chrono::Utc;
use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_inserted_account_when_found_by_id_then_fields_round_trip() {
    // Given: An inserted anonymous account
    let pool = create_test_pool().await;
    let repo = AccountRepository::new(pool.clone());
    let account = create_anonymous_account("anon-1");
    repo.insert(&account).await.unwrap();

    // When: Finding by id
    let result = repo.find_by_id(account.id).await.unwrap();

    // Then: The stored row matches
    assert_that!(result, some(anything()));
    let found = result.unwrap();
    assert_that!(found.id, eq(account.id));
    assert_that!(found.username, eq(&account.username));
    assert_that!(found.anonymous_id.as_deref(), some(eq("anon-1")));
    assert_that!(found.is_linked, eq(false));
    assert_that!(found.email, none());
    assert_that!(found.external_id, none());
}

#[tokio::test]
async fn given_inserted_account_when_found_by_anonymous_id_then_returns_it() {
    // Given: An inserted anonymous account
    let pool = create_test_pool().await;
    let repo = AccountRepository::new(pool.clone());
    let account = create_anonymous_account("anon-2");
    repo.insert(&account).await.unwrap();

    // When: Finding by the anonymous token
    let result = repo.find_by_anonymous_id("anon-2").await.unwrap();

    // Then: Returns the same row
    assert_that!(result, some(anything()));
    assert_that!(result.unwrap().id, eq(account.id));
}

#[tokio::test]
async fn given_empty_database_when_finding_then_returns_none() {
    // Given: An empty database
    let pool = create_test_pool().await;
    let repo = AccountRepository::new(pool);

    // When / Then: All lookups return None
    assert_that!(
        repo.find_by_id(Uuid::new_v4()).await.unwrap(),
        none()
    );
    assert_that!(
        repo.find_by_anonymous_id("missing").await.unwrap(),
        none()
    );
    assert_that!(
        repo.find_by_external_identity("no@x.com", "ext-none")
            .await
            .unwrap(),
        none()
    );
}

#[tokio::test]
async fn given_linked_account_when_found_by_email_only_then_matches() {
    // Given: A linked account
    let pool = create_test_pool().await;
    let repo = AccountRepository::new(pool.clone());
    let account = create_linked_account("u@x.com", "ext-1");
    repo.insert(&account).await.unwrap();

    // When: Looking up with a matching email but unknown external id
    let result = repo
        .find_by_external_identity("u@x.com", "ext-unknown")
        .await
        .unwrap();

    // Then: The email side alone matches
    assert_that!(result, some(anything()));
    assert_that!(result.unwrap().id, eq(account.id));
}

#[tokio::test]
async fn given_linked_account_when_found_by_external_id_only_then_matches() {
    // Given: A linked account
    let pool = create_test_pool().await;
    let repo = AccountRepository::new(pool.clone());
    let account = create_linked_account("v@y.com", "ext-2");
    repo.insert(&account).await.unwrap();

    // When: Looking up with a matching external id but different email
    let result = repo
        .find_by_external_identity("other@y.com", "ext-2")
        .await
        .unwrap();

    // Then: The external-id side alone matches
    assert_that!(result, some(anything()));
    assert_that!(result.unwrap().id, eq(account.id));
}

#[tokio::test]
async fn given_duplicate_anonymous_id_when_inserted_then_unique_violation() {
    // Given: An account holding an anonymous id
    let pool = create_test_pool().await;
    let repo = AccountRepository::new(pool.clone());
    repo.insert(&create_anonymous_account("dup")).await.unwrap();

    // When: Inserting a second row with the same anonymous id
    let result = repo.insert(&create_anonymous_account("dup")).await;

    // Then: The constraint rejects it as a unique violation
    let err = result.unwrap_err();
    assert_that!(err.is_unique_violation(), eq(true));
}

#[tokio::test]
async fn given_duplicate_email_when_inserted_then_unique_violation() {
    // Given: A linked account holding an email
    let pool = create_test_pool().await;
    let repo = AccountRepository::new(pool.clone());
    repo.insert(&create_linked_account("w@z.com", "ext-a"))
        .await
        .unwrap();

    // When: Inserting a second row with the same email
    let result = repo.insert(&create_linked_account("w@z.com", "ext-b")).await;

    // Then: The constraint rejects it
    assert_that!(result.unwrap_err().is_unique_violation(), eq(true));
}

#[tokio::test]
async fn given_anonymous_account_when_linked_then_update_is_in_place() {
    // Given: An anonymous account in the store
    let pool = create_test_pool().await;
    let repo = AccountRepository::new(pool.clone());
    let account = create_anonymous_account("anon-3");
    repo.insert(&account).await.unwrap();

    // When: Writing the linking update
    let mut linked = account.clone();
    linked.email = Some("u@x.com".to_string());
    linked.external_id = Some("ext-3".to_string());
    linked.is_linked = true;
    linked.updated_at = Utc::now();
    repo.link(&linked).await.unwrap();

    // Then: The same row now carries the identity, id unchanged
    let found = repo.find_by_id(account.id).await.unwrap().unwrap();
    assert_that!(found.id, eq(account.id));
    assert_that!(found.is_linked, eq(true));
    assert_that!(found.email.as_deref(), some(eq("u@x.com")));
    assert_that!(found.external_id.as_deref(), some(eq("ext-3")));
    assert_that!(found.anonymous_id.as_deref(), some(eq("anon-3")));
    assert_that!(repo.count().await.unwrap(), eq(1));
}
