mod helpers;

use axum::http::StatusCode;
use helpers::*;
use serde_json::json;

#[tokio::test]
async fn test_new_account_after_restart_does_not_inherit_enrollments() {
    let dir = tempfile::tempdir().unwrap();

    let first = setup_test_app_in(dir.path()).await;
    let (alice_id, alice_token) = first.register("alice@example.com").await;
    let (status, _) = first
        .post("/api/enrollments", Some(&alice_token), json!({ "courseId": "3" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    drop(first);

    // Same durable region, fresh in-memory accounts
    let second = setup_test_app_in(dir.path()).await;
    let (bob_id, bob_token) = second.register("bob@example.com").await;
    assert_ne!(bob_id, alice_id);

    let (status, body) = second.get("/api/enrollments", Some(&bob_token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["enrollments"], json!([]));

    // Alice's record is still on disk under her own id
    let alice_records = second
        .state
        .enrollment_service
        .list_enrollments(&alice_id)
        .await;
    assert_eq!(alice_records.len(), 1);
    assert_eq!(alice_records[0].enrollment.course_id, "3");
}

#[tokio::test]
async fn test_new_account_service_path_after_restart_starts_empty() {
    let dir = tempfile::tempdir().unwrap();

    let first = setup_test_app_in(dir.path()).await;
    let alice = first
        .state
        .auth_service
        .register("alice@example.com", "password123", None)
        .await
        .unwrap();
    first
        .state
        .enrollment_service
        .initialize_user(&alice.user.id)
        .await;
    first
        .state
        .enrollment_service
        .enroll(&alice.user.id, "3")
        .await
        .unwrap();

    let second = setup_test_app_in(dir.path()).await;
    let bob = second
        .state
        .auth_service
        .register("bob@example.com", "password123", None)
        .await
        .unwrap();
    assert!(second.state.enrollment_service.initialize_user(&bob.user.id).await);

    assert!(second
        .state
        .enrollment_service
        .list_enrollments(&bob.user.id)
        .await
        .is_empty());
    assert!(!second.state.enrollment_service.is_enrolled(&bob.user.id, "3").await);
}
