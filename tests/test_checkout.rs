mod helpers;

use helpers::*;

#[tokio::test]
async fn test_checkout_enrolls_and_returns_receipt() {
    let ctx = setup_store();
    let enrollments = ctx.enrollment_service();
    let checkout = checkout_service(enrollments.clone());

    let receipt = checkout.checkout("7", "2").await.expect("checkout should succeed");

    assert!(receipt.session_id.starts_with("sim_"));
    assert_eq!(receipt.course_id, "2");
    assert_eq!(receipt.redirect, "/courses/2/learn");
    assert!(enrollments.is_enrolled("7", "2").await);
}

#[tokio::test]
async fn test_checkout_for_owned_course_fails() {
    let ctx = setup_store();
    let enrollments = ctx.enrollment_service();
    let checkout = checkout_service(enrollments.clone());

    assert!(checkout.process_payment("7", "1").await);
    assert!(!checkout.process_payment("7", "1").await);
    assert!(checkout.checkout("7", "1").await.is_none());
    assert_eq!(enrollments.list_enrollments("7").await.len(), 1);
}

#[tokio::test]
async fn test_checkout_for_unknown_course_fails() {
    let ctx = setup_store();
    let checkout = checkout_service(ctx.enrollment_service());

    assert!(checkout.checkout("7", "42").await.is_none());
}

#[tokio::test]
async fn test_checkout_fails_when_storage_is_unavailable() {
    let checkout = checkout_service(enrollment_service(setup_broken_store()));

    assert!(!checkout.process_payment("7", "1").await);
}

#[tokio::test]
async fn test_checkout_session_ids_differ() {
    let ctx = setup_store();
    let checkout = checkout_service(ctx.enrollment_service());

    let first = checkout.checkout("7", "1").await.unwrap();
    let second = checkout.checkout("7", "2").await.unwrap();

    assert_ne!(first.session_id, second.session_id);
}
