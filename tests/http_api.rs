mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use tower::ServiceExt;

use petlify_server::api;
use common::sample_user;

fn test_app(db: DatabaseConnection) -> axum::Router {
    let gcs_config = google_cloud_storage::client::ClientConfig::default().anonymous();
    api::router(db, google_cloud_storage::client::Client::new(gcs_config))
}

fn session(user_id: i32) -> String {
    format!("{}={}", api::middleware::SESSION_COOKIE, user_id)
}

#[tokio::test]
async fn health_check_is_public() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let response = test_app(db)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn adoption_routes_require_a_session() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let response = test_app(db)
        .oneshot(
            Request::builder()
                .uri("/adoptions/my-requests")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn stale_session_cookies_are_rejected() {
    // Cookie parses but the user row is gone.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<petlify_server::entities::user::Model>::new()])
        .into_connection();
    let response = test_app(db)
        .oneshot(
            Request::builder()
                .uri("/adoptions/my-requests")
                .header(header::COOKIE, session(42))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_listing_is_forbidden_for_regular_users() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![sample_user(5, false)]])
        .into_connection();
    let response = test_app(db)
        .oneshot(
            Request::builder()
                .uri("/adoptions/all")
                .header(header::COOKIE, session(5))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn status_updates_are_forbidden_for_regular_users() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![sample_user(5, false)]])
        .into_connection();
    let response = test_app(db)
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/adoptions/update-status")
                .header(header::COOKIE, session(5))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"requestId": 1, "status": "approved"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn empty_submission_returns_field_violations() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![sample_user(7, false)]])
        .into_connection();
    let response = test_app(db)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/adoptions")
                .header(header::COOKIE, session(7))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let fields = body["fields"].as_array().expect("violation list");
    assert!(fields.iter().any(|v| v["field"] == "petId"));
    assert!(fields.iter().any(|v| v["field"] == "applicantName"));
}
