mod common;

use std::collections::BTreeMap;

use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, Value};

use petlify_server::adoption::{intake, service, store};
use petlify_server::entities::{adoption_request, pet};
use petlify_server::error::AppError;
use petlify_server::pagination::PageParams;
use petlify_server::principal::Principal;

use common::{complete_payload, sample_pet, sample_request, sample_user, ts};

fn applicant() -> Principal {
    Principal { user_id: 7, is_admin: false }
}

fn admin() -> Principal {
    Principal { user_id: 1, is_admin: true }
}

fn count_row(total: i64) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("num_items", Value::BigInt(Some(total)))])
}

#[tokio::test]
async fn submit_creates_a_pending_request() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![sample_pet(3)]])
        .append_query_results([Vec::<adoption_request::Model>::new()])
        .append_query_results([vec![sample_request(1, 3, 7, "pending")]])
        .append_exec_results([MockExecResult { last_insert_id: 1, rows_affected: 1 }])
        .into_connection();

    let created = service::submit(&db, applicant(), &complete_payload(3))
        .await
        .expect("submission succeeds");

    assert_eq!(created.status, "pending");
    assert_eq!(created.pet_id, 3);
    assert_eq!(created.user_id, 7);
}

#[tokio::test]
async fn submit_for_a_missing_pet_is_not_found_and_writes_nothing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<pet::Model>::new()])
        .into_connection();

    let err = service::submit(&db, applicant(), &complete_payload(99))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound("Pet")));

    // Only the pet lookup ran; no insert was attempted.
    assert_eq!(db.into_transaction_log().len(), 1);
}

#[tokio::test]
async fn submit_while_an_open_request_exists_conflicts() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![sample_pet(3)]])
        .append_query_results([vec![sample_request(11, 3, 7, "pending")]])
        .into_connection();

    let err = service::submit(&db, applicant(), &complete_payload(3))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    assert_eq!(db.into_transaction_log().len(), 2);
}

#[tokio::test]
async fn submit_with_invalid_payload_reports_field_violations() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let mut payload = complete_payload(3);
    payload.applicant_age = Some(intake::IntField::Text("twenty".to_string()));

    let err = service::submit(&db, applicant(), &payload).await.unwrap_err();
    match err {
        AppError::Validation(violations) => {
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].field, "applicantAge");
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    // Validation failed before any store call.
    assert!(db.into_transaction_log().is_empty());
}

#[tokio::test]
async fn unique_index_violation_surfaces_as_conflict() {
    let duplicate = || {
        DbErr::Custom(
            "error returned from database: duplicate key value violates unique constraint \
             \"uq_adoption_requests_open\""
                .to_string(),
        )
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([duplicate()])
        .append_exec_errors([duplicate()])
        .into_connection();

    let application = intake::validate(&complete_payload(3)).expect("payload is valid");
    let err = store::create(&db, 7, application).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn admin_operations_reject_non_admins_before_touching_the_store() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let page = PageParams::default();

    assert!(matches!(
        service::all_requests(&db, applicant(), &page).await,
        Err(AppError::Forbidden)
    ));
    assert!(matches!(
        service::pending_requests(&db, applicant(), &page).await,
        Err(AppError::Forbidden)
    ));
    assert!(matches!(
        service::update_status(&db, applicant(), 1, "approved").await,
        Err(AppError::Forbidden)
    ));

    assert!(db.into_transaction_log().is_empty());
}

#[tokio::test]
async fn update_status_round_trips_and_refreshes_the_timestamp() {
    let pending = sample_request(5, 3, 7, "pending");
    let mut approved = sample_request(5, 3, 7, "approved");
    approved.updated_at = ts(11, 15);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![pending]])
        .append_query_results([vec![approved]])
        .append_query_results([vec![sample_pet(3)]])
        .append_query_results([vec![sample_user(7, false)]])
        .append_exec_results([MockExecResult { last_insert_id: 0, rows_affected: 1 }])
        .into_connection();

    let updated = service::update_status(&db, admin(), 5, "approved")
        .await
        .expect("status update succeeds");

    assert_eq!(updated.request.status, "approved");
    assert!(updated.request.updated_at > updated.request.created_at);
    assert!(updated.pet.is_some());
    assert_eq!(
        updated.user.as_ref().map(|u| u.email.as_str()),
        Some("user7@example.com")
    );
}

#[tokio::test]
async fn update_status_rejects_values_outside_the_vocabulary() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let err = service::update_status(&db, admin(), 5, "archived")
        .await
        .unwrap_err();
    match err {
        AppError::Validation(violations) => assert_eq!(violations[0].field, "status"),
        other => panic!("expected validation error, got {other:?}"),
    }

    assert!(db.into_transaction_log().is_empty());
}

#[tokio::test]
async fn update_status_for_a_missing_request_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<adoption_request::Model>::new()])
        .into_connection();

    let err = service::update_status(&db, admin(), 404, "approved")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound("Adoption request")));
}

#[tokio::test]
async fn my_requests_enriches_with_pets_and_paginates() {
    let first = sample_request(21, 3, 7, "pending");
    let mut second = sample_request(20, 4, 7, "approved");
    second.created_at = ts(9, 9);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![count_row(3)]])
        .append_query_results([vec![first, second]])
        .append_query_results([vec![sample_pet(3)]])
        .into_connection();

    let page = service::requests_for_user(&db, applicant(), &PageParams { page: 1, limit: 2 })
        .await
        .expect("listing succeeds");

    assert_eq!(page.requests.len(), 2);
    assert_eq!(page.pagination.total_items, 3);
    assert_eq!(page.pagination.total_pages, 2);
    assert_eq!(page.pagination.items_per_page, 2);

    // The referenced pet rides along when it resolves; a dangling reference
    // degrades to null rather than failing the listing.
    assert!(page.requests[0].pet.is_some());
    assert!(page.requests[1].pet.is_none());
}

#[tokio::test]
async fn all_requests_enriches_with_applicant_identity() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![count_row(1)]])
        .append_query_results([vec![sample_request(9, 3, 7, "pending")]])
        .append_query_results([vec![sample_pet(3)]])
        .append_query_results([vec![sample_user(7, false)]])
        .into_connection();

    let page = service::all_requests(&db, admin(), &PageParams::default())
        .await
        .expect("listing succeeds");

    assert_eq!(page.requests.len(), 1);
    let entry = &page.requests[0];
    assert_eq!(entry.user.as_ref().map(|u| u.name.as_str()), Some("User 7"));
    assert_eq!(entry.pet.as_ref().map(|p| p.id), Some(3));
}
