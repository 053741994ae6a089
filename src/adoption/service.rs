use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::Serialize;
use std::collections::HashMap;

use super::intake::{self, SubmitRequestPayload};
use super::status::RequestStatus;
use super::store;
use crate::entities::{adoption_request, pet, user, prelude::*};
use crate::error::{AppError, FieldViolation};
use crate::pagination::{PageInfo, PageParams};
use crate::principal::Principal;

/// A stored request joined with the pet it references.
#[derive(Debug, Serialize)]
pub struct RequestWithPet {
    #[serde(flatten)]
    pub request: adoption_request::Model,
    pub pet: Option<pet::Model>,
}

/// Minimal applicant identity for administrator review; the full applicant
/// profile is already embedded in the request itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicantIdentity {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct RequestForReview {
    #[serde(flatten)]
    pub request: adoption_request::Model,
    pub pet: Option<pet::Model>,
    pub user: Option<ApplicantIdentity>,
}

#[derive(Debug, Serialize)]
pub struct RequestPage<T> {
    pub requests: Vec<T>,
    pub pagination: PageInfo,
}

/// Submits an adoption request on behalf of the authenticated applicant.
///
/// Validates the payload field-by-field, checks the pet exists, rejects a
/// second open request for the same pet, and persists with status pending.
pub async fn submit(
    db: &DatabaseConnection,
    principal: Principal,
    payload: &SubmitRequestPayload,
) -> Result<adoption_request::Model, AppError> {
    let application = intake::validate(payload).map_err(AppError::Validation)?;

    if Pet::find_by_id(application.pet_id).one(db).await?.is_none() {
        return Err(AppError::NotFound("Pet"));
    }

    if store::find_open_by_pet_and_user(db, application.pet_id, principal.user_id)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(
            "You have already submitted a request for this pet".to_string(),
        ));
    }

    let created = store::create(db, principal.user_id, application).await?;

    tracing::Span::current()
        .record("table", "adoption_requests")
        .record("action", "submit_request")
        .record("user_id", principal.user_id)
        .record("pet_id", created.pet_id)
        .record("business_event", "Adoption request submitted");
    metrics::counter!("petlify_adoption_requests_submitted_total").increment(1);
    metrics::gauge!("petlify_adoption_requests_pending").increment(1.0);

    Ok(created)
}

/// The caller's own requests, newest first, each joined with its pet.
pub async fn requests_for_user(
    db: &DatabaseConnection,
    principal: Principal,
    page: &PageParams,
) -> Result<RequestPage<RequestWithPet>, AppError> {
    let (items, total) = store::list_by_user(db, principal.user_id, page).await?;
    let pets = load_pets(db, &items).await?;
    let requests = items
        .into_iter()
        .map(|request| RequestWithPet {
            pet: pets.get(&request.pet_id).cloned(),
            request,
        })
        .collect();
    Ok(RequestPage { requests, pagination: PageInfo::new(page, total) })
}

/// Administrator view of every request.
pub async fn all_requests(
    db: &DatabaseConnection,
    principal: Principal,
    page: &PageParams,
) -> Result<RequestPage<RequestForReview>, AppError> {
    principal.require_admin()?;
    let (items, total) = store::list_all(db, page).await?;
    let requests = enrich_for_review(db, items).await?;
    Ok(RequestPage { requests, pagination: PageInfo::new(page, total) })
}

/// Administrator review queue: pending requests only.
pub async fn pending_requests(
    db: &DatabaseConnection,
    principal: Principal,
    page: &PageParams,
) -> Result<RequestPage<RequestForReview>, AppError> {
    principal.require_admin()?;
    let (items, total) = store::list_by_status(db, RequestStatus::Pending, page).await?;
    let requests = enrich_for_review(db, items).await?;
    Ok(RequestPage { requests, pagination: PageInfo::new(page, total) })
}

/// Administrator status overwrite. Any status may replace any other; only
/// membership in the vocabulary is checked.
pub async fn update_status(
    db: &DatabaseConnection,
    principal: Principal,
    request_id: i32,
    new_status: &str,
) -> Result<RequestForReview, AppError> {
    principal.require_admin()?;

    let Some(status) = RequestStatus::parse(new_status) else {
        return Err(AppError::Validation(vec![FieldViolation::new(
            "status",
            "must be one of: pending, approved, rejected, completed",
        )]));
    };

    let updated = store::update_status(db, request_id, status).await?;

    tracing::Span::current()
        .record("table", "adoption_requests")
        .record("action", "update_request_status")
        .record("user_id", principal.user_id)
        .record("pet_id", updated.pet_id)
        .record("business_event", "Adoption request status updated");
    metrics::counter!("petlify_adoption_status_updates_total", "status" => status.as_str())
        .increment(1);

    let pet = Pet::find_by_id(updated.pet_id).one(db).await?;
    let user = User::find_by_id(updated.user_id)
        .one(db)
        .await?
        .map(|u| ApplicantIdentity { name: u.name, email: u.email });

    Ok(RequestForReview { request: updated, pet, user })
}

async fn load_pets(
    db: &DatabaseConnection,
    items: &[adoption_request::Model],
) -> Result<HashMap<i32, pet::Model>, AppError> {
    let pet_ids: Vec<i32> = items.iter().map(|r| r.pet_id).collect();
    if pet_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let pets = Pet::find()
        .filter(pet::Column::Id.is_in(pet_ids))
        .all(db)
        .await?;
    Ok(pets.into_iter().map(|p| (p.id, p)).collect())
}

async fn enrich_for_review(
    db: &DatabaseConnection,
    items: Vec<adoption_request::Model>,
) -> Result<Vec<RequestForReview>, AppError> {
    let pets = load_pets(db, &items).await?;

    let user_ids: Vec<i32> = items.iter().map(|r| r.user_id).collect();
    let users: HashMap<i32, ApplicantIdentity> = if user_ids.is_empty() {
        HashMap::new()
    } else {
        User::find()
            .filter(user::Column::Id.is_in(user_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|u| (u.id, ApplicantIdentity { name: u.name, email: u.email }))
            .collect()
    };

    Ok(items
        .into_iter()
        .map(|request| RequestForReview {
            pet: pets.get(&request.pet_id).cloned(),
            user: users.get(&request.user_id).cloned(),
            request,
        })
        .collect())
}
