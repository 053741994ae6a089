use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Select, Set,
};

use super::intake::ValidatedApplication;
use super::status::RequestStatus;
use crate::entities::{adoption_request, prelude::*};
use crate::error::AppError;
use crate::pagination::PageParams;

const DUPLICATE_REQUEST: &str = "You have already submitted a request for this pet";

/// Persists a validated application with `status = pending`. The partial
/// unique index on open `(pet_id, user_id)` pairs backstops the service's
/// pre-flight duplicate check; a violation surfaces as the same conflict.
pub async fn create(
    db: &DatabaseConnection,
    user_id: i32,
    application: ValidatedApplication,
) -> Result<adoption_request::Model, AppError> {
    let now = chrono::Utc::now().naive_utc();
    let row = adoption_request::ActiveModel {
        pet_id: Set(application.pet_id),
        user_id: Set(user_id),
        applicant_name: Set(application.applicant_name),
        applicant_email: Set(application.applicant_email),
        applicant_phone: Set(application.applicant_phone),
        applicant_age: Set(application.applicant_age),
        applicant_occupation: Set(application.applicant_occupation),
        applicant_address: Set(application.applicant_address),
        applicant_city: Set(application.applicant_city),
        applicant_state: Set(application.applicant_state),
        applicant_zip_code: Set(application.applicant_zip_code),
        living_situation: Set(application.living_situation),
        housing_type: Set(application.housing_type),
        landlord_approval: Set(application.landlord_approval),
        landlord_contact: Set(application.landlord_contact),
        household_members: Set(application.household_members),
        children_ages: Set(application.children_ages),
        other_pets: Set(application.other_pets),
        other_pets_details: Set(application.other_pets_details),
        pet_experience: Set(application.pet_experience),
        pet_alone_hours: Set(application.pet_alone_hours),
        pet_exercise_plan: Set(application.pet_exercise_plan),
        pet_training_plan: Set(application.pet_training_plan),
        financial_commitment: Set(application.financial_commitment),
        time_commitment: Set(application.time_commitment),
        adoption_motivation: Set(application.adoption_motivation),
        pet_expectations: Set(application.pet_expectations),
        additional_info: Set(application.additional_info),
        status: Set(RequestStatus::Pending.as_str().to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    match row.insert(db).await {
        Ok(model) => Ok(model),
        Err(e) if is_unique_violation(&e) => Err(AppError::Conflict(DUPLICATE_REQUEST.to_string())),
        Err(e) => Err(AppError::Database(e)),
    }
}

// Postgres reports the open-request index as error 23505; sea-orm carries the
// message through in the error text.
fn is_unique_violation(err: &DbErr) -> bool {
    err.to_string()
        .contains("duplicate key value violates unique constraint")
}

/// The at-most-one open request per `(pet_id, user_id)`, if any.
pub async fn find_open_by_pet_and_user(
    db: &DatabaseConnection,
    pet_id: i32,
    user_id: i32,
) -> Result<Option<adoption_request::Model>, AppError> {
    let found = AdoptionRequest::find()
        .filter(adoption_request::Column::PetId.eq(pet_id))
        .filter(adoption_request::Column::UserId.eq(user_id))
        .filter(adoption_request::Column::Status.is_in(RequestStatus::OPEN.map(|s| s.as_str())))
        .one(db)
        .await?;
    Ok(found)
}

pub async fn find_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<adoption_request::Model>, AppError> {
    Ok(AdoptionRequest::find_by_id(id).one(db).await?)
}

pub async fn list_by_user(
    db: &DatabaseConnection,
    user_id: i32,
    page: &PageParams,
) -> Result<(Vec<adoption_request::Model>, u64), AppError> {
    fetch_page(
        db,
        AdoptionRequest::find().filter(adoption_request::Column::UserId.eq(user_id)),
        page,
    )
    .await
}

pub async fn list_by_status(
    db: &DatabaseConnection,
    status: RequestStatus,
    page: &PageParams,
) -> Result<(Vec<adoption_request::Model>, u64), AppError> {
    fetch_page(
        db,
        AdoptionRequest::find().filter(adoption_request::Column::Status.eq(status.as_str())),
        page,
    )
    .await
}

pub async fn list_all(
    db: &DatabaseConnection,
    page: &PageParams,
) -> Result<(Vec<adoption_request::Model>, u64), AppError> {
    fetch_page(db, AdoptionRequest::find(), page).await
}

// Newest first; id breaks creation-time ties so page walks are deterministic.
async fn fetch_page(
    db: &DatabaseConnection,
    query: Select<adoption_request::Entity>,
    page: &PageParams,
) -> Result<(Vec<adoption_request::Model>, u64), AppError> {
    let total = query.clone().count(db).await?;
    let items = query
        .order_by_desc(adoption_request::Column::CreatedAt)
        .order_by_asc(adoption_request::Column::Id)
        .paginate(db, page.limit())
        .fetch_page(page.page() - 1)
        .await?;
    Ok((items, total))
}

/// Unconditional status overwrite; refreshes `updated_at`.
pub async fn update_status(
    db: &DatabaseConnection,
    id: i32,
    new_status: RequestStatus,
) -> Result<adoption_request::Model, AppError> {
    let Some(existing) = find_by_id(db, id).await? else {
        return Err(AppError::NotFound("Adoption request"));
    };

    let mut row: adoption_request::ActiveModel = existing.into();
    row.status = Set(new_status.as_str().to_string());
    row.updated_at = Set(chrono::Utc::now().naive_utc());
    Ok(row.update(db).await?)
}
