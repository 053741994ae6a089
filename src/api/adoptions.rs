use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use serde_json::json;

use crate::adoption::intake::SubmitRequestPayload;
use crate::adoption::service::{self, RequestForReview, RequestPage, RequestWithPet};
use crate::error::AppError;
use crate::pagination::PageParams;
use crate::principal::Principal;

// POST /adoptions
pub async fn submit_request(
    Extension(db): Extension<DatabaseConnection>,
    Extension(principal): Extension<Principal>,
    Json(payload): Json<SubmitRequestPayload>,
) -> Result<Response, AppError> {
    let request = service::submit(&db, principal, &payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Adoption request submitted successfully",
            "request": request,
        })),
    )
        .into_response())
}

// GET /adoptions/my-requests
pub async fn my_requests(
    Extension(db): Extension<DatabaseConnection>,
    Extension(principal): Extension<Principal>,
    Query(params): Query<PageParams>,
) -> Result<Json<RequestPage<RequestWithPet>>, AppError> {
    Ok(Json(service::requests_for_user(&db, principal, &params).await?))
}

// GET /adoptions/all (admin)
pub async fn all_requests(
    Extension(db): Extension<DatabaseConnection>,
    Extension(principal): Extension<Principal>,
    Query(params): Query<PageParams>,
) -> Result<Json<RequestPage<RequestForReview>>, AppError> {
    Ok(Json(service::all_requests(&db, principal, &params).await?))
}

// GET /adoptions/pending (admin)
pub async fn pending_requests(
    Extension(db): Extension<DatabaseConnection>,
    Extension(principal): Extension<Principal>,
    Query(params): Query<PageParams>,
) -> Result<Json<RequestPage<RequestForReview>>, AppError> {
    Ok(Json(service::pending_requests(&db, principal, &params).await?))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub request_id: i32,
    pub status: String,
}

// PUT /adoptions/update-status (admin)
pub async fn update_request_status(
    Extension(db): Extension<DatabaseConnection>,
    Extension(principal): Extension<Principal>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<Json<RequestForReview>, AppError> {
    let updated =
        service::update_status(&db, principal, payload.request_id, &payload.status).await?;
    Ok(Json(updated))
}
