use axum::{
    extract::{Extension, Multipart, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use google_cloud_storage::client::Client as GcsClient;
use google_cloud_storage::http::objects::upload::{Media, UploadObjectRequest, UploadType};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::entities::{pet, user, prelude::*};
use crate::error::{AppError, FieldViolation};
use crate::pagination::{PageInfo, PageParams};
use crate::principal::Principal;

const PET_STATUSES: [&str; 4] = ["pending", "approved", "rejected", "adopted"];
const MAX_IMAGES: usize = 5;
const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

#[derive(Default)]
struct PetForm {
    name: Option<String>,
    species: Option<String>,
    breed: Option<String>,
    age: Option<String>,
    description: Option<String>,
    gender: Option<String>,
    size: Option<String>,
    color: Option<String>,
    weight: Option<String>,
    is_vaccinated: Option<String>,
    is_neutered: Option<String>,
    is_house_trained: Option<String>,
    health_issues: Option<String>,
    special_needs: Option<String>,
    temperament: Option<String>,
    energy_level: Option<String>,
    owner_mobile: Option<String>,
    owner_address: Option<String>,
    owner_city: Option<String>,
    owner_state: Option<String>,
    owner_zip_code: Option<String>,
    reason_for_rehoming: Option<String>,
    rehoming_urgency: Option<String>,
}

// POST /pets (multipart: listing fields plus up to five images)
pub async fn submit_pet(
    Extension(db): Extension<DatabaseConnection>,
    Extension(gcs_client): Extension<GcsClient>,
    Extension(principal): Extension<Principal>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut form = PetForm::default();
    let mut images: Vec<(String, axum::body::Bytes)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(vec![FieldViolation::new("body", e.to_string())]))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        if field_name == "images" {
            let file_name = field.file_name().unwrap_or("image.jpg").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Internal(format!("reading upload failed: {e}")))?;
            images.push((file_name, data));
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| AppError::Validation(vec![FieldViolation::new("body", e.to_string())]))?;
        match field_name.as_str() {
            "name" => form.name = Some(value),
            "species" => form.species = Some(value),
            "breed" => form.breed = Some(value),
            "age" => form.age = Some(value),
            "description" => form.description = Some(value),
            "gender" => form.gender = Some(value),
            "size" => form.size = Some(value),
            "color" => form.color = Some(value),
            "weight" => form.weight = Some(value),
            "isVaccinated" => form.is_vaccinated = Some(value),
            "isNeutered" => form.is_neutered = Some(value),
            "isHouseTrained" => form.is_house_trained = Some(value),
            "healthIssues" => form.health_issues = Some(value),
            "specialNeeds" => form.special_needs = Some(value),
            "temperament" => form.temperament = Some(value),
            "energyLevel" => form.energy_level = Some(value),
            "ownerMobile" => form.owner_mobile = Some(value),
            "ownerAddress" => form.owner_address = Some(value),
            "ownerCity" => form.owner_city = Some(value),
            "ownerState" => form.owner_state = Some(value),
            "ownerZipCode" => form.owner_zip_code = Some(value),
            "reasonForRehoming" => form.reason_for_rehoming = Some(value),
            "rehomingUrgency" => form.rehoming_urgency = Some(value),
            _ => {}
        }
    }

    let mut violations = Vec::new();
    let name = required(form.name, "name", &mut violations);
    let species = required(form.species, "species", &mut violations);
    let breed = required(form.breed, "breed", &mut violations);
    let description = required(form.description, "description", &mut violations);
    let age = match form.age.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => match raw.parse::<i32>() {
            Ok(v) if (0..=40).contains(&v) => Some(v),
            Ok(_) => {
                violations.push(FieldViolation::new("age", "must be between 0 and 40"));
                None
            }
            Err(_) => {
                violations.push(FieldViolation::new("age", "must be a whole number"));
                None
            }
        },
        _ => {
            violations.push(FieldViolation::new("age", "is required"));
            None
        }
    };
    let weight = match form.weight.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => match raw.parse::<f64>() {
            Ok(v) if v > 0.0 => Some(v),
            _ => {
                violations.push(FieldViolation::new("weight", "must be a positive number"));
                None
            }
        },
        _ => None,
    };
    if images.len() > MAX_IMAGES {
        violations.push(FieldViolation::new("images", "at most 5 images are allowed"));
    }
    if images.iter().any(|(_, data)| data.len() > MAX_IMAGE_BYTES) {
        violations.push(FieldViolation::new("images", "each image must be 10MB or smaller"));
    }
    if !violations.is_empty() {
        return Err(AppError::Validation(violations));
    }

    let bucket = std::env::var("GCS_BUCKET_NAME")
        .map_err(|_| AppError::Internal("GCS_BUCKET_NAME not set".to_string()))?;
    let image_urls = upload_images(&gcs_client, &bucket, images).await?;

    let now = chrono::Utc::now().naive_utc();
    let new_pet = pet::ActiveModel {
        submitted_by: Set(principal.user_id),
        name: Set(name.unwrap_or_default()),
        species: Set(species.unwrap_or_default()),
        breed: Set(breed.unwrap_or_default()),
        age: Set(age.unwrap_or_default()),
        description: Set(description.unwrap_or_default()),
        gender: Set(trimmed(form.gender)),
        size: Set(trimmed(form.size)),
        color: Set(trimmed(form.color)),
        weight: Set(weight),
        is_vaccinated: Set(yes(&form.is_vaccinated)),
        is_neutered: Set(yes(&form.is_neutered)),
        is_house_trained: Set(yes(&form.is_house_trained)),
        health_issues: Set(trimmed(form.health_issues)),
        special_needs: Set(trimmed(form.special_needs)),
        temperament: Set(trimmed(form.temperament)),
        energy_level: Set(trimmed(form.energy_level)),
        owner_mobile: Set(trimmed(form.owner_mobile)),
        owner_address: Set(trimmed(form.owner_address)),
        owner_city: Set(trimmed(form.owner_city)),
        owner_state: Set(trimmed(form.owner_state)),
        owner_zip_code: Set(trimmed(form.owner_zip_code)),
        reason_for_rehoming: Set(trimmed(form.reason_for_rehoming)),
        rehoming_urgency: Set(trimmed(form.rehoming_urgency)),
        images: Set(json!(image_urls)),
        status: Set("pending".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let created = new_pet.insert(&db).await?;

    tracing::Span::current()
        .record("table", "pets")
        .record("action", "submit_pet")
        .record("user_id", principal.user_id)
        .record("pet_id", created.id)
        .record("business_event", "Pet submitted for rehoming");
    metrics::counter!("petlify_pets_submitted_total").increment(1);
    metrics::gauge!("petlify_pets_total").increment(1.0);

    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "Pet submitted successfully", "pet": created})),
    )
        .into_response())
}

async fn upload_images(
    gcs_client: &GcsClient,
    bucket: &str,
    images: Vec<(String, axum::body::Bytes)>,
) -> Result<Vec<String>, AppError> {
    let mut urls = Vec::new();
    for (file_name, data) in images {
        let ext = std::path::Path::new(&file_name)
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("jpg");
        let object_name = format!("uploads/pets/{}.{}", Uuid::new_v4(), ext);
        let mime_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .to_string();

        let upload_type = UploadType::Simple(Media {
            name: object_name.clone().into(),
            content_type: mime_type.into(),
            content_length: None,
        });
        gcs_client
            .upload_object(
                &UploadObjectRequest { bucket: bucket.to_string(), ..Default::default() },
                data,
                &upload_type,
            )
            .await
            .map_err(|e| AppError::Internal(format!("image upload failed: {e}")))?;

        urls.push(format!("https://storage.googleapis.com/{bucket}/{object_name}"));
    }
    Ok(urls)
}

#[derive(Debug, Deserialize)]
pub struct PetListParams {
    pub search: Option<String>,
    pub species: Option<String>,
    pub age: Option<String>,
    pub status: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl PetListParams {
    fn page_params(&self) -> PageParams {
        let mut params = PageParams::default();
        if let Some(page) = self.page {
            params.page = page;
        }
        if let Some(limit) = self.limit {
            params.limit = limit;
        }
        params
    }
}

// GET /pets (public catalog; only approved listings unless asked otherwise)
pub async fn list_pets(
    Extension(db): Extension<DatabaseConnection>,
    Query(params): Query<PetListParams>,
) -> Result<Response, AppError> {
    let status = params.status.as_deref().unwrap_or("approved");
    let mut query = Pet::find().filter(pet::Column::Status.eq(status));

    if let Some(search) = params
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        let pattern = format!("%{}%", search);
        query = query.filter(
            Condition::any()
                .add(Expr::col(pet::Column::Name).ilike(pattern.clone()))
                .add(Expr::col(pet::Column::Species).ilike(pattern.clone()))
                .add(Expr::col(pet::Column::Breed).ilike(pattern.clone()))
                .add(Expr::col(pet::Column::Description).ilike(pattern)),
        );
    }

    if let Some(species) = params
        .species
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        query = query.filter(Expr::col(pet::Column::Species).ilike(format!("%{}%", species)));
    }

    match params.age.as_deref() {
        Some("young") => query = query.filter(pet::Column::Age.lte(2)),
        Some("adult") => {
            query = query
                .filter(pet::Column::Age.gt(2))
                .filter(pet::Column::Age.lte(7));
        }
        Some("senior") => query = query.filter(pet::Column::Age.gt(7)),
        _ => {}
    }

    let page = params.page_params();
    let total = query.clone().count(&db).await?;
    let pets = query
        .order_by_desc(pet::Column::CreatedAt)
        .order_by_asc(pet::Column::Id)
        .paginate(&db, page.limit())
        .fetch_page(page.page() - 1)
        .await?;

    Ok(Json(json!({"pets": pets, "pagination": PageInfo::new(&page, total)})).into_response())
}

// GET /pets/featured
pub async fn featured_pets(
    Extension(db): Extension<DatabaseConnection>,
) -> Result<Json<Vec<pet::Model>>, AppError> {
    let pets = Pet::find()
        .filter(pet::Column::Status.eq("approved"))
        .order_by_desc(pet::Column::CreatedAt)
        .limit(3u64)
        .all(&db)
        .await?;
    Ok(Json(pets))
}

// GET /pets/:id
pub async fn get_pet(
    Extension(db): Extension<DatabaseConnection>,
    Path(pet_id): Path<i32>,
) -> Result<Json<pet::Model>, AppError> {
    let Some(found) = Pet::find_by_id(pet_id).one(&db).await? else {
        return Err(AppError::NotFound("Pet"));
    };
    Ok(Json(found))
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitterIdentity {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct PetForModeration {
    #[serde(flatten)]
    pub pet: pet::Model,
    pub submitter: Option<SubmitterIdentity>,
}

// GET /pets/pending/submissions (admin)
pub async fn pending_submissions(
    Extension(db): Extension<DatabaseConnection>,
    Extension(principal): Extension<Principal>,
    Query(params): Query<PageParams>,
) -> Result<Response, AppError> {
    principal.require_admin()?;

    let query = Pet::find().filter(pet::Column::Status.eq("pending"));
    let total = query.clone().count(&db).await?;
    let pets = query
        .order_by_desc(pet::Column::CreatedAt)
        .order_by_asc(pet::Column::Id)
        .paginate(&db, params.limit())
        .fetch_page(params.page() - 1)
        .await?;

    let submitter_ids: Vec<i32> = pets.iter().map(|p| p.submitted_by).collect();
    let submitters: std::collections::HashMap<i32, SubmitterIdentity> = if submitter_ids.is_empty()
    {
        std::collections::HashMap::new()
    } else {
        User::find()
            .filter(user::Column::Id.is_in(submitter_ids))
            .all(&db)
            .await?
            .into_iter()
            .map(|u| (u.id, SubmitterIdentity { name: u.name, email: u.email }))
            .collect()
    };

    let listings: Vec<PetForModeration> = pets
        .into_iter()
        .map(|p| PetForModeration {
            submitter: submitters.get(&p.submitted_by).cloned(),
            pet: p,
        })
        .collect();

    Ok(Json(json!({"pets": listings, "pagination": PageInfo::new(&params, total)})).into_response())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePetStatusRequest {
    pub pet_id: i32,
    pub status: String,
}

// PUT /pets/update-status (admin)
pub async fn update_pet_status(
    Extension(db): Extension<DatabaseConnection>,
    Extension(principal): Extension<Principal>,
    Json(payload): Json<UpdatePetStatusRequest>,
) -> Result<Json<pet::Model>, AppError> {
    principal.require_admin()?;

    if !PET_STATUSES.contains(&payload.status.as_str()) {
        return Err(AppError::Validation(vec![FieldViolation::new(
            "status",
            "must be one of: pending, approved, rejected, adopted",
        )]));
    }

    let Some(existing) = Pet::find_by_id(payload.pet_id).one(&db).await? else {
        return Err(AppError::NotFound("Pet"));
    };

    let mut row: pet::ActiveModel = existing.into();
    row.status = Set(payload.status.clone());
    row.updated_at = Set(chrono::Utc::now().naive_utc());
    let updated = row.update(&db).await?;

    tracing::Span::current()
        .record("table", "pets")
        .record("action", "update_pet_status")
        .record("user_id", principal.user_id)
        .record("pet_id", updated.id)
        .record("business_event", "Pet listing moderated");
    metrics::counter!("petlify_pet_status_updates_total", "status" => payload.status)
        .increment(1);

    Ok(Json(updated))
}

fn required(value: Option<String>, field: &'static str, out: &mut Vec<FieldViolation>) -> Option<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Some(v.to_string()),
        _ => {
            out.push(FieldViolation::new(field, "is required"));
            None
        }
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn yes(value: &Option<String>) -> bool {
    matches!(
        value.as_deref().map(str::trim),
        Some(v) if v.eq_ignore_ascii_case("yes") || v.eq_ignore_ascii_case("true")
    )
}
