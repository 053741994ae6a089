use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde_json::json;
use tower_cookies::{Cookie, Cookies};

use crate::api::middleware::SESSION_COOKIE;
use crate::entities::user;
use crate::error::AppError;

#[derive(serde::Deserialize)]
pub struct RegisterRequest {
    email: String,
    password: String,
    name: String,
}

pub async fn register(
    Extension(db): Extension<DatabaseConnection>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Response, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(payload.password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?
        .to_string();

    let now = chrono::Utc::now().naive_utc();
    let new_user = user::ActiveModel {
        email: Set(payload.email),
        password_hash: Set(password_hash),
        name: Set(payload.name),
        is_admin: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let created = match new_user.insert(&db).await {
        Ok(u) => u,
        Err(e) if e.to_string().contains("duplicate key value violates unique constraint") => {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }
        Err(e) => return Err(AppError::Database(e)),
    };

    tracing::Span::current()
        .record("table", "users")
        .record("action", "register_user")
        .record("user_id", created.id)
        .record("user_email", created.email.as_str())
        .record("business_event", "User registered");
    metrics::counter!("petlify_users_registered_total").increment(1);
    metrics::gauge!("petlify_users_total").increment(1.0);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "User registered successfully",
            "user": {"id": created.id, "email": created.email, "name": created.name},
        })),
    )
        .into_response())
}

#[derive(serde::Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

pub async fn login(
    Extension(db): Extension<DatabaseConnection>,
    cookies: Cookies,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, AppError> {
    let found = user::Entity::find()
        .filter(user::Column::Email.eq(payload.email))
        .one(&db)
        .await?;
    let Some(account) = found else {
        return Ok(invalid_credentials());
    };

    let parsed_hash = PasswordHash::new(&account.password_hash)
        .map_err(|e| AppError::Internal(format!("stored password hash unreadable: {e}")))?;

    if Argon2::default()
        .verify_password(payload.password.as_bytes(), &parsed_hash)
        .is_err()
    {
        tracing::Span::current()
            .record("action", "login_failed")
            .record("error", "invalid_credentials");
        return Ok(invalid_credentials());
    }

    let mut cookie = Cookie::new(SESSION_COOKIE, account.id.to_string());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookies.add(cookie);

    tracing::Span::current()
        .record("table", "users")
        .record("action", "login_user")
        .record("user_id", account.id)
        .record("user_email", account.email.as_str())
        .record("business_event", "User logged in");

    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "Login successful",
            "user": {
                "id": account.id,
                "email": account.email,
                "name": account.name,
                "isAdmin": account.is_admin,
            },
        })),
    )
        .into_response())
}

fn invalid_credentials() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": "Invalid email or password"})),
    )
        .into_response()
}
