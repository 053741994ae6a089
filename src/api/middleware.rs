use axum::{
    extract::{Extension, Request},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde_json::json;
use tower_cookies::Cookies;

use crate::entities::user;
use crate::principal::Principal;

pub const SESSION_COOKIE: &str = "petlify_session";

/// Resolves the session cookie to a `Principal` and injects it as a request
/// extension. The admin flag always reflects the current user row, not
/// whatever it was at login time.
pub async fn auth_middleware(
    Extension(db): Extension<DatabaseConnection>,
    cookies: Cookies,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(cookie) = cookies.get(SESSION_COOKIE) {
        if let Ok(user_id) = cookie.value().parse::<i32>() {
            match user::Entity::find_by_id(user_id).one(&db).await {
                Ok(Some(u)) => {
                    request
                        .extensions_mut()
                        .insert(Principal { user_id: u.id, is_admin: u.is_admin });
                    return next.run(request).await;
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::error!(error = %e, "session lookup failed");
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({"error": "Internal server error"})),
                    )
                        .into_response();
                }
            }
        }
    }
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": "Authentication required"})),
    )
        .into_response()
}
