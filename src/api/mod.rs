pub mod adoptions;
pub mod auth;
pub mod middleware;
pub mod pets;

use axum::{
    routing::{get, post, put},
    Extension, Router,
};
use sea_orm::DatabaseConnection;

async fn health_check() -> &'static str {
    "OK"
}

/// The application router: routes, auth middleware, and shared extensions.
/// Observability layers (tracing span, prometheus, CORS) are stacked on top
/// by the server binary.
pub fn router(db: DatabaseConnection, gcs_client: google_cloud_storage::client::Client) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/pets", get(pets::list_pets))
        .route("/pets/featured", get(pets::featured_pets))
        .route("/pets/:id", get(pets::get_pet));

    let protected_routes = Router::new()
        .route("/pets", post(pets::submit_pet))
        .route("/pets/pending/submissions", get(pets::pending_submissions))
        .route("/pets/update-status", put(pets::update_pet_status))
        .route("/adoptions", post(adoptions::submit_request))
        .route("/adoptions/my-requests", get(adoptions::my_requests))
        .route("/adoptions/all", get(adoptions::all_requests))
        .route("/adoptions/pending", get(adoptions::pending_requests))
        .route("/adoptions/update-status", put(adoptions::update_request_status))
        .route_layer(axum::middleware::from_fn(middleware::auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(Extension(db))
        .layer(Extension(gcs_client))
        .layer(tower_cookies::CookieManagerLayer::new())
}
