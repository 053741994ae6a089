use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};

use crate::entities::{adoption_request, pet, user};

/// Seeds the business gauges from current table counts so dashboards start
/// from the truth rather than zero after a restart.
pub async fn init_metrics(db: &DatabaseConnection) {
    let user_count = user::Entity::find().count(db).await.unwrap_or(0);
    metrics::gauge!("petlify_users_total").set(user_count as f64);

    let pet_count = pet::Entity::find().count(db).await.unwrap_or(0);
    metrics::gauge!("petlify_pets_total").set(pet_count as f64);

    let request_count = adoption_request::Entity::find().count(db).await.unwrap_or(0);
    metrics::gauge!("petlify_adoption_requests_total").set(request_count as f64);

    let pending_count = adoption_request::Entity::find()
        .filter(adoption_request::Column::Status.eq("pending"))
        .count(db)
        .await
        .unwrap_or(0);
    metrics::gauge!("petlify_adoption_requests_pending").set(pending_count as f64);

    tracing::info!(
        "Initialized metrics: Users={}, Pets={}, AdoptionRequests={} ({} pending)",
        user_count,
        pet_count,
        request_count,
        pending_count
    );
}
