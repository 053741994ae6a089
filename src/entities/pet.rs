use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A rehoming listing. `status` is one of pending/approved/rejected/adopted;
/// only approved listings are shown to the public catalog.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "pets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub submitted_by: i32,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub gender: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub weight: Option<f64>,
    pub is_vaccinated: bool,
    pub is_neutered: bool,
    pub is_house_trained: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub health_issues: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub special_needs: Option<String>,
    pub temperament: Option<String>,
    pub energy_level: Option<String>,
    pub owner_mobile: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub owner_address: Option<String>,
    pub owner_city: Option<String>,
    pub owner_state: Option<String>,
    pub owner_zip_code: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub reason_for_rehoming: Option<String>,
    pub rehoming_urgency: Option<String>,
    /// Blob-store URLs, at most five per listing.
    pub images: Json,
    pub status: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::SubmittedBy",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::adoption_request::Entity")]
    AdoptionRequest,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::adoption_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AdoptionRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
