use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One applicant's petition to adopt one pet. `pet_id` and `user_id` are
/// immutable after creation; `status` is the only administrator-mutable
/// field and `updated_at` tracks every mutation.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "adoption_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pet_id: i32,
    pub user_id: i32,
    pub applicant_name: String,
    pub applicant_email: String,
    pub applicant_phone: String,
    pub applicant_age: i32,
    pub applicant_occupation: String,
    #[sea_orm(column_type = "Text")]
    pub applicant_address: String,
    pub applicant_city: String,
    pub applicant_state: String,
    pub applicant_zip_code: String,
    pub living_situation: String,
    pub housing_type: String,
    pub landlord_approval: bool,
    pub landlord_contact: Option<String>,
    pub household_members: i32,
    pub children_ages: Option<String>,
    pub other_pets: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub other_pets_details: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub pet_experience: String,
    pub pet_alone_hours: i32,
    #[sea_orm(column_type = "Text")]
    pub pet_exercise_plan: String,
    #[sea_orm(column_type = "Text")]
    pub pet_training_plan: String,
    #[sea_orm(column_type = "Text")]
    pub financial_commitment: String,
    #[sea_orm(column_type = "Text")]
    pub time_commitment: String,
    #[sea_orm(column_type = "Text")]
    pub adoption_motivation: String,
    #[sea_orm(column_type = "Text")]
    pub pet_expectations: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub additional_info: Option<String>,
    pub status: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pet::Entity",
        from = "Column::PetId",
        to = "super::pet::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Pet,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::pet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pet.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
