use sea_orm_migration::prelude::*;

mod m20260704_000001_create_users;
mod m20260704_000002_create_pets;
mod m20260711_000001_create_adoption_requests;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260704_000001_create_users::Migration),
            Box::new(m20260704_000002_create_pets::Migration),
            Box::new(m20260711_000001_create_adoption_requests::Migration),
        ]
    }
}
