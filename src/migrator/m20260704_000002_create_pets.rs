use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Pets::SubmittedBy).integer().not_null())
                    .col(ColumnDef::new(Pets::Name).string().not_null())
                    .col(ColumnDef::new(Pets::Species).string().not_null())
                    .col(ColumnDef::new(Pets::Breed).string().not_null())
                    .col(ColumnDef::new(Pets::Age).integer().not_null())
                    .col(ColumnDef::new(Pets::Description).text().not_null())
                    .col(ColumnDef::new(Pets::Gender).string())
                    .col(ColumnDef::new(Pets::Size).string())
                    .col(ColumnDef::new(Pets::Color).string())
                    .col(ColumnDef::new(Pets::Weight).double())
                    .col(
                        ColumnDef::new(Pets::IsVaccinated)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Pets::IsNeutered)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Pets::IsHouseTrained)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Pets::HealthIssues).text())
                    .col(ColumnDef::new(Pets::SpecialNeeds).text())
                    .col(ColumnDef::new(Pets::Temperament).string())
                    .col(ColumnDef::new(Pets::EnergyLevel).string())
                    .col(ColumnDef::new(Pets::OwnerMobile).string())
                    .col(ColumnDef::new(Pets::OwnerAddress).text())
                    .col(ColumnDef::new(Pets::OwnerCity).string())
                    .col(ColumnDef::new(Pets::OwnerState).string())
                    .col(ColumnDef::new(Pets::OwnerZipCode).string())
                    .col(ColumnDef::new(Pets::ReasonForRehoming).text())
                    .col(ColumnDef::new(Pets::RehomingUrgency).string())
                    .col(ColumnDef::new(Pets::Images).json_binary().not_null())
                    .col(ColumnDef::new(Pets::Status).string().not_null())
                    .col(ColumnDef::new(Pets::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Pets::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-pet-submitted_by")
                            .from(Pets::Table, Pets::SubmittedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Catalog browsing filters on status, newest first.
        manager
            .create_index(
                Index::create()
                    .name("idx-pets-status-created_at")
                    .table(Pets::Table)
                    .col(Pets::Status)
                    .col(Pets::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Pets {
    Table,
    Id,
    SubmittedBy,
    Name,
    Species,
    Breed,
    Age,
    Description,
    Gender,
    Size,
    Color,
    Weight,
    IsVaccinated,
    IsNeutered,
    IsHouseTrained,
    HealthIssues,
    SpecialNeeds,
    Temperament,
    EnergyLevel,
    OwnerMobile,
    OwnerAddress,
    OwnerCity,
    OwnerState,
    OwnerZipCode,
    ReasonForRehoming,
    RehomingUrgency,
    Images,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
