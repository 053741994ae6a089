use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdoptionRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AdoptionRequests::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AdoptionRequests::PetId).integer().not_null())
                    .col(ColumnDef::new(AdoptionRequests::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(AdoptionRequests::ApplicantName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdoptionRequests::ApplicantEmail)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdoptionRequests::ApplicantPhone)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdoptionRequests::ApplicantAge)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdoptionRequests::ApplicantOccupation)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdoptionRequests::ApplicantAddress)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdoptionRequests::ApplicantCity)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdoptionRequests::ApplicantState)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdoptionRequests::ApplicantZipCode)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdoptionRequests::LivingSituation)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdoptionRequests::HousingType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdoptionRequests::LandlordApproval)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(AdoptionRequests::LandlordContact).string())
                    .col(
                        ColumnDef::new(AdoptionRequests::HouseholdMembers)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AdoptionRequests::ChildrenAges).string())
                    .col(
                        ColumnDef::new(AdoptionRequests::OtherPets)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(AdoptionRequests::OtherPetsDetails).text())
                    .col(
                        ColumnDef::new(AdoptionRequests::PetExperience)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdoptionRequests::PetAloneHours)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdoptionRequests::PetExercisePlan)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdoptionRequests::PetTrainingPlan)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdoptionRequests::FinancialCommitment)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdoptionRequests::TimeCommitment)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdoptionRequests::AdoptionMotivation)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdoptionRequests::PetExpectations)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AdoptionRequests::AdditionalInfo).text())
                    .col(ColumnDef::new(AdoptionRequests::Status).string().not_null())
                    .col(
                        ColumnDef::new(AdoptionRequests::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdoptionRequests::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-adoption_request-pet_id")
                            .from(AdoptionRequests::Table, AdoptionRequests::PetId)
                            .to(Pets::Table, Pets::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-adoption_request-user_id")
                            .from(AdoptionRequests::Table, AdoptionRequests::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-adoption_requests-user_id")
                    .table(AdoptionRequests::Table)
                    .col(AdoptionRequests::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-adoption_requests-status-created_at")
                    .table(AdoptionRequests::Table)
                    .col(AdoptionRequests::Status)
                    .col(AdoptionRequests::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // One open request per (pet, user). Terminal statuses fall outside the
        // index, so an applicant may re-apply after a rejection. This index,
        // not the service-level pre-check, is what actually holds the
        // invariant under concurrent submissions.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS \"uq_adoption_requests_open\" \
                 ON \"adoption_requests\" (\"pet_id\", \"user_id\") \
                 WHERE \"status\" IN ('pending', 'approved')",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdoptionRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AdoptionRequests {
    Table,
    Id,
    PetId,
    UserId,
    ApplicantName,
    ApplicantEmail,
    ApplicantPhone,
    ApplicantAge,
    ApplicantOccupation,
    ApplicantAddress,
    ApplicantCity,
    ApplicantState,
    ApplicantZipCode,
    LivingSituation,
    HousingType,
    LandlordApproval,
    LandlordContact,
    HouseholdMembers,
    ChildrenAges,
    OtherPets,
    OtherPetsDetails,
    PetExperience,
    PetAloneHours,
    PetExercisePlan,
    PetTrainingPlan,
    FinancialCommitment,
    TimeCommitment,
    AdoptionMotivation,
    PetExpectations,
    AdditionalInfo,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Pets {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
