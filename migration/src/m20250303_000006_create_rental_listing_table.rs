use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::User, m20250301_000002_create_horse_table::Horse,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RentalListing::Table)
                    .if_not_exists()
                    .col(pk_auto(RentalListing::Id))
                    .col(integer(RentalListing::HorseId))
                    .col(integer(RentalListing::OwnerId))
                    .col(double_null(RentalListing::PricePerHour))
                    .col(double_null(RentalListing::PricePerDay))
                    .col(double_null(RentalListing::PricePerWeek))
                    .col(double_null(RentalListing::PricePerMonth))
                    .col(text_null(RentalListing::Description))
                    .col(string(RentalListing::Status).default("Available"))
                    .col(string(RentalListing::Location))
                    .col(text_null(RentalListing::Requirements))
                    .col(string(RentalListing::AvailableDurations))
                    .col(
                        timestamp_with_time_zone(RentalListing::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(RentalListing::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_listing_horse_id")
                            .from(RentalListing::Table, RentalListing::HorseId)
                            .to(Horse::Table, Horse::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_listing_owner_id")
                            .from(RentalListing::Table, RentalListing::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rental_listing_status")
                    .table(RentalListing::Table)
                    .col(RentalListing::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RentalListing::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RentalListing {
    #[sea_orm(iden = "rental_listings")]
    Table,
    Id,
    HorseId,
    OwnerId,
    PricePerHour,
    PricePerDay,
    PricePerWeek,
    PricePerMonth,
    Description,
    Status,
    Location,
    Requirements,
    AvailableDurations,
    CreatedAt,
    UpdatedAt,
}
