use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::User,
    m20250303_000006_create_rental_listing_table::RentalListing,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RentalBooking::Table)
                    .if_not_exists()
                    .col(pk_auto(RentalBooking::Id))
                    .col(integer(RentalBooking::RentalListingId))
                    .col(integer(RentalBooking::RenterId))
                    .col(timestamp_with_time_zone(RentalBooking::StartDate))
                    .col(timestamp_with_time_zone(RentalBooking::EndDate))
                    .col(string(RentalBooking::DurationType))
                    .col(double(RentalBooking::TotalPrice))
                    .col(string(RentalBooking::Status).default("Pending"))
                    .col(text_null(RentalBooking::SpecialRequests))
                    .col(string_null(RentalBooking::PaymentStatus))
                    .col(
                        timestamp_with_time_zone(RentalBooking::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(RentalBooking::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_booking_listing_id")
                            .from(RentalBooking::Table, RentalBooking::RentalListingId)
                            .to(RentalListing::Table, RentalListing::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_booking_renter_id")
                            .from(RentalBooking::Table, RentalBooking::RenterId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RentalBooking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RentalBooking {
    #[sea_orm(iden = "rental_bookings")]
    Table,
    Id,
    RentalListingId,
    RenterId,
    StartDate,
    EndDate,
    DurationType,
    TotalPrice,
    Status,
    SpecialRequests,
    PaymentStatus,
    CreatedAt,
    UpdatedAt,
}
