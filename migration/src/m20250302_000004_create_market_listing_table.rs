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
                    .table(MarketListing::Table)
                    .if_not_exists()
                    .col(pk_auto(MarketListing::Id))
                    .col(integer(MarketListing::HorseId))
                    .col(integer(MarketListing::SellerId))
                    .col(double(MarketListing::Price))
                    .col(text_null(MarketListing::Description))
                    .col(string(MarketListing::Status).default("Active"))
                    .col(boolean(MarketListing::IsNegotiable).default(true))
                    .col(string(MarketListing::Location))
                    .col(
                        timestamp_with_time_zone(MarketListing::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(MarketListing::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_market_listing_horse_id")
                            .from(MarketListing::Table, MarketListing::HorseId)
                            .to(Horse::Table, Horse::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_market_listing_seller_id")
                            .from(MarketListing::Table, MarketListing::SellerId)
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
                    .name("idx_market_listing_status")
                    .table(MarketListing::Table)
                    .col(MarketListing::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MarketListing::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MarketListing {
    #[sea_orm(iden = "market_listings")]
    Table,
    Id,
    HorseId,
    SellerId,
    Price,
    Description,
    Status,
    IsNegotiable,
    Location,
    CreatedAt,
    UpdatedAt,
}
