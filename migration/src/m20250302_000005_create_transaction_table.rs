use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::User,
    m20250302_000004_create_market_listing_table::MarketListing,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transaction::Table)
                    .if_not_exists()
                    .col(pk_auto(Transaction::Id))
                    .col(integer(Transaction::ListingId))
                    .col(integer(Transaction::BuyerId))
                    .col(double(Transaction::FinalPrice))
                    .col(string(Transaction::PaymentMethod))
                    .col(string(Transaction::PaymentStatus))
                    .col(text_null(Transaction::TransactionNotes))
                    .col(
                        timestamp_with_time_zone(Transaction::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Transaction::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transaction_listing_id")
                            .from(Transaction::Table, Transaction::ListingId)
                            .to(MarketListing::Table, MarketListing::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transaction_buyer_id")
                            .from(Transaction::Table, Transaction::BuyerId)
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
            .drop_table(Table::drop().table(Transaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Transaction {
    #[sea_orm(iden = "transactions")]
    Table,
    Id,
    ListingId,
    BuyerId,
    FinalPrice,
    PaymentMethod,
    PaymentStatus,
    TransactionNotes,
    CreatedAt,
    UpdatedAt,
}
