use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Horse::Table)
                    .if_not_exists()
                    .col(pk_auto(Horse::Id))
                    .col(integer(Horse::OwnerId))
                    .col(string_len(Horse::Name, 100))
                    .col(string(Horse::Breed))
                    .col(integer(Horse::Age))
                    .col(string(Horse::Gender))
                    .col(string(Horse::Color))
                    .col(double_null(Horse::Height))
                    .col(double_null(Horse::Weight))
                    .col(text_null(Horse::Description))
                    .col(string_null(Horse::TrainingLevel))
                    .col(text_null(Horse::HealthRecords))
                    .col(
                        timestamp_with_time_zone(Horse::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Horse::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_horse_owner_id")
                            .from(Horse::Table, Horse::OwnerId)
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
                    .name("idx_horse_owner_id")
                    .table(Horse::Table)
                    .col(Horse::OwnerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Horse::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Horse {
    #[sea_orm(iden = "horses")]
    Table,
    Id,
    OwnerId,
    Name,
    Breed,
    Age,
    Gender,
    Color,
    Height,
    Weight,
    Description,
    TrainingLevel,
    HealthRecords,
    CreatedAt,
    UpdatedAt,
}
