use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_horse_table::Horse;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HorseImage::Table)
                    .if_not_exists()
                    .col(pk_auto(HorseImage::Id))
                    .col(integer(HorseImage::HorseId))
                    .col(string(HorseImage::ImageUrl))
                    .col(boolean(HorseImage::IsPrimary).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_horse_image_horse_id")
                            .from(HorseImage::Table, HorseImage::HorseId)
                            .to(Horse::Table, Horse::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HorseImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HorseImage {
    #[sea_orm(iden = "horse_images")]
    Table,
    Id,
    HorseId,
    ImageUrl,
    IsPrimary,
}
