use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::ListingStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "market_listings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub horse_id: i32,
    pub seller_id: i32,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub status: ListingStatus,
    pub is_negotiable: bool,
    pub location: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::horse::Entity",
        from = "Column::HorseId",
        to = "super::horse::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Horse,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::SellerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::horse::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Horse.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
