use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::RentalStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rental_listings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub horse_id: i32,
    pub owner_id: i32,
    #[sea_orm(column_type = "Double", nullable)]
    pub price_per_hour: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub price_per_day: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub price_per_week: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub price_per_month: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub status: RentalStatus,
    pub location: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub requirements: Option<String>,
    /// Comma-separated `RentalDuration` values.
    pub available_durations: String,
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
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::rental_booking::Entity")]
    RentalBooking,
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

impl Related<super::rental_booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RentalBooking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
