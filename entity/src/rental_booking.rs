use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{BookingStatus, RentalDuration};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rental_bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rental_listing_id: i32,
    pub renter_id: i32,
    pub start_date: DateTimeUtc,
    pub end_date: DateTimeUtc,
    pub duration_type: RentalDuration,
    #[sea_orm(column_type = "Double")]
    pub total_price: f64,
    pub status: BookingStatus,
    #[sea_orm(column_type = "Text", nullable)]
    pub special_requests: Option<String>,
    pub payment_status: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rental_listing::Entity",
        from = "Column::RentalListingId",
        to = "super::rental_listing::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    RentalListing,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::RenterId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::rental_listing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RentalListing.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
