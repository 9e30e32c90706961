use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub listing_id: i32,
    pub buyer_id: i32,
    #[sea_orm(column_type = "Double")]
    pub final_price: f64,
    pub payment_method: String,
    pub payment_status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub transaction_notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::market_listing::Entity",
        from = "Column::ListingId",
        to = "super::market_listing::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MarketListing,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::BuyerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::market_listing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MarketListing.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
