//! Market listing factory for creating test sale listings.

use chrono::Utc;
use entity::sea_orm_active_enums::ListingStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating sale listings for an existing horse and seller.
pub struct MarketListingFactory<'a> {
    db: &'a DatabaseConnection,
    horse_id: i32,
    seller_id: i32,
    price: f64,
    status: ListingStatus,
    is_negotiable: bool,
    location: String,
}

impl<'a> MarketListingFactory<'a> {
    /// Creates a new factory with defaults: price `5000.0`, status `Active`,
    /// negotiable, location `"Lexington"`.
    pub fn new(db: &'a DatabaseConnection, horse_id: i32, seller_id: i32) -> Self {
        Self {
            db,
            horse_id,
            seller_id,
            price: 5000.0,
            status: ListingStatus::Active,
            is_negotiable: true,
            location: "Lexington".to_string(),
        }
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn status(mut self, status: ListingStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_negotiable(mut self, is_negotiable: bool) -> Self {
        self.is_negotiable = is_negotiable;
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub async fn build(self) -> Result<entity::market_listing::Model, DbErr> {
        let now = Utc::now();
        entity::market_listing::ActiveModel {
            horse_id: ActiveValue::Set(self.horse_id),
            seller_id: ActiveValue::Set(self.seller_id),
            price: ActiveValue::Set(self.price),
            description: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            is_negotiable: ActiveValue::Set(self.is_negotiable),
            location: ActiveValue::Set(self.location),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active sale listing with default values.
pub async fn create_market_listing(
    db: &DatabaseConnection,
    horse_id: i32,
    seller_id: i32,
) -> Result<entity::market_listing::Model, DbErr> {
    MarketListingFactory::new(db, horse_id, seller_id).build().await
}
