//! Rental listing factory for creating test rental offers.

use chrono::Utc;
use entity::sea_orm_active_enums::RentalStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating rental listings for an existing horse and owner.
pub struct RentalListingFactory<'a> {
    db: &'a DatabaseConnection,
    horse_id: i32,
    owner_id: i32,
    price_per_hour: Option<f64>,
    price_per_day: Option<f64>,
    price_per_week: Option<f64>,
    price_per_month: Option<f64>,
    status: RentalStatus,
    location: String,
    available_durations: String,
}

impl<'a> RentalListingFactory<'a> {
    /// Creates a new factory with defaults: daily `100.0`, weekly `600.0`,
    /// no hourly or monthly price, status `Available`, location `"Ocala"`.
    pub fn new(db: &'a DatabaseConnection, horse_id: i32, owner_id: i32) -> Self {
        Self {
            db,
            horse_id,
            owner_id,
            price_per_hour: None,
            price_per_day: Some(100.0),
            price_per_week: Some(600.0),
            price_per_month: None,
            status: RentalStatus::Available,
            location: "Ocala".to_string(),
            available_durations: "Daily,Weekly".to_string(),
        }
    }

    pub fn price_per_hour(mut self, price: Option<f64>) -> Self {
        self.price_per_hour = price;
        self
    }

    pub fn price_per_day(mut self, price: Option<f64>) -> Self {
        self.price_per_day = price;
        self
    }

    pub fn price_per_week(mut self, price: Option<f64>) -> Self {
        self.price_per_week = price;
        self
    }

    pub fn price_per_month(mut self, price: Option<f64>) -> Self {
        self.price_per_month = price;
        self
    }

    pub fn status(mut self, status: RentalStatus) -> Self {
        self.status = status;
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn available_durations(mut self, durations: impl Into<String>) -> Self {
        self.available_durations = durations.into();
        self
    }

    pub async fn build(self) -> Result<entity::rental_listing::Model, DbErr> {
        let now = Utc::now();
        entity::rental_listing::ActiveModel {
            horse_id: ActiveValue::Set(self.horse_id),
            owner_id: ActiveValue::Set(self.owner_id),
            price_per_hour: ActiveValue::Set(self.price_per_hour),
            price_per_day: ActiveValue::Set(self.price_per_day),
            price_per_week: ActiveValue::Set(self.price_per_week),
            price_per_month: ActiveValue::Set(self.price_per_month),
            description: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            location: ActiveValue::Set(self.location),
            requirements: ActiveValue::Set(None),
            available_durations: ActiveValue::Set(self.available_durations),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available rental listing with default prices.
pub async fn create_rental_listing(
    db: &DatabaseConnection,
    horse_id: i32,
    owner_id: i32,
) -> Result<entity::rental_listing::Model, DbErr> {
    RentalListingFactory::new(db, horse_id, owner_id).build().await
}
