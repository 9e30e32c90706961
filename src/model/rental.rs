use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{BookingStatus, RentalDuration, RentalStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{deserialize_some, horse::HorseDto, user::UserDto};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RentalListingDto {
    pub id: i32,
    pub horse_id: i32,
    pub owner_id: i32,
    pub price_per_hour: Option<f64>,
    pub price_per_day: Option<f64>,
    pub price_per_week: Option<f64>,
    pub price_per_month: Option<f64>,
    pub description: Option<String>,
    pub location: String,
    pub requirements: Option<String>,
    /// Comma-separated duration values, e.g. `"Daily,Weekly"`.
    pub available_durations: String,
    #[schema(value_type = String, example = "Available")]
    pub status: RentalStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub horse: Option<HorseDto>,
    pub owner: Option<UserDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateRentalListingDto {
    pub horse_id: i32,
    pub price_per_hour: Option<f64>,
    pub price_per_day: Option<f64>,
    pub price_per_week: Option<f64>,
    pub price_per_month: Option<f64>,
    pub description: Option<String>,
    pub location: String,
    pub requirements: Option<String>,
    pub available_durations: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateRentalListingDto {
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<f64>)]
    pub price_per_hour: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<f64>)]
    pub price_per_day: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<f64>)]
    pub price_per_week: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<f64>)]
    pub price_per_month: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub requirements: Option<Option<String>>,
    pub available_durations: Option<String>,
    #[schema(value_type = Option<String>)]
    pub status: Option<RentalStatus>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RentalBookingDto {
    pub id: i32,
    pub rental_listing_id: i32,
    pub renter_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[schema(value_type = String, example = "Daily")]
    pub duration_type: RentalDuration,
    pub special_requests: Option<String>,
    pub total_price: f64,
    #[schema(value_type = String, example = "Pending")]
    pub status: BookingStatus,
    pub payment_status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub rental_listing: Option<RentalListingDto>,
    pub renter: Option<UserDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateRentalBookingDto {
    pub rental_listing_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[schema(value_type = String, example = "Daily")]
    pub duration_type: RentalDuration,
    pub special_requests: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateRentalBookingDto {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub special_requests: Option<Option<String>>,
    #[schema(value_type = Option<String>)]
    pub status: Option<BookingStatus>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub payment_status: Option<Option<String>>,
}
