use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ListingStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{default_true, deserialize_some, horse::HorseDto, user::UserDto};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MarketListingDto {
    pub id: i32,
    pub horse_id: i32,
    pub seller_id: i32,
    pub price: f64,
    pub description: Option<String>,
    pub is_negotiable: bool,
    pub location: String,
    #[schema(value_type = String, example = "Active")]
    pub status: ListingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub horse: Option<HorseDto>,
    pub seller: Option<UserDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateMarketListingDto {
    pub horse_id: i32,
    pub price: f64,
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_negotiable: bool,
    pub location: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateMarketListingDto {
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    pub is_negotiable: Option<bool>,
    pub location: Option<String>,
    #[schema(value_type = Option<String>)]
    pub status: Option<ListingStatus>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TransactionDto {
    pub id: i32,
    pub listing_id: i32,
    pub buyer_id: i32,
    pub final_price: f64,
    pub payment_method: String,
    pub payment_status: String,
    pub transaction_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateTransactionDto {
    pub listing_id: i32,
    pub final_price: f64,
    pub payment_method: String,
    pub payment_status: String,
    pub transaction_notes: Option<String>,
}
