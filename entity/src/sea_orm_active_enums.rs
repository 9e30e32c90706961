//! Enumerations stored as their display strings.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum HorseBreed {
    #[sea_orm(string_value = "Arabian")]
    Arabian,
    #[sea_orm(string_value = "Thoroughbred")]
    Thoroughbred,
    #[sea_orm(string_value = "Quarter Horse")]
    #[serde(rename = "Quarter Horse")]
    QuarterHorse,
    #[sea_orm(string_value = "Appaloosa")]
    Appaloosa,
    #[sea_orm(string_value = "Morgan")]
    Morgan,
    #[sea_orm(string_value = "Paint")]
    Paint,
    #[sea_orm(string_value = "Friesian")]
    Friesian,
    #[sea_orm(string_value = "Andalusian")]
    Andalusian,
    #[sea_orm(string_value = "Mustang")]
    Mustang,
    #[sea_orm(string_value = "Other")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum HorseGender {
    #[sea_orm(string_value = "Mare")]
    Mare,
    #[sea_orm(string_value = "Stallion")]
    Stallion,
    #[sea_orm(string_value = "Gelding")]
    Gelding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum ListingStatus {
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "Sold")]
    Sold,
    #[sea_orm(string_value = "Cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum RentalDuration {
    #[sea_orm(string_value = "Hourly")]
    Hourly,
    #[sea_orm(string_value = "Daily")]
    Daily,
    #[sea_orm(string_value = "Weekly")]
    Weekly,
    #[sea_orm(string_value = "Monthly")]
    Monthly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum RentalStatus {
    #[sea_orm(string_value = "Available")]
    Available,
    #[sea_orm(string_value = "Booked")]
    Booked,
    #[sea_orm(string_value = "Unavailable")]
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum BookingStatus {
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "Confirmed")]
    Confirmed,
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "Completed")]
    Completed,
    #[sea_orm(string_value = "Cancelled")]
    Cancelled,
}
