use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{HorseBreed, HorseGender};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::deserialize_some;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct HorseImageDto {
    pub id: i32,
    pub horse_id: i32,
    pub image_url: String,
    pub is_primary: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateHorseImageDto {
    pub image_url: String,
    #[serde(default)]
    pub is_primary: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct HorseDto {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    #[schema(value_type = String, example = "Arabian")]
    pub breed: HorseBreed,
    pub age: i32,
    #[schema(value_type = String, example = "Mare")]
    pub gender: HorseGender,
    pub color: String,
    /// Height in hands.
    pub height: Option<f64>,
    /// Weight in kilograms.
    pub weight: Option<f64>,
    pub description: Option<String>,
    pub training_level: Option<String>,
    pub health_records: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub images: Vec<HorseImageDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateHorseDto {
    pub name: String,
    #[schema(value_type = String, example = "Arabian")]
    pub breed: HorseBreed,
    pub age: i32,
    #[schema(value_type = String, example = "Mare")]
    pub gender: HorseGender,
    pub color: String,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub description: Option<String>,
    pub training_level: Option<String>,
    pub health_records: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateHorseDto {
    pub name: Option<String>,
    #[schema(value_type = Option<String>)]
    pub breed: Option<HorseBreed>,
    pub age: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub gender: Option<HorseGender>,
    pub color: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<f64>)]
    pub height: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<f64>)]
    pub weight: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub training_level: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub health_records: Option<Option<String>>,
}
