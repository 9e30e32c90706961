use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::deserialize_some;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateUserDto {
    pub email: String,
    pub username: String,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateUserDto {
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub full_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub phone_number: Option<Option<String>>,
    pub password: Option<String>,
}
