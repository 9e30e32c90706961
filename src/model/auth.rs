use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// OAuth2 password-grant style login form. `username` carries the email address.
#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct TokenDto {
    pub access_token: String,
    pub token_type: String,
}
