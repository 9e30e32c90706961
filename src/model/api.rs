use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Banner returned from the service root.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ApiInfoDto {
    pub message: String,
    pub version: String,
    pub docs_url: String,
}
