use axum::{response::IntoResponse, Json};

use crate::model::api::ApiInfoDto;

pub static ROOT_TAG: &str = "root";

/// Service banner with the running version and where to find the API docs.
#[utoipa::path(
    get,
    path = "/",
    tag = ROOT_TAG,
    responses(
        (status = 200, description = "Service banner", body = ApiInfoDto)
    ),
)]
pub async fn root() -> impl IntoResponse {
    Json(ApiInfoDto {
        message: "Welcome to the Horse Board API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        docs_url: "/docs".to_string(),
    })
}
