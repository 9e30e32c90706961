use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{UpdateUserDto, UserDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::user::UpdateUserParams,
        service::user::UserService, state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "users";

/// Get the authenticated user.
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Inactive user", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    Ok(Json(user.into_dto()))
}

/// Partially update the authenticated user.
///
/// Only fields present in the body are changed. A new password is hashed before it
/// is stored.
///
/// # Returns
/// - `200 OK` - The updated user
/// - `401 Unauthorized` - Missing or invalid token
/// - `409 Conflict` - Email belongs to another user
/// - `422 Unprocessable Entity` - Invalid email or password
#[utoipa::path(
    put,
    path = "/api/v1/users/me",
    tag = USER_TAG,
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 422, description = "Invalid user data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let params = UpdateUserParams::from_dto(payload)?;

    let updated = UserService::new(&state.db).update(&user, params).await?;

    Ok(Json(updated.into_dto()))
}

/// Get a user by id.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let user = UserService::new(&state.db).get_by_id(user_id).await?;

    Ok(Json(user.into_dto()))
}
