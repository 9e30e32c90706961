use axum::{extract::State, http::StatusCode, response::IntoResponse, Form, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, TokenDto},
        user::{CreateUserDto, UserDto},
    },
    server::{
        error::AppError, model::user::CreateUserParams, service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Exchange an email and password for a bearer token.
///
/// The form's `username` field carries the email address.
///
/// # Returns
/// - `200 OK` - Access token with `token_type` "bearer"
/// - `400 Bad Request` - Incorrect email or password, or inactive account
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = AUTH_TAG,
    request_body(content = LoginDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Successfully logged in", body = TokenDto),
        (status = 400, description = "Incorrect email or password, or inactive user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Form(payload): Form<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .authenticate(&payload.username, &payload.password)
        .await?;

    let access_token = state.tokens.issue(user.id)?;

    Ok(Json(TokenDto {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

/// Register a new user account.
///
/// # Returns
/// - `201 Created` - The new user
/// - `409 Conflict` - Email or username already taken
/// - `422 Unprocessable Entity` - Invalid email, username or password
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = AUTH_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully registered", body = UserDto),
        (status = 409, description = "Email or username already registered", body = ErrorDto),
        (status = 422, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateUserParams::from_dto(payload)?;

    let user = AuthService::new(&state.db).register(params).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}
