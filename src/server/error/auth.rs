use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request to a guarded route carried no `Authorization: Bearer` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token failed signature, expiry or subject validation.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// Token subject does not resolve to a stored user.
    #[error("User {0} from token not found in database")]
    UserNotFound(i32),

    /// Token is valid but its user has been deactivated.
    #[error("User {0} is inactive")]
    InactiveUser(i32),

    /// Login attempt with an unknown email or a wrong password.
    #[error("Incorrect email or password")]
    IncorrectCredentials,

    /// Login attempt for a deactivated account.
    #[error("Login attempt for inactive user {0}")]
    InactiveLogin(i32),

    /// Authenticated user acted on a record owned by someone else.
    ///
    /// # Fields
    /// - ID of the user who attempted the action
    /// - Description of what was attempted, for the server log only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `UserNotFound` → 401 Unauthorized with "Could not validate credentials"
/// - `InactiveUser` / `AccessDenied` → 403 Forbidden
/// - `IncorrectCredentials` / `InactiveLogin` → 400 Bad Request
///
/// Details are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotFound(_) => (
                StatusCode::UNAUTHORIZED,
                "Could not validate credentials",
            ),
            Self::InactiveUser(_) => (StatusCode::FORBIDDEN, "Inactive user"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Not enough permissions"),
            Self::IncorrectCredentials => (StatusCode::BAD_REQUEST, "Incorrect email or password"),
            Self::InactiveLogin(_) => (StatusCode::BAD_REQUEST, "Inactive user"),
        };

        let mut response = (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response();

        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                axum::http::header::WWW_AUTHENTICATE,
                axum::http::HeaderValue::from_static("Bearer"),
            );
        }

        response
    }
}
