use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::token::TokenService,
};

/// Resolves the bearer token on a request to an active user.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Requires a valid bearer token belonging to an active user.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::MissingToken | InvalidToken | UserNotFound)` - 401 Unauthorized
    /// - `Err(AuthError::InactiveUser)` - 403 Forbidden
    pub async fn require(&self, headers: &HeaderMap) -> Result<User, AppError> {
        let token = bearer_token(headers).ok_or(AuthError::MissingToken)?;
        let user_id = self.tokens.verify(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotFound(user_id).into());
        };

        if !user.is_active {
            return Err(AuthError::InactiveUser(user_id).into());
        }

        Ok(user)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))?
        .trim();

    (!token.is_empty()).then_some(token)
}
