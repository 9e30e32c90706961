//! User service for profile reads and updates.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::{UserChanges, UserRepository},
    error::AppError,
    model::user::{UpdateUserParams, User},
    util::password::hash_password,
};

/// Maps a unique-constraint violation on the users table to 409 Conflict.
pub(super) fn map_unique_violation(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict("Email or username already registered".to_string())
        }
        _ => AppError::DbErr(err),
    }
}

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Applies a partial update to the acting user, re-hashing a supplied password.
    ///
    /// # Arguments
    /// - `user` - The authenticated user being updated
    /// - `params` - Fields to overwrite
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::Conflict)` - New email already belongs to another user
    /// - `Err(AppError::NotFound)` - User was removed mid-request
    pub async fn update(&self, user: &User, params: UpdateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if let Some(email) = &params.email {
            if let Some(existing) = user_repo.find_by_email(email).await? {
                if existing.id != user.id {
                    return Err(AppError::Conflict("Email already registered".to_string()));
                }
            }
        }

        let hashed_password = match &params.password {
            Some(password) => Some(hash_password(password).await?),
            None => None,
        };

        let changes = UserChanges {
            email: params.email,
            full_name: params.full_name,
            phone_number: params.phone_number,
            hashed_password,
        };

        user_repo
            .update(user.id, changes)
            .await
            .map_err(map_unique_violation)?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
