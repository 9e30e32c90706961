//! Registration and password login.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::{NewUser, UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, User},
    service::user::map_unique_violation,
    util::password::{hash_password, verify_password},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// Email and username are checked up front so the common duplicate case gets a
    /// specific message; a concurrent duplicate still surfaces as a unique violation
    /// and maps to the same status.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - Email or username already taken; no row is created
    pub async fn register(&self, params: CreateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }
        if user_repo.find_by_username(&params.username).await?.is_some() {
            return Err(AppError::Conflict("Username already taken".to_string()));
        }

        let hashed_password = hash_password(&params.password).await?;

        let user = user_repo
            .create(NewUser {
                email: params.email,
                username: params.username,
                hashed_password,
                full_name: params.full_name,
                phone_number: params.phone_number,
            })
            .await
            .map_err(map_unique_violation)?;

        tracing::info!("Registered user {} ({})", user.id, user.username);

        Ok(user)
    }

    /// Checks an email and password pair.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match an active user
    /// - `Err(AuthError::IncorrectCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::InactiveLogin)` - Credentials match but the account is inactive
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_email(email).await? else {
            return Err(AuthError::IncorrectCredentials.into());
        };

        if !verify_password(password, &user.hashed_password).await? {
            return Err(AuthError::IncorrectCredentials.into());
        }

        if !user.is_active {
            return Err(AuthError::InactiveLogin(user.id).into());
        }

        Ok(user)
    }
}
