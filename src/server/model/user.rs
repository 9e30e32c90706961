//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::{error::AppError, model::validate},
};

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Registered account. Carries the password hash, which never leaves the server.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub hashed_password: String,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            username: self.username,
            full_name: self.full_name,
            phone_number: self.phone_number,
            is_active: self.is_active,
            is_verified: self.is_verified,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            username: entity.username,
            hashed_password: entity.hashed_password,
            full_name: entity.full_name,
            phone_number: entity.phone_number,
            is_active: entity.is_active,
            is_verified: entity.is_verified,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Validated registration data. The password is still plaintext here.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub username: String,
    pub password: String,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
}

impl CreateUserParams {
    /// Validates a registration payload.
    ///
    /// # Returns
    /// - `Ok(CreateUserParams)` - Payload passed validation
    /// - `Err(AppError::Validation)` - Malformed email, username outside 3-50 characters,
    ///   or password shorter than 8 characters
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        validate::email("email", &dto.email)?;
        validate::length("username", &dto.username, 3, 50)?;
        validate::min_length("password", &dto.password, MIN_PASSWORD_LENGTH)?;

        Ok(Self {
            email: dto.email,
            username: dto.username,
            password: dto.password,
            full_name: dto.full_name,
            phone_number: dto.phone_number,
        })
    }
}

/// Partial update of the current user. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub email: Option<String>,
    pub full_name: Option<Option<String>>,
    pub phone_number: Option<Option<String>>,
    pub password: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Result<Self, AppError> {
        if let Some(email) = &dto.email {
            validate::email("email", email)?;
        }
        if let Some(password) = &dto.password {
            validate::min_length("password", password, MIN_PASSWORD_LENGTH)?;
        }

        Ok(Self {
            email: dto.email,
            full_name: dto.full_name,
            phone_number: dto.phone_number,
            password: dto.password,
        })
    }
}
