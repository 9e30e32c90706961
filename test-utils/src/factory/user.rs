//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Plain-text password every factory user can log in with unless overridden.
pub const DEFAULT_PASSWORD: &str = "correct-horse-battery";

/// bcrypt cost used for factory hashes; the minimum keeps tests fast.
const TEST_BCRYPT_COST: u32 = 4;

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("rider@example.com")
///     .is_active(false)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    username: String,
    password: String,
    full_name: Option<String>,
    is_active: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"` where id is auto-incremented
    /// - username: `"user{id}"`
    /// - password: [`DEFAULT_PASSWORD`]
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            username: format!("user{}", id),
            password: DEFAULT_PASSWORD.to_string(),
            full_name: None,
            is_active: true,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert, or the password could not be hashed
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let hashed_password = bcrypt::hash(&self.password, TEST_BCRYPT_COST)
            .map_err(|e| DbErr::Custom(e.to_string()))?;
        let now = Utc::now();

        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            username: ActiveValue::Set(self.username),
            hashed_password: ActiveValue::Set(hashed_password),
            full_name: ActiveValue::Set(self.full_name),
            phone_number: ActiveValue::Set(None),
            is_active: ActiveValue::Set(self.is_active),
            is_verified: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
