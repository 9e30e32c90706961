//! User data repository for database operations.
//!
//! Lookups by id, email and username, plus creation and partial updates through the
//! generic `CrudRepository`. Passwords arrive here already hashed.

use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::{
    data::crud::{CrudRepository, Patch},
    model::user::User,
};

/// Fields of a new user row.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub hashed_password: String,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
}

/// Partial user update with the password already hashed.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub email: Option<String>,
    pub full_name: Option<Option<String>>,
    pub phone_number: Option<Option<String>>,
    pub hashed_password: Option<String>,
}

impl Patch<entity::user::ActiveModel> for UserChanges {
    fn apply(self, active: &mut entity::user::ActiveModel) {
        if let Some(email) = self.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(full_name) = self.full_name {
            active.full_name = ActiveValue::Set(full_name);
        }
        if let Some(phone_number) = self.phone_number {
            active.phone_number = ActiveValue::Set(phone_number);
        }
        if let Some(hashed_password) = self.hashed_password {
            active.hashed_password = ActiveValue::Set(hashed_password);
        }
    }
}

/// Repository providing database operations for users.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn crud(&self) -> CrudRepository<'a, entity::prelude::User> {
        CrudRepository::new(self.db)
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = self.crud().get(user_id).await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds every user in `user_ids`, used to embed sellers and owners in listings.
    pub async fn find_many(&self, user_ids: Vec<i32>) -> Result<Vec<User>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Inserts a new active, unverified user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations on email or username
    pub async fn create(&self, user: NewUser) -> Result<User, DbErr> {
        let entity = self
            .crud()
            .create(entity::user::ActiveModel {
                email: ActiveValue::Set(user.email),
                username: ActiveValue::Set(user.username),
                hashed_password: ActiveValue::Set(user.hashed_password),
                full_name: ActiveValue::Set(user.full_name),
                phone_number: ActiveValue::Set(user.phone_number),
                is_active: ActiveValue::Set(true),
                is_verified: ActiveValue::Set(false),
                ..Default::default()
            })
            .await?;

        Ok(User::from_entity(entity))
    }

    /// Applies a partial update to a user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, user_id: i32, changes: UserChanges) -> Result<Option<User>, DbErr> {
        let crud = self.crud();
        let Some(existing) = crud.get(user_id).await? else {
            return Ok(None);
        };

        let entity = crud.update(existing, changes).await?;

        Ok(Some(User::from_entity(entity)))
    }
}
