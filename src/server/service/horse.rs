//! Horse service: ownership-checked horse and image operations.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::horse::HorseRepository,
    error::{auth::AuthError, AppError},
    model::{
        horse::{CreateHorseImageParams, CreateHorseParams, Horse, HorseImage, UpdateHorseParams},
        query::ListQuery,
    },
};

pub struct HorseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HorseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, owner_id: i32, params: CreateHorseParams) -> Result<Horse, AppError> {
        let horse = HorseRepository::new(self.db)
            .create_with_owner(owner_id, params)
            .await?;

        tracing::info!("User {} created horse {}", owner_id, horse.id);

        Ok(horse)
    }

    pub async fn list(&self, query: ListQuery) -> Result<Vec<Horse>, AppError> {
        Ok(HorseRepository::new(self.db).list(query).await?)
    }

    pub async fn get_by_owner(
        &self,
        owner_id: i32,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Horse>, AppError> {
        Ok(HorseRepository::new(self.db)
            .get_by_owner(owner_id, skip, limit)
            .await?)
    }

    /// Retrieves a horse with its images.
    ///
    /// # Returns
    /// - `Ok(Horse)` - Horse found
    /// - `Err(AppError::NotFound)` - No horse with that id
    pub async fn get_by_id(&self, horse_id: i32) -> Result<Horse, AppError> {
        HorseRepository::new(self.db)
            .get_by_id(horse_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Horse not found".to_string()))
    }

    /// Fetches a horse and requires `actor_id` to own it.
    ///
    /// # Returns
    /// - `Ok(Horse)` - Horse owned by the actor
    /// - `Err(AppError::NotFound)` - No horse with that id
    /// - `Err(AuthError::AccessDenied)` - Horse belongs to another user
    pub async fn get_owned(&self, actor_id: i32, horse_id: i32) -> Result<Horse, AppError> {
        let horse = self.get_by_id(horse_id).await?;

        if horse.owner_id != actor_id {
            return Err(AuthError::AccessDenied(
                actor_id,
                format!("attempted to act on horse {} owned by user {}", horse_id, horse.owner_id),
            )
            .into());
        }

        Ok(horse)
    }

    /// Applies a partial update to a horse owned by `actor_id`.
    ///
    /// # Returns
    /// - `Ok(Horse)` - The updated horse
    /// - `Err(AppError::NotFound)` - No horse with that id
    /// - `Err(AuthError::AccessDenied)` - Horse belongs to another user
    pub async fn update(
        &self,
        actor_id: i32,
        horse_id: i32,
        params: UpdateHorseParams,
    ) -> Result<Horse, AppError> {
        self.get_owned(actor_id, horse_id).await?;

        HorseRepository::new(self.db)
            .update(horse_id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Horse not found".to_string()))
    }

    pub async fn add_image(
        &self,
        actor_id: i32,
        horse_id: i32,
        params: CreateHorseImageParams,
    ) -> Result<HorseImage, AppError> {
        self.get_owned(actor_id, horse_id).await?;

        Ok(HorseRepository::new(self.db)
            .add_image(horse_id, params)
            .await?)
    }

    pub async fn get_images(&self, horse_id: i32) -> Result<Vec<HorseImage>, AppError> {
        Ok(self.get_by_id(horse_id).await?.images)
    }
}
