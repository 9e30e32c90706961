//! Horse data repository for database operations.
//!
//! Wraps the generic `CrudRepository` for horses and loads each horse's images in a
//! single batched query so returned `Horse` models always carry them.

use std::collections::HashMap;

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::crud::{CrudRepository, Patch},
    model::{
        horse::{CreateHorseImageParams, CreateHorseParams, Horse, HorseImage, UpdateHorseParams},
        query::ListQuery,
    },
};

impl Patch<entity::horse::ActiveModel> for UpdateHorseParams {
    fn apply(self, active: &mut entity::horse::ActiveModel) {
        if let Some(name) = self.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(breed) = self.breed {
            active.breed = ActiveValue::Set(breed);
        }
        if let Some(age) = self.age {
            active.age = ActiveValue::Set(age);
        }
        if let Some(gender) = self.gender {
            active.gender = ActiveValue::Set(gender);
        }
        if let Some(color) = self.color {
            active.color = ActiveValue::Set(color);
        }
        if let Some(height) = self.height {
            active.height = ActiveValue::Set(height);
        }
        if let Some(weight) = self.weight {
            active.weight = ActiveValue::Set(weight);
        }
        if let Some(description) = self.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(training_level) = self.training_level {
            active.training_level = ActiveValue::Set(training_level);
        }
        if let Some(health_records) = self.health_records {
            active.health_records = ActiveValue::Set(health_records);
        }
    }
}

pub struct HorseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HorseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn crud(&self) -> CrudRepository<'a, entity::prelude::Horse> {
        CrudRepository::new(self.db)
    }

    /// Creates a horse owned by `owner_id`.
    ///
    /// # Arguments
    /// - `owner_id` - ID of the authenticated user creating the horse
    /// - `params` - Validated horse fields
    ///
    /// # Returns
    /// - `Ok(Horse)` - The created horse, with no images yet
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_with_owner(
        &self,
        owner_id: i32,
        params: CreateHorseParams,
    ) -> Result<Horse, DbErr> {
        let entity = self
            .crud()
            .create(entity::horse::ActiveModel {
                owner_id: ActiveValue::Set(owner_id),
                name: ActiveValue::Set(params.name),
                breed: ActiveValue::Set(params.breed),
                age: ActiveValue::Set(params.age),
                gender: ActiveValue::Set(params.gender),
                color: ActiveValue::Set(params.color),
                height: ActiveValue::Set(params.height),
                weight: ActiveValue::Set(params.weight),
                description: ActiveValue::Set(params.description),
                training_level: ActiveValue::Set(params.training_level),
                health_records: ActiveValue::Set(params.health_records),
                ..Default::default()
            })
            .await?;

        Ok(Horse::from_entity(entity, Vec::new()))
    }

    pub async fn get_by_id(&self, horse_id: i32) -> Result<Option<Horse>, DbErr> {
        let Some(entity) = self.crud().get(horse_id).await? else {
            return Ok(None);
        };

        let images = self.get_image_entities(horse_id).await?;

        Ok(Some(Horse::from_entity(entity, images)))
    }

    /// Lists horses matching the generic query, each with its images.
    pub async fn list(&self, query: ListQuery) -> Result<Vec<Horse>, DbErr> {
        let entities = self.crud().list(query).await?;

        self.with_images(entities).await
    }

    /// Lists horses owned by `owner_id` in id order.
    pub async fn get_by_owner(
        &self,
        owner_id: i32,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Horse>, DbErr> {
        self.list(ListQuery::paginate(skip, limit).eq("owner_id", owner_id))
            .await
    }

    /// Finds every horse in `horse_ids`, used to embed horses in listings.
    pub async fn find_many(&self, horse_ids: Vec<i32>) -> Result<Vec<Horse>, DbErr> {
        if horse_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Horse::find()
            .filter(entity::horse::Column::Id.is_in(horse_ids))
            .all(self.db)
            .await?;

        self.with_images(entities).await
    }

    /// Applies a partial update to a horse.
    ///
    /// # Returns
    /// - `Ok(Some(Horse))` - The updated horse with its images
    /// - `Ok(None)` - No horse with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        horse_id: i32,
        params: UpdateHorseParams,
    ) -> Result<Option<Horse>, DbErr> {
        let crud = self.crud();
        let Some(existing) = crud.get(horse_id).await? else {
            return Ok(None);
        };

        let entity = crud.update(existing, params).await?;
        let images = self.get_image_entities(horse_id).await?;

        Ok(Some(Horse::from_entity(entity, images)))
    }

    pub async fn add_image(
        &self,
        horse_id: i32,
        params: CreateHorseImageParams,
    ) -> Result<HorseImage, DbErr> {
        let entity = CrudRepository::<entity::prelude::HorseImage>::new(self.db)
            .create(entity::horse_image::ActiveModel {
                horse_id: ActiveValue::Set(horse_id),
                image_url: ActiveValue::Set(params.image_url),
                is_primary: ActiveValue::Set(params.is_primary),
                ..Default::default()
            })
            .await?;

        Ok(HorseImage::from_entity(entity))
    }

    pub async fn get_images(&self, horse_id: i32) -> Result<Vec<HorseImage>, DbErr> {
        let entities = self.get_image_entities(horse_id).await?;

        Ok(entities.into_iter().map(HorseImage::from_entity).collect())
    }

    async fn get_image_entities(
        &self,
        horse_id: i32,
    ) -> Result<Vec<entity::horse_image::Model>, DbErr> {
        entity::prelude::HorseImage::find()
            .filter(entity::horse_image::Column::HorseId.eq(horse_id))
            .order_by_asc(entity::horse_image::Column::Id)
            .all(self.db)
            .await
    }

    /// Attaches images to horse entities with one query for the whole batch.
    async fn with_images(&self, entities: Vec<entity::horse::Model>) -> Result<Vec<Horse>, DbErr> {
        let horse_ids: Vec<i32> = entities.iter().map(|h| h.id).collect();
        if horse_ids.is_empty() {
            return Ok(Vec::new());
        }

        let images = entity::prelude::HorseImage::find()
            .filter(entity::horse_image::Column::HorseId.is_in(horse_ids))
            .order_by_asc(entity::horse_image::Column::Id)
            .all(self.db)
            .await?;

        let mut images_map: HashMap<i32, Vec<entity::horse_image::Model>> = HashMap::new();
        for image in images {
            images_map.entry(image.horse_id).or_default().push(image);
        }

        Ok(entities
            .into_iter()
            .map(|horse| {
                let images = images_map.remove(&horse.id).unwrap_or_default();
                Horse::from_entity(horse, images)
            })
            .collect())
    }
}
