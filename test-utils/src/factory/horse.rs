//! Horse factory for creating test horse entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::{HorseBreed, HorseGender};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test horses owned by a given user.
pub struct HorseFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    breed: HorseBreed,
    age: i32,
    gender: HorseGender,
    color: String,
    height: Option<f64>,
    description: Option<String>,
}

impl<'a> HorseFactory<'a> {
    /// Creates a new HorseFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Horse {id}"`
    /// - breed: `Arabian`, gender: `Mare`, age: `7`, color: `"Bay"`
    /// - height: `Some(15.2)`
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            name: format!("Horse {}", id),
            breed: HorseBreed::Arabian,
            age: 7,
            gender: HorseGender::Mare,
            color: "Bay".to_string(),
            height: Some(15.2),
            description: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn breed(mut self, breed: HorseBreed) -> Self {
        self.breed = breed;
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    pub fn gender(mut self, gender: HorseGender) -> Self {
        self.gender = gender;
        self
    }

    pub fn height(mut self, height: Option<f64>) -> Self {
        self.height = height;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds and inserts the horse entity into the database.
    pub async fn build(self) -> Result<entity::horse::Model, DbErr> {
        let now = Utc::now();
        entity::horse::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            breed: ActiveValue::Set(self.breed),
            age: ActiveValue::Set(self.age),
            gender: ActiveValue::Set(self.gender),
            color: ActiveValue::Set(self.color),
            height: ActiveValue::Set(self.height),
            weight: ActiveValue::Set(None),
            description: ActiveValue::Set(self.description),
            training_level: ActiveValue::Set(None),
            health_records: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a horse with default values for the given owner.
pub async fn create_horse(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::horse::Model, DbErr> {
    HorseFactory::new(db, owner_id).build().await
}
