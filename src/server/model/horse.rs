//! Horse domain models and parameters.
//!
//! A `Horse` carries its images so every response embeds them. List filters from the
//! query string are turned into generic `Filter`s here.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{HorseBreed, HorseGender};
use sea_orm::ActiveEnum;

use crate::{
    model::{
        horse::{CreateHorseDto, CreateHorseImageDto, HorseDto, HorseImageDto, UpdateHorseDto},
        query::HorseFilterQuery,
    },
    server::{
        error::AppError,
        model::{
            query::{self, Filter},
            validate,
        },
    },
};

pub const MAX_AGE: i32 = 40;

#[derive(Debug, Clone, PartialEq)]
pub struct HorseImage {
    pub id: i32,
    pub horse_id: i32,
    pub image_url: String,
    pub is_primary: bool,
}

impl HorseImage {
    pub fn from_entity(entity: entity::horse_image::Model) -> Self {
        Self {
            id: entity.id,
            horse_id: entity.horse_id,
            image_url: entity.image_url,
            is_primary: entity.is_primary,
        }
    }

    pub fn into_dto(self) -> HorseImageDto {
        HorseImageDto {
            id: self.id,
            horse_id: self.horse_id,
            image_url: self.image_url,
            is_primary: self.is_primary,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Horse {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub breed: HorseBreed,
    pub age: i32,
    pub gender: HorseGender,
    pub color: String,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub description: Option<String>,
    pub training_level: Option<String>,
    pub health_records: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub images: Vec<HorseImage>,
}

impl Horse {
    /// Converts a horse entity and its image entities into the domain model.
    pub fn from_entity(entity: entity::horse::Model, images: Vec<entity::horse_image::Model>) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            name: entity.name,
            breed: entity.breed,
            age: entity.age,
            gender: entity.gender,
            color: entity.color,
            height: entity.height,
            weight: entity.weight,
            description: entity.description,
            training_level: entity.training_level,
            health_records: entity.health_records,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            images: images.into_iter().map(HorseImage::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> HorseDto {
        HorseDto {
            id: self.id,
            owner_id: self.owner_id,
            name: self.name,
            breed: self.breed,
            age: self.age,
            gender: self.gender,
            color: self.color,
            height: self.height,
            weight: self.weight,
            description: self.description,
            training_level: self.training_level,
            health_records: self.health_records,
            created_at: self.created_at,
            updated_at: self.updated_at,
            images: self.images.into_iter().map(HorseImage::into_dto).collect(),
        }
    }
}

fn validate_name(name: &str) -> Result<(), AppError> {
    validate::length("name", name, 1, 100)
}

fn validate_age(age: i32) -> Result<(), AppError> {
    validate::in_range("age", age, 0, MAX_AGE)
}

fn validate_measure(field: &str, value: Option<f64>) -> Result<(), AppError> {
    match value {
        Some(value) => validate::non_negative(field, value),
        None => Ok(()),
    }
}

#[derive(Debug, Clone)]
pub struct CreateHorseParams {
    pub name: String,
    pub breed: HorseBreed,
    pub age: i32,
    pub gender: HorseGender,
    pub color: String,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub description: Option<String>,
    pub training_level: Option<String>,
    pub health_records: Option<String>,
}

impl CreateHorseParams {
    pub fn from_dto(dto: CreateHorseDto) -> Result<Self, AppError> {
        validate_name(&dto.name)?;
        validate_age(dto.age)?;
        validate_measure("height", dto.height)?;
        validate_measure("weight", dto.weight)?;

        Ok(Self {
            name: dto.name,
            breed: dto.breed,
            age: dto.age,
            gender: dto.gender,
            color: dto.color,
            height: dto.height,
            weight: dto.weight,
            description: dto.description,
            training_level: dto.training_level,
            health_records: dto.health_records,
        })
    }
}

/// Partial horse update. Outer `None` leaves a field untouched; `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateHorseParams {
    pub name: Option<String>,
    pub breed: Option<HorseBreed>,
    pub age: Option<i32>,
    pub gender: Option<HorseGender>,
    pub color: Option<String>,
    pub height: Option<Option<f64>>,
    pub weight: Option<Option<f64>>,
    pub description: Option<Option<String>>,
    pub training_level: Option<Option<String>>,
    pub health_records: Option<Option<String>>,
}

impl UpdateHorseParams {
    pub fn from_dto(dto: UpdateHorseDto) -> Result<Self, AppError> {
        if let Some(name) = &dto.name {
            validate_name(name)?;
        }
        if let Some(age) = dto.age {
            validate_age(age)?;
        }
        validate_measure("height", dto.height.flatten())?;
        validate_measure("weight", dto.weight.flatten())?;

        Ok(Self {
            name: dto.name,
            breed: dto.breed,
            age: dto.age,
            gender: dto.gender,
            color: dto.color,
            height: dto.height,
            weight: dto.weight,
            description: dto.description,
            training_level: dto.training_level,
            health_records: dto.health_records,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateHorseImageParams {
    pub image_url: String,
    pub is_primary: bool,
}

impl CreateHorseImageParams {
    pub fn from_dto(dto: CreateHorseImageDto) -> Result<Self, AppError> {
        validate::min_length("image_url", &dto.image_url, 1)?;

        Ok(Self {
            image_url: dto.image_url,
            is_primary: dto.is_primary,
        })
    }
}

/// Converts horse list filters into generic filters.
///
/// `location` is accepted for compatibility but horses have no location column, so the
/// generic list drops it like any other unknown field.
pub fn horse_filters(dto: HorseFilterQuery) -> Result<Vec<Filter>, AppError> {
    let min_age = query::non_negative("min_age", dto.min_age)?;
    if let Some(max_age) = dto.max_age {
        if max_age > MAX_AGE {
            return Err(AppError::Validation(format!(
                "max_age must be less than or equal to {}",
                MAX_AGE
            )));
        }
    }
    let min_height = query::non_negative("min_height", dto.min_height)?;

    let mut filters = Vec::new();
    if let Some(breed) = dto.breed {
        filters.push(Filter::eq("breed", breed.to_value()));
    }
    if let Some(gender) = dto.gender {
        filters.push(Filter::eq("gender", gender.to_value()));
    }
    filters.extend(Filter::range("age", min_age, dto.max_age));
    filters.extend(Filter::range("height", min_height, dto.max_height));
    if let Some(location) = dto.location {
        filters.push(Filter::contains("location", location));
    }

    Ok(filters)
}
