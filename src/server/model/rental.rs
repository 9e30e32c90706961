//! Rental listing and booking domain models, parameters, and pricing.
//!
//! A booking's total is the listing's configured price for the requested duration
//! category. Listings store the durations they offer as a comma-separated string.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{BookingStatus, RentalDuration, RentalStatus};
use sea_orm::ActiveEnum;

use crate::{
    model::{
        query::RentalFilterQuery,
        rental::{
            CreateRentalBookingDto, CreateRentalListingDto, RentalBookingDto, RentalListingDto,
            UpdateRentalBookingDto, UpdateRentalListingDto,
        },
    },
    server::{
        error::AppError,
        model::{
            horse::Horse,
            query::{self, split_csv, Filter},
            user::User,
            validate,
        },
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct RentalListing {
    pub id: i32,
    pub horse_id: i32,
    pub owner_id: i32,
    pub price_per_hour: Option<f64>,
    pub price_per_day: Option<f64>,
    pub price_per_week: Option<f64>,
    pub price_per_month: Option<f64>,
    pub description: Option<String>,
    pub location: String,
    pub requirements: Option<String>,
    pub available_durations: String,
    pub status: RentalStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub horse: Option<Horse>,
    pub owner: Option<User>,
}

impl RentalListing {
    pub fn from_entity(entity: entity::rental_listing::Model) -> Self {
        Self {
            id: entity.id,
            horse_id: entity.horse_id,
            owner_id: entity.owner_id,
            price_per_hour: entity.price_per_hour,
            price_per_day: entity.price_per_day,
            price_per_week: entity.price_per_week,
            price_per_month: entity.price_per_month,
            description: entity.description,
            location: entity.location,
            requirements: entity.requirements,
            available_durations: entity.available_durations,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            horse: None,
            owner: None,
        }
    }

    pub fn into_dto(self) -> RentalListingDto {
        RentalListingDto {
            id: self.id,
            horse_id: self.horse_id,
            owner_id: self.owner_id,
            price_per_hour: self.price_per_hour,
            price_per_day: self.price_per_day,
            price_per_week: self.price_per_week,
            price_per_month: self.price_per_month,
            description: self.description,
            location: self.location,
            requirements: self.requirements,
            available_durations: self.available_durations,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
            horse: self.horse.map(Horse::into_dto),
            owner: self.owner.map(User::into_dto),
        }
    }

    /// Price configured for a duration category, if any.
    pub fn price_for(&self, duration: RentalDuration) -> Option<f64> {
        match duration {
            RentalDuration::Hourly => self.price_per_hour,
            RentalDuration::Daily => self.price_per_day,
            RentalDuration::Weekly => self.price_per_week,
            RentalDuration::Monthly => self.price_per_month,
        }
    }

    /// Total price of a booking for the duration category.
    ///
    /// # Returns
    /// - `Ok(f64)` - The listing's price for that category
    /// - `Err(AppError::BadRequest)` - The listing has no price for that category
    pub fn booking_price(&self, duration: RentalDuration) -> Result<f64, AppError> {
        self.price_for(duration).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Price not available for {} rentals",
                duration.to_value()
            ))
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RentalBooking {
    pub id: i32,
    pub rental_listing_id: i32,
    pub renter_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub duration_type: RentalDuration,
    pub special_requests: Option<String>,
    pub total_price: f64,
    pub status: BookingStatus,
    pub payment_status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub rental_listing: Option<RentalListing>,
    pub renter: Option<User>,
}

impl RentalBooking {
    pub fn from_entity(entity: entity::rental_booking::Model) -> Self {
        Self {
            id: entity.id,
            rental_listing_id: entity.rental_listing_id,
            renter_id: entity.renter_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            duration_type: entity.duration_type,
            special_requests: entity.special_requests,
            total_price: entity.total_price,
            status: entity.status,
            payment_status: entity.payment_status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            rental_listing: None,
            renter: None,
        }
    }

    pub fn into_dto(self) -> RentalBookingDto {
        RentalBookingDto {
            id: self.id,
            rental_listing_id: self.rental_listing_id,
            renter_id: self.renter_id,
            start_date: self.start_date,
            end_date: self.end_date,
            duration_type: self.duration_type,
            special_requests: self.special_requests,
            total_price: self.total_price,
            status: self.status,
            payment_status: self.payment_status,
            created_at: self.created_at,
            updated_at: self.updated_at,
            rental_listing: self.rental_listing.map(|l| l.into_dto()),
            renter: self.renter.map(|u| u.into_dto()),
        }
    }
}

fn validate_price(field: &str, value: Option<f64>) -> Result<(), AppError> {
    match value {
        Some(value) => validate::positive(field, value),
        None => Ok(()),
    }
}

/// Checks a comma-separated duration list and returns it normalized.
fn validate_durations(value: &str) -> Result<String, AppError> {
    let durations = split_csv(value);
    if durations.is_empty() {
        return Err(AppError::Validation(
            "available_durations must list at least one duration".to_string(),
        ));
    }

    for duration in &durations {
        RentalDuration::try_from_value(duration).map_err(|_| {
            AppError::Validation(format!(
                "available_durations contains unknown duration '{}'",
                duration
            ))
        })?;
    }

    Ok(durations.join(","))
}

#[derive(Debug, Clone)]
pub struct CreateRentalListingParams {
    pub horse_id: i32,
    pub price_per_hour: Option<f64>,
    pub price_per_day: Option<f64>,
    pub price_per_week: Option<f64>,
    pub price_per_month: Option<f64>,
    pub description: Option<String>,
    pub location: String,
    pub requirements: Option<String>,
    pub available_durations: String,
}

impl CreateRentalListingParams {
    pub fn from_dto(dto: CreateRentalListingDto) -> Result<Self, AppError> {
        validate_price("price_per_hour", dto.price_per_hour)?;
        validate_price("price_per_day", dto.price_per_day)?;
        validate_price("price_per_week", dto.price_per_week)?;
        validate_price("price_per_month", dto.price_per_month)?;
        let available_durations = validate_durations(&dto.available_durations)?;

        Ok(Self {
            horse_id: dto.horse_id,
            price_per_hour: dto.price_per_hour,
            price_per_day: dto.price_per_day,
            price_per_week: dto.price_per_week,
            price_per_month: dto.price_per_month,
            description: dto.description,
            location: dto.location,
            requirements: dto.requirements,
            available_durations,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateRentalListingParams {
    pub price_per_hour: Option<Option<f64>>,
    pub price_per_day: Option<Option<f64>>,
    pub price_per_week: Option<Option<f64>>,
    pub price_per_month: Option<Option<f64>>,
    pub description: Option<Option<String>>,
    pub location: Option<String>,
    pub requirements: Option<Option<String>>,
    pub available_durations: Option<String>,
    pub status: Option<RentalStatus>,
}

impl UpdateRentalListingParams {
    pub fn from_dto(dto: UpdateRentalListingDto) -> Result<Self, AppError> {
        validate_price("price_per_hour", dto.price_per_hour.flatten())?;
        validate_price("price_per_day", dto.price_per_day.flatten())?;
        validate_price("price_per_week", dto.price_per_week.flatten())?;
        validate_price("price_per_month", dto.price_per_month.flatten())?;
        let available_durations = dto
            .available_durations
            .as_deref()
            .map(validate_durations)
            .transpose()?;

        Ok(Self {
            price_per_hour: dto.price_per_hour,
            price_per_day: dto.price_per_day,
            price_per_week: dto.price_per_week,
            price_per_month: dto.price_per_month,
            description: dto.description,
            location: dto.location,
            requirements: dto.requirements,
            available_durations,
            status: dto.status,
        })
    }
}

/// Booking request. Price and renter are filled in by the service.
#[derive(Debug, Clone)]
pub struct CreateRentalBookingParams {
    pub rental_listing_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub duration_type: RentalDuration,
    pub special_requests: Option<String>,
}

impl CreateRentalBookingParams {
    pub fn from_dto(dto: CreateRentalBookingDto) -> Self {
        Self {
            rental_listing_id: dto.rental_listing_id,
            start_date: dto.start_date,
            end_date: dto.end_date,
            duration_type: dto.duration_type,
            special_requests: dto.special_requests,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateRentalBookingParams {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub special_requests: Option<Option<String>>,
    pub status: Option<BookingStatus>,
    pub payment_status: Option<Option<String>>,
}

impl UpdateRentalBookingParams {
    pub fn from_dto(dto: UpdateRentalBookingDto) -> Self {
        Self {
            start_date: dto.start_date,
            end_date: dto.end_date,
            special_requests: dto.special_requests,
            status: dto.status,
            payment_status: dto.payment_status,
        }
    }
}

/// Converts rental list filters into generic filters scoped to `Available` listings.
pub fn rental_filters(dto: RentalFilterQuery) -> Result<Vec<Filter>, AppError> {
    let min_price = query::non_negative("min_price_per_day", dto.min_price_per_day)?;
    let max_price = query::non_negative("max_price_per_day", dto.max_price_per_day)?;

    let mut filters = vec![Filter::eq("status", RentalStatus::Available.to_value())];
    filters.extend(Filter::range("price_per_day", min_price, max_price));
    if let Some(location) = dto.location {
        filters.push(Filter::contains("location", location));
    }
    if let Some(duration) = dto.duration_type {
        filters.push(Filter::contains("available_durations", duration.to_value()));
    }

    Ok(filters)
}
