//! Sale listing and transaction domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ListingStatus;
use sea_orm::ActiveEnum;

use crate::{
    model::{
        market::{
            CreateMarketListingDto, CreateTransactionDto, MarketListingDto, TransactionDto,
            UpdateMarketListingDto,
        },
        query::MarketFilterQuery,
    },
    server::{
        error::AppError,
        model::{
            horse::Horse,
            query::{self, Filter},
            user::User,
            validate,
        },
    },
};

/// Sale offer for a horse, optionally with the horse and seller embedded.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketListing {
    pub id: i32,
    pub horse_id: i32,
    pub seller_id: i32,
    pub price: f64,
    pub description: Option<String>,
    pub is_negotiable: bool,
    pub location: String,
    pub status: ListingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub horse: Option<Horse>,
    pub seller: Option<User>,
}

impl MarketListing {
    pub fn from_entity(entity: entity::market_listing::Model) -> Self {
        Self {
            id: entity.id,
            horse_id: entity.horse_id,
            seller_id: entity.seller_id,
            price: entity.price,
            description: entity.description,
            is_negotiable: entity.is_negotiable,
            location: entity.location,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            horse: None,
            seller: None,
        }
    }

    pub fn into_dto(self) -> MarketListingDto {
        MarketListingDto {
            id: self.id,
            horse_id: self.horse_id,
            seller_id: self.seller_id,
            price: self.price,
            description: self.description,
            is_negotiable: self.is_negotiable,
            location: self.location,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
            horse: self.horse.map(Horse::into_dto),
            seller: self.seller.map(User::into_dto),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: i32,
    pub listing_id: i32,
    pub buyer_id: i32,
    pub final_price: f64,
    pub payment_method: String,
    pub payment_status: String,
    pub transaction_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    pub fn from_entity(entity: entity::transaction::Model) -> Self {
        Self {
            id: entity.id,
            listing_id: entity.listing_id,
            buyer_id: entity.buyer_id,
            final_price: entity.final_price,
            payment_method: entity.payment_method,
            payment_status: entity.payment_status,
            transaction_notes: entity.transaction_notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> TransactionDto {
        TransactionDto {
            id: self.id,
            listing_id: self.listing_id,
            buyer_id: self.buyer_id,
            final_price: self.final_price,
            payment_method: self.payment_method,
            payment_status: self.payment_status,
            transaction_notes: self.transaction_notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMarketListingParams {
    pub horse_id: i32,
    pub price: f64,
    pub description: Option<String>,
    pub is_negotiable: bool,
    pub location: String,
}

impl CreateMarketListingParams {
    pub fn from_dto(dto: CreateMarketListingDto) -> Result<Self, AppError> {
        validate::positive("price", dto.price)?;

        Ok(Self {
            horse_id: dto.horse_id,
            price: dto.price,
            description: dto.description,
            is_negotiable: dto.is_negotiable,
            location: dto.location,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateMarketListingParams {
    pub price: Option<f64>,
    pub description: Option<Option<String>>,
    pub is_negotiable: Option<bool>,
    pub location: Option<String>,
    pub status: Option<ListingStatus>,
}

impl UpdateMarketListingParams {
    pub fn from_dto(dto: UpdateMarketListingDto) -> Result<Self, AppError> {
        if let Some(price) = dto.price {
            validate::positive("price", price)?;
        }

        Ok(Self {
            price: dto.price,
            description: dto.description,
            is_negotiable: dto.is_negotiable,
            location: dto.location,
            status: dto.status,
        })
    }
}

/// Purchase request. The buyer is always the authenticated user, never the payload.
#[derive(Debug, Clone)]
pub struct CreateTransactionParams {
    pub listing_id: i32,
    pub final_price: f64,
    pub payment_method: String,
    pub payment_status: String,
    pub transaction_notes: Option<String>,
}

impl CreateTransactionParams {
    pub fn from_dto(dto: CreateTransactionDto) -> Result<Self, AppError> {
        validate::positive("final_price", dto.final_price)?;

        Ok(Self {
            listing_id: dto.listing_id,
            final_price: dto.final_price,
            payment_method: dto.payment_method,
            payment_status: dto.payment_status,
            transaction_notes: dto.transaction_notes,
        })
    }
}

/// Converts market list filters into generic filters, defaulting the status to `Active`.
pub fn market_filters(dto: MarketFilterQuery) -> Result<Vec<Filter>, AppError> {
    let min_price = query::non_negative("min_price", dto.min_price)?;
    let max_price = query::non_negative("max_price", dto.max_price)?;

    let status = dto.status.unwrap_or(ListingStatus::Active);

    let mut filters = vec![Filter::eq("status", status.to_value())];
    filters.extend(Filter::range("price", min_price, max_price));
    if let Some(location) = dto.location {
        filters.push(Filter::contains("location", location));
    }
    if let Some(is_negotiable) = dto.is_negotiable {
        filters.push(Filter::eq("is_negotiable", is_negotiable));
    }

    Ok(filters)
}
