//! Market service: sale listings and purchases.
//!
//! Listings returned from here embed their horse and seller, loaded in batches.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{horse::HorseRepository, market::MarketListingRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        market::{
            CreateMarketListingParams, CreateTransactionParams, MarketListing, Transaction,
            UpdateMarketListingParams,
        },
        query::ListQuery,
    },
    service::horse::HorseService,
};

pub struct MarketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MarketService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a horse for sale.
    ///
    /// # Returns
    /// - `Ok(MarketListing)` - The created listing with horse and seller embedded
    /// - `Err(AppError::NotFound)` - Referenced horse does not exist
    /// - `Err(AuthError::AccessDenied)` - Referenced horse belongs to another user
    pub async fn create_listing(
        &self,
        seller_id: i32,
        params: CreateMarketListingParams,
    ) -> Result<MarketListing, AppError> {
        HorseService::new(self.db)
            .get_owned(seller_id, params.horse_id)
            .await?;

        let listing = MarketListingRepository::new(self.db)
            .create_with_seller(seller_id, params)
            .await?;

        tracing::info!("User {} listed horse {} for sale", seller_id, listing.horse_id);

        self.embed_one(listing).await
    }

    pub async fn list(&self, query: ListQuery) -> Result<Vec<MarketListing>, AppError> {
        let listings = MarketListingRepository::new(self.db).list(query).await?;

        self.embed(listings).await
    }

    pub async fn get_by_seller(
        &self,
        seller_id: i32,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<MarketListing>, AppError> {
        let listings = MarketListingRepository::new(self.db)
            .get_by_seller(seller_id, skip, limit)
            .await?;

        self.embed(listings).await
    }

    pub async fn get_listing(&self, listing_id: i32) -> Result<MarketListing, AppError> {
        let listing = self.find_listing(listing_id).await?;

        self.embed_one(listing).await
    }

    /// Applies a partial update to a listing sold by `actor_id`.
    ///
    /// # Returns
    /// - `Ok(MarketListing)` - The updated listing
    /// - `Err(AppError::NotFound)` - No listing with that id
    /// - `Err(AuthError::AccessDenied)` - Listing belongs to another seller
    pub async fn update_listing(
        &self,
        actor_id: i32,
        listing_id: i32,
        params: UpdateMarketListingParams,
    ) -> Result<MarketListing, AppError> {
        let listing = self.find_listing(listing_id).await?;

        if listing.seller_id != actor_id {
            return Err(AuthError::AccessDenied(
                actor_id,
                format!("attempted to update market listing {} of user {}", listing_id, listing.seller_id),
            )
            .into());
        }

        let listing = MarketListingRepository::new(self.db)
            .update(listing_id, params)
            .await?
            .ok_or_else(listing_not_found)?;

        self.embed_one(listing).await
    }

    /// Buys a listing as `buyer_id`.
    ///
    /// The listing's current status is not checked.
    ///
    /// # Returns
    /// - `Ok(Transaction)` - The recorded purchase; the listing is now `Sold`
    /// - `Err(AppError::NotFound)` - No listing with that id
    /// - `Err(AppError::BadRequest)` - Buyer is the seller
    pub async fn create_transaction(
        &self,
        buyer_id: i32,
        params: CreateTransactionParams,
    ) -> Result<Transaction, AppError> {
        let listing = self.find_listing(params.listing_id).await?;

        if listing.seller_id == buyer_id {
            return Err(AppError::BadRequest("Cannot buy your own listing".to_string()));
        }

        let transaction = MarketListingRepository::new(self.db)
            .create_transaction(buyer_id, params)
            .await?;

        tracing::info!("User {} bought market listing {}", buyer_id, listing.id);

        Ok(transaction)
    }

    pub async fn get_transactions_by_buyer(
        &self,
        buyer_id: i32,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Transaction>, AppError> {
        Ok(MarketListingRepository::new(self.db)
            .get_transactions_by_buyer(buyer_id, skip, limit)
            .await?)
    }

    async fn find_listing(&self, listing_id: i32) -> Result<MarketListing, AppError> {
        MarketListingRepository::new(self.db)
            .get_by_id(listing_id)
            .await?
            .ok_or_else(listing_not_found)
    }

    async fn embed_one(&self, listing: MarketListing) -> Result<MarketListing, AppError> {
        let mut listings = self.embed(vec![listing]).await?;

        listings
            .pop()
            .ok_or_else(|| AppError::InternalError("Embedding dropped a market listing".to_string()))
    }

    /// Attaches horse and seller to each listing.
    async fn embed(&self, mut listings: Vec<MarketListing>) -> Result<Vec<MarketListing>, AppError> {
        let horse_ids = listings.iter().map(|l| l.horse_id).collect();
        let seller_ids = listings.iter().map(|l| l.seller_id).collect();

        let horses: HashMap<i32, _> = HorseRepository::new(self.db)
            .find_many(horse_ids)
            .await?
            .into_iter()
            .map(|h| (h.id, h))
            .collect();
        let sellers: HashMap<i32, _> = UserRepository::new(self.db)
            .find_many(seller_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        for listing in &mut listings {
            listing.horse = horses.get(&listing.horse_id).cloned();
            listing.seller = sellers.get(&listing.seller_id).cloned();
        }

        Ok(listings)
    }
}

fn listing_not_found() -> AppError {
    AppError::NotFound("Listing not found".to_string())
}
