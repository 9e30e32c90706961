//! Market data repository for sale listings and transactions.

use entity::sea_orm_active_enums::ListingStatus;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr};

use crate::server::{
    data::crud::{CrudRepository, Patch},
    model::{
        market::{
            CreateMarketListingParams, CreateTransactionParams, MarketListing, Transaction,
            UpdateMarketListingParams,
        },
        query::ListQuery,
    },
};

impl Patch<entity::market_listing::ActiveModel> for UpdateMarketListingParams {
    fn apply(self, active: &mut entity::market_listing::ActiveModel) {
        if let Some(price) = self.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(description) = self.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(is_negotiable) = self.is_negotiable {
            active.is_negotiable = ActiveValue::Set(is_negotiable);
        }
        if let Some(location) = self.location {
            active.location = ActiveValue::Set(location);
        }
        if let Some(status) = self.status {
            active.status = ActiveValue::Set(status);
        }
    }
}

impl Patch<entity::market_listing::ActiveModel> for ListingStatus {
    fn apply(self, active: &mut entity::market_listing::ActiveModel) {
        active.status = ActiveValue::Set(self);
    }
}

pub struct MarketListingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MarketListingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn listings(&self) -> CrudRepository<'a, entity::prelude::MarketListing> {
        CrudRepository::new(self.db)
    }

    fn transactions(&self) -> CrudRepository<'a, entity::prelude::Transaction> {
        CrudRepository::new(self.db)
    }

    /// Creates an `Active` listing sold by `seller_id`.
    pub async fn create_with_seller(
        &self,
        seller_id: i32,
        params: CreateMarketListingParams,
    ) -> Result<MarketListing, DbErr> {
        let entity = self
            .listings()
            .create(entity::market_listing::ActiveModel {
                horse_id: ActiveValue::Set(params.horse_id),
                seller_id: ActiveValue::Set(seller_id),
                price: ActiveValue::Set(params.price),
                description: ActiveValue::Set(params.description),
                status: ActiveValue::Set(ListingStatus::Active),
                is_negotiable: ActiveValue::Set(params.is_negotiable),
                location: ActiveValue::Set(params.location),
                ..Default::default()
            })
            .await?;

        Ok(MarketListing::from_entity(entity))
    }

    pub async fn get_by_id(&self, listing_id: i32) -> Result<Option<MarketListing>, DbErr> {
        let entity = self.listings().get(listing_id).await?;

        Ok(entity.map(MarketListing::from_entity))
    }

    /// Lists listings matching the query. Callers scope the status through its filters.
    pub async fn list(&self, query: ListQuery) -> Result<Vec<MarketListing>, DbErr> {
        let entities = self.listings().list(query).await?;

        Ok(entities.into_iter().map(MarketListing::from_entity).collect())
    }

    pub async fn get_by_seller(
        &self,
        seller_id: i32,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<MarketListing>, DbErr> {
        self.list(ListQuery::paginate(skip, limit).eq("seller_id", seller_id))
            .await
    }

    /// Applies a partial update to a listing.
    ///
    /// # Returns
    /// - `Ok(Some(MarketListing))` - The updated listing
    /// - `Ok(None)` - No listing with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update<P>(&self, listing_id: i32, patch: P) -> Result<Option<MarketListing>, DbErr>
    where
        P: Patch<entity::market_listing::ActiveModel> + Send,
    {
        let crud = self.listings();
        let Some(existing) = crud.get(listing_id).await? else {
            return Ok(None);
        };

        let entity = crud.update(existing, patch).await?;

        Ok(Some(MarketListing::from_entity(entity)))
    }

    /// Records a purchase by `buyer_id`, then marks the listing `Sold`.
    ///
    /// The two writes are separate commits; the status change is not conditional on
    /// the listing's current status.
    ///
    /// # Returns
    /// - `Ok(Transaction)` - The recorded transaction
    /// - `Err(DbErr)` - Database error during either write
    pub async fn create_transaction(
        &self,
        buyer_id: i32,
        params: CreateTransactionParams,
    ) -> Result<Transaction, DbErr> {
        let listing_id = params.listing_id;

        let entity = self
            .transactions()
            .create(entity::transaction::ActiveModel {
                listing_id: ActiveValue::Set(listing_id),
                buyer_id: ActiveValue::Set(buyer_id),
                final_price: ActiveValue::Set(params.final_price),
                payment_method: ActiveValue::Set(params.payment_method),
                payment_status: ActiveValue::Set(params.payment_status),
                transaction_notes: ActiveValue::Set(params.transaction_notes),
                ..Default::default()
            })
            .await?;

        self.update(listing_id, ListingStatus::Sold).await?;

        Ok(Transaction::from_entity(entity))
    }

    pub async fn get_transactions_by_buyer(
        &self,
        buyer_id: i32,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Transaction>, DbErr> {
        let entities = self
            .transactions()
            .list(ListQuery::paginate(skip, limit).eq("buyer_id", buyer_id))
            .await?;

        Ok(entities.into_iter().map(Transaction::from_entity).collect())
    }
}
