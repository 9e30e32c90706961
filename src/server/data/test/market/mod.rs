use crate::server::{
    data::market::MarketListingRepository,
    model::{
        market::{
            market_filters, CreateMarketListingParams, CreateTransactionParams,
            UpdateMarketListingParams,
        },
        query::ListQuery,
    },
};
use crate::model::query::MarketFilterQuery;
use entity::sea_orm_active_enums::ListingStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create_transaction;
mod create_with_seller;
mod list;
mod update;
