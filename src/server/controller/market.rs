use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        market::{
            CreateMarketListingDto, CreateTransactionDto, MarketListingDto, TransactionDto,
            UpdateMarketListingDto,
        },
        query::{MarketFilterQuery, PaginationQuery, SearchQuery, SortQuery},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            market::{
                market_filters, CreateMarketListingParams, CreateTransactionParams,
                UpdateMarketListingParams,
            },
            query::ListQuery,
        },
        service::market::MarketService,
        state::AppState,
    },
};

/// Tag for grouping marketplace endpoints in OpenAPI documentation
pub static MARKET_TAG: &str = "market";

/// List sale listings.
///
/// Only `Active` listings are returned unless `status` asks for another one.
#[utoipa::path(
    get,
    path = "/api/v1/market/listings",
    tag = MARKET_TAG,
    params(PaginationQuery, SortQuery, MarketFilterQuery),
    responses(
        (status = 200, description = "Matching listings", body = Vec<MarketListingDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 422, description = "Invalid query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_listings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pagination): Query<PaginationQuery>,
    Query(sort): Query<SortQuery>,
    Query(filter): Query<MarketFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let query = ListQuery::from_dto(pagination, sort, SearchQuery::default())?
        .with_filters(market_filters(filter)?);

    let listings = MarketService::new(&state.db).list(query).await?;

    Ok(Json(
        listings.into_iter().map(|l| l.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Put one of the caller's horses up for sale.
///
/// # Returns
/// - `201 Created` - The new `Active` listing
/// - `403 Forbidden` - Caller does not own the horse
/// - `404 Not Found` - Horse not found
/// - `422 Unprocessable Entity` - Non-positive price
#[utoipa::path(
    post,
    path = "/api/v1/market/listings",
    tag = MARKET_TAG,
    request_body = CreateMarketListingDto,
    responses(
        (status = 201, description = "Successfully created listing", body = MarketListingDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the owner of the horse", body = ErrorDto),
        (status = 404, description = "Horse not found", body = ErrorDto),
        (status = 422, description = "Invalid listing data", body = ErrorDto)
    ),
)]
pub async fn create_listing(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateMarketListingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let params = CreateMarketListingParams::from_dto(payload)?;

    let listing = MarketService::new(&state.db)
        .create_listing(user.id, params)
        .await?;

    Ok((StatusCode::CREATED, Json(listing.into_dto())))
}

/// List the caller's sale listings, in any status.
#[utoipa::path(
    get,
    path = "/api/v1/market/my-listings",
    tag = MARKET_TAG,
    params(PaginationQuery),
    responses(
        (status = 200, description = "Listings created by the caller", body = Vec<MarketListingDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn get_my_listings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let page = ListQuery::from_dto(pagination, SortQuery::default(), SearchQuery::default())?;

    let listings = MarketService::new(&state.db)
        .get_by_seller(user.id, page.skip, page.limit)
        .await?;

    Ok(Json(
        listings.into_iter().map(|l| l.into_dto()).collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/market/listings/{listing_id}",
    tag = MARKET_TAG,
    params(
        ("listing_id" = i32, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Listing found", body = MarketListingDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto)
    ),
)]
pub async fn get_listing(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(listing_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let listing = MarketService::new(&state.db).get_listing(listing_id).await?;

    Ok(Json(listing.into_dto()))
}

/// Partially update a sale listing.
///
/// # Access Control
/// - Seller only
#[utoipa::path(
    put,
    path = "/api/v1/market/listings/{listing_id}",
    tag = MARKET_TAG,
    params(
        ("listing_id" = i32, Path, description = "Listing ID")
    ),
    request_body = UpdateMarketListingDto,
    responses(
        (status = 200, description = "Successfully updated listing", body = MarketListingDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the seller", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 422, description = "Invalid listing data", body = ErrorDto)
    ),
)]
pub async fn update_listing(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(listing_id): Path<i32>,
    Json(payload): Json<UpdateMarketListingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let params = UpdateMarketListingParams::from_dto(payload)?;

    let listing = MarketService::new(&state.db)
        .update_listing(user.id, listing_id, params)
        .await?;

    Ok(Json(listing.into_dto()))
}

/// Buy a listing as the caller.
///
/// Records the transaction and marks the listing `Sold`.
///
/// # Returns
/// - `201 Created` - The recorded transaction
/// - `400 Bad Request` - Caller is the seller
/// - `404 Not Found` - Listing not found
#[utoipa::path(
    post,
    path = "/api/v1/market/transactions",
    tag = MARKET_TAG,
    request_body = CreateTransactionDto,
    responses(
        (status = 201, description = "Successfully recorded purchase", body = TransactionDto),
        (status = 400, description = "Cannot buy your own listing", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 422, description = "Invalid transaction data", body = ErrorDto)
    ),
)]
pub async fn create_transaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTransactionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let params = CreateTransactionParams::from_dto(payload)?;

    let transaction = MarketService::new(&state.db)
        .create_transaction(user.id, params)
        .await?;

    Ok((StatusCode::CREATED, Json(transaction.into_dto())))
}

/// List the caller's purchases.
#[utoipa::path(
    get,
    path = "/api/v1/market/my-transactions",
    tag = MARKET_TAG,
    params(PaginationQuery),
    responses(
        (status = 200, description = "Purchases made by the caller", body = Vec<TransactionDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn get_my_transactions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let page = ListQuery::from_dto(pagination, SortQuery::default(), SearchQuery::default())?;

    let transactions = MarketService::new(&state.db)
        .get_transactions_by_buyer(user.id, page.skip, page.limit)
        .await?;

    Ok(Json(
        transactions
            .into_iter()
            .map(|t| t.into_dto())
            .collect::<Vec<_>>(),
    ))
}
