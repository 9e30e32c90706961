use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        query::{PaginationQuery, RentalFilterQuery, SearchQuery, SortQuery},
        rental::{
            CreateRentalBookingDto, CreateRentalListingDto, RentalBookingDto, RentalListingDto,
            UpdateRentalBookingDto, UpdateRentalListingDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            query::ListQuery,
            rental::{
                rental_filters, CreateRentalBookingParams, CreateRentalListingParams,
                UpdateRentalBookingParams, UpdateRentalListingParams,
            },
        },
        service::rental::RentalService,
        state::AppState,
    },
};

/// Tag for grouping rental endpoints in OpenAPI documentation
pub static RENTAL_TAG: &str = "rental";

/// List rental listings that are currently `Available`.
#[utoipa::path(
    get,
    path = "/api/v1/rental/listings",
    tag = RENTAL_TAG,
    params(PaginationQuery, SortQuery, RentalFilterQuery),
    responses(
        (status = 200, description = "Available rental listings", body = Vec<RentalListingDto>),
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
    Query(filter): Query<RentalFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let query = ListQuery::from_dto(pagination, sort, SearchQuery::default())?
        .with_filters(rental_filters(filter)?);

    let listings = RentalService::new(&state.db).list(query).await?;

    Ok(Json(
        listings.into_iter().map(|l| l.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Offer one of the caller's horses for rent.
///
/// # Returns
/// - `201 Created` - The new `Available` listing
/// - `403 Forbidden` - Caller does not own the horse
/// - `404 Not Found` - Horse not found
/// - `422 Unprocessable Entity` - Negative price or unknown duration
#[utoipa::path(
    post,
    path = "/api/v1/rental/listings",
    tag = RENTAL_TAG,
    request_body = CreateRentalListingDto,
    responses(
        (status = 201, description = "Successfully created rental listing", body = RentalListingDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the owner of the horse", body = ErrorDto),
        (status = 404, description = "Horse not found", body = ErrorDto),
        (status = 422, description = "Invalid rental listing data", body = ErrorDto)
    ),
)]
pub async fn create_listing(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateRentalListingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let params = CreateRentalListingParams::from_dto(payload)?;

    let listing = RentalService::new(&state.db)
        .create_listing(user.id, params)
        .await?;

    Ok((StatusCode::CREATED, Json(listing.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/v1/rental/my-listings",
    tag = RENTAL_TAG,
    params(PaginationQuery),
    responses(
        (status = 200, description = "Rental listings created by the caller", body = Vec<RentalListingDto>),
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

    let listings = RentalService::new(&state.db)
        .get_by_owner(user.id, page.skip, page.limit)
        .await?;

    Ok(Json(
        listings.into_iter().map(|l| l.into_dto()).collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/rental/listings/{listing_id}",
    tag = RENTAL_TAG,
    params(
        ("listing_id" = i32, Path, description = "Rental listing ID")
    ),
    responses(
        (status = 200, description = "Rental listing found", body = RentalListingDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Rental listing not found", body = ErrorDto)
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

    let listing = RentalService::new(&state.db).get_listing(listing_id).await?;

    Ok(Json(listing.into_dto()))
}

/// Partially update a rental listing.
///
/// # Access Control
/// - Owner only
#[utoipa::path(
    put,
    path = "/api/v1/rental/listings/{listing_id}",
    tag = RENTAL_TAG,
    params(
        ("listing_id" = i32, Path, description = "Rental listing ID")
    ),
    request_body = UpdateRentalListingDto,
    responses(
        (status = 200, description = "Successfully updated rental listing", body = RentalListingDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Rental listing not found", body = ErrorDto),
        (status = 422, description = "Invalid rental listing data", body = ErrorDto)
    ),
)]
pub async fn update_listing(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(listing_id): Path<i32>,
    Json(payload): Json<UpdateRentalListingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let params = UpdateRentalListingParams::from_dto(payload)?;

    let listing = RentalService::new(&state.db)
        .update_listing(user.id, listing_id, params)
        .await?;

    Ok(Json(listing.into_dto()))
}

/// List the bookings made against a rental listing.
///
/// # Access Control
/// - Listing owner only
#[utoipa::path(
    get,
    path = "/api/v1/rental/listings/{listing_id}/bookings",
    tag = RENTAL_TAG,
    params(
        ("listing_id" = i32, Path, description = "Rental listing ID"),
        PaginationQuery
    ),
    responses(
        (status = 200, description = "Bookings for the listing", body = Vec<RentalBookingDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Rental listing not found", body = ErrorDto)
    ),
)]
pub async fn get_listing_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(listing_id): Path<i32>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let page = ListQuery::from_dto(pagination, SortQuery::default(), SearchQuery::default())?;

    let bookings = RentalService::new(&state.db)
        .get_listing_bookings(user.id, listing_id, page.skip, page.limit)
        .await?;

    Ok(Json(
        bookings.into_iter().map(|b| b.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Book a rental listing as the caller.
///
/// The total price is the listing's price for the requested duration. The booking
/// starts `Pending` and the listing becomes `Booked`.
///
/// # Returns
/// - `201 Created` - The new booking
/// - `400 Bad Request` - Caller owns the listing, or no price for the duration
/// - `404 Not Found` - Rental listing not found
#[utoipa::path(
    post,
    path = "/api/v1/rental/bookings",
    tag = RENTAL_TAG,
    request_body = CreateRentalBookingDto,
    responses(
        (status = 201, description = "Successfully created booking", body = RentalBookingDto),
        (status = 400, description = "Own listing or price not available for duration", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Rental listing not found", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateRentalBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let params = CreateRentalBookingParams::from_dto(payload);

    let booking = RentalService::new(&state.db)
        .create_booking(user.id, params)
        .await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/v1/rental/my-bookings",
    tag = RENTAL_TAG,
    params(PaginationQuery),
    responses(
        (status = 200, description = "Bookings made by the caller", body = Vec<RentalBookingDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn get_my_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let page = ListQuery::from_dto(pagination, SortQuery::default(), SearchQuery::default())?;

    let bookings = RentalService::new(&state.db)
        .get_bookings_by_renter(user.id, page.skip, page.limit)
        .await?;

    Ok(Json(
        bookings.into_iter().map(|b| b.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Partially update a booking.
///
/// # Access Control
/// - Renter only
#[utoipa::path(
    put,
    path = "/api/v1/rental/bookings/{booking_id}",
    tag = RENTAL_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    request_body = UpdateRentalBookingDto,
    responses(
        (status = 200, description = "Successfully updated booking", body = RentalBookingDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the renter", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto)
    ),
)]
pub async fn update_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(booking_id): Path<i32>,
    Json(payload): Json<UpdateRentalBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let params = UpdateRentalBookingParams::from_dto(payload);

    let booking = RentalService::new(&state.db)
        .update_booking(user.id, booking_id, params)
        .await?;

    Ok(Json(booking.into_dto()))
}
