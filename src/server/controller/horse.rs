use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        horse::{CreateHorseDto, CreateHorseImageDto, HorseDto, HorseImageDto, UpdateHorseDto},
        query::{HorseFilterQuery, PaginationQuery, SearchQuery, SortQuery},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            horse::{horse_filters, CreateHorseImageParams, CreateHorseParams, UpdateHorseParams},
            query::ListQuery,
        },
        service::horse::HorseService,
        state::AppState,
    },
};

/// Tag for grouping horse endpoints in OpenAPI documentation
pub static HORSE_TAG: &str = "horses";

/// List horses.
///
/// Supports pagination, sorting by any horse field, attribute filters and free-text
/// search over the fields named in `search_in`, which may be comma-separated or
/// repeated. Unknown sort or search fields are ignored.
///
/// # Returns
/// - `200 OK` - Matching horses with their images
/// - `401 Unauthorized` - Missing or invalid token
/// - `422 Unprocessable Entity` - Limit, order, search text or age range out of bounds
#[utoipa::path(
    get,
    path = "/api/v1/horses",
    tag = HORSE_TAG,
    params(PaginationQuery, SortQuery, SearchQuery, HorseFilterQuery),
    responses(
        (status = 200, description = "Matching horses", body = Vec<HorseDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 422, description = "Invalid query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_horses(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pagination): Query<PaginationQuery>,
    Query(sort): Query<SortQuery>,
    Query(raw): Query<Vec<(String, String)>>,
    Query(filter): Query<HorseFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let search = SearchQuery::from_pairs(raw);
    let query = ListQuery::from_dto(pagination, sort, search)?.with_filters(horse_filters(filter)?);

    let horses = HorseService::new(&state.db).list(query).await?;

    Ok(Json(
        horses.into_iter().map(|h| h.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Register a horse owned by the caller.
#[utoipa::path(
    post,
    path = "/api/v1/horses",
    tag = HORSE_TAG,
    request_body = CreateHorseDto,
    responses(
        (status = 201, description = "Successfully created horse", body = HorseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 422, description = "Invalid horse data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_horse(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateHorseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let params = CreateHorseParams::from_dto(payload)?;

    let horse = HorseService::new(&state.db).create(user.id, params).await?;

    Ok((StatusCode::CREATED, Json(horse.into_dto())))
}

/// List the caller's horses.
#[utoipa::path(
    get,
    path = "/api/v1/horses/my-horses",
    tag = HORSE_TAG,
    params(PaginationQuery),
    responses(
        (status = 200, description = "Horses owned by the caller", body = Vec<HorseDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_horses(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let page = ListQuery::from_dto(pagination, SortQuery::default(), SearchQuery::default())?;

    let horses = HorseService::new(&state.db)
        .get_by_owner(user.id, page.skip, page.limit)
        .await?;

    Ok(Json(
        horses.into_iter().map(|h| h.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Get a horse with its images.
#[utoipa::path(
    get,
    path = "/api/v1/horses/{horse_id}",
    tag = HORSE_TAG,
    params(
        ("horse_id" = i32, Path, description = "Horse ID")
    ),
    responses(
        (status = 200, description = "Horse found", body = HorseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Horse not found", body = ErrorDto)
    ),
)]
pub async fn get_horse(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(horse_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let horse = HorseService::new(&state.db).get_by_id(horse_id).await?;

    Ok(Json(horse.into_dto()))
}

/// Partially update a horse.
///
/// # Access Control
/// - Owner only
///
/// # Returns
/// - `200 OK` - The updated horse
/// - `403 Forbidden` - Caller does not own the horse
/// - `404 Not Found` - Horse not found
/// - `422 Unprocessable Entity` - Invalid horse data
#[utoipa::path(
    put,
    path = "/api/v1/horses/{horse_id}",
    tag = HORSE_TAG,
    params(
        ("horse_id" = i32, Path, description = "Horse ID")
    ),
    request_body = UpdateHorseDto,
    responses(
        (status = 200, description = "Successfully updated horse", body = HorseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Horse not found", body = ErrorDto),
        (status = 422, description = "Invalid horse data", body = ErrorDto)
    ),
)]
pub async fn update_horse(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(horse_id): Path<i32>,
    Json(payload): Json<UpdateHorseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let params = UpdateHorseParams::from_dto(payload)?;

    let horse = HorseService::new(&state.db)
        .update(user.id, horse_id, params)
        .await?;

    Ok(Json(horse.into_dto()))
}

/// Attach an image to a horse.
///
/// # Access Control
/// - Owner only
#[utoipa::path(
    post,
    path = "/api/v1/horses/{horse_id}/images",
    tag = HORSE_TAG,
    params(
        ("horse_id" = i32, Path, description = "Horse ID")
    ),
    request_body = CreateHorseImageDto,
    responses(
        (status = 201, description = "Successfully added image", body = HorseImageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Horse not found", body = ErrorDto)
    ),
)]
pub async fn add_horse_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(horse_id): Path<i32>,
    Json(payload): Json<CreateHorseImageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let params = CreateHorseImageParams::from_dto(payload)?;

    let image = HorseService::new(&state.db)
        .add_image(user.id, horse_id, params)
        .await?;

    Ok((StatusCode::CREATED, Json(image.into_dto())))
}

/// List a horse's images.
#[utoipa::path(
    get,
    path = "/api/v1/horses/{horse_id}/images",
    tag = HORSE_TAG,
    params(
        ("horse_id" = i32, Path, description = "Horse ID")
    ),
    responses(
        (status = 200, description = "Images of the horse", body = Vec<HorseImageDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Horse not found", body = ErrorDto)
    ),
)]
pub async fn get_horse_images(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(horse_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let images = HorseService::new(&state.db).get_images(horse_id).await?;

    Ok(Json(
        images.into_iter().map(|i| i.into_dto()).collect::<Vec<_>>(),
    ))
}
