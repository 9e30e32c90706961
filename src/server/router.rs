use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        horse::{self, HORSE_TAG},
        market::{self, MARKET_TAG},
        rental::{self, RENTAL_TAG},
        root::{self, ROOT_TAG},
        user::{self, USER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Horse Board API", description = "Buy, sell and rent horses"),
    paths(
        root::root,
        auth::login,
        auth::register,
        user::get_me,
        user::update_me,
        user::get_user,
        horse::list_horses,
        horse::create_horse,
        horse::get_my_horses,
        horse::get_horse,
        horse::update_horse,
        horse::add_horse_image,
        horse::get_horse_images,
        market::list_listings,
        market::create_listing,
        market::get_my_listings,
        market::get_listing,
        market::update_listing,
        market::create_transaction,
        market::get_my_transactions,
        rental::list_listings,
        rental::create_listing,
        rental::get_my_listings,
        rental::get_listing,
        rental::update_listing,
        rental::get_listing_bookings,
        rental::create_booking,
        rental::get_my_bookings,
        rental::update_booking,
    ),
    tags(
        (name = ROOT_TAG, description = "Service banner"),
        (name = AUTH_TAG, description = "Registration and login"),
        (name = USER_TAG, description = "User profiles"),
        (name = HORSE_TAG, description = "Horses and their images"),
        (name = MARKET_TAG, description = "Sale listings and purchases"),
        (name = RENTAL_TAG, description = "Rental listings and bookings"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root::root))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/users/me", get(user::get_me).put(user::update_me))
        .route("/api/v1/users/{user_id}", get(user::get_user))
        .route(
            "/api/v1/horses",
            get(horse::list_horses).post(horse::create_horse),
        )
        .route("/api/v1/horses/my-horses", get(horse::get_my_horses))
        .route(
            "/api/v1/horses/{horse_id}",
            get(horse::get_horse).put(horse::update_horse),
        )
        .route(
            "/api/v1/horses/{horse_id}/images",
            get(horse::get_horse_images).post(horse::add_horse_image),
        )
        .route(
            "/api/v1/market/listings",
            get(market::list_listings).post(market::create_listing),
        )
        .route("/api/v1/market/my-listings", get(market::get_my_listings))
        .route(
            "/api/v1/market/listings/{listing_id}",
            get(market::get_listing).put(market::update_listing),
        )
        .route("/api/v1/market/transactions", post(market::create_transaction))
        .route(
            "/api/v1/market/my-transactions",
            get(market::get_my_transactions),
        )
        .route(
            "/api/v1/rental/listings",
            get(rental::list_listings).post(rental::create_listing),
        )
        .route("/api/v1/rental/my-listings", get(rental::get_my_listings))
        .route(
            "/api/v1/rental/listings/{listing_id}",
            get(rental::get_listing).put(rental::update_listing),
        )
        .route(
            "/api/v1/rental/listings/{listing_id}/bookings",
            get(rental::get_listing_bookings),
        )
        .route("/api/v1/rental/bookings", post(rental::create_booking))
        .route("/api/v1/rental/my-bookings", get(rental::get_my_bookings))
        .route(
            "/api/v1/rental/bookings/{booking_id}",
            put(rental::update_booking),
        )
        .merge(SwaggerUi::new("/docs").url("/api/v1/openapi.json", ApiDoc::openapi()))
}
