//! Rental service: rental listings and bookings.
//!
//! Listings returned from here embed their horse and owner, and bookings embed their
//! listing and renter. Related records are loaded in batches.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        horse::HorseRepository,
        rental::{RentalBookingRepository, RentalListingRepository},
        user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        query::ListQuery,
        rental::{
            CreateRentalBookingParams, CreateRentalListingParams, RentalBooking, RentalListing,
            UpdateRentalBookingParams, UpdateRentalListingParams,
        },
    },
    service::horse::HorseService,
};

pub struct RentalService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RentalService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Offers a horse for rent.
    ///
    /// # Returns
    /// - `Ok(RentalListing)` - The created listing with horse and owner embedded
    /// - `Err(AppError::NotFound)` - Referenced horse does not exist
    /// - `Err(AuthError::AccessDenied)` - Referenced horse belongs to another user
    pub async fn create_listing(
        &self,
        owner_id: i32,
        params: CreateRentalListingParams,
    ) -> Result<RentalListing, AppError> {
        HorseService::new(self.db)
            .get_owned(owner_id, params.horse_id)
            .await?;

        let listing = RentalListingRepository::new(self.db)
            .create_with_owner(owner_id, params)
            .await?;

        tracing::info!("User {} listed horse {} for rent", owner_id, listing.horse_id);

        self.embed_one(listing).await
    }

    pub async fn list(&self, query: ListQuery) -> Result<Vec<RentalListing>, AppError> {
        let listings = RentalListingRepository::new(self.db).list(query).await?;

        self.embed(listings).await
    }

    pub async fn get_by_owner(
        &self,
        owner_id: i32,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<RentalListing>, AppError> {
        let listings = RentalListingRepository::new(self.db)
            .get_by_owner(owner_id, skip, limit)
            .await?;

        self.embed(listings).await
    }

    pub async fn get_listing(&self, listing_id: i32) -> Result<RentalListing, AppError> {
        let listing = self.find_listing(listing_id).await?;

        self.embed_one(listing).await
    }

    /// Fetches a rental listing and requires `actor_id` to own it.
    async fn get_owned_listing(
        &self,
        actor_id: i32,
        listing_id: i32,
    ) -> Result<RentalListing, AppError> {
        let listing = self.find_listing(listing_id).await?;

        if listing.owner_id != actor_id {
            return Err(AuthError::AccessDenied(
                actor_id,
                format!("attempted to act on rental listing {} of user {}", listing_id, listing.owner_id),
            )
            .into());
        }

        Ok(listing)
    }

    /// Applies a partial update to a rental listing owned by `actor_id`.
    ///
    /// # Returns
    /// - `Ok(RentalListing)` - The updated listing
    /// - `Err(AppError::NotFound)` - No listing with that id
    /// - `Err(AuthError::AccessDenied)` - Listing belongs to another owner
    pub async fn update_listing(
        &self,
        actor_id: i32,
        listing_id: i32,
        params: UpdateRentalListingParams,
    ) -> Result<RentalListing, AppError> {
        self.get_owned_listing(actor_id, listing_id).await?;

        let listing = RentalListingRepository::new(self.db)
            .update(listing_id, params)
            .await?
            .ok_or_else(listing_not_found)?;

        self.embed_one(listing).await
    }

    /// Lists the bookings of a listing owned by `actor_id`.
    pub async fn get_listing_bookings(
        &self,
        actor_id: i32,
        listing_id: i32,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<RentalBooking>, AppError> {
        self.get_owned_listing(actor_id, listing_id).await?;

        let bookings = RentalBookingRepository::new(self.db)
            .get_by_listing(listing_id, skip, limit)
            .await?;

        self.embed_bookings(bookings).await
    }

    /// Books a listing as `renter_id`.
    ///
    /// The total price is the listing's price for the requested duration category. The
    /// listing's current status is not checked.
    ///
    /// # Returns
    /// - `Ok(RentalBooking)` - The `Pending` booking; the listing is now `Booked`
    /// - `Err(AppError::NotFound)` - No listing with that id
    /// - `Err(AppError::BadRequest)` - Renter is the owner, or no price for the duration
    pub async fn create_booking(
        &self,
        renter_id: i32,
        params: CreateRentalBookingParams,
    ) -> Result<RentalBooking, AppError> {
        let listing = self.find_listing(params.rental_listing_id).await?;

        if listing.owner_id == renter_id {
            return Err(AppError::BadRequest("Cannot book your own listing".to_string()));
        }

        let total_price = listing.booking_price(params.duration_type)?;

        let booking = RentalBookingRepository::new(self.db)
            .create_with_renter(renter_id, total_price, params)
            .await?;

        tracing::info!("User {} booked rental listing {}", renter_id, listing.id);

        self.embed_booking(booking).await
    }

    pub async fn get_bookings_by_renter(
        &self,
        renter_id: i32,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<RentalBooking>, AppError> {
        let bookings = RentalBookingRepository::new(self.db)
            .get_by_renter(renter_id, skip, limit)
            .await?;

        self.embed_bookings(bookings).await
    }

    /// Applies a partial update to a booking made by `actor_id`.
    ///
    /// # Returns
    /// - `Ok(RentalBooking)` - The updated booking
    /// - `Err(AppError::NotFound)` - No booking with that id
    /// - `Err(AuthError::AccessDenied)` - Booking belongs to another renter
    pub async fn update_booking(
        &self,
        actor_id: i32,
        booking_id: i32,
        params: UpdateRentalBookingParams,
    ) -> Result<RentalBooking, AppError> {
        let booking_repo = RentalBookingRepository::new(self.db);

        let booking = booking_repo
            .get_by_id(booking_id)
            .await?
            .ok_or_else(booking_not_found)?;

        if booking.renter_id != actor_id {
            return Err(AuthError::AccessDenied(
                actor_id,
                format!("attempted to update booking {} of user {}", booking_id, booking.renter_id),
            )
            .into());
        }

        let booking = booking_repo
            .update(booking_id, params)
            .await?
            .ok_or_else(booking_not_found)?;

        self.embed_booking(booking).await
    }

    async fn find_listing(&self, listing_id: i32) -> Result<RentalListing, AppError> {
        RentalListingRepository::new(self.db)
            .get_by_id(listing_id)
            .await?
            .ok_or_else(listing_not_found)
    }

    async fn embed_one(&self, listing: RentalListing) -> Result<RentalListing, AppError> {
        let mut listings = self.embed(vec![listing]).await?;

        listings
            .pop()
            .ok_or_else(|| AppError::InternalError("Embedding dropped a rental listing".to_string()))
    }

    async fn embed_booking(&self, booking: RentalBooking) -> Result<RentalBooking, AppError> {
        let mut bookings = self.embed_bookings(vec![booking]).await?;

        bookings
            .pop()
            .ok_or_else(|| AppError::InternalError("Embedding dropped a booking".to_string()))
    }

    /// Attaches the rental listing (with its horse and owner) and the renter to each booking.
    async fn embed_bookings(
        &self,
        mut bookings: Vec<RentalBooking>,
    ) -> Result<Vec<RentalBooking>, AppError> {
        let listing_ids = bookings.iter().map(|b| b.rental_listing_id).collect();
        let renter_ids = bookings.iter().map(|b| b.renter_id).collect();

        let listings = RentalListingRepository::new(self.db)
            .find_many(listing_ids)
            .await?;
        let listings: HashMap<i32, _> = self
            .embed(listings)
            .await?
            .into_iter()
            .map(|l| (l.id, l))
            .collect();
        let renters: HashMap<i32, _> = UserRepository::new(self.db)
            .find_many(renter_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        for booking in &mut bookings {
            booking.rental_listing = listings.get(&booking.rental_listing_id).cloned();
            booking.renter = renters.get(&booking.renter_id).cloned();
        }

        Ok(bookings)
    }

    /// Attaches horse and owner to each listing.
    async fn embed(&self, mut listings: Vec<RentalListing>) -> Result<Vec<RentalListing>, AppError> {
        let horse_ids = listings.iter().map(|l| l.horse_id).collect();
        let owner_ids = listings.iter().map(|l| l.owner_id).collect();

        let horses: HashMap<i32, _> = HorseRepository::new(self.db)
            .find_many(horse_ids)
            .await?
            .into_iter()
            .map(|h| (h.id, h))
            .collect();
        let owners: HashMap<i32, _> = UserRepository::new(self.db)
            .find_many(owner_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        for listing in &mut listings {
            listing.horse = horses.get(&listing.horse_id).cloned();
            listing.owner = owners.get(&listing.owner_id).cloned();
        }

        Ok(listings)
    }
}

fn listing_not_found() -> AppError {
    AppError::NotFound("Rental listing not found".to_string())
}

fn booking_not_found() -> AppError {
    AppError::NotFound("Booking not found".to_string())
}
