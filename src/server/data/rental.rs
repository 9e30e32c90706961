//! Rental data repository for rental listings and bookings.

use entity::sea_orm_active_enums::{BookingStatus, RentalStatus};
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::{
    data::crud::{CrudRepository, Patch},
    model::{
        query::ListQuery,
        rental::{
            CreateRentalBookingParams, CreateRentalListingParams, RentalBooking, RentalListing,
            UpdateRentalBookingParams, UpdateRentalListingParams,
        },
    },
};

impl Patch<entity::rental_listing::ActiveModel> for UpdateRentalListingParams {
    fn apply(self, active: &mut entity::rental_listing::ActiveModel) {
        if let Some(price) = self.price_per_hour {
            active.price_per_hour = ActiveValue::Set(price);
        }
        if let Some(price) = self.price_per_day {
            active.price_per_day = ActiveValue::Set(price);
        }
        if let Some(price) = self.price_per_week {
            active.price_per_week = ActiveValue::Set(price);
        }
        if let Some(price) = self.price_per_month {
            active.price_per_month = ActiveValue::Set(price);
        }
        if let Some(description) = self.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(location) = self.location {
            active.location = ActiveValue::Set(location);
        }
        if let Some(requirements) = self.requirements {
            active.requirements = ActiveValue::Set(requirements);
        }
        if let Some(available_durations) = self.available_durations {
            active.available_durations = ActiveValue::Set(available_durations);
        }
        if let Some(status) = self.status {
            active.status = ActiveValue::Set(status);
        }
    }
}

impl Patch<entity::rental_listing::ActiveModel> for RentalStatus {
    fn apply(self, active: &mut entity::rental_listing::ActiveModel) {
        active.status = ActiveValue::Set(self);
    }
}

impl Patch<entity::rental_booking::ActiveModel> for UpdateRentalBookingParams {
    fn apply(self, active: &mut entity::rental_booking::ActiveModel) {
        if let Some(start_date) = self.start_date {
            active.start_date = ActiveValue::Set(start_date);
        }
        if let Some(end_date) = self.end_date {
            active.end_date = ActiveValue::Set(end_date);
        }
        if let Some(special_requests) = self.special_requests {
            active.special_requests = ActiveValue::Set(special_requests);
        }
        if let Some(status) = self.status {
            active.status = ActiveValue::Set(status);
        }
        if let Some(payment_status) = self.payment_status {
            active.payment_status = ActiveValue::Set(payment_status);
        }
    }
}

pub struct RentalListingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RentalListingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn crud(&self) -> CrudRepository<'a, entity::prelude::RentalListing> {
        CrudRepository::new(self.db)
    }

    /// Creates an `Available` rental listing owned by `owner_id`.
    pub async fn create_with_owner(
        &self,
        owner_id: i32,
        params: CreateRentalListingParams,
    ) -> Result<RentalListing, DbErr> {
        let entity = self
            .crud()
            .create(entity::rental_listing::ActiveModel {
                horse_id: ActiveValue::Set(params.horse_id),
                owner_id: ActiveValue::Set(owner_id),
                price_per_hour: ActiveValue::Set(params.price_per_hour),
                price_per_day: ActiveValue::Set(params.price_per_day),
                price_per_week: ActiveValue::Set(params.price_per_week),
                price_per_month: ActiveValue::Set(params.price_per_month),
                description: ActiveValue::Set(params.description),
                status: ActiveValue::Set(RentalStatus::Available),
                location: ActiveValue::Set(params.location),
                requirements: ActiveValue::Set(params.requirements),
                available_durations: ActiveValue::Set(params.available_durations),
                ..Default::default()
            })
            .await?;

        Ok(RentalListing::from_entity(entity))
    }

    pub async fn get_by_id(&self, listing_id: i32) -> Result<Option<RentalListing>, DbErr> {
        let entity = self.crud().get(listing_id).await?;

        Ok(entity.map(RentalListing::from_entity))
    }

    pub async fn list(&self, query: ListQuery) -> Result<Vec<RentalListing>, DbErr> {
        let entities = self.crud().list(query).await?;

        Ok(entities.into_iter().map(RentalListing::from_entity).collect())
    }

    pub async fn get_by_owner(
        &self,
        owner_id: i32,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<RentalListing>, DbErr> {
        self.list(ListQuery::paginate(skip, limit).eq("owner_id", owner_id))
            .await
    }

    /// Finds every rental listing in `listing_ids`, used to embed listings in bookings.
    pub async fn find_many(&self, listing_ids: Vec<i32>) -> Result<Vec<RentalListing>, DbErr> {
        if listing_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::RentalListing::find()
            .filter(entity::rental_listing::Column::Id.is_in(listing_ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(RentalListing::from_entity).collect())
    }

    /// Applies a partial update to a rental listing.
    ///
    /// # Returns
    /// - `Ok(Some(RentalListing))` - The updated listing
    /// - `Ok(None)` - No listing with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update<P>(&self, listing_id: i32, patch: P) -> Result<Option<RentalListing>, DbErr>
    where
        P: Patch<entity::rental_listing::ActiveModel> + Send,
    {
        let crud = self.crud();
        let Some(existing) = crud.get(listing_id).await? else {
            return Ok(None);
        };

        let entity = crud.update(existing, patch).await?;

        Ok(Some(RentalListing::from_entity(entity)))
    }
}

pub struct RentalBookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RentalBookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn crud(&self) -> CrudRepository<'a, entity::prelude::RentalBooking> {
        CrudRepository::new(self.db)
    }

    /// Creates a `Pending` booking for `renter_id`, then marks the listing `Booked`.
    ///
    /// The listing's status is overwritten whatever it was before.
    ///
    /// # Arguments
    /// - `renter_id` - ID of the authenticated user booking the listing
    /// - `total_price` - The listing's price for the requested duration category
    /// - `params` - Booking window and duration category
    ///
    /// # Returns
    /// - `Ok(RentalBooking)` - The created booking
    /// - `Err(DbErr)` - Database error during either write
    pub async fn create_with_renter(
        &self,
        renter_id: i32,
        total_price: f64,
        params: CreateRentalBookingParams,
    ) -> Result<RentalBooking, DbErr> {
        let listing_id = params.rental_listing_id;

        let entity = self
            .crud()
            .create(entity::rental_booking::ActiveModel {
                rental_listing_id: ActiveValue::Set(listing_id),
                renter_id: ActiveValue::Set(renter_id),
                start_date: ActiveValue::Set(params.start_date),
                end_date: ActiveValue::Set(params.end_date),
                duration_type: ActiveValue::Set(params.duration_type),
                total_price: ActiveValue::Set(total_price),
                status: ActiveValue::Set(BookingStatus::Pending),
                special_requests: ActiveValue::Set(params.special_requests),
                payment_status: ActiveValue::Set(None),
                ..Default::default()
            })
            .await?;

        RentalListingRepository::new(self.db)
            .update(listing_id, RentalStatus::Booked)
            .await?;

        Ok(RentalBooking::from_entity(entity))
    }

    pub async fn get_by_id(&self, booking_id: i32) -> Result<Option<RentalBooking>, DbErr> {
        let entity = self.crud().get(booking_id).await?;

        Ok(entity.map(RentalBooking::from_entity))
    }

    pub async fn get_by_renter(
        &self,
        renter_id: i32,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<RentalBooking>, DbErr> {
        self.list(ListQuery::paginate(skip, limit).eq("renter_id", renter_id))
            .await
    }

    pub async fn get_by_listing(
        &self,
        listing_id: i32,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<RentalBooking>, DbErr> {
        self.list(ListQuery::paginate(skip, limit).eq("rental_listing_id", listing_id))
            .await
    }

    async fn list(&self, query: ListQuery) -> Result<Vec<RentalBooking>, DbErr> {
        let entities = self.crud().list(query).await?;

        Ok(entities.into_iter().map(RentalBooking::from_entity).collect())
    }

    /// Applies a partial update to a booking.
    ///
    /// # Returns
    /// - `Ok(Some(RentalBooking))` - The updated booking
    /// - `Ok(None)` - No booking with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        booking_id: i32,
        params: UpdateRentalBookingParams,
    ) -> Result<Option<RentalBooking>, DbErr> {
        let crud = self.crud();
        let Some(existing) = crud.get(booking_id).await? else {
            return Ok(None);
        };

        let entity = crud.update(existing, params).await?;

        Ok(Some(RentalBooking::from_entity(entity)))
    }
}
