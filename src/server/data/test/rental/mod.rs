use crate::model::query::RentalFilterQuery;
use crate::server::{
    data::rental::{RentalBookingRepository, RentalListingRepository},
    model::{
        query::ListQuery,
        rental::{
            rental_filters, CreateRentalBookingParams, CreateRentalListingParams,
            UpdateRentalBookingParams,
        },
    },
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{BookingStatus, RentalDuration, RentalStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod bookings;
mod create_with_owner;
mod list;
