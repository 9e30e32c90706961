use super::*;
use crate::server::{
    model::rental::{CreateRentalBookingParams, UpdateRentalBookingParams},
    service::rental::RentalService,
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{BookingStatus, RentalDuration, RentalStatus};

fn booking(listing_id: i32, duration_type: RentalDuration) -> CreateRentalBookingParams {
    let start_date = Utc::now() + Duration::days(2);
    CreateRentalBookingParams {
        rental_listing_id: listing_id,
        start_date,
        end_date: start_date + Duration::days(1),
        duration_type,
        special_requests: Some("Trail ride".to_string()),
    }
}

/// Tests that a booking's total is the listing's price for the duration.
///
/// Expected: Ok with total 100.0 for a daily booking and the listing Booked
#[tokio::test]
async fn prices_booking_from_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _horse, listing) =
        factory::helpers::create_rental_listing_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;
    let service = RentalService::new(db);

    let created = service
        .create_booking(renter.id, booking(listing.id, RentalDuration::Daily))
        .await
        .unwrap();

    assert_eq!(created.total_price, listing.price_per_day.unwrap());
    assert_eq!(created.status, BookingStatus::Pending);
    assert_eq!(
        service.get_listing(listing.id).await.unwrap().status,
        RentalStatus::Booked
    );

    Ok(())
}

/// Tests booking a duration the listing has no price for.
///
/// Expected: Err(AppError::BadRequest) and no booking row
#[tokio::test]
async fn rejects_duration_without_price() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _horse, listing) =
        factory::helpers::create_rental_listing_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;

    let result = RentalService::new(db)
        .create_booking(renter.id, booking(listing.id, RentalDuration::Hourly))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::RentalBooking::find().count(db).await?, 0);

    Ok(())
}

/// Tests booking one's own listing.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_booking_own_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _horse, listing) =
        factory::helpers::create_rental_listing_with_dependencies(db).await?;

    let result = RentalService::new(db)
        .create_booking(owner.id, booking(listing.id, RentalDuration::Daily))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that bookings carry their listing, the listed horse and the renter.
///
/// Expected: Ok with the listing, its horse and owner, and the renter embedded on every read
#[tokio::test]
async fn bookings_embed_listing_and_renter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, horse, listing) =
        factory::helpers::create_rental_listing_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;
    let service = RentalService::new(db);

    let created = service
        .create_booking(renter.id, booking(listing.id, RentalDuration::Daily))
        .await
        .unwrap();
    let for_owner = service
        .get_listing_bookings(owner.id, listing.id, 0, 100)
        .await
        .unwrap();
    let for_renter = service
        .get_bookings_by_renter(renter.id, 0, 100)
        .await
        .unwrap();

    let embedded = created.rental_listing.as_ref().unwrap();
    assert_eq!(embedded.id, listing.id);
    assert_eq!(embedded.status, RentalStatus::Booked);
    assert_eq!(embedded.horse.as_ref().unwrap().id, horse.id);
    assert_eq!(embedded.owner.as_ref().unwrap().id, owner.id);
    assert_eq!(created.renter.as_ref().unwrap().id, renter.id);
    assert_eq!(for_owner, vec![created.clone()]);
    assert_eq!(for_renter, vec![created]);

    Ok(())
}

/// Tests that only the owner sees a listing's bookings.
///
/// Expected: Ok with one booking for the owner, Err(AccessDenied) for the renter
#[tokio::test]
async fn listing_bookings_are_owner_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _horse, listing) =
        factory::helpers::create_rental_listing_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;
    let service = RentalService::new(db);
    service
        .create_booking(renter.id, booking(listing.id, RentalDuration::Weekly))
        .await
        .unwrap();

    let for_owner = service
        .get_listing_bookings(owner.id, listing.id, 0, 100)
        .await
        .unwrap();
    let for_renter = service
        .get_listing_bookings(renter.id, listing.id, 0, 100)
        .await;

    assert_eq!(for_owner.len(), 1);
    assert!(matches!(
        for_renter,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that only the renter may update a booking.
///
/// Expected: Err(AccessDenied) for the owner, Ok for the renter
#[tokio::test]
async fn only_renter_updates_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _horse, listing) =
        factory::helpers::create_rental_listing_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;
    let service = RentalService::new(db);
    let created = service
        .create_booking(renter.id, booking(listing.id, RentalDuration::Daily))
        .await
        .unwrap();
    let params = UpdateRentalBookingParams {
        status: Some(BookingStatus::Cancelled),
        ..Default::default()
    };

    let rejected = service
        .update_booking(owner.id, created.id, params.clone())
        .await;
    let accepted = service
        .update_booking(renter.id, created.id, params)
        .await
        .unwrap();

    assert!(matches!(
        rejected,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert_eq!(accepted.status, BookingStatus::Cancelled);
    assert_eq!(
        service.get_bookings_by_renter(renter.id, 0, 100).await.unwrap(),
        vec![accepted]
    );

    Ok(())
}
