use super::*;

fn booking_params(listing_id: i32) -> CreateRentalBookingParams {
    let start_date = Utc::now() + Duration::days(1);
    CreateRentalBookingParams {
        rental_listing_id: listing_id,
        start_date,
        end_date: start_date + Duration::days(7),
        duration_type: RentalDuration::Weekly,
        special_requests: None,
    }
}

/// Tests creating a booking for a renter.
///
/// Verifies that the booking starts Pending with the given price and that the
/// listing is marked Booked afterwards.
///
/// Expected: Ok with booking Pending and listing Booked
#[tokio::test]
async fn creates_pending_booking_and_marks_listing_booked() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _horse, listing) =
        factory::helpers::create_rental_listing_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;

    let booking = RentalBookingRepository::new(db)
        .create_with_renter(renter.id, 600.0, booking_params(listing.id))
        .await?;

    assert_eq!(booking.renter_id, renter.id);
    assert_eq!(booking.total_price, 600.0);
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.payment_status, None);

    let listing = RentalListingRepository::new(db)
        .get_by_id(listing.id)
        .await?
        .unwrap();
    assert_eq!(listing.status, RentalStatus::Booked);

    Ok(())
}

/// Tests the renter and listing scoped booking lists.
///
/// Expected: Ok with each booking under its renter and both under the listing
#[tokio::test]
async fn lists_bookings_by_renter_and_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _horse, listing) =
        factory::helpers::create_rental_listing_with_dependencies(db).await?;
    let first_renter = factory::create_user(db).await?;
    let second_renter = factory::create_user(db).await?;
    let repo = RentalBookingRepository::new(db);

    let first = repo
        .create_with_renter(first_renter.id, 600.0, booking_params(listing.id))
        .await?;
    let second = repo
        .create_with_renter(second_renter.id, 600.0, booking_params(listing.id))
        .await?;

    assert_eq!(repo.get_by_renter(first_renter.id, 0, 100).await?, vec![first.clone()]);
    assert_eq!(repo.get_by_listing(listing.id, 0, 100).await?, vec![first, second]);

    Ok(())
}

/// Tests a partial booking update.
///
/// Expected: Ok with status and payment status changed, dates untouched
#[tokio::test]
async fn updates_booking_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, _horse, listing) =
        factory::helpers::create_rental_listing_with_dependencies(db).await?;
    let renter = factory::create_user(db).await?;
    let repo = RentalBookingRepository::new(db);
    let booking = repo
        .create_with_renter(renter.id, 600.0, booking_params(listing.id))
        .await?;

    let updated = repo
        .update(
            booking.id,
            UpdateRentalBookingParams {
                status: Some(BookingStatus::Confirmed),
                payment_status: Some(Some("paid".to_string())),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, BookingStatus::Confirmed);
    assert_eq!(updated.payment_status, Some("paid".to_string()));
    assert_eq!(updated.start_date, booking.start_date);

    Ok(())
}
