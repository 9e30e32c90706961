use super::*;

/// Tests the available-only scope with a duration filter.
///
/// Expected: Ok with the available listing that offers weekly rentals
#[tokio::test]
async fn lists_available_listings_offering_duration() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, horse) = factory::helpers::create_horse_with_owner(db).await?;
    let weekly = factory::rental_listing::RentalListingFactory::new(db, horse.id, owner.id)
        .available_durations("Daily,Weekly")
        .build()
        .await?;
    factory::rental_listing::RentalListingFactory::new(db, horse.id, owner.id)
        .available_durations("Daily")
        .build()
        .await?;
    factory::rental_listing::RentalListingFactory::new(db, horse.id, owner.id)
        .available_durations("Weekly")
        .status(RentalStatus::Booked)
        .build()
        .await?;

    let filters = rental_filters(RentalFilterQuery {
        duration_type: Some(RentalDuration::Weekly),
        ..Default::default()
    })
    .unwrap();
    let listings = RentalListingRepository::new(db)
        .list(ListQuery::default().with_filters(filters))
        .await?;

    let ids: Vec<i32> = listings.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![weekly.id]);

    Ok(())
}
