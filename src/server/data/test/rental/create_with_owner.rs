use super::*;

/// Tests creating a rental listing for an owner.
///
/// Expected: Ok with owner stamped and status Available
#[tokio::test]
async fn creates_available_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, horse) = factory::helpers::create_horse_with_owner(db).await?;

    let repo = RentalListingRepository::new(db);
    let listing = repo
        .create_with_owner(
            owner.id,
            CreateRentalListingParams {
                horse_id: horse.id,
                price_per_hour: Some(30.0),
                price_per_day: None,
                price_per_week: None,
                price_per_month: None,
                description: None,
                location: "Aiken".to_string(),
                requirements: Some("Intermediate riders".to_string()),
                available_durations: "Hourly".to_string(),
            },
        )
        .await?;

    assert_eq!(listing.owner_id, owner.id);
    assert_eq!(listing.status, RentalStatus::Available);
    assert_eq!(listing.price_per_hour, Some(30.0));
    assert_eq!(repo.get_by_id(listing.id).await?, Some(listing.clone()));

    let owned = repo.get_by_owner(owner.id, 0, 100).await?;
    assert_eq!(owned, vec![listing]);

    Ok(())
}
