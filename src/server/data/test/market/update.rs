use super::*;

/// Tests a partial listing update.
///
/// Expected: Ok with price changed and location untouched
#[tokio::test]
async fn updates_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_market_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_seller, _horse, listing) =
        factory::helpers::create_market_listing_with_dependencies(db).await?;

    let updated = MarketListingRepository::new(db)
        .update(
            listing.id,
            UpdateMarketListingParams {
                price: Some(4500.0),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.price, 4500.0);
    assert_eq!(updated.location, listing.location);
    assert_eq!(updated.status, listing.status);

    Ok(())
}
