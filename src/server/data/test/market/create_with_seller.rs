use super::*;

/// Tests creating a sale listing for a seller.
///
/// Expected: Ok with seller stamped and status Active
#[tokio::test]
async fn creates_active_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_market_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (seller, horse) = factory::helpers::create_horse_with_owner(db).await?;

    let repo = MarketListingRepository::new(db);
    let listing = repo
        .create_with_seller(
            seller.id,
            CreateMarketListingParams {
                horse_id: horse.id,
                price: 12500.0,
                description: Some("Show jumper".to_string()),
                is_negotiable: false,
                location: "Wellington".to_string(),
            },
        )
        .await?;

    assert_eq!(listing.seller_id, seller.id);
    assert_eq!(listing.horse_id, horse.id);
    assert_eq!(listing.status, ListingStatus::Active);
    assert!(!listing.is_negotiable);
    assert_eq!(repo.get_by_id(listing.id).await?, Some(listing));

    Ok(())
}

/// Tests listing a seller's listings.
///
/// Expected: Ok with only the seller's listing
#[tokio::test]
async fn lists_listings_by_seller() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_market_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (seller, _horse, listing) =
        factory::helpers::create_market_listing_with_dependencies(db).await?;
    factory::helpers::create_market_listing_with_dependencies(db).await?;

    let listings = MarketListingRepository::new(db)
        .get_by_seller(seller.id, 0, 100)
        .await?;

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].id, listing.id);

    Ok(())
}
