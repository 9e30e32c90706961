use super::*;

/// Tests the default status scope of the market list.
///
/// Expected: Ok with the active listing only
#[tokio::test]
async fn lists_active_listings_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_market_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (seller, horse, active) =
        factory::helpers::create_market_listing_with_dependencies(db).await?;
    factory::market_listing::MarketListingFactory::new(db, horse.id, seller.id)
        .status(ListingStatus::Sold)
        .build()
        .await?;

    let filters = market_filters(MarketFilterQuery::default()).unwrap();
    let listings = MarketListingRepository::new(db)
        .list(ListQuery::default().with_filters(filters))
        .await?;

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].id, active.id);

    Ok(())
}

/// Tests price range and negotiability filters.
///
/// Expected: Ok with the listing inside the range only
#[tokio::test]
async fn filters_by_price_and_negotiability() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_market_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (seller, horse) = factory::helpers::create_horse_with_owner(db).await?;
    let cheap = factory::market_listing::MarketListingFactory::new(db, horse.id, seller.id)
        .price(3000.0)
        .build()
        .await?;
    factory::market_listing::MarketListingFactory::new(db, horse.id, seller.id)
        .price(9000.0)
        .build()
        .await?;
    factory::market_listing::MarketListingFactory::new(db, horse.id, seller.id)
        .price(3500.0)
        .is_negotiable(false)
        .build()
        .await?;

    let filters = market_filters(MarketFilterQuery {
        min_price: Some(1000.0),
        max_price: Some(5000.0),
        is_negotiable: Some(true),
        ..Default::default()
    })
    .unwrap();
    let listings = MarketListingRepository::new(db)
        .list(ListQuery::default().with_filters(filters))
        .await?;

    let ids: Vec<i32> = listings.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![cheap.id]);

    Ok(())
}
