use super::*;

/// Tests recording a purchase.
///
/// Verifies that the buyer is stamped on the transaction and that the listing is
/// marked Sold afterwards.
///
/// Expected: Ok with transaction created and listing Sold
#[tokio::test]
async fn records_purchase_and_marks_listing_sold() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_market_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_seller, _horse, listing) =
        factory::helpers::create_market_listing_with_dependencies(db).await?;
    let buyer = factory::create_user(db).await?;

    let repo = MarketListingRepository::new(db);
    let transaction = repo
        .create_transaction(
            buyer.id,
            CreateTransactionParams {
                listing_id: listing.id,
                final_price: 4800.0,
                payment_method: "wire".to_string(),
                payment_status: "completed".to_string(),
                transaction_notes: None,
            },
        )
        .await?;

    assert_eq!(transaction.buyer_id, buyer.id);
    assert_eq!(transaction.listing_id, listing.id);
    assert_eq!(transaction.final_price, 4800.0);

    let listing = repo.get_by_id(listing.id).await?.unwrap();
    assert_eq!(listing.status, ListingStatus::Sold);

    let purchases = repo.get_transactions_by_buyer(buyer.id, 0, 100).await?;
    assert_eq!(purchases, vec![transaction]);

    Ok(())
}
