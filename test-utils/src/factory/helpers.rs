//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a horse owned by that user.
///
/// # Returns
/// - `Ok((user, horse))` - The owner and their horse
/// - `Err(DbErr)` - Database error during creation
pub async fn create_horse_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::horse::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let horse = crate::factory::horse::create_horse(db, user.id).await?;

    Ok((user, horse))
}

/// Creates an owner, their horse, and a rental listing for the horse.
///
/// The listing uses the defaults of `RentalListingFactory`.
///
/// # Returns
/// - `Ok((owner, horse, listing))`
/// - `Err(DbErr)` - Database error during creation
pub async fn create_rental_listing_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::horse::Model,
        entity::rental_listing::Model,
    ),
    DbErr,
> {
    let (owner, horse) = create_horse_with_owner(db).await?;
    let listing = crate::factory::rental_listing::create_rental_listing(db, horse.id, owner.id).await?;

    Ok((owner, horse, listing))
}

/// Creates a seller, their horse, and an active market listing for the horse.
///
/// # Returns
/// - `Ok((seller, horse, listing))`
/// - `Err(DbErr)` - Database error during creation
pub async fn create_market_listing_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::horse::Model,
        entity::market_listing::Model,
    ),
    DbErr,
> {
    let (seller, horse) = create_horse_with_owner(db).await?;
    let listing = crate::factory::market_listing::create_market_listing(db, horse.id, seller.id).await?;

    Ok((seller, horse, listing))
}
