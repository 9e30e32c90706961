//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let horse = factory::horse::create_horse(&db, user.id).await?;
//!
//!     let (owner, horse) = factory::helpers::create_horse_with_owner(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let listing = factory::rental_listing::RentalListingFactory::new(&db, horse.id, owner.id)
//!     .price_per_hour(Some(25.0))
//!     .price_per_month(None)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod horse;
pub mod market_listing;
pub mod rental_listing;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use horse::create_horse;
pub use market_listing::create_market_listing;
pub use rental_listing::create_rental_listing;
pub use user::create_user;
