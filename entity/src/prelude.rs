pub use super::horse::Entity as Horse;
pub use super::horse_image::Entity as HorseImage;
pub use super::market_listing::Entity as MarketListing;
pub use super::rental_booking::Entity as RentalBooking;
pub use super::rental_listing::Entity as RentalListing;
pub use super::transaction::Entity as Transaction;
pub use super::user::Entity as User;
