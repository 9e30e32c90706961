//! SeaORM entity definitions for the horse board schema.
//!
//! One module per table plus the string-backed enumerations shared between
//! them. Table creation lives in the `migration` crate; these definitions must
//! stay in step with it.

pub mod prelude;

pub mod horse;
pub mod horse_image;
pub mod market_listing;
pub mod rental_booking;
pub mod rental_listing;
pub mod sea_orm_active_enums;
pub mod transaction;
pub mod user;
