//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and into
//! DTOs at the controller boundary. Params are built from DTOs with `from_dto`, which
//! is where input validation happens.

pub mod horse;
pub mod market;
pub mod query;
pub mod rental;
pub mod user;
pub mod validate;
