//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! Each operation is a linear sequence: fetch the record, compare the acting user
//! against its owner, then delegate to a repository. Services work with domain models
//! rather than DTOs or entity models.

pub mod auth;
pub mod horse;
pub mod market;
pub mod rental;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;
