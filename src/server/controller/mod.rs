//! HTTP handlers.
//!
//! Each handler authenticates (where required), converts DTOs to validated params,
//! calls a service, and converts the result back into a DTO.

pub mod auth;
pub mod horse;
pub mod market;
pub mod rental;
pub mod root;
pub mod user;

#[cfg(test)]
mod test;
