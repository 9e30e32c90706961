//! Database repository layer for all domain entities.
//!
//! `crud` holds the generic repository every entity goes through. The domain
//! repositories wrap it with ownership-scoped creation, status-scoped listing and
//! relation loading, and return domain models rather than entity models.

pub mod crud;
pub mod horse;
pub mod market;
pub mod rental;
pub mod user;

#[cfg(test)]
mod test;
