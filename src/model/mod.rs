//! Request and response shapes exchanged over HTTP.
//!
//! DTOs in this module are what clients send and receive. The server converts them
//! into domain params (validating along the way) before any business logic runs, and
//! converts domain models back into DTOs on the way out.

use serde::{Deserialize, Deserializer};

pub mod api;
pub mod auth;
pub mod horse;
pub mod market;
pub mod query;
pub mod rental;
pub mod user;

/// Deserializes a present field as `Some`, including an explicit `null`.
///
/// Combined with `#[serde(default)]` on an `Option<Option<T>>` field this tells apart
/// "field absent" (`None`), "set to null" (`Some(None)`) and "set to a value"
/// (`Some(Some(v))`), which partial updates rely on.
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

pub(crate) fn default_true() -> bool {
    true
}
