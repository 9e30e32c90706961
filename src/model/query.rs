//! Query-string shapes for list endpoints.
//!
//! Handlers extract several of these side by side; each one picks its own keys out of
//! the same query string and ignores the rest.

use entity::sea_orm_active_enums::{HorseBreed, HorseGender, ListingStatus, RentalDuration};
use serde::Deserialize;
use utoipa::IntoParams;

pub const DEFAULT_LIMIT: u64 = 100;

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

#[derive(Deserialize, Debug, Clone, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Number of records to skip (default: 0)
    #[serde(default)]
    pub skip: u64,
    /// Maximum number of records to return, 1-100 (default: 100)
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SortQuery {
    /// Field to sort by; unknown fields are ignored
    pub sort_by: Option<String>,
    /// `asc` (default) or `desc`
    pub order: Option<String>,
}

/// Free-text search parameters.
///
/// `search_in` may repeat in the query string, so this is collected from raw key/value
/// pairs with [`SearchQuery::from_pairs`] rather than deserialized as a struct.
#[derive(Debug, Clone, Default, PartialEq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Free-text search, at least 3 characters
    pub q: Option<String>,
    /// Fields to search, comma-separated and/or repeated (default: `name,description`)
    pub search_in: Vec<String>,
}

impl SearchQuery {
    /// Picks `q` and every `search_in` out of the query string's pairs; a repeated `q`
    /// keeps its last value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        pairs
            .into_iter()
            .fold(Self::default(), |mut search, (key, value)| {
                match key.as_str() {
                    "q" => search.q = Some(value),
                    "search_in" => search.search_in.push(value),
                    _ => {}
                }
                search
            })
    }
}

#[derive(Deserialize, Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HorseFilterQuery {
    #[param(value_type = Option<String>)]
    pub breed: Option<HorseBreed>,
    #[param(value_type = Option<String>)]
    pub gender: Option<HorseGender>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub min_height: Option<f64>,
    pub max_height: Option<f64>,
    pub location: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MarketFilterQuery {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub location: Option<String>,
    pub is_negotiable: Option<bool>,
    /// Listing status (default: `Active`)
    #[param(value_type = Option<String>)]
    pub status: Option<ListingStatus>,
}

#[derive(Deserialize, Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RentalFilterQuery {
    pub min_price_per_day: Option<f64>,
    pub max_price_per_day: Option<f64>,
    pub location: Option<String>,
    /// Only listings offering this duration
    #[param(value_type = Option<String>)]
    pub duration_type: Option<RentalDuration>,
}
