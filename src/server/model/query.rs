//! List query model consumed by the generic CRUD repository.
//!
//! A `ListQuery` names fields as plain strings so the same value can be applied to
//! any entity. The repository resolves each name against the entity's columns and
//! silently drops names that do not resolve.

use sea_orm::Value;

use crate::{
    model::query::{PaginationQuery, SearchQuery, SortQuery},
    server::error::AppError,
};

pub const MAX_LIMIT: u64 = 100;
pub const MIN_SEARCH_LENGTH: usize = 3;
pub const DEFAULT_SEARCH_FIELDS: [&str; 2] = ["name", "description"];

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Eq(Value),
    /// Inclusive bounds; either side may be open.
    Range {
        min: Option<Value>,
        max: Option<Value>,
    },
    Contains(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub value: FilterValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sort {
    pub field: String,
    pub order: SortOrder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Search {
    pub text: String,
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub filters: Vec<Filter>,
    pub sort: Option<Sort>,
    pub search: Option<Search>,
    pub skip: u64,
    pub limit: u64,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
            sort: None,
            search: None,
            skip: 0,
            limit: MAX_LIMIT,
        }
    }
}

impl ListQuery {
    /// Builds a list query from the pagination, sort and search query-string parts.
    ///
    /// # Returns
    /// - `Ok(ListQuery)` - Query with no filters yet
    /// - `Err(AppError::Validation)` - Limit outside 1-100, unknown order, or search text too short
    pub fn from_dto(
        pagination: PaginationQuery,
        sort: SortQuery,
        search: SearchQuery,
    ) -> Result<Self, AppError> {
        if pagination.limit == 0 || pagination.limit > MAX_LIMIT {
            return Err(AppError::Validation(format!(
                "limit must be between 1 and {}",
                MAX_LIMIT
            )));
        }

        let order = match sort.order.as_deref() {
            None | Some("asc") => SortOrder::Asc,
            Some("desc") => SortOrder::Desc,
            Some(other) => {
                return Err(AppError::Validation(format!(
                    "order must be 'asc' or 'desc', got '{}'",
                    other
                )))
            }
        };

        let search = match search.q {
            Some(text) => {
                if text.chars().count() < MIN_SEARCH_LENGTH {
                    return Err(AppError::Validation(format!(
                        "q must be at least {} characters",
                        MIN_SEARCH_LENGTH
                    )));
                }

                let fields = if search.search_in.is_empty() {
                    DEFAULT_SEARCH_FIELDS.iter().map(|f| f.to_string()).collect()
                } else {
                    search.search_in.iter().flat_map(|f| split_csv(f)).collect()
                };

                Some(Search { text, fields })
            }
            None => None,
        };

        Ok(Self {
            filters: Vec::new(),
            sort: sort.sort_by.map(|field| Sort { field, order }),
            search,
            skip: pagination.skip,
            limit: pagination.limit,
        })
    }

    pub fn paginate(skip: u64, limit: u64) -> Self {
        Self {
            skip,
            limit,
            ..Self::default()
        }
    }

    pub fn with_filters(mut self, filters: impl IntoIterator<Item = Filter>) -> Self {
        self.filters.extend(filters);
        self
    }

    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::eq(field, value));
        self
    }
}

impl Filter {
    pub fn eq(field: &str, value: impl Into<Value>) -> Self {
        Self {
            field: field.to_string(),
            value: FilterValue::Eq(value.into()),
        }
    }

    pub fn contains(field: &str, text: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            value: FilterValue::Contains(text.into()),
        }
    }

    /// Returns `None` when both bounds are open so callers can `extend` with the result.
    pub fn range<V: Into<Value>>(field: &str, min: Option<V>, max: Option<V>) -> Option<Self> {
        if min.is_none() && max.is_none() {
            return None;
        }

        Some(Self {
            field: field.to_string(),
            value: FilterValue::Range {
                min: min.map(Into::into),
                max: max.map(Into::into),
            },
        })
    }
}

/// Splits a comma-separated list, trimming entries and dropping empty ones.
pub fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Rejects a negative lower bound on a numeric query filter.
pub fn non_negative<T: PartialOrd + Default + Copy>(
    field: &str,
    value: Option<T>,
) -> Result<Option<T>, AppError> {
    match value {
        Some(v) if v < T::default() => Err(AppError::Validation(format!(
            "{} must be greater than or equal to 0",
            field
        ))),
        other => Ok(other),
    }
}
