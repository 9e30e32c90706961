//! Generic record access shared by every domain repository.
//!
//! `CrudRepository` works over any SeaORM entity. List queries refer to columns by
//! name, so field names arriving from query strings are resolved against the entity's
//! `Column` enum and dropped when they don't match. Timestamps named `created_at` and
//! `updated_at` are stamped here when the entity has them.
//!
//! Substring matches (search and `Contains` filters) ignore case. PostgreSQL gets
//! `ILIKE`; SQLite's `LIKE` already folds ASCII case.

use std::{marker::PhantomData, str::FromStr};

use chrono::Utc;
use sea_orm::{
    sea_query::{extension::postgres::PgExpr, ColumnType, Expr},
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait,
    DatabaseConnection, DbBackend, DbErr, EntityTrait, IntoActiveModel, Iterable, Order,
    PrimaryKeyToColumn, PrimaryKeyTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::model::query::{Filter, FilterValue, ListQuery, Search, SortOrder};

/// Applies a partial update to an active model.
///
/// Implementors only `Set` the fields they carry, leaving the rest `Unchanged` so the
/// resulting UPDATE touches present fields only.
pub trait Patch<A> {
    fn apply(self, active: &mut A);
}

pub struct CrudRepository<'a, E> {
    db: &'a DatabaseConnection,
    entity: PhantomData<E>,
}

impl<'a, E> CrudRepository<'a, E>
where
    E: EntityTrait,
    E::Column: FromStr,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Gets a record by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Record found
    /// - `Ok(None)` - No record with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(self.db).await
    }

    /// Lists records matching the query.
    ///
    /// Filters are ANDed, search fields are ORed together, and the result is ordered by
    /// the sort field when it resolves, otherwise by primary key.
    ///
    /// # Arguments
    /// - `query` - Filters, sort, search, skip and limit
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Matching records, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(&self, query: ListQuery) -> Result<Vec<E::Model>, DbErr> {
        list_select::<E>(self.db.get_database_backend(), query)
            .all(self.db)
            .await
    }

    /// Inserts a record, stamping `created_at` and `updated_at` when the entity has them.
    pub async fn create(&self, mut active: E::ActiveModel) -> Result<E::Model, DbErr> {
        let now = Utc::now();
        for name in ["created_at", "updated_at"] {
            if let Ok(column) = E::Column::from_str(name) {
                active.set(column, now.into());
            }
        }

        active.insert(self.db).await
    }

    /// Applies a partial update to an existing record and refreshes `updated_at`.
    ///
    /// # Arguments
    /// - `existing` - Current state of the record, usually from `get`
    /// - `patch` - Fields to overwrite
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated record
    /// - `Err(DbErr)` - Database error during update
    pub async fn update<P>(&self, existing: E::Model, patch: P) -> Result<E::Model, DbErr>
    where
        P: Patch<E::ActiveModel> + Send,
    {
        let mut active = existing.into_active_model();
        patch.apply(&mut active);

        if let Ok(column) = E::Column::from_str("updated_at") {
            active.set(column, Utc::now().into());
        }

        active.update(self.db).await
    }

    /// Deletes a record by primary key.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed, 0 when the id didn't exist
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> Result<u64, DbErr> {
        let result = E::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

}

/// Builds the SELECT behind `CrudRepository::list` for the given backend.
pub(crate) fn list_select<E>(backend: DbBackend, query: ListQuery) -> Select<E>
where
    E: EntityTrait,
    E::Column: FromStr,
{
    let mut select = E::find();

    for filter in query.filters {
        if let Some(condition) = filter_condition::<E>(backend, filter) {
            select = select.filter(condition);
        }
    }

    if let Some(search) = query.search {
        if let Some(condition) = search_condition::<E>(backend, search) {
            select = select.filter(condition);
        }
    }

    let sort = query
        .sort
        .and_then(|sort| E::Column::from_str(&sort.field).ok().map(|c| (c, sort.order)));

    select = match sort {
        Some((column, SortOrder::Asc)) => select.order_by(column, Order::Asc),
        Some((column, SortOrder::Desc)) => select.order_by(column, Order::Desc),
        None => E::PrimaryKey::iter().fold(select, |select, key| {
            select.order_by(key.into_column(), Order::Asc)
        }),
    };

    select.offset(query.skip).limit(query.limit)
}

fn filter_condition<E>(backend: DbBackend, filter: Filter) -> Option<Condition>
where
    E: EntityTrait,
    E::Column: FromStr,
{
    let column = E::Column::from_str(&filter.field).ok()?;

    let condition = match filter.value {
        FilterValue::Eq(value) => Condition::all().add(column.eq(value)),
        FilterValue::Range { min, max } => {
            let mut condition = Condition::all();
            if let Some(min) = min {
                condition = condition.add(column.gte(min));
            }
            if let Some(max) = max {
                condition = condition.add(column.lte(max));
            }
            condition
        }
        FilterValue::Contains(text) => Condition::all().add(substring(backend, column, &text)),
    };

    Some(condition)
}

/// ORs a substring match across every named field that is a text column.
fn search_condition<E>(backend: DbBackend, search: Search) -> Option<Condition>
where
    E: EntityTrait,
    E::Column: FromStr,
{
    let columns: Vec<E::Column> = search
        .fields
        .iter()
        .filter_map(|field| E::Column::from_str(field).ok())
        .filter(|column| is_text(column.def().get_column_type()))
        .collect();

    if columns.is_empty() {
        return None;
    }

    Some(columns.into_iter().fold(Condition::any(), |condition, column| {
        condition.add(substring(backend, column, &search.text))
    }))
}

/// Case-insensitive `%text%` match on a column.
fn substring<C: ColumnTrait>(backend: DbBackend, column: C, text: &str) -> Expr {
    match backend {
        DbBackend::Postgres => Expr::col(column.as_column_ref()).ilike(format!("%{text}%")),
        _ => column.contains(text),
    }
}

fn is_text(column_type: &ColumnType) -> bool {
    matches!(
        column_type,
        ColumnType::String(_) | ColumnType::Text | ColumnType::Char(_)
    )
}

