use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Horse};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Horse)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys should be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user and horse tables, including horse images.
    pub fn with_horse_tables(self) -> Self {
        self.with_table(User)
            .with_table(Horse)
            .with_table(HorseImage)
    }

    /// Adds every table required for sale listings and transactions.
    pub fn with_market_tables(self) -> Self {
        self.with_horse_tables()
            .with_table(MarketListing)
            .with_table(Transaction)
    }

    /// Adds every table required for rental listings and bookings.
    pub fn with_rental_tables(self) -> Self {
        self.with_horse_tables()
            .with_table(RentalListing)
            .with_table(RentalBooking)
    }

    /// Adds the complete schema in dependency order.
    pub fn with_all_tables(self) -> Self {
        self.with_market_tables()
            .with_table(RentalListing)
            .with_table(RentalBooking)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
