//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Configuration methods are chained together and every queued operation runs during the final
//! `build()` call.

use entity::sea_orm_active_enums::WineType;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_cellar_tables: bool,
    include_settings_table: bool,

    // Database fixtures to insert
    varietals: Vec<(String, WineType)>,
    wineries: Vec<(String, String, String)>, // (name, region, country)
    tags: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_cellar_tables: false,
            include_settings_table: false,
            varietals: Vec::new(),
            wineries: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Add every cellar table to the test database.
    ///
    /// Creates Varietal, Winery, Tag, CellarLocation, Wine, WineTag and Photo in
    /// foreign key order.
    pub fn with_cellar_tables(mut self) -> Self {
        self.include_cellar_tables = true;
        self
    }

    /// Add the key/value settings table to the test database.
    pub fn with_settings_table(mut self) -> Self {
        self.include_settings_table = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables, parents first.
    ///
    /// ```no_run
    /// use cellar_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), cellar_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Varietal)
    ///     .with_table(Winery)
    ///     .with_table(Wine)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock varietal into the database during `build()`.
    pub fn with_mock_varietal(mut self, name: impl Into<String>, wine_type: WineType) -> Self {
        self.varietals.push((name.into(), wine_type));
        self
    }

    /// Insert a mock winery into the database during `build()`.
    pub fn with_mock_winery(
        mut self,
        name: impl Into<String>,
        region: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        self.wineries
            .push((name.into(), region.into(), country.into()));
        self
    }

    /// Insert a mock tag into the database during `build()`.
    pub fn with_mock_tag(mut self, name: impl Into<String>) -> Self {
        self.tags.push(name.into());
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// Executes queued operations in order:
    /// 1. Creates database tables (cellar tables, settings table, then custom tables)
    /// 2. Inserts database fixtures (varietals, wineries, tags)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut all_tables = Vec::new();

        if self.include_cellar_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Varietal),
                schema.create_table_from_entity(entity::prelude::Winery),
                schema.create_table_from_entity(entity::prelude::Tag),
                schema.create_table_from_entity(entity::prelude::CellarLocation),
                schema.create_table_from_entity(entity::prelude::Wine),
                schema.create_table_from_entity(entity::prelude::WineTag),
                schema.create_table_from_entity(entity::prelude::Photo),
            ]);
        }

        if self.include_settings_table {
            all_tables.push(schema.create_table_from_entity(entity::prelude::Setting));
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (name, wine_type) in self.varietals {
            setup
                .cellar()
                .insert_mock_varietal(&name, wine_type)
                .await?;
        }

        for (name, region, country) in self.wineries {
            setup
                .cellar()
                .insert_mock_winery(&name, &region, &country)
                .await?;
        }

        for name in self.tags {
            setup.cellar().insert_mock_tag(&name).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
