//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder` once setup has finished.
//! The context holds an in-memory SQLite database and an in-memory object storage operator
//! standing in for the S3 bucket used in production.

use opendal::{services, Operator};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{constant::TEST_PUBLIC_URL, error::TestError};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_cellar_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Access fixture helpers
/// test.cellar().insert_mock_varietal("Merlot", WineType::Red).await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Object storage operator backed by memory
    pub storage: Operator,
    /// Public base URL for uploaded objects
    pub public_url: String,
}

impl TestContext {
    /// Convert the context into any type that can be constructed from its parts
    ///
    /// This allows conversion to the server's `AppState` without a circular dependency
    /// between the test-utils crate and the main cellar crate.
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, Operator, String)>,
    {
        T::from((
            self.db.clone(),
            self.storage.clone(),
            self.public_url.clone(),
        ))
    }

    /// Create a new test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an empty database and empty bucket
    /// - `Err(TestError::DbErr)` - Database connection failed
    /// - `Err(TestError::StorageError)` - Memory operator could not be built
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;
        let storage = Operator::new(services::Memory::default())?.finish();

        Ok(TestContext {
            db,
            storage,
            public_url: TEST_PUBLIC_URL.to_string(),
        })
    }

    /// Create database tables from schema statements.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
