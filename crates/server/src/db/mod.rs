//! Persistence for order records.
//!
//! The [`OrderStore`] trait is the storage interface the route handlers
//! talk to: find by id, save, delete by id. Absence of a record is a
//! normal outcome everywhere; only an unreachable store is an error.
//!
//! Two implementations live here: [`PgOrderStore`] for production and
//! [`InMemoryOrderStore`] for tests and local development.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and applied on
//! startup via [`MIGRATOR`].

mod memory;
mod postgres;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use order_management_core::{Order, OrderId, OrderRecord};

pub use memory::InMemoryOrderStore;
pub use postgres::PgOrderStore;

/// Embedded migrations for the order schema.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Errors from the order store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The backing storage could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Storage interface for order records.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Look up an order by id. A miss is a normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing storage cannot be queried.
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError>;

    /// Persist a record. Inserts and assigns a fresh id when `record.id`
    /// is `None`; overwrites the existing row's fields when it is `Some`.
    /// Returns the persisted order including its id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write cannot be completed.
    async fn save(&self, record: OrderRecord) -> Result<Order, StoreError>;

    /// Remove the order with the given id. No-op when the id is absent;
    /// callers signal not-found themselves.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing storage cannot be reached.
    async fn delete_by_id(&self, id: OrderId) -> Result<(), StoreError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
