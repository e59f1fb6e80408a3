//! Document store access.
//!
//! # Collections
//!
//! - standalone items - the root list, one record per item
//! - lists - named lists, each embedding its ordered items
//!
//! Both collections sit behind the [`TodoStore`] trait. [`PgTodoStore`] keeps
//! them in `PostgreSQL` (`todo.item` and `todo.list`, with list items in a
//! `JSONB` array); [`MemoryTodoStore`] keeps them in process memory.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/web/migrations/` and run via:
//! ```bash
//! cargo run -p todolist-cli -- migrate
//! ```

pub mod memory;
pub mod postgres;
#[cfg(test)]
pub(crate) mod unavailable;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use todolist_core::{Item, ItemId, ListName, TaskList};

pub use memory::MemoryTodoStore;
pub use postgres::PgTodoStore;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,
}

/// Persistence operations for items and lists.
///
/// Every method is a single round trip to the store. Implementations must be
/// safe to share across request handlers.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), RepositoryError>;

    /// All root-list items, in insertion order.
    async fn root_items(&self) -> Result<Vec<Item>, RepositoryError>;

    /// Insert items into the root list, preserving their order.
    async fn insert_root_items(&self, items: &[Item]) -> Result<(), RepositoryError>;

    /// Remove a root-list item. Returns `false` if no item had that ID.
    async fn remove_root_item(&self, id: ItemId) -> Result<bool, RepositoryError>;

    /// Look up a named list.
    async fn find_list(&self, name: &ListName) -> Result<Option<TaskList>, RepositoryError>;

    /// Insert a list unless one with the same name exists.
    ///
    /// Returns `true` if this call created the list. Concurrent creators of
    /// the same name all succeed; exactly one of them sees `true`.
    async fn create_list(&self, list: &TaskList) -> Result<bool, RepositoryError>;

    /// Append an item to the end of a named list.
    ///
    /// Returns `RepositoryError::NotFound` if the list does not exist.
    async fn append_item(&self, name: &ListName, item: &Item) -> Result<(), RepositoryError>;

    /// Remove the item with `id` from a named list in one atomic update.
    ///
    /// Returns `false` if the list holds no such item, and
    /// `RepositoryError::NotFound` if the list does not exist.
    async fn pull_item(&self, name: &ListName, id: ItemId) -> Result<bool, RepositoryError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
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
