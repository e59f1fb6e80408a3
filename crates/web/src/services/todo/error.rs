//! To-do operation error types.

use thiserror::Error;

use todolist_core::ListName;

use crate::db::RepositoryError;

/// Errors that can occur during list and item operations.
#[derive(Debug, Error)]
pub enum TodoError {
    /// List name empty or too long.
    #[error("invalid list name: {0}")]
    InvalidListName(#[from] todolist_core::ListNameError),

    /// Item name blank after trimming.
    #[error("item name cannot be empty")]
    EmptyItemName,

    /// Submitted item ID is not a valid identifier.
    #[error("invalid item id: {0}")]
    InvalidItemId(String),

    /// A form referenced a named list that does not exist.
    #[error("list not found: {0}")]
    ListNotFound(ListName),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}
