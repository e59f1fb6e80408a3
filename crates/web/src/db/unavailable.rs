//! A [`TodoStore`] whose backing database is down.
//!
//! Reads of the root list succeed with no items so the seeding path can be
//! driven into a failed insert; every other operation fails.

use async_trait::async_trait;

use todolist_core::{Item, ItemId, ListName, TaskList};

use super::{RepositoryError, TodoStore};

#[derive(Debug, Default)]
pub struct UnavailableStore;

fn down() -> RepositoryError {
    RepositoryError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl TodoStore for UnavailableStore {
    async fn ping(&self) -> Result<(), RepositoryError> {
        Err(down())
    }

    async fn root_items(&self) -> Result<Vec<Item>, RepositoryError> {
        Ok(Vec::new())
    }

    async fn insert_root_items(&self, _items: &[Item]) -> Result<(), RepositoryError> {
        Err(down())
    }

    async fn remove_root_item(&self, _id: ItemId) -> Result<bool, RepositoryError> {
        Err(down())
    }

    async fn find_list(&self, _name: &ListName) -> Result<Option<TaskList>, RepositoryError> {
        Err(down())
    }

    async fn create_list(&self, _list: &TaskList) -> Result<bool, RepositoryError> {
        Err(down())
    }

    async fn append_item(&self, _name: &ListName, _item: &Item) -> Result<(), RepositoryError> {
        Err(down())
    }

    async fn pull_item(&self, _name: &ListName, _id: ItemId) -> Result<bool, RepositoryError> {
        Err(down())
    }
}
