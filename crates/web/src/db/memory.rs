//! In-memory implementation of [`TodoStore`].
//!
//! Suitable for tests and for local runs without a database. Contents are
//! lost when the process exits.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todolist_core::{Item, ItemId, ListName, TaskList};

use super::{RepositoryError, TodoStore};

/// A store keeping both collections in process memory.
#[derive(Debug, Default)]
pub struct MemoryTodoStore {
    root: RwLock<Vec<Item>>,
    lists: RwLock<HashMap<ListName, TaskList>>,
}

impl MemoryTodoStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of named lists currently stored.
    pub async fn list_count(&self) -> usize {
        self.lists.read().await.len()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn root_items(&self) -> Result<Vec<Item>, RepositoryError> {
        Ok(self.root.read().await.clone())
    }

    async fn insert_root_items(&self, items: &[Item]) -> Result<(), RepositoryError> {
        self.root.write().await.extend_from_slice(items);
        Ok(())
    }

    async fn remove_root_item(&self, id: ItemId) -> Result<bool, RepositoryError> {
        let mut root = self.root.write().await;
        let before = root.len();
        root.retain(|item| item.id != id);
        Ok(root.len() < before)
    }

    async fn find_list(&self, name: &ListName) -> Result<Option<TaskList>, RepositoryError> {
        Ok(self.lists.read().await.get(name).cloned())
    }

    async fn create_list(&self, list: &TaskList) -> Result<bool, RepositoryError> {
        let mut lists = self.lists.write().await;
        if lists.contains_key(&list.name) {
            return Ok(false);
        }
        lists.insert(list.name.clone(), list.clone());
        Ok(true)
    }

    async fn append_item(&self, name: &ListName, item: &Item) -> Result<(), RepositoryError> {
        let mut lists = self.lists.write().await;
        let list = lists.get_mut(name).ok_or(RepositoryError::NotFound)?;
        list.items.push(item.clone());
        Ok(())
    }

    async fn pull_item(&self, name: &ListName, id: ItemId) -> Result<bool, RepositoryError> {
        let mut lists = self.lists.write().await;
        let list = lists.get_mut(name).ok_or(RepositoryError::NotFound)?;
        let before = list.items.len();
        list.items.retain(|item| item.id != id);
        Ok(list.items.len() < before)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn name(raw: &str) -> ListName {
        ListName::normalize(raw).unwrap()
    }

    #[tokio::test]
    async fn test_root_items_keep_insertion_order() {
        let store = MemoryTodoStore::new();
        let items = vec![Item::new("a"), Item::new("b")];
        store.insert_root_items(&items).await.unwrap();
        store.insert_root_items(&[Item::new("c")]).await.unwrap();

        let names: Vec<_> = store
            .root_items()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_remove_root_item_reports_missing() {
        let store = MemoryTodoStore::new();
        let item = Item::new("a");
        store.insert_root_items(&[item.clone()]).await.unwrap();

        assert!(store.remove_root_item(item.id).await.unwrap());
        assert!(!store.remove_root_item(item.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_create_list_is_insert_if_absent() {
        let store = MemoryTodoStore::new();
        let first = TaskList::seeded(name("work"));
        let second = TaskList::empty(name("work"));

        assert!(store.create_list(&first).await.unwrap());
        assert!(!store.create_list(&second).await.unwrap());

        let stored = store.find_list(&name("work")).await.unwrap().unwrap();
        assert_eq!(stored, first);
        assert_eq!(store.list_count().await, 1);
    }

    #[tokio::test]
    async fn test_append_and_pull() {
        let store = MemoryTodoStore::new();
        store.create_list(&TaskList::empty(name("work"))).await.unwrap();
        let a = Item::new("a");
        let b = Item::new("b");
        store.append_item(&name("work"), &a).await.unwrap();
        store.append_item(&name("work"), &b).await.unwrap();

        assert!(store.pull_item(&name("work"), a.id).await.unwrap());
        assert!(!store.pull_item(&name("work"), a.id).await.unwrap());

        let stored = store.find_list(&name("work")).await.unwrap().unwrap();
        assert_eq!(stored.items, vec![b]);
    }

    #[tokio::test]
    async fn test_missing_list_is_not_found() {
        let store = MemoryTodoStore::new();
        let item = Item::new("a");

        assert!(matches!(
            store.append_item(&name("nope"), &item).await,
            Err(RepositoryError::NotFound)
        ));
        assert!(matches!(
            store.pull_item(&name("nope"), item.id).await,
            Err(RepositoryError::NotFound)
        ));
    }
}
