//! List and item operations.
//!
//! Seeds the root list, resolves named lists from URL segments and applies
//! add/delete submissions. Handlers turn the returned outcomes into a
//! rendered page or a redirect.

mod error;

pub use error::TodoError;

use tracing::{debug, error, info, instrument, warn};

use todolist_core::{Item, ItemId, ListName, ListTarget, TaskList, seed_items};

use crate::db::{RepositoryError, TodoStore};

/// Outcome of opening the root list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootView {
    /// The root list was empty and the seed items were written.
    /// The caller should redirect so the next read observes them.
    Seeded,
    /// The root list's items, in insertion order.
    Items(Vec<Item>),
}

/// Outcome of opening a named list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// No list existed; one now does under this name.
    /// The caller should redirect to it.
    Created(ListName),
    /// The existing list.
    Found(TaskList),
}

/// How a newly created list is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NewList {
    Seeded,
    Empty,
}

/// List and item operations over a [`TodoStore`].
pub struct TodoService<'a> {
    store: &'a dyn TodoStore,
}

impl<'a> TodoService<'a> {
    /// Create a new service over a store.
    #[must_use]
    pub const fn new(store: &'a dyn TodoStore) -> Self {
        Self { store }
    }

    // =========================================================================
    // Root list
    // =========================================================================

    /// Open the root list, seeding it on first visit.
    ///
    /// A failed seed insert is logged and still reported as
    /// [`RootView::Seeded`]; the follow-up read then shows an empty list.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Repository` if the root items cannot be read.
    #[instrument(skip(self))]
    pub async fn open_root(&self) -> Result<RootView, TodoError> {
        let items = self.store.root_items().await?;
        if !items.is_empty() {
            return Ok(RootView::Items(items));
        }

        match self.store.insert_root_items(&seed_items()).await {
            Ok(()) => info!("Seeded root list with default items"),
            Err(e) => error!(error = %e, "Failed to seed root list"),
        }
        Ok(RootView::Seeded)
    }

    /// Seed the root list if it is empty.
    ///
    /// Returns `true` if the seed items were inserted.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Repository` if the read or the insert fails.
    #[instrument(skip(self))]
    pub async fn seed_root(&self) -> Result<bool, TodoError> {
        if !self.store.root_items().await?.is_empty() {
            return Ok(false);
        }
        self.store.insert_root_items(&seed_items()).await?;
        Ok(true)
    }

    // =========================================================================
    // Named lists
    // =========================================================================

    /// Open the list named by a URL segment, creating it with the seed
    /// items if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidListName` if the segment does not normalize.
    /// Returns `TodoError::Repository` if the store fails.
    #[instrument(skip(self))]
    pub async fn open_list(&self, raw_name: &str) -> Result<ListView, TodoError> {
        self.open_or_create(raw_name, NewList::Seeded).await
    }

    /// Open the list with the submitted title, creating it empty if it does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidListName` if the title does not normalize.
    /// Returns `TodoError::Repository` if the store fails.
    #[instrument(skip(self))]
    pub async fn open_or_create_empty(&self, raw_title: &str) -> Result<ListView, TodoError> {
        self.open_or_create(raw_title, NewList::Empty).await
    }

    async fn open_or_create(&self, raw: &str, fill: NewList) -> Result<ListView, TodoError> {
        let name = ListName::normalize(raw)?;

        if let Some(list) = self.store.find_list(&name).await? {
            return Ok(ListView::Found(list));
        }

        let list = match fill {
            NewList::Seeded => TaskList::seeded(name),
            NewList::Empty => TaskList::empty(name),
        };
        if self.store.create_list(&list).await? {
            info!(list = %list.name, items = list.items.len(), "Created list");
        } else {
            debug!(list = %list.name, "List created concurrently, keeping existing");
        }
        Ok(ListView::Created(list.name))
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Add an item to the list with the given display title.
    ///
    /// Returns the list the item was added to.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::EmptyItemName` if the name is blank.
    /// Returns `TodoError::ListNotFound` if the named list does not exist.
    /// Returns `TodoError::Repository` for other store failures.
    #[instrument(skip(self))]
    pub async fn add_item(&self, item_name: &str, list_title: &str) -> Result<ListTarget, TodoError> {
        let item_name = item_name.trim();
        if item_name.is_empty() {
            return Err(TodoError::EmptyItemName);
        }
        let target = ListTarget::from_title(list_title)?;
        let item = Item::new(item_name);

        match &target {
            ListTarget::Root => {
                self.store.insert_root_items(std::slice::from_ref(&item)).await?;
            }
            ListTarget::Named(name) => {
                self.store
                    .append_item(name, &item)
                    .await
                    .map_err(|e| not_found_as_missing_list(e, name))?;
            }
        }

        debug!(item_id = %item.id, "Added item");
        Ok(target)
    }

    /// Delete an item from the list with the given display title.
    ///
    /// An item that is already gone is logged and otherwise ignored.
    /// Returns the list the item was removed from.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidItemId` if `item_id` is not an item ID.
    /// Returns `TodoError::ListNotFound` if the named list does not exist.
    /// Returns `TodoError::Repository` for other store failures.
    #[instrument(skip(self))]
    pub async fn delete_item(&self, item_id: &str, list_title: &str) -> Result<ListTarget, TodoError> {
        let id: ItemId = item_id
            .parse()
            .map_err(|_| TodoError::InvalidItemId(item_id.to_string()))?;
        let target = ListTarget::from_title(list_title)?;

        let removed = match &target {
            ListTarget::Root => self.store.remove_root_item(id).await?,
            ListTarget::Named(name) => self
                .store
                .pull_item(name, id)
                .await
                .map_err(|e| not_found_as_missing_list(e, name))?,
        };

        if removed {
            info!(item_id = %id, "Removed item");
        } else {
            warn!(item_id = %id, "Item to remove was not found");
        }
        Ok(target)
    }
}

fn not_found_as_missing_list(err: RepositoryError, name: &ListName) -> TodoError {
    match err {
        RepositoryError::NotFound => TodoError::ListNotFound(name.clone()),
        other => TodoError::Repository(other),
    }
}
