//! Items, lists and the default seed content.

use serde::{Deserialize, Serialize};

use super::id::{ItemId, ListId};
use super::list_name::ListName;

/// Names of the instructional items every new list starts with, in order.
pub const SEED_ITEM_NAMES: [&str; 3] = [
    "Welcome to your to-do List",
    "Hit the + button to add a new item",
    "<-- Remove an item by checking its box",
];

/// A single to-do entry.
///
/// Used both for the standalone root-list items and for the items embedded in
/// a [`TaskList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
}

impl Item {
    /// Create an item with a freshly generated ID.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ItemId::generate(),
            name: name.into(),
        }
    }
}

/// A named list with its embedded items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList {
    pub id: ListId,
    pub name: ListName,
    pub items: Vec<Item>,
}

impl TaskList {
    /// A new list pre-filled with the seed items.
    #[must_use]
    pub fn seeded(name: ListName) -> Self {
        Self::with_items(name, seed_items())
    }

    /// A new list with no items.
    #[must_use]
    pub fn empty(name: ListName) -> Self {
        Self::with_items(name, Vec::new())
    }

    fn with_items(name: ListName, items: Vec<Item>) -> Self {
        Self {
            id: ListId::generate(),
            name,
            items,
        }
    }
}

/// Build fresh seed items.
///
/// Every call yields new [`Item`] values with new IDs, so two lists seeded
/// from the template never share item records.
#[must_use]
pub fn seed_items() -> Vec<Item> {
    SEED_ITEM_NAMES.iter().map(|name| Item::new(*name)).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seed_items_order() {
        let names: Vec<_> = seed_items().into_iter().map(|item| item.name).collect();
        assert_eq!(names, SEED_ITEM_NAMES);
    }

    #[test]
    fn test_seed_items_are_fresh_per_call() {
        let ids: HashSet<_> = seed_items()
            .into_iter()
            .chain(seed_items())
            .map(|item| item.id)
            .collect();
        assert_eq!(ids.len(), SEED_ITEM_NAMES.len() * 2);
    }

    #[test]
    fn test_seeded_and_empty_lists() {
        let name = ListName::normalize("work").unwrap();
        let seeded = TaskList::seeded(name.clone());
        let empty = TaskList::empty(name);

        assert_eq!(seeded.items.len(), 3);
        assert!(empty.items.is_empty());
        assert_ne!(seeded.id, empty.id);
    }

    #[test]
    fn test_item_json_shape() {
        let item = Item::new("Buy milk");
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["name"], "Buy milk");
        assert_eq!(value["id"], item.id.to_string());
    }
}
