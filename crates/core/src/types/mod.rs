//! Core types for todolist.
//!
//! This module provides type-safe wrappers for the domain concepts.

pub mod id;
pub mod item;
pub mod list_name;
pub mod target;

pub use id::*;
pub use item::{Item, SEED_ITEM_NAMES, TaskList, seed_items};
pub use list_name::{ListName, ListNameError};
pub use target::{ListTarget, ROOT_LIST_TITLE};
