//! Todolist Core - Shared domain types.
//!
//! This crate provides the types used across all todolist components:
//! - `web` - The server-rendered to-do list application
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, list names, items, lists and the seed template

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
