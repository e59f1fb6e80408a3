//! Business logic services.
//!
//! # Services
//!
//! - `todo` - Root-list seeding, named-list resolution, item add/delete

pub mod todo;
