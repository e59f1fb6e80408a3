//! Integration tests for Todolist.
//!
//! # Running Tests
//!
//! ```bash
//! # Against a running server (cargo run -p todolist-web)
//! TODO_BASE_URL=http://localhost:3000 cargo test -p todolist-integration-tests -- --ignored
//!
//! # Against a scratch database; migrations are applied by the tests
//! TODO_TEST_DATABASE_URL=postgres://localhost/todolist_test \
//!     cargo test -p todolist-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `web_lists` - HTTP round trips through a running server
//! - `pg_store` - `PgTodoStore` against a real `PostgreSQL` database
