//! Seed the root list with its default items.
//!
//! The web server seeds the root list on the first visit; this command does
//! the same ahead of time so a fresh deployment shows the defaults
//! immediately. A non-empty root list is left untouched.

use tracing::info;

use todolist_core::SEED_ITEM_NAMES;
use todolist_web::db::{self, PgTodoStore};
use todolist_web::services::todo::TodoService;

use super::{CommandError, database_url};

/// Insert the default items into the root list if it is empty.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the connection fails,
/// or the store rejects the read or insert.
pub async fn root() -> Result<(), CommandError> {
    let database_url = database_url()?;

    let pool = db::create_pool(&database_url).await?;
    info!("Connected to database");

    let store = PgTodoStore::new(pool);
    if TodoService::new(&store).seed_root().await? {
        info!(items = SEED_ITEM_NAMES.len(), "Seeded root list");
    } else {
        info!("Root list already has items, nothing to seed");
    }

    Ok(())
}
