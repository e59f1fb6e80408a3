//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! todo-cli migrate
//! ```
//!
//! Applies the migrations in `crates/web/migrations/`, which create the
//! `todo` schema with its `item` and `list` tables.

use tracing::info;

use todolist_web::db::{self, postgres::MIGRATOR};

use super::{CommandError, database_url};

/// Run the web application's database migrations.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the connection fails,
/// or a migration fails to apply.
pub async fn run() -> Result<(), CommandError> {
    let database_url = database_url()?;

    info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    info!("Running migrations...");
    MIGRATOR.run(&pool).await?;

    info!("Migrations complete!");
    Ok(())
}
