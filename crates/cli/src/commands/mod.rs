//! CLI command implementations.

pub mod migrate;
pub mod seed;

use secrecy::SecretString;

/// Environment variables consulted for the database URL, in order.
const DATABASE_URL_VARS: [&str; 2] = ["TODO_DATABASE_URL", "DATABASE_URL"];

/// Errors shared by commands that talk to the database.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Missing environment variable: {}", DATABASE_URL_VARS.join(" or "))]
    MissingDatabaseUrl,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Todo(#[from] todolist_web::services::todo::TodoError),
}

/// Load `.env` and resolve the database URL.
fn database_url() -> Result<SecretString, CommandError> {
    dotenvy::dotenv().ok();

    DATABASE_URL_VARS
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.trim().is_empty())
        .map(SecretString::from)
        .ok_or(CommandError::MissingDatabaseUrl)
}
