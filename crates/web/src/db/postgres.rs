//! `PostgreSQL` implementation of [`TodoStore`].
//!
//! Standalone root items live in `todo.item`, one row each, ordered by an
//! identity column. Named lists live in `todo.list` with their items in a
//! `JSONB` array, so appends and pulls are single-statement updates.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::types::Json;
use tracing::{debug, instrument};
use uuid::Uuid;

use todolist_core::{Item, ItemId, ListId, ListName, TaskList};

use super::{RepositoryError, TodoStore};

/// Migrations for the `todo` schema, embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Store backed by a `PostgreSQL` pool.
#[derive(Debug, Clone)]
pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    /// Create a store over an existing pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn root_items(&self) -> Result<Vec<Item>, RepositoryError> {
        let rows: Vec<(Uuid, String)> = sqlx::query_as(
            r"
            SELECT id, name
            FROM todo.item
            ORDER BY seq
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| Item {
                id: ItemId::new(id),
                name,
            })
            .collect())
    }

    #[instrument(skip(self, items), fields(count = items.len()))]
    async fn insert_root_items(&self, items: &[Item]) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        // One statement per item so `seq` follows slice order.
        for item in items {
            sqlx::query::<sqlx::Postgres>(
                r"
                INSERT INTO todo.item (id, name)
                VALUES ($1, $2)
                ",
            )
            .bind(item.id)
            .bind(&item.name)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        debug!(count = items.len(), "Inserted root items");
        Ok(())
    }

    #[instrument(skip(self), fields(item_id = %id))]
    async fn remove_root_item(&self, id: ItemId) -> Result<bool, RepositoryError> {
        let result = sqlx::query::<sqlx::Postgres>(
            r"
            DELETE FROM todo.item
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self), fields(list = %name))]
    async fn find_list(&self, name: &ListName) -> Result<Option<TaskList>, RepositoryError> {
        let row: Option<(ListId, String, Json<Vec<Item>>)> = sqlx::query_as(
            r"
            SELECT id, name, items
            FROM todo.list
            WHERE name = $1
            ",
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some((id, stored_name, Json(items))) => {
                let name = ListName::normalize(&stored_name).map_err(|e| {
                    RepositoryError::DataCorruption(format!("invalid list name in database: {e}"))
                })?;
                Ok(Some(TaskList { id, name, items }))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self, list), fields(list = %list.name, items = list.items.len()))]
    async fn create_list(&self, list: &TaskList) -> Result<bool, RepositoryError> {
        let result = sqlx::query::<sqlx::Postgres>(
            r"
            INSERT INTO todo.list (id, name, items)
            VALUES ($1, $2, $3)
            ON CONFLICT (name) DO NOTHING
            ",
        )
        .bind(list.id)
        .bind(list.name.as_str())
        .bind(Json(&list.items))
        .execute(&self.pool)
        .await?;

        let created = result.rows_affected() == 1;
        debug!(created, "Create list");
        Ok(created)
    }

    #[instrument(skip(self, item), fields(list = %name, item_id = %item.id))]
    async fn append_item(&self, name: &ListName, item: &Item) -> Result<(), RepositoryError> {
        let result = sqlx::query::<sqlx::Postgres>(
            r"
            UPDATE todo.list
            SET items = items || $2
            WHERE name = $1
            ",
        )
        .bind(name.as_str())
        .bind(Json([item]))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    #[instrument(skip(self), fields(list = %name, item_id = %id))]
    async fn pull_item(&self, name: &ListName, id: ItemId) -> Result<bool, RepositoryError> {
        let row: Option<(i32, i32)> = sqlx::query_as(
            r"
            WITH target AS (
                SELECT id, items
                FROM todo.list
                WHERE name = $1
                FOR UPDATE
            )
            UPDATE todo.list AS l
            SET items = COALESCE(
                (
                    SELECT jsonb_agg(e.elem ORDER BY e.pos)
                    FROM jsonb_array_elements(target.items) WITH ORDINALITY AS e(elem, pos)
                    WHERE e.elem->>'id' <> $2
                ),
                '[]'::jsonb
            )
            FROM target
            WHERE l.id = target.id
            RETURNING jsonb_array_length(target.items), jsonb_array_length(l.items)
            ",
        )
        .bind(name.as_str())
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        let (before, after) = row.ok_or(RepositoryError::NotFound)?;
        Ok(after < before)
    }
}
