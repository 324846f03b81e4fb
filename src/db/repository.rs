//! Generic repository over SQLite
//!
//! Each resource table has a storage identity column `id` followed by the
//! entity's data columns. The [`Entity`] trait describes that mapping and
//! [`SqlRepository`] implements `find_all`/`find_by_id`/`save`/`delete` once
//! for every entity type.

use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{
    query::QueryAs,
    sqlite::{SqliteArguments, SqliteRow},
    Encode, FromRow, Sqlite, SqlitePool, Type,
};

/// A `query_as` builder bound to SQLite arguments
pub type SqliteQueryAs<'q, O> = QueryAs<'q, Sqlite, O, SqliteArguments<'q>>;

/// Types usable as a primary key
pub trait EntityKey:
    for<'q> Encode<'q, Sqlite> + Type<Sqlite> + FromStr + Display + Clone + Send + Sync + 'static
{
}

impl EntityKey for i64 {}
impl EntityKey for String {}

/// A record stored in a single table keyed by `id`
pub trait Entity: for<'r> FromRow<'r, SqliteRow> + Clone + Send + Sync + Unpin + 'static {
    type Key: EntityKey;

    /// Name used in not-found and deletion messages
    const TYPE_NAME: &'static str;
    const TABLE: &'static str;
    /// Data columns, in the order `bind_columns` binds them. Excludes `id`.
    const COLUMNS: &'static [&'static str];

    /// Storage identity. `None` asks the store to assign one on save.
    fn id(&self) -> Option<Self::Key>;

    /// Bind every data column in `COLUMNS` order
    fn bind_columns<'q, O>(&'q self, query: SqliteQueryAs<'q, O>) -> SqliteQueryAs<'q, O>;

    /// Replace every data field with the incoming record's, keeping identity
    fn overwrite_from(&mut self, incoming: Self);
}

/// Persistence operations for one entity type
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    async fn find_all(&self) -> Result<Vec<E>>;

    async fn find_by_id(&self, id: &E::Key) -> Result<Option<E>>;

    /// Insert or overwrite by identity; returns the stored row
    async fn save(&self, entity: E) -> Result<E>;

    async fn delete(&self, entity: &E) -> Result<()>;
}

/// [`Repository`] backed by a SQLite pool
pub struct SqlRepository<E> {
    pool: SqlitePool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for SqlRepository<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> SqlRepository<E> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    fn select_sql() -> String {
        format!("SELECT id, {} FROM {}", E::COLUMNS.join(", "), E::TABLE)
    }

    fn upsert_sql() -> String {
        let columns = E::COLUMNS.join(", ");
        let placeholders = vec!["?"; E::COLUMNS.len() + 1].join(", ");
        let assignments = E::COLUMNS
            .iter()
            .map(|c| format!("{c} = excluded.{c}"))
            .collect::<Vec<_>>()
            .join(", ");

        // A NULL id makes SQLite assign the next rowid.
        format!(
            "INSERT INTO {table} (id, {columns}) VALUES ({placeholders}) \
             ON CONFLICT(id) DO UPDATE SET {assignments} \
             RETURNING id, {columns}",
            table = E::TABLE,
        )
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for SqlRepository<E> {
    async fn find_all(&self) -> Result<Vec<E>> {
        let sql = Self::select_sql();
        sqlx::query_as::<_, E>(&sql)
            .fetch_all(&self.pool)
            .await
            .with_context(|| format!("Failed to list {}", E::TABLE))
    }

    async fn find_by_id(&self, id: &E::Key) -> Result<Option<E>> {
        let sql = format!("{} WHERE id = ?", Self::select_sql());
        sqlx::query_as::<_, E>(&sql)
            .bind(id.clone())
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to get {} {}", E::TYPE_NAME, id))
    }

    async fn save(&self, entity: E) -> Result<E> {
        let sql = Self::upsert_sql();
        let query = sqlx::query_as::<_, E>(&sql).bind(entity.id());
        entity
            .bind_columns(query)
            .fetch_one(&self.pool)
            .await
            .with_context(|| format!("Failed to save {}", E::TYPE_NAME))
    }

    async fn delete(&self, entity: &E) -> Result<()> {
        let Some(id) = entity.id() else {
            return Ok(());
        };

        let sql = format!("DELETE FROM {} WHERE id = ?", E::TABLE);
        sqlx::query(&sql)
            .bind(id.clone())
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to delete {} {}", E::TYPE_NAME, id))?;

        Ok(())
    }
}
