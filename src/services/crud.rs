//! Generic create/read/update/delete service
//!
//! Every resource shares the same contract: lookups by key fail with a
//! not-found error naming the entity type, updates overwrite every mutable
//! field, and deletes report which record was removed.

use std::marker::PhantomData;

use crate::{
    db::{DbPool, Entity, Repository, SqlRepository},
    utils::{AppError, AppResult},
};

/// CRUD operations for one entity type over any [`Repository`]
pub struct CrudService<E, R> {
    repo: R,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> CrudService<E, SqlRepository<E>> {
    /// Create a service backed by the SQLite pool
    pub fn for_pool(pool: &DbPool) -> Self {
        Self::new(SqlRepository::new(pool.clone()))
    }
}

impl<E, R> CrudService<E, R>
where
    E: Entity,
    R: Repository<E>,
{
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            _entity: PhantomData,
        }
    }

    /// Every stored record, unfiltered
    pub async fn list(&self) -> AppResult<Vec<E>> {
        self.repo.find_all().await.map_err(|e| {
            tracing::error!("Failed to list {}: {:#}", E::TYPE_NAME, e);
            AppError::internal(format!("Failed to list {}", E::TYPE_NAME))
        })
    }

    pub async fn get(&self, id: &E::Key) -> AppResult<E> {
        self.find(id)
            .await?
            .ok_or_else(|| AppError::entity_not_found(E::TYPE_NAME, id))
    }

    /// Persist a new record; an existing natural key is overwritten
    pub async fn create(&self, entity: E) -> AppResult<E> {
        let saved = self.repo.save(entity).await.map_err(|e| {
            tracing::error!("Failed to create {}: {:#}", E::TYPE_NAME, e);
            AppError::internal(format!("Failed to create {}", E::TYPE_NAME))
        })?;

        if let Some(id) = saved.id() {
            tracing::info!(entity = E::TYPE_NAME, %id, "Created record");
        }
        Ok(saved)
    }

    /// Replace every mutable field of the record stored under `id`
    pub async fn update(&self, id: &E::Key, incoming: E) -> AppResult<E> {
        let mut existing = self.get(id).await?;
        existing.overwrite_from(incoming);

        let saved = self.repo.save(existing).await.map_err(|e| {
            tracing::error!("Failed to update {} {}: {:#}", E::TYPE_NAME, id, e);
            AppError::internal(format!("Failed to update {}", E::TYPE_NAME))
        })?;

        tracing::info!(entity = E::TYPE_NAME, %id, "Updated record");
        Ok(saved)
    }

    /// Remove the record stored under `id`, returning the confirmation message
    pub async fn delete(&self, id: &E::Key) -> AppResult<String> {
        let existing = self.get(id).await?;

        self.repo.delete(&existing).await.map_err(|e| {
            tracing::error!("Failed to delete {} {}: {:#}", E::TYPE_NAME, id, e);
            AppError::internal(format!("Failed to delete {}", E::TYPE_NAME))
        })?;

        tracing::info!(entity = E::TYPE_NAME, %id, "Deleted record");
        Ok(format!("{} with id {} deleted", E::TYPE_NAME, id))
    }

    async fn find(&self, id: &E::Key) -> AppResult<Option<E>> {
        self.repo.find_by_id(id).await.map_err(|e| {
            tracing::error!("Failed to get {} {}: {:#}", E::TYPE_NAME, id, e);
            AppError::internal(format!("Failed to get {}", E::TYPE_NAME))
        })
    }
}
