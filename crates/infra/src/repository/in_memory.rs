//! Vec-backed repository for tests and local runs.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use catalog_core::{DomainError, DomainResult, Entity, EntityType, Repository, ValueObject};

/// In-memory repository over an ordered `Vec`.
///
/// Intended for tests/dev. Not optimized for performance: lookups are linear scans
/// using identity equality.
///
/// - insertion order is preserved
/// - `update` replaces in place (position kept)
/// - `delete` removes and shifts subsequent items
///
/// The lock is held only for the duration of one call and never across an `.await`,
/// so calls on the same instance cannot interleave.
#[derive(Debug)]
pub struct InMemoryRepository<E> {
    items: RwLock<Vec<E>>,
    entity_type: EntityType,
}

impl<E> InMemoryRepository<E> {
    pub fn new(entity_type: EntityType) -> Self {
        Self::with_items(entity_type, Vec::new())
    }

    /// Seed the store with `items`, in order.
    pub fn with_items(entity_type: EntityType, items: Vec<E>) -> Self {
        Self {
            items: RwLock::new(items),
            entity_type,
        }
    }

    /// Number of stored entities. Fails with `Storage` when the lock is poisoned.
    pub fn len(&self) -> DomainResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.len()? == 0)
    }

    pub(crate) fn read(&self) -> DomainResult<RwLockReadGuard<'_, Vec<E>>> {
        self.items
            .read()
            .map_err(|_| DomainError::storage("lock poisoned"))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Vec<E>>> {
        self.items
            .write()
            .map_err(|_| DomainError::storage("lock poisoned"))
    }
}

impl<E: Clone> InMemoryRepository<E> {
    /// Snapshot of the current contents, in storage order.
    pub fn items(&self) -> DomainResult<Vec<E>> {
        Ok(self.read()?.clone())
    }
}

fn position<E: Entity>(items: &[E], id: &E::Id) -> Option<usize> {
    items.iter().position(|item| item.entity_id().equals(id))
}

#[async_trait]
impl<E> Repository<E> for InMemoryRepository<E>
where
    E: Entity + Clone + Send + Sync,
    E::Id: core::fmt::Display,
{
    async fn insert(&self, entity: E) -> DomainResult<()> {
        tracing::debug!(entity_type = %self.entity_type, id = %entity.entity_id(), "insert");
        self.write()?.push(entity);
        Ok(())
    }

    async fn bulk_insert(&self, entities: Vec<E>) -> DomainResult<()> {
        tracing::debug!(entity_type = %self.entity_type, count = entities.len(), "bulk insert");
        self.write()?.extend(entities);
        Ok(())
    }

    async fn find_by_id(&self, id: &E::Id) -> DomainResult<Option<E>> {
        let items = self.read()?;
        Ok(position(&items, id).map(|idx| items[idx].clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<E>> {
        Ok(self.read()?.clone())
    }

    async fn update(&self, entity: E) -> DomainResult<()> {
        let mut items = self.write()?;
        match position(&items, entity.entity_id()) {
            Some(idx) => {
                tracing::debug!(
                    entity_type = %self.entity_type,
                    id = %entity.entity_id(),
                    "update"
                );
                items[idx] = entity;
                Ok(())
            }
            None => Err(self.not_found(entity.entity_id())),
        }
    }

    async fn delete(&self, id: &E::Id) -> DomainResult<()> {
        let mut items = self.write()?;
        match position(&items, id) {
            Some(idx) => {
                tracing::debug!(entity_type = %self.entity_type, id = %id, "delete");
                items.remove(idx);
                Ok(())
            }
            None => Err(self.not_found(id)),
        }
    }

    fn entity_type(&self) -> EntityType {
        self.entity_type
    }
}
