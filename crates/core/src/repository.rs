//! Repository contract shared by in-memory and persisted adapters.
//!
//! The trait is async so that adapters doing real I/O and the in-memory reference
//! implementation are interchangeable; use-case code never knows which one it talks to.
//!
//! ## Error semantics
//!
//! - `find_by_id` returns `Ok(None)` on a miss, never an error.
//! - `update` / `delete` return [`DomainError::NotFound`] (with the identity and the
//!   entity type name) when nothing matches.
//!
//! Adapters must provide at least single-row atomicity for `insert`, `update` and
//! `delete`. Cross-call consistency is the adapter's responsibility.

use std::sync::Arc;

use async_trait::async_trait;

use crate::entity::{Entity, EntityType};
use crate::error::{DomainError, DomainResult};
use crate::search::{SearchParams, SearchResult};

#[async_trait]
pub trait Repository<E>: Send + Sync
where
    E: Entity + Send + Sync,
{
    /// Append one entity. No uniqueness check beyond what the backing store enforces.
    async fn insert(&self, entity: E) -> DomainResult<()>;

    /// Insert a batch as one step from the caller's point of view.
    async fn bulk_insert(&self, entities: Vec<E>) -> DomainResult<()>;

    /// Lookup by identity equality.
    async fn find_by_id(&self, id: &E::Id) -> DomainResult<Option<E>>;

    /// All stored entities.
    async fn find_all(&self) -> DomainResult<Vec<E>>;

    /// Replace the stored entity whose identity matches `entity.entity_id()`.
    async fn update(&self, entity: E) -> DomainResult<()>;

    /// Remove the entity matching `id`.
    async fn delete(&self, id: &E::Id) -> DomainResult<()>;

    /// Descriptor of the entity type stored by this repository.
    fn entity_type(&self) -> EntityType;

    /// Build the `NotFound` error for `id` in this repository.
    fn not_found(&self, id: &E::Id) -> DomainError
    where
        E::Id: core::fmt::Display,
    {
        DomainError::not_found(id, self.entity_type().name())
    }
}

/// Repository extension with filter → sort → paginate search.
#[async_trait]
pub trait SearchableRepository<E>: Repository<E>
where
    E: Entity + Send + Sync,
{
    /// Filter representation understood by this repository.
    type Filter: Send + Sync;

    /// Field names accepted as `SearchParams::sort`.
    fn sortable_fields(&self) -> &[&'static str];

    async fn search(
        &self,
        params: SearchParams<Self::Filter>,
    ) -> DomainResult<SearchResult<E, Self::Filter>>;
}

#[async_trait]
impl<E, R> Repository<E> for Arc<R>
where
    E: Entity + Send + Sync,
    R: Repository<E> + ?Sized,
{
    async fn insert(&self, entity: E) -> DomainResult<()> {
        (**self).insert(entity).await
    }

    async fn bulk_insert(&self, entities: Vec<E>) -> DomainResult<()> {
        (**self).bulk_insert(entities).await
    }

    async fn find_by_id(&self, id: &E::Id) -> DomainResult<Option<E>> {
        (**self).find_by_id(id).await
    }

    async fn find_all(&self) -> DomainResult<Vec<E>> {
        (**self).find_all().await
    }

    async fn update(&self, entity: E) -> DomainResult<()> {
        (**self).update(entity).await
    }

    async fn delete(&self, id: &E::Id) -> DomainResult<()> {
        (**self).delete(id).await
    }

    fn entity_type(&self) -> EntityType {
        (**self).entity_type()
    }
}

#[async_trait]
impl<E, R> SearchableRepository<E> for Arc<R>
where
    E: Entity + Send + Sync,
    R: SearchableRepository<E> + ?Sized,
{
    type Filter = R::Filter;

    fn sortable_fields(&self) -> &[&'static str] {
        (**self).sortable_fields()
    }

    async fn search(
        &self,
        params: SearchParams<Self::Filter>,
    ) -> DomainResult<SearchResult<E, Self::Filter>> {
        (**self).search(params).await
    }
}
