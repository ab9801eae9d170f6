//! Searchable in-memory repository: filter → sort → paginate.
//!
//! A single concrete repository drives the search pipeline; everything entity-specific
//! (the filter predicate, how to read a sortable field, the default ordering) comes
//! from an injected [`SearchStrategy`].
//!
//! ## Pipeline
//!
//! ```text
//! items
//!   ↓ 1. filter   (skipped entirely when params.filter is absent)
//!   ↓ 2. sort     (requested sortable field, else the strategy default; stable)
//!   ↓ 3. paginate ([(page-1)*per_page, page*per_page), empty when out of range)
//! SearchResult  (total = filtered count, before pagination)
//! ```

use core::cmp::Ordering;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use catalog_core::{
    DomainResult, Entity, EntityType, Repository, SearchParams, SearchResult,
    SearchableRepository, SortDirection,
};

use super::in_memory::InMemoryRepository;

/// Comparable value of a sortable field.
///
/// Text compares case-sensitively (lexical by code point); numbers and timestamps
/// compare numerically. Values of different kinds compare as equal, which leaves their
/// relative order untouched under the stable sort.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue<'a> {
    Text(&'a str),
    Integer(i64),
    Float(f64),
    Timestamp(DateTime<Utc>),
    Bool(bool),
}

impl SortValue<'_> {
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Integer(a), SortValue::Integer(b)) => a.cmp(b),
            (SortValue::Float(a), SortValue::Float(b)) => a.total_cmp(b),
            (SortValue::Timestamp(a), SortValue::Timestamp(b)) => a.cmp(b),
            (SortValue::Bool(a), SortValue::Bool(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Entity-specific hooks for [`InMemorySearchableRepository`].
pub trait SearchStrategy<E>: Send + Sync {
    /// Filter representation accepted by this strategy.
    type Filter: Send + Sync;

    /// Field names that may be used as `SearchParams::sort`.
    fn sortable_fields(&self) -> &[&'static str];

    /// Filter predicate; only called when a filter is present.
    fn matches(&self, item: &E, filter: &Self::Filter) -> bool;

    /// Value of `field` on `item`, for every name in `sortable_fields`.
    fn sort_value<'a>(&self, item: &'a E, field: &str) -> Option<SortValue<'a>>;

    /// Ordering used when no (recognized) sort field is requested.
    ///
    /// `None` keeps storage order.
    fn default_sort(&self) -> Option<(&'static str, SortDirection)> {
        None
    }
}

/// In-memory repository with search, parameterized by a [`SearchStrategy`].
#[derive(Debug)]
pub struct InMemorySearchableRepository<E, S> {
    inner: InMemoryRepository<E>,
    strategy: S,
}

impl<E, S> InMemorySearchableRepository<E, S>
where
    E: Entity + Clone,
    S: SearchStrategy<E>,
{
    pub fn new(entity_type: EntityType, strategy: S) -> Self {
        Self::with_items(entity_type, strategy, Vec::new())
    }

    pub fn with_items(entity_type: EntityType, strategy: S, items: Vec<E>) -> Self {
        Self {
            inner: InMemoryRepository::with_items(entity_type, items),
            strategy,
        }
    }

    /// Snapshot of the current contents, in storage order.
    pub fn items(&self) -> DomainResult<Vec<E>> {
        self.inner.items()
    }

    pub fn len(&self) -> DomainResult<usize> {
        self.inner.len()
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        self.inner.is_empty()
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Stage 1: keep items matching `filter`, order preserved.
    ///
    /// With no filter the input is returned untouched and the predicate never runs.
    pub fn apply_filter(&self, items: Vec<E>, filter: Option<&S::Filter>) -> Vec<E> {
        match filter {
            None => items,
            Some(filter) => items
                .into_iter()
                .filter(|item| self.strategy.matches(item, filter))
                .collect(),
        }
    }

    /// Stage 2: stable sort by `sort`/`sort_dir`, falling back to the strategy default
    /// when `sort` is absent or not a sortable field.
    pub fn apply_sort(
        &self,
        mut items: Vec<E>,
        sort: Option<&str>,
        sort_dir: Option<SortDirection>,
    ) -> Vec<E> {
        let requested = sort
            .filter(|field| self.strategy.sortable_fields().iter().any(|f| f == field))
            .map(|field| (field, sort_dir.unwrap_or_default()));

        if let (None, Some(field)) = (&requested, sort) {
            tracing::debug!(field, "unsortable field requested; using default order");
        }

        let Some((field, dir)) = requested.or_else(|| self.strategy.default_sort()) else {
            return items;
        };

        items.sort_by(|a, b| {
            let ordering = match (
                self.strategy.sort_value(a, field),
                self.strategy.sort_value(b, field),
            ) {
                (Some(a), Some(b)) => a.compare(&b),
                _ => Ordering::Equal,
            };
            match dir {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        items
    }

    /// Stage 3: slice out the requested page. Out-of-range pages are empty.
    pub fn apply_paginate(&self, items: Vec<E>, page: u32, per_page: u32) -> Vec<E> {
        let per_page = per_page.max(1) as usize;
        let offset = (page.max(1) as usize - 1).saturating_mul(per_page);
        items.into_iter().skip(offset).take(per_page).collect()
    }
}

#[async_trait]
impl<E, S> Repository<E> for InMemorySearchableRepository<E, S>
where
    E: Entity + Clone + Send + Sync,
    E::Id: core::fmt::Display,
    S: SearchStrategy<E>,
{
    async fn insert(&self, entity: E) -> DomainResult<()> {
        self.inner.insert(entity).await
    }

    async fn bulk_insert(&self, entities: Vec<E>) -> DomainResult<()> {
        self.inner.bulk_insert(entities).await
    }

    async fn find_by_id(&self, id: &E::Id) -> DomainResult<Option<E>> {
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> DomainResult<Vec<E>> {
        self.inner.find_all().await
    }

    async fn update(&self, entity: E) -> DomainResult<()> {
        self.inner.update(entity).await
    }

    async fn delete(&self, id: &E::Id) -> DomainResult<()> {
        self.inner.delete(id).await
    }

    fn entity_type(&self) -> EntityType {
        self.inner.entity_type()
    }
}

#[async_trait]
impl<E, S> SearchableRepository<E> for InMemorySearchableRepository<E, S>
where
    E: Entity + Clone + Send + Sync,
    E::Id: core::fmt::Display,
    S: SearchStrategy<E>,
{
    type Filter = S::Filter;

    fn sortable_fields(&self) -> &[&'static str] {
        self.strategy.sortable_fields()
    }

    async fn search(
        &self,
        params: SearchParams<S::Filter>,
    ) -> DomainResult<SearchResult<E, S::Filter>> {
        let items = self.inner.read()?.clone();

        let filtered = self.apply_filter(items, params.filter());
        let total = filtered.len();
        let sorted = self.apply_sort(filtered, params.sort(), params.sort_dir());
        let page = self.apply_paginate(sorted, params.page(), params.per_page());

        tracing::debug!(
            entity_type = %self.inner.entity_type(),
            total,
            page = params.page(),
            per_page = params.per_page(),
            returned = page.len(),
            "search"
        );

        Ok(SearchResult::new(page, total, params))
    }
}
