//! Storage contract for categories.

use catalog_core::SearchableRepository;

use crate::category::Category;

/// Storage contract for categories: CRUD plus search filtered by a name fragment.
///
/// Implemented automatically for any searchable repository of categories whose
/// filter is a plain string, so in-memory and persisted adapters are interchangeable.
pub trait CategoryRepository: SearchableRepository<Category, Filter = String> {}

impl<R> CategoryRepository for R where
    R: SearchableRepository<Category, Filter = String> + ?Sized
{
}
