//! In-memory repository adapters.
//!
//! Reference implementations of the `catalog_core` repository contract, used by tests
//! and development setups. Persisted adapters implement the same traits.

pub mod in_memory;
pub mod searchable;

pub use in_memory::InMemoryRepository;
pub use searchable::{InMemorySearchableRepository, SearchStrategy, SortValue};
