//! Infrastructure layer: storage adapters and configuration.

pub mod category;
pub mod config;
pub mod repository;

pub use category::{CategoryInMemoryRepository, CategorySearch};
pub use config::SearchConfig;
pub use repository::{InMemoryRepository, InMemorySearchableRepository, SearchStrategy, SortValue};
