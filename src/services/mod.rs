// Service exports
pub mod cache;
pub mod catalog;

pub use cache::{CacheKey, CacheStats, QueryCache};
pub use catalog::{sample_catalog, CatalogError, CatalogStore};
