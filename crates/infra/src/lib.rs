//! Infrastructure layer: storage adapters for the product catalog.

pub mod catalog;

pub use catalog::InMemoryProductCatalog;
