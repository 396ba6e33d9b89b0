//! Product catalog storage adapters.
//!
//! Implementations of `stockroom_products::ProductCatalog`. The domain only
//! depends on the trait; which adapter backs it is decided at wiring time.

pub mod in_memory;

pub use in_memory::InMemoryProductCatalog;
