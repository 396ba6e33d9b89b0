//! Persistence contract for products.

use std::sync::Arc;

use thiserror::Error;

use stockroom_core::ProductId;

use crate::product::{Product, ProductStatus};

/// Storage-layer failure. Opaque to the domain; never retried by the core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    /// The store detected a conflicting concurrent write.
    #[error("catalog conflict: {0}")]
    Conflict(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Stores and retrieves `Product` aggregates.
///
/// `save` is the unit of durability: a product is either saved in full
/// (including its `updated_at` stamp) or not at all.
pub trait ProductCatalog: Send + Sync {
    /// Persist `product`, assigning an identity if it has none yet.
    fn save(&self, product: Product) -> CatalogResult<Product>;
    fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>>;
    fn find_all(&self) -> CatalogResult<Vec<Product>>;
    fn find_by_status(&self, status: ProductStatus) -> CatalogResult<Vec<Product>>;
    /// Case-sensitive substring match on the product name.
    fn find_by_name_containing(&self, substring: &str) -> CatalogResult<Vec<Product>>;
}

impl<S> ProductCatalog for Arc<S>
where
    S: ProductCatalog + ?Sized,
{
    fn save(&self, product: Product) -> CatalogResult<Product> {
        (**self).save(product)
    }

    fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> CatalogResult<Vec<Product>> {
        (**self).find_all()
    }

    fn find_by_status(&self, status: ProductStatus) -> CatalogResult<Vec<Product>> {
        (**self).find_by_status(status)
    }

    fn find_by_name_containing(&self, substring: &str) -> CatalogResult<Vec<Product>> {
        (**self).find_by_name_containing(substring)
    }
}
