use std::collections::BTreeMap;
use std::sync::RwLock;

use stockroom_core::ProductId;
use stockroom_products::{CatalogError, CatalogResult, Product, ProductCatalog, ProductStatus};

/// In-memory product catalog.
///
/// Intended for tests/dev. Each `save` replaces the stored row under one
/// write lock, so readers see either the old or the new row, never a mix.
#[derive(Debug, Default)]
pub struct InMemoryProductCatalog {
    rows: RwLock<BTreeMap<ProductId, Product>>,
}

impl InMemoryProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> CatalogResult<usize> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        Ok(rows.len())
    }

    pub fn is_empty(&self) -> CatalogResult<bool> {
        Ok(self.len()? == 0)
    }

    fn select<F>(&self, pred: F) -> CatalogResult<Vec<Product>>
    where
        F: Fn(&Product) -> bool,
    {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        Ok(rows.values().filter(|p| pred(p)).cloned().collect())
    }
}

fn poisoned() -> CatalogError {
    CatalogError::Unavailable("in-memory catalog lock poisoned".to_string())
}

impl ProductCatalog for InMemoryProductCatalog {
    fn save(&self, mut product: Product) -> CatalogResult<Product> {
        let id = match product.id() {
            Some(id) => id,
            None => {
                let id = ProductId::new();
                product.assign_id(id);
                id
            }
        };

        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        rows.insert(id, product.clone());
        tracing::trace!(product_id = %id, "catalog row written");
        Ok(product)
    }

    fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        Ok(rows.get(&id).cloned())
    }

    fn find_all(&self) -> CatalogResult<Vec<Product>> {
        self.select(|_| true)
    }

    fn find_by_status(&self, status: ProductStatus) -> CatalogResult<Vec<Product>> {
        self.select(|p| p.status() == status)
    }

    fn find_by_name_containing(&self, substring: &str) -> CatalogResult<Vec<Product>> {
        self.select(|p| p.name().contains(substring))
    }
}
