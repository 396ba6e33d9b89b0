//! Product use cases: one loaded aggregate per call.

use rust_decimal::Decimal;
use thiserror::Error;

use stockroom_core::{DomainError, ProductId};

use crate::catalog::{CatalogError, ProductCatalog};
use crate::product::{Product, ProductStatus};
use crate::stock::StockService;
use crate::view::ProductView;

/// Input for `create_product`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock_quantity: u32,
}

/// Input for `update_product`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
}

/// Failure of an application-level operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type AppResult<T> = Result<T, AppError>;

/// Orchestrates catalog lookups and domain operations.
///
/// Mutating calls work on a loaded copy of the aggregate and save it only
/// after every domain step succeeded, so a failed call leaves storage as it was.
#[derive(Debug)]
pub struct ProductApplicationService<C> {
    catalog: C,
    stock: StockService,
}

impl<C> ProductApplicationService<C>
where
    C: ProductCatalog,
{
    pub fn new(catalog: C, stock: StockService) -> Self {
        Self { catalog, stock }
    }

    pub fn create_product(&self, input: NewProduct) -> AppResult<ProductView> {
        let product = Product::create(
            input.name,
            input.description,
            input.price,
            input.stock_quantity,
        )?;
        let saved = self.catalog.save(product)?;
        tracing::info!(product_id = ?saved.id(), name = saved.name(), "product created");
        Ok(ProductView::from(saved))
    }

    pub fn get_product(&self, id: ProductId) -> AppResult<ProductView> {
        let product = self.load(id)?;
        Ok(ProductView::from(product))
    }

    pub fn get_all_products(&self) -> AppResult<Vec<ProductView>> {
        Ok(Self::project(self.catalog.find_all()?))
    }

    /// Products whose persisted status is `Available`.
    ///
    /// Stock is not considered, so a product with zero stock is still listed
    /// here while its `available` flag reads `false`.
    pub fn get_available_products(&self) -> AppResult<Vec<ProductView>> {
        Ok(Self::project(
            self.catalog.find_by_status(ProductStatus::Available)?,
        ))
    }

    pub fn search_products(&self, name: &str) -> AppResult<Vec<ProductView>> {
        Ok(Self::project(self.catalog.find_by_name_containing(name)?))
    }

    pub fn update_product(&self, id: ProductId, input: ProductUpdate) -> AppResult<ProductView> {
        self.mutate(id, |product, _| {
            product.update_info(input.name, input.description, input.price)
        })
    }

    pub fn add_stock(&self, id: ProductId, quantity: i64) -> AppResult<ProductView> {
        self.mutate(id, |product, stock| stock.release_stock(product, quantity))
    }

    pub fn remove_stock(&self, id: ProductId, quantity: i64) -> AppResult<ProductView> {
        self.mutate(id, |product, stock| stock.reserve_stock(product, quantity))
    }

    pub fn discontinue_product(&self, id: ProductId) -> AppResult<ProductView> {
        self.mutate(id, |product, _| {
            product.discontinue();
            Ok(())
        })
    }

    pub fn activate_product(&self, id: ProductId) -> AppResult<ProductView> {
        self.mutate(id, |product, _| {
            product.activate();
            Ok(())
        })
    }

    fn load(&self, id: ProductId) -> AppResult<Product> {
        tracing::debug!(product_id = %id, "loading product");
        self.catalog
            .find_by_id(id)?
            .ok_or_else(|| DomainError::not_found(id).into())
    }

    fn mutate<F>(&self, id: ProductId, op: F) -> AppResult<ProductView>
    where
        F: FnOnce(&mut Product, &StockService) -> Result<(), DomainError>,
    {
        let mut product = self.load(id)?;
        op(&mut product, &self.stock)?;
        let saved = self.catalog.save(product)?;
        tracing::info!(
            product_id = %id,
            stock_quantity = saved.stock_quantity(),
            status = %saved.status(),
            "product updated"
        );
        Ok(ProductView::from(saved))
    }

    fn project(products: Vec<Product>) -> Vec<ProductView> {
        products.iter().map(ProductView::from).collect()
    }
}
