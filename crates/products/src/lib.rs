//! Products domain module.
//!
//! Business rules for the product catalog (money, product lifecycle, stock
//! reservation) plus the use-case layer that runs them against a
//! `ProductCatalog`. No IO, no HTTP, no storage engine.

pub mod catalog;
pub mod money;
pub mod product;
pub mod service;
pub mod stock;
pub mod view;

pub use catalog::{CatalogError, CatalogResult, ProductCatalog};
pub use money::Money;
pub use product::{Product, ProductStatus};
pub use service::{AppError, AppResult, NewProduct, ProductApplicationService, ProductUpdate};
pub use stock::StockService;
pub use view::ProductView;
