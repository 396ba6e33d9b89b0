use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use stockroom_core::ProductId;

use crate::product::{Product, ProductStatus};

/// Read-side projection of a product, as handed back to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductView {
    pub id: Option<ProductId>,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock_quantity: u32,
    pub status: ProductStatus,
    /// `status == Available && stock_quantity > 0`.
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id(),
            name: product.name().to_string(),
            description: product.description().map(str::to_string),
            price: product.price().amount(),
            stock_quantity: product.stock_quantity(),
            status: product.status(),
            available: product.is_available(),
            created_at: product.created_at(),
            updated_at: product.updated_at(),
        }
    }
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self::from(&product)
    }
}
