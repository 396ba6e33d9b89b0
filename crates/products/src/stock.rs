//! Stock reservation policy on top of `Product`'s raw stock arithmetic.

use stockroom_core::{DomainError, DomainResult};

use crate::product::Product;

/// Stateless domain service for reserving and releasing inventory.
///
/// `Product::remove_stock` only guards against going negative. Reservation adds
/// the rule that products which are not sellable cannot be reserved at all, and
/// reports that case with `available = 0` so callers can tell it apart from a
/// plain shortfall.
#[derive(Debug, Default, Clone, Copy)]
pub struct StockService;

impl StockService {
    pub fn new() -> Self {
        Self
    }

    /// Take `quantity` units out of stock for a consumer.
    pub fn reserve_stock(&self, product: &mut Product, quantity: i64) -> DomainResult<()> {
        if !product.is_available() {
            return Err(DomainError::out_of_stock(product.id(), quantity, 0));
        }
        if i64::from(product.stock_quantity()) < quantity {
            return Err(DomainError::out_of_stock(
                product.id(),
                quantity,
                product.stock_quantity(),
            ));
        }
        product.remove_stock(quantity)
    }

    /// Put `quantity` units back. Allowed even on discontinued products.
    pub fn release_stock(&self, product: &mut Product, quantity: i64) -> DomainResult<()> {
        product.add_stock(quantity)
    }

    pub fn has_enough_stock(&self, product: &Product, quantity: i64) -> bool {
        product.is_available() && i64::from(product.stock_quantity()) >= quantity
    }
}
