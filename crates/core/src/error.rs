//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a deterministic caller/input failure. Storage faults are
/// not domain errors and are reported by the catalog layer instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A monetary amount was absent, negative, or an operation would make it negative.
    #[error("amount must be zero or greater")]
    InvalidAmount,

    /// A stock adjustment was requested with a non-positive quantity.
    #[error("quantity must be greater than zero (got {0})")]
    InvalidQuantity(i64),

    /// Removing stock would drive the count below zero.
    #[error("insufficient stock (current: {current})")]
    InsufficientStock { current: u32 },

    /// A reservation was refused.
    ///
    /// `available` is reported as 0 when the product is not sellable at all,
    /// regardless of its actual stock count.
    #[error("product out of stock (id: {product_id:?}, requested: {requested}, available: {available})")]
    OutOfStock {
        product_id: Option<ProductId>,
        requested: i64,
        available: u32,
    },

    /// No product exists for the given id.
    #[error("product not found (id: {0})")]
    NotFound(ProductId),

    /// A value failed validation (e.g. blank name).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(id: ProductId) -> Self {
        Self::NotFound(id)
    }

    pub fn out_of_stock(product_id: Option<ProductId>, requested: i64, available: u32) -> Self {
        Self::OutOfStock {
            product_id,
            requested,
            available,
        }
    }
}
