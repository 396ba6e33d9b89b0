use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ProductId};

use crate::money::Money;

/// Product status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    Available,
    Discontinued,
}

impl core::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ProductStatus::Available => f.write_str("AVAILABLE"),
            ProductStatus::Discontinued => f.write_str("DISCONTINUED"),
        }
    }
}

/// Aggregate root: Product.
///
/// Owns its price and stock invariants. Mutators never touch storage; callers
/// persist the aggregate through a `ProductCatalog` once every step succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: Option<ProductId>,
    name: String,
    description: Option<String>,
    price: Money,
    stock_quantity: u32,
    status: ProductStatus,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Create a new, not-yet-persisted product in the `Available` state.
    ///
    /// Stock may legitimately start at zero.
    pub fn create(
        name: impl Into<String>,
        description: Option<String>,
        price: Decimal,
        stock_quantity: u32,
    ) -> DomainResult<Self> {
        let name = Self::validate_name(name.into())?;
        Ok(Self {
            id: None,
            name,
            description,
            price: Money::of(price)?,
            stock_quantity,
            status: ProductStatus::Available,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    pub fn id(&self) -> Option<ProductId> {
        self.id
    }

    /// Attach the identity chosen by the catalog. Only the first call has effect.
    pub fn assign_id(&mut self, id: ProductId) {
        if self.id.is_none() {
            self.id = Some(id);
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn stock_quantity(&self) -> u32 {
        self.stock_quantity
    }

    pub fn status(&self) -> ProductStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Replace the descriptive fields and price. Stock and status are untouched.
    ///
    /// Validation happens before any field is written.
    pub fn update_info(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
        price: Decimal,
    ) -> DomainResult<()> {
        let name = Self::validate_name(name.into())?;
        let price = Money::of(price)?;
        self.name = name;
        self.description = description;
        self.price = price;
        self.touch();
        Ok(())
    }

    pub fn add_stock(&mut self, quantity: i64) -> DomainResult<()> {
        let delta = Self::positive_quantity(quantity)?;
        self.stock_quantity = self
            .stock_quantity
            .checked_add(delta)
            .ok_or(DomainError::InvalidQuantity(quantity))?;
        self.touch();
        Ok(())
    }

    /// Take `quantity` units out of stock. Leaves the aggregate unchanged on failure.
    pub fn remove_stock(&mut self, quantity: i64) -> DomainResult<()> {
        if quantity <= 0 {
            return Err(DomainError::InvalidQuantity(quantity));
        }
        let current = self.stock_quantity;
        self.stock_quantity = u32::try_from(i64::from(current) - quantity)
            .map_err(|_| DomainError::InsufficientStock { current })?;
        self.touch();
        Ok(())
    }

    pub fn discontinue(&mut self) {
        self.status = ProductStatus::Discontinued;
        self.touch();
    }

    /// Make the product sellable again. Does not look at stock.
    pub fn activate(&mut self) {
        self.status = ProductStatus::Available;
        self.touch();
    }

    pub fn is_available(&self) -> bool {
        self.status == ProductStatus::Available && self.stock_quantity > 0
    }

    /// Quote for `quantity` units. Not persisted anywhere.
    pub fn calculate_total_price(&self, quantity: u32) -> DomainResult<Money> {
        self.price.multiply(quantity)
    }

    fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }

    fn validate_name(name: String) -> DomainResult<String> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(name)
    }

    fn positive_quantity(quantity: i64) -> DomainResult<u32> {
        if quantity <= 0 {
            return Err(DomainError::InvalidQuantity(quantity));
        }
        u32::try_from(quantity).map_err(|_| DomainError::InvalidQuantity(quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn widget(stock: u32) -> Product {
        Product::create("Widget", Some("a widget".to_string()), dec!(10000), stock).unwrap()
    }

    #[test]
    fn create_starts_available_without_id() {
        let product = widget(100);
        assert_eq!(product.id(), None);
        assert_eq!(product.name(), "Widget");
        assert_eq!(product.description(), Some("a widget"));
        assert_eq!(product.price(), Money::of_units(10000).unwrap());
        assert_eq!(product.stock_quantity(), 100);
        assert_eq!(product.status(), ProductStatus::Available);
        assert!(product.updated_at().is_none());
        assert!(product.is_available());
    }

    #[test]
    fn create_rejects_negative_price() {
        let err = Product::create("Widget", None, dec!(-1), 10).unwrap_err();
        assert_eq!(err, DomainError::InvalidAmount);
    }

    #[test]
    fn create_rejects_blank_name() {
        let err = Product::create("   ", None, dec!(1), 10).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn zero_stock_product_is_not_available() {
        let product = widget(0);
        assert_eq!(product.status(), ProductStatus::Available);
        assert!(!product.is_available());
    }

    #[test]
    fn assign_id_only_sticks_once() {
        let mut product = widget(1);
        let first = ProductId::new();
        product.assign_id(first);
        product.assign_id(ProductId::new());
        assert_eq!(product.id(), Some(first));
    }

    #[test]
    fn update_info_replaces_fields_but_not_stock_or_status() {
        let mut product = widget(7);
        product.discontinue();
        product
            .update_info("Gadget", None, dec!(20000))
            .unwrap();
        assert_eq!(product.name(), "Gadget");
        assert_eq!(product.description(), None);
        assert_eq!(product.price(), Money::of_units(20000).unwrap());
        assert_eq!(product.stock_quantity(), 7);
        assert_eq!(product.status(), ProductStatus::Discontinued);
        assert!(product.updated_at().is_some());
    }

    #[test]
    fn update_info_with_negative_price_changes_nothing() {
        let mut product = widget(7);
        let before = product.clone();
        let err = product.update_info("Gadget", None, dec!(-5)).unwrap_err();
        assert_eq!(err, DomainError::InvalidAmount);
        assert_eq!(product, before);
    }

    #[test]
    fn add_stock_increments() {
        let mut product = widget(100);
        product.add_stock(50).unwrap();
        assert_eq!(product.stock_quantity(), 150);
        assert!(product.updated_at().is_some());
    }

    #[test]
    fn add_stock_rejects_non_positive() {
        let mut product = widget(100);
        assert_eq!(product.add_stock(0).unwrap_err(), DomainError::InvalidQuantity(0));
        assert_eq!(product.add_stock(-1).unwrap_err(), DomainError::InvalidQuantity(-1));
        assert_eq!(product.stock_quantity(), 100);
    }

    #[test]
    fn remove_stock_decrements() {
        let mut product = widget(100);
        product.remove_stock(30).unwrap();
        assert_eq!(product.stock_quantity(), 70);
    }

    #[test]
    fn remove_stock_to_exactly_zero() {
        let mut product = widget(5);
        product.remove_stock(5).unwrap();
        assert_eq!(product.stock_quantity(), 0);
        assert!(!product.is_available());
    }

    #[test]
    fn remove_more_than_stock_fails_and_leaves_stock() {
        let mut product = widget(100);
        let err = product.remove_stock(150).unwrap_err();
        assert_eq!(err, DomainError::InsufficientStock { current: 100 });
        assert_eq!(product.stock_quantity(), 100);
        assert!(product.updated_at().is_none());
    }

    #[test]
    fn remove_stock_rejects_non_positive() {
        let mut product = widget(100);
        assert_eq!(product.remove_stock(0).unwrap_err(), DomainError::InvalidQuantity(0));
        assert_eq!(product.remove_stock(-3).unwrap_err(), DomainError::InvalidQuantity(-3));
    }

    #[test]
    fn discontinue_and_activate_are_idempotent() {
        let mut product = widget(10);
        product.discontinue();
        product.discontinue();
        assert_eq!(product.status(), ProductStatus::Discontinued);
        assert!(!product.is_available());

        product.activate();
        product.activate();
        assert_eq!(product.status(), ProductStatus::Available);
        assert!(product.is_available());
    }

    #[test]
    fn activate_does_not_require_stock() {
        let mut product = widget(0);
        product.discontinue();
        product.activate();
        assert_eq!(product.status(), ProductStatus::Available);
        assert!(!product.is_available());
    }

    #[test]
    fn created_at_survives_mutations() {
        let mut product = widget(10);
        let created = product.created_at();
        product.add_stock(1).unwrap();
        product.discontinue();
        product.update_info("Other", None, dec!(1)).unwrap();
        assert_eq!(product.created_at(), created);
    }

    #[test]
    fn total_price_is_price_times_quantity() {
        let product = widget(10);
        assert_eq!(
            product.calculate_total_price(3).unwrap(),
            Money::of_units(30000).unwrap()
        );
    }

    #[test]
    fn total_price_past_decimal_range_is_invalid_amount() {
        let product = Product::create("Bulk", None, Decimal::MAX, 1).unwrap();
        assert_eq!(
            product.calculate_total_price(2).unwrap_err(),
            DomainError::InvalidAmount
        );
    }

    #[test]
    fn remove_stock_from_full_counter() {
        let mut product = widget(u32::MAX);
        let err = product.remove_stock(i64::from(u32::MAX) + 1).unwrap_err();
        assert_eq!(err, DomainError::InsufficientStock { current: u32::MAX });
        assert_eq!(product.stock_quantity(), u32::MAX);

        product.remove_stock(i64::from(u32::MAX)).unwrap();
        assert_eq!(product.stock_quantity(), 0);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: add_stock increases stock by exactly the quantity.
            #[test]
            fn add_stock_increases_by_quantity(stock in 0u32..1_000_000, q in 1i64..1_000_000) {
                let mut product = widget(stock);
                product.add_stock(q).unwrap();
                prop_assert_eq!(i64::from(product.stock_quantity()), i64::from(stock) + q);
            }

            /// Property: remove_stock either commits exactly or changes nothing.
            #[test]
            fn remove_stock_is_all_or_nothing(stock in 0u32..10_000, q in 1i64..20_000) {
                let mut product = widget(stock);
                let before = product.clone();
                match product.remove_stock(q) {
                    Ok(()) => {
                        prop_assert!(q <= i64::from(stock));
                        prop_assert_eq!(i64::from(product.stock_quantity()), i64::from(stock) - q);
                    }
                    Err(e) => {
                        prop_assert!(q > i64::from(stock));
                        prop_assert_eq!(e, DomainError::InsufficientStock { current: stock });
                        prop_assert_eq!(&product, &before);
                    }
                }
            }

            /// Property: discontinue then activate restores stock-driven availability.
            #[test]
            fn reactivation_restores_availability(stock in 0u32..1_000) {
                let mut product = widget(stock);
                product.discontinue();
                product.activate();
                prop_assert_eq!(product.status(), ProductStatus::Available);
                prop_assert_eq!(product.is_available(), stock > 0);
            }
        }
    }
}
