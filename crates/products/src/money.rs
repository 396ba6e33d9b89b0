use core::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ValueObject};

/// Non-negative monetary amount.
///
/// Immutable: every operation returns a new value. Equality and ordering
/// compare the numeric amount, so `10000` and `10000.00` are the same money.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Build from a decimal amount. Negative amounts are rejected.
    pub fn of(amount: Decimal) -> DomainResult<Self> {
        Self::validate(amount)?;
        Ok(Self { amount })
    }

    /// Build from an optional amount; `None` is treated as invalid input.
    pub fn try_from_option(amount: Option<Decimal>) -> DomainResult<Self> {
        amount.ok_or(DomainError::InvalidAmount).and_then(Self::of)
    }

    /// Build from a whole number of currency units.
    pub fn of_units(amount: i64) -> DomainResult<Self> {
        Self::of(Decimal::from(amount))
    }

    pub fn zero() -> Self {
        Self {
            amount: Decimal::ZERO,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Sum of both amounts. A sum past the decimal range is `InvalidAmount`.
    pub fn add(&self, other: &Money) -> DomainResult<Money> {
        self.amount
            .checked_add(other.amount)
            .ok_or(DomainError::InvalidAmount)
            .map(|amount| Money { amount })
    }

    pub fn subtract(&self, other: &Money) -> DomainResult<Money> {
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(DomainError::InvalidAmount)?;
        Money::of(amount)
    }

    /// Extended price for `quantity` units.
    pub fn multiply(&self, quantity: u32) -> DomainResult<Money> {
        self.amount
            .checked_mul(Decimal::from(quantity))
            .ok_or(DomainError::InvalidAmount)
            .map(|amount| Money { amount })
    }

    pub fn is_greater_than(&self, other: &Money) -> bool {
        self.amount > other.amount
    }

    pub fn is_less_than(&self, other: &Money) -> bool {
        self.amount < other.amount
    }

    fn validate(amount: Decimal) -> DomainResult<()> {
        if amount < Decimal::ZERO {
            return Err(DomainError::InvalidAmount);
        }
        Ok(())
    }
}

impl ValueObject for Money {}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount
    }
}

impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.amount.cmp(&other.amount)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.amount.normalize(), f)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Money::of(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.amount
    }
}
