//! Pricing
//!
//! Prices a basket: the subtotal at catalog prices, the discount each applicable offer gives and
//! the final total.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::{
    basket::Basket,
    discounts::DiscountError,
    items::ItemId,
    money::round,
    offers::{OfferRule, package::OfferPackage},
};

/// Errors that can occur while pricing a basket.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// A basket item has no price in the catalog.
    #[error("{0} has no price in the catalog")]
    UnpricedItem(ItemId),

    /// An amount doesn't fit in a decimal.
    #[error("price calculation overflowed")]
    Overflow,

    /// An offer failed to calculate its discount.
    #[error(transparent)]
    Discount(#[from] DiscountError),
}

/// The priced breakdown of a basket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    subtotal: Decimal,
    total: Decimal,
    offers: BTreeMap<String, Decimal>,
}

impl Price {
    /// Total cost before any offers
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// Total cost after all offers, never below zero
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Discount given by each applied offer, keyed and ordered by offer description
    pub fn offers(&self) -> &BTreeMap<String, Decimal> {
        &self.offers
    }

    /// Sum of every applied discount.
    ///
    /// This can be more than `subtotal - total` when the discounts exceed the subtotal.
    pub fn savings(&self) -> Decimal {
        self.offers.values().copied().sum()
    }
}

/// Price a basket against a package of special offers.
///
/// Applicable offers sharing a description are reported under that description with their
/// discounts summed.
///
/// # Errors
///
/// - [`PricingError::UnpricedItem`]: a basket item is missing from its catalog.
/// - [`PricingError::Overflow`]: an amount can't be represented.
/// - [`PricingError::Discount`]: an offer failed to calculate its discount.
pub fn price(basket: &Basket<'_>, offers: &OfferPackage<'_>) -> Result<Price, PricingError> {
    let catalog = basket.catalog();

    let subtotal = basket
        .iter()
        .try_fold(Decimal::ZERO, |subtotal, (item, quantity)| {
            let unit_price = catalog
                .price_for(item)
                .ok_or_else(|| PricingError::UnpricedItem(item.clone()))?;

            unit_price
                .checked_mul(Decimal::from(quantity))
                .and_then(|line| subtotal.checked_add(line))
                .ok_or(PricingError::Overflow)
        })
        .map(round)?;

    let mut applied = BTreeMap::new();

    for offer in offers.applicable_offers(basket) {
        let description = offer.description();
        let discount = offer.discount(basket)?;

        debug!(offer = %description, %discount, "applied offer");

        let entry = applied.entry(description).or_insert(Decimal::ZERO);
        *entry = entry.checked_add(discount).ok_or(PricingError::Overflow)?;
    }

    let discounts = applied
        .values()
        .try_fold(Decimal::ZERO, |sum: Decimal, discount| sum.checked_add(*discount))
        .ok_or(PricingError::Overflow)?;

    let total = subtotal
        .checked_sub(discounts)
        .ok_or(PricingError::Overflow)?
        .max(Decimal::ZERO);

    Ok(Price {
        subtotal,
        total: round(total),
        offers: applied,
    })
}
