//! Basket

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::Catalog,
    items::{ItemError, ItemId},
    offers::package::OfferPackage,
    pricing::{Price, PricingError, price},
};

/// Errors related to adding items to a basket.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BasketError {
    /// The item name was blank.
    #[error(transparent)]
    InvalidItem(#[from] ItemError),

    /// The item isn't listed in the catalog.
    #[error("{0} doesn't exist in the catalog")]
    UnknownItem(ItemId),

    /// The item's quantity can't be represented.
    #[error("quantity of {0} overflowed")]
    QuantityOverflow(ItemId),
}

/// Items a customer wants to buy, with their quantities.
///
/// Every item in a basket is listed in the catalog the basket was created for.
#[derive(Debug, Clone)]
pub struct Basket<'a> {
    catalog: &'a Catalog,
    items: FxHashMap<ItemId, u32>,
}

impl<'a> Basket<'a> {
    /// Create an empty basket for the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Basket {
            catalog,
            items: FxHashMap::default(),
        }
    }

    /// Add one unit of the named item to the basket.
    ///
    /// The basket is left unchanged when the item can't be added.
    ///
    /// # Errors
    ///
    /// - [`BasketError::InvalidItem`]: the name is blank.
    /// - [`BasketError::UnknownItem`]: the catalog doesn't list the item.
    /// - [`BasketError::QuantityOverflow`]: the item's quantity is already at its maximum.
    pub fn add_item(&mut self, name: &str) -> Result<(), BasketError> {
        self.add(ItemId::new(name)?)
    }

    /// Add one unit of an item to the basket.
    ///
    /// # Errors
    ///
    /// - [`BasketError::UnknownItem`]: the catalog doesn't list the item.
    /// - [`BasketError::QuantityOverflow`]: the item's quantity is already at its maximum.
    pub fn add(&mut self, item: ItemId) -> Result<(), BasketError> {
        if !self.catalog.contains(&item) {
            return Err(BasketError::UnknownItem(item));
        }

        let quantity = self.quantity_of(&item);
        let quantity = quantity
            .checked_add(1)
            .ok_or_else(|| BasketError::QuantityOverflow(item.clone()))?;

        debug!(%item, quantity, "added item to basket");

        self.items.insert(item, quantity);

        Ok(())
    }

    /// Get the quantity of an item in the basket, zero if it was never added.
    pub fn quantity_of(&self, item: &ItemId) -> u32 {
        self.items.get(item).copied().unwrap_or_default()
    }

    /// Iterate over the items in the basket and their quantities, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, u32)> {
        self.items.iter().map(|(item, quantity)| (item, *quantity))
    }

    /// Get the number of distinct items in the basket.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the catalog the basket was created for.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Price the basket against a package of special offers.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if an amount overflows or an offer fails to calculate its
    /// discount.
    pub fn price(&self, offers: &OfferPackage<'_>) -> Result<Price, PricingError> {
        price(self, offers)
    }
}
