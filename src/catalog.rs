//! Catalog
//!
//! The authoritative item price list. A catalog is parsed once from line-oriented text, where
//! each entry is one or more item name tokens followed by a price:
//!
//! ```text
//! # Items in stock
//! Apples     1.00
//! Sugar Cane 2.10
//! ```

use std::{collections::hash_map::Entry, str::FromStr};

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, info};

use crate::{data::entries, items::ItemId, money::parse_amount};

/// Errors raised while parsing a catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The entry is missing either the item name or the price.
    #[error("entries must have both the item name and the price (line {line})")]
    MalformedEntry {
        /// Line number of the entry.
        line: usize,
    },

    /// The price is not a non-negative amount with at most two fractional digits.
    #[error("malformed price {price:?} (line {line})")]
    MalformedPrice {
        /// Line number of the entry.
        line: usize,

        /// The rejected price token.
        price: String,
    },

    /// The item already appeared on an earlier line.
    #[error("duplicate entry found for {item} (line {line})")]
    DuplicateEntry {
        /// Line number of the duplicate entry.
        line: usize,

        /// The duplicated item.
        item: ItemId,
    },
}

/// Item price list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    prices: FxHashMap<ItemId, Decimal>,
}

impl Catalog {
    /// Parse a catalog from lines of text.
    ///
    /// Blank lines and `#` comments are ignored. Parsing is all-or-nothing: the first bad entry
    /// aborts construction.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::MalformedEntry`]: an entry has fewer than two tokens.
    /// - [`CatalogError::MalformedPrice`]: a price is negative, malformed or too precise.
    /// - [`CatalogError::DuplicateEntry`]: an item name repeats, ignoring case and spacing.
    pub fn from_lines<I>(lines: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut prices = FxHashMap::default();

        for (line, entry) in entries(lines) {
            let fragments: Vec<&str> = entry.split_whitespace().collect();

            let Some((price, name)) = fragments.split_last() else {
                return Err(CatalogError::MalformedEntry { line });
            };

            let Ok(item) = ItemId::from_fragments(name.iter().copied()) else {
                return Err(CatalogError::MalformedEntry { line });
            };

            let price = parse_amount(price).ok_or_else(|| CatalogError::MalformedPrice {
                line,
                price: (*price).to_owned(),
            })?;

            match prices.entry(item) {
                Entry::Occupied(existing) => {
                    return Err(CatalogError::DuplicateEntry {
                        line,
                        item: existing.key().clone(),
                    });
                }
                Entry::Vacant(slot) => {
                    debug!(line, item = %slot.key(), %price, "catalog entry");

                    slot.insert(price);
                }
            }
        }

        info!(items = prices.len(), "catalog loaded");

        Ok(Self { prices })
    }

    /// Return the unit price of an item, if the catalog lists it.
    pub fn price_for(&self, item: &ItemId) -> Option<Decimal> {
        self.prices.get(item).copied()
    }

    /// Check whether the catalog lists an item.
    pub fn contains(&self, item: &ItemId) -> bool {
        self.prices.contains_key(item)
    }

    /// Iterate over every item in the catalog, in no particular order.
    pub fn all_items(&self) -> impl Iterator<Item = &ItemId> {
        self.prices.keys()
    }

    /// Get the number of items in the catalog.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl FromStr for Catalog {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_lines(s.lines())
    }
}
