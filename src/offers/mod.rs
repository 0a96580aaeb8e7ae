//! Offers
//!
//! Special offer rules and the parsers that read them from text. Each rule is written on one
//! line and read by exactly one registered [`OfferParser`]; the [`package::OfferPackage`] tries
//! every parser against every line and rejects lines that match none or more than one.

use std::fmt;

use rust_decimal::Decimal;

use crate::{
    basket::Basket,
    catalog::Catalog,
    discounts::DiscountError,
    offers::{
        bundle::{BundleOffer, BundleOfferParser},
        discount::{DiscountOffer, DiscountOfferParser},
    },
};

pub mod bundle;
pub mod discount;
pub mod package;

/// A rule describing when a special offer applies and how much it takes off.
pub trait OfferRule: fmt::Debug {
    /// Return whether the offer applies to the basket.
    fn is_applicable(&self, basket: &Basket<'_>) -> bool;

    /// Calculate the total discount the offer gives the basket, rounded to two decimal places.
    ///
    /// Only meaningful when the offer is applicable; it may return zero otherwise.
    ///
    /// # Errors
    ///
    /// Returns a [`DiscountError`] if the discount can't be calculated.
    fn discount(&self, basket: &Basket<'_>) -> Result<Decimal, DiscountError>;

    /// Return a human-readable description, derived from the rule's parameters.
    fn description(&self) -> String;
}

/// Reads one kind of offer rule from a line of text.
pub trait OfferParser: fmt::Debug {
    /// Try to parse a trimmed rule line, validating it against the catalog.
    ///
    /// Returns `None` when the line isn't this parser's rule, or when the rule is invalid for the
    /// catalog (unknown items, discounts larger than prices, ...).
    fn parse_rule<'a>(&self, catalog: &'a Catalog, rule: &str) -> Option<Offer<'a>>;
}

/// Offer enum
#[derive(Debug)]
pub enum Offer<'a> {
    /// Percentage or amount off a single item
    Discount(DiscountOffer<'a>),

    /// Amount off one item for every N of another
    Bundle(BundleOffer),

    /// Offer rule registered outside this crate
    Custom(Box<dyn OfferRule + 'a>),
}

impl OfferRule for Offer<'_> {
    fn is_applicable(&self, basket: &Basket<'_>) -> bool {
        match self {
            Offer::Discount(discount) => discount.is_applicable(basket),
            Offer::Bundle(bundle) => bundle.is_applicable(basket),
            Offer::Custom(custom) => custom.is_applicable(basket),
        }
    }

    fn discount(&self, basket: &Basket<'_>) -> Result<Decimal, DiscountError> {
        match self {
            Offer::Discount(discount) => discount.discount(basket),
            Offer::Bundle(bundle) => bundle.discount(basket),
            Offer::Custom(custom) => custom.discount(basket),
        }
    }

    fn description(&self) -> String {
        match self {
            Offer::Discount(discount) => discount.description(),
            Offer::Bundle(bundle) => bundle.description(),
            Offer::Custom(custom) => custom.description(),
        }
    }
}

impl<'a> From<DiscountOffer<'a>> for Offer<'a> {
    fn from(offer: DiscountOffer<'a>) -> Self {
        Offer::Discount(offer)
    }
}

impl From<BundleOffer> for Offer<'_> {
    fn from(offer: BundleOffer) -> Self {
        Offer::Bundle(offer)
    }
}

/// Return the parsers for the offer rules built into this crate.
pub fn default_parsers() -> Vec<Box<dyn OfferParser>> {
    vec![Box::new(DiscountOfferParser), Box::new(BundleOfferParser)]
}
