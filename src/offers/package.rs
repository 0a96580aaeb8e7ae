//! Offer Package
//!
//! The ordered set of special offers available in the shop, parsed from line-oriented text.

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    basket::Basket,
    catalog::Catalog,
    data::entries,
    offers::{Offer, OfferParser, OfferRule, default_parsers},
};

/// Errors raised while parsing an offer package.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OfferPackageError {
    /// No registered parser accepts the rule.
    #[error("unsupported offer rule: {rule} (line {line})")]
    UnsupportedRule {
        /// Line number of the rule.
        line: usize,

        /// The rule text, trimmed.
        rule: String,
    },

    /// More than one registered parser accepts the rule.
    #[error("ambiguous offer rule: {rule} (line {line})")]
    AmbiguousRule {
        /// Line number of the rule.
        line: usize,

        /// The rule text, trimmed.
        rule: String,
    },
}

/// Special offers available for a catalog, in the order they were written.
#[derive(Debug, Default)]
pub struct OfferPackage<'a> {
    offers: Vec<Offer<'a>>,
}

impl<'a> OfferPackage<'a> {
    /// Create an offer package with no offers.
    pub fn empty() -> Self {
        Self { offers: Vec::new() }
    }

    /// Create an offer package from already-built offers.
    pub fn with_offers(offers: impl Into<Vec<Offer<'a>>>) -> Self {
        Self {
            offers: offers.into(),
        }
    }

    /// Parse offer rules from lines of text using the given parsers.
    ///
    /// Blank lines and `#` comments are ignored. Every other line must be accepted by exactly one
    /// parser. Parsing is all-or-nothing: the first bad rule aborts construction.
    ///
    /// # Errors
    ///
    /// - [`OfferPackageError::UnsupportedRule`]: no parser accepts a rule.
    /// - [`OfferPackageError::AmbiguousRule`]: more than one parser accepts a rule.
    pub fn parse<I>(
        catalog: &'a Catalog,
        lines: I,
        parsers: &[Box<dyn OfferParser>],
    ) -> Result<Self, OfferPackageError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut offers = Vec::new();

        for (line, rule) in entries(lines) {
            let mut matches = parsers
                .iter()
                .filter_map(|parser| parser.parse_rule(catalog, &rule));

            let Some(offer) = matches.next() else {
                return Err(OfferPackageError::UnsupportedRule { line, rule });
            };

            if matches.next().is_some() {
                return Err(OfferPackageError::AmbiguousRule { line, rule });
            }

            debug!(line, offer = %offer.description(), "parsed offer rule");

            offers.push(offer);
        }

        info!(offers = offers.len(), "offer package loaded");

        Ok(Self { offers })
    }

    /// Parse offer rules from lines of text using the built-in parsers.
    ///
    /// # Errors
    ///
    /// See [`OfferPackage::parse`].
    pub fn parse_with_default_parsers<I>(
        catalog: &'a Catalog,
        lines: I,
    ) -> Result<Self, OfferPackageError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::parse(catalog, lines, &default_parsers())
    }

    /// Return every offer, in source order.
    pub fn available_offers(&self) -> &[Offer<'a>] {
        &self.offers
    }

    /// Iterate over the offers that apply to the basket, in source order.
    pub fn applicable_offers<'s>(
        &'s self,
        basket: &'s Basket<'_>,
    ) -> impl Iterator<Item = &'s Offer<'a>> {
        self.offers
            .iter()
            .filter(move |offer| offer.is_applicable(basket))
    }

    /// Get the number of offers in the package.
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    /// Check if the package has no offers.
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}
