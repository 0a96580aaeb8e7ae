//! Bundle Offer
//!
//! For every N units of a required item, one unit of a discounted item is reduced by a fixed
//! amount. Rules are written as `<discounted item> <amount> per <N> <required item>`, e.g.
//! `Bread 0.40 per 2 Soup`. The `per` keyword is case-insensitive.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::{
    basket::Basket,
    catalog::Catalog,
    discounts::{DiscountError, times},
    items::ItemId,
    money::{SCALE, parse_amount, round},
    offers::{Offer, OfferParser, OfferRule},
};

#[expect(clippy::expect_used, reason = "the pattern is a constant known to compile")]
static RULE_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<discounted>.+?)\s+(?P<amount>\d+(?:\.\d+)?)\s+(?i:per)\s+(?P<count>\d+)\s+(?P<required>.+)$",
    )
    .expect("bundle offer pattern should compile")
});

/// A discount on one item for every N units of another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleOffer {
    discounted: ItemId,
    required: ItemId,
    amount: Decimal,
    count: u32,
}

impl BundleOffer {
    /// Create a bundle offer.
    ///
    /// Returns `None` if either item isn't in the catalog, `count` is zero, or the amount is
    /// negative, has more than two fractional digits, or is larger than the discounted item's
    /// unit price.
    pub fn new(
        catalog: &Catalog,
        discounted: ItemId,
        required: ItemId,
        amount: Decimal,
        count: u32,
    ) -> Option<Self> {
        let price = catalog.price_for(&discounted)?;

        if !catalog.contains(&required)
            || count == 0
            || amount.is_sign_negative()
            || round(amount) != amount
            || amount > price
        {
            return None;
        }

        let mut amount = amount;
        amount.rescale(SCALE);

        Some(Self {
            discounted,
            required,
            amount,
            count,
        })
    }

    /// Return the item that receives the discount.
    pub fn discounted(&self) -> &ItemId {
        &self.discounted
    }

    /// Return the item that must be bought to earn the discount.
    pub fn required(&self) -> &ItemId {
        &self.required
    }

    /// Return the amount taken off each discounted unit.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Return how many required units earn one discounted unit.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Number of discounted units the basket earns, capped by how many are present.
    fn applications(&self, basket: &Basket<'_>) -> u32 {
        let eligible = basket.quantity_of(&self.required) / self.count;

        eligible.min(basket.quantity_of(&self.discounted))
    }
}

impl OfferRule for BundleOffer {
    fn is_applicable(&self, basket: &Basket<'_>) -> bool {
        basket.quantity_of(&self.required) >= self.count
            && basket.quantity_of(&self.discounted) > 0
    }

    fn discount(&self, basket: &Basket<'_>) -> Result<Decimal, DiscountError> {
        times(self.amount, self.applications(basket))
    }

    fn description(&self) -> String {
        format!(
            "{} and {} bundle",
            self.discounted.display_name(),
            self.required.display_name()
        )
    }
}

/// Parser for `<discounted item> <amount> per <N> <required item>` rules.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundleOfferParser;

impl OfferParser for BundleOfferParser {
    fn parse_rule<'a>(&self, catalog: &'a Catalog, rule: &str) -> Option<Offer<'a>> {
        let captures = RULE_FORMAT.captures(rule.trim())?;

        let discounted = ItemId::new(captures.name("discounted")?.as_str()).ok()?;
        let required = ItemId::new(captures.name("required")?.as_str()).ok()?;
        let amount = parse_amount(captures.name("amount")?.as_str())?;
        let count = captures.name("count")?.as_str().parse().ok()?;

        BundleOffer::new(catalog, discounted, required, amount, count).map(Offer::from)
    }
}
