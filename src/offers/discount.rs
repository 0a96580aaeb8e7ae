//! Discount Offer
//!
//! A percentage or fixed amount off every unit of a single item.
//!
//! Rules are written as `<item> <percentage>%` (e.g. `Apples 10%`) or `<item> <amount>`
//! (e.g. `Milk 0.20`). Percentages must be whole numbers no greater than 100 and amounts can't
//! exceed the item's unit price.

use std::sync::LazyLock;

use decimal_percentage::Percentage;
use regex::Regex;
use rust_decimal::Decimal;

use crate::{
    basket::Basket,
    catalog::Catalog,
    discounts::{DiscountError, percent_of, times},
    items::ItemId,
    money::{SCALE, format_money, parse_amount, round},
    offers::{Offer, OfferParser, OfferRule},
};

#[expect(clippy::expect_used, reason = "the pattern is a constant known to compile")]
static RULE_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<item>.+?)\s+(?:(?P<percent>\d+)%|(?P<amount>\d+(?:\.\d+)?))$")
        .expect("discount offer pattern should compile")
});

const MAX_PERCENTAGE_POINTS: u32 = 100;

/// How much a [`DiscountOffer`] takes off each unit.
#[derive(Debug, Copy, Clone)]
pub enum DiscountValue {
    /// A percentage of the item's unit price (e.g. "10% off")
    Percentage {
        /// Whole percentage points, from 0 to 100.
        points: u8,

        /// The same percentage as a fraction.
        fraction: Percentage,
    },

    /// A fixed amount off the item's unit price (e.g. "20p off")
    AmountOff(Decimal),
}

/// A discount on every unit of one item in the basket.
#[derive(Debug, Clone)]
pub struct DiscountOffer<'a> {
    catalog: &'a Catalog,
    item: ItemId,
    value: DiscountValue,
}

impl<'a> DiscountOffer<'a> {
    /// Create a percentage discount.
    ///
    /// Returns `None` if the item isn't in the catalog or `points` is over 100.
    pub fn percentage(catalog: &'a Catalog, item: ItemId, points: u32) -> Option<Self> {
        if points > MAX_PERCENTAGE_POINTS || !catalog.contains(&item) {
            return None;
        }

        let fraction = Decimal::new(i64::from(points), 2).to_string();
        let fraction = Percentage::try_from(fraction.as_str()).ok()?;

        Some(Self {
            catalog,
            item,
            value: DiscountValue::Percentage {
                points: u8::try_from(points).ok()?,
                fraction,
            },
        })
    }

    /// Create a fixed amount discount.
    ///
    /// Returns `None` if the item isn't in the catalog, or the amount is negative, has more than
    /// two fractional digits, or is larger than the item's unit price.
    pub fn amount_off(catalog: &'a Catalog, item: ItemId, amount: Decimal) -> Option<Self> {
        let price = catalog.price_for(&item)?;

        if amount.is_sign_negative() || round(amount) != amount || amount > price {
            return None;
        }

        let mut amount = amount;
        amount.rescale(SCALE);

        Some(Self {
            catalog,
            item,
            value: DiscountValue::AmountOff(amount),
        })
    }

    /// Return the discounted item.
    pub fn item(&self) -> &ItemId {
        &self.item
    }

    /// Return the discount taken off each unit.
    pub fn value(&self) -> DiscountValue {
        self.value
    }

    fn per_unit(&self) -> Result<Decimal, DiscountError> {
        match self.value {
            DiscountValue::AmountOff(amount) => Ok(amount),
            DiscountValue::Percentage { fraction, .. } => {
                let price = self
                    .catalog
                    .price_for(&self.item)
                    .ok_or_else(|| DiscountError::UnpricedItem(self.item.clone()))?;

                percent_of(fraction, price)
            }
        }
    }
}

impl OfferRule for DiscountOffer<'_> {
    fn is_applicable(&self, basket: &Basket<'_>) -> bool {
        basket.quantity_of(&self.item) > 0
    }

    fn discount(&self, basket: &Basket<'_>) -> Result<Decimal, DiscountError> {
        times(self.per_unit()?, basket.quantity_of(&self.item))
    }

    fn description(&self) -> String {
        let item = self.item.display_name();

        match self.value {
            DiscountValue::Percentage { points, .. } => format!("{item} {points}% off"),
            DiscountValue::AmountOff(amount) => format!("{item} {} off", format_money(amount)),
        }
    }
}

/// Parser for `<item> <percentage>%` and `<item> <amount>` rules.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscountOfferParser;

impl OfferParser for DiscountOfferParser {
    fn parse_rule<'a>(&self, catalog: &'a Catalog, rule: &str) -> Option<Offer<'a>> {
        let captures = RULE_FORMAT.captures(rule.trim())?;
        let item = ItemId::new(captures.name("item")?.as_str()).ok()?;

        let offer = if let Some(percent) = captures.name("percent") {
            DiscountOffer::percentage(catalog, item, percent.as_str().parse().ok()?)
        } else {
            let amount = parse_amount(captures.name("amount")?.as_str())?;

            DiscountOffer::amount_off(catalog, item, amount)
        };

        offer.map(Offer::from)
    }
}
