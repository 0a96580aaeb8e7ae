//! Price Basket prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::{Basket, BasketError},
    catalog::{Catalog, CatalogError},
    data::{CATALOG_FILE, DataError, DataReader, OFFERS_FILE, default_contents},
    discounts::DiscountError,
    items::{ItemError, ItemId},
    money::format_money,
    offers::{
        Offer, OfferParser, OfferRule,
        bundle::{BundleOffer, BundleOfferParser},
        default_parsers,
        discount::{DiscountOffer, DiscountOfferParser, DiscountValue},
        package::{OfferPackage, OfferPackageError},
    },
    pricing::{Price, PricingError, price},
    receipt::{ReceiptError, write_receipt},
};
