//! Price Basket
//!
//! Price Basket prices a basket of shop items against a catalog of unit prices and a package of
//! special offers read from line-oriented text files.

pub mod basket;
pub mod catalog;
pub mod config;
pub mod data;
pub mod discounts;
pub mod items;
pub mod money;
pub mod observability;
pub mod offers;
pub mod prelude;
pub mod pricing;
pub mod receipt;
