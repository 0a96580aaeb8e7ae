//! Command-line configuration

use std::path::PathBuf;

use clap::Parser;

use crate::config::logging::LoggingConfig;

pub mod logging;

/// Price Basket configuration
#[derive(Debug, Parser)]
#[command(
    name = "price-basket",
    about = "Prices a basket of items, applying the shop's special offers",
    long_about = None
)]
pub struct Config {
    /// Names of the items to add to the basket, one unit per argument
    #[arg(value_name = "ITEMS")]
    pub items: Vec<String>,

    /// Directory holding the catalog and offer data files
    #[arg(short, long, env = "PRICE_BASKET_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}
