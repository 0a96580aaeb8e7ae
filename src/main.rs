//! Price Basket command-line entry point

use std::{io, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use price_basket::{
    basket::Basket,
    catalog::Catalog,
    config::Config,
    data::{CATALOG_FILE, DataReader, OFFERS_FILE},
    observability,
    offers::{default_parsers, package::OfferPackage},
    receipt::write_receipt,
};

fn main() -> ExitCode {
    let config = Config::parse();

    if let Err(e) = observability::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for setup errors"
        )]
        {
            eprintln!("{e}");
        }

        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            #[expect(
                clippy::print_stderr,
                reason = "errors are reported to the user regardless of the log level"
            )]
            {
                eprintln!("Error: {e:#}");
            }

            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    let reader = DataReader::new(&config.data_dir);

    info!(data_dir = %reader.base_path().display(), "loading shop data");

    let catalog = Catalog::from_lines(reader.read_lines(CATALOG_FILE)?)
        .with_context(|| format!("invalid catalog in {CATALOG_FILE}"))?;

    let offers = OfferPackage::parse(&catalog, reader.read_lines(OFFERS_FILE)?, &default_parsers())
        .with_context(|| format!("invalid special offers in {OFFERS_FILE}"))?;

    let mut basket = Basket::new(&catalog);

    for item in &config.items {
        basket.add_item(item)?;
    }

    let price = basket.price(&offers)?;

    write_receipt(&mut io::stdout().lock(), &price)?;

    Ok(())
}
