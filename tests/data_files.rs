//! Reading shop data files, falling back to the bundled defaults.

use std::fs;

use tempfile::tempdir;
use testresult::TestResult;

use price_basket::prelude::*;

#[test]
fn missing_files_are_written_with_defaults() -> TestResult {
    let dir = tempdir()?;
    let reader = DataReader::new(dir.path().join("shop"));

    let lines = reader.read_lines(CATALOG_FILE)?;

    assert_eq!(
        fs::read_to_string(dir.path().join("shop").join(CATALOG_FILE))?,
        default_contents(CATALOG_FILE).ok_or("no defaults")?
    );

    let catalog = Catalog::from_lines(lines)?;

    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.price_for(&ItemId::new("soup")?), Some("0.65".parse()?));

    Ok(())
}

#[test]
fn existing_files_take_precedence() -> TestResult {
    let dir = tempdir()?;

    fs::write(dir.path().join(CATALOG_FILE), "Tea 2.50\n")?;
    fs::write(dir.path().join(OFFERS_FILE), "# nothing on offer\n")?;

    let reader = DataReader::new(dir.path());
    let catalog = Catalog::from_lines(reader.read_lines(CATALOG_FILE)?)?;
    let offers = OfferPackage::parse_with_default_parsers(&catalog, reader.read_lines(OFFERS_FILE)?)?;

    assert_eq!(catalog.len(), 1);
    assert!(catalog.contains(&ItemId::new("tea")?));
    assert!(offers.is_empty());

    Ok(())
}

#[test]
fn unknown_resources_without_defaults_are_errors() -> TestResult {
    let dir = tempdir()?;
    let reader = DataReader::new(dir.path());

    assert!(matches!(
        reader.read_lines("prices.list"),
        Err(DataError::UnknownResource(name)) if name == "prices.list"
    ));
    assert!(!dir.path().join("prices.list").exists());

    Ok(())
}

#[test]
fn catalog_errors_carry_source_line_numbers() -> TestResult {
    let dir = tempdir()?;

    fs::write(dir.path().join(CATALOG_FILE), "# catalog\n\nApples 1.00\nBread\n")?;

    let lines = DataReader::new(dir.path()).read_lines(CATALOG_FILE)?;

    assert_eq!(
        Catalog::from_lines(lines).err(),
        Some(CatalogError::MalformedEntry { line: 4 })
    );

    Ok(())
}
