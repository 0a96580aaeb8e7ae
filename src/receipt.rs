//! Receipt
//!
//! Writes a priced basket for the customer:
//!
//! ```text
//! Subtotal: £3.10
//! Apples 10% off: 10p
//! Total: £3.00
//! ```

use std::io::{self, Write};

use thiserror::Error;

use crate::{money::format_money, pricing::Price};

/// Errors that can occur while writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// The receipt could not be written.
    #[error("failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

/// Write the receipt for a priced basket.
///
/// # Errors
///
/// Returns a [`ReceiptError`] if writing to `out` fails.
pub fn write_receipt<W: Write>(out: &mut W, price: &Price) -> Result<(), ReceiptError> {
    writeln!(out, "Subtotal: {}", format_money(price.subtotal()))?;

    if price.offers().is_empty() {
        writeln!(out, "(No offers available)")?;
    }

    for (description, discount) in price.offers() {
        writeln!(out, "{description}: {}", format_money(*discount))?;
    }

    writeln!(out, "Total: {}", format_money(price.total()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{basket::Basket, catalog::Catalog, offers::package::OfferPackage};

    use super::*;

    fn render(price: &Price) -> Result<String, Box<dyn std::error::Error>> {
        let mut out = Vec::new();

        write_receipt(&mut out, price)?;

        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn lists_each_applied_offer() -> TestResult {
        let catalog: Catalog = "Apples 1.00\nMilk 1.30\nBread 0.80".parse()?;
        let offers = OfferPackage::parse_with_default_parsers(&catalog, ["Apples 10%"])?;
        let mut basket = Basket::new(&catalog);

        for item in ["apples", "milk", "bread"] {
            basket.add_item(item)?;
        }

        let output = render(&basket.price(&offers)?)?;

        assert_eq!(
            output,
            "Subtotal: £3.10\nApples 10% off: 10p\nTotal: £3.00\n"
        );

        Ok(())
    }

    #[test]
    fn notes_when_no_offers_apply() -> TestResult {
        let catalog: Catalog = "Apples 1.00\nMilk 1.30".parse()?;
        let offers = OfferPackage::parse_with_default_parsers(&catalog, ["Apples 10%"])?;
        let mut basket = Basket::new(&catalog);

        basket.add_item("milk")?;

        let output = render(&basket.price(&offers)?)?;

        assert_eq!(
            output,
            "Subtotal: £1.30\n(No offers available)\nTotal: £1.30\n"
        );

        Ok(())
    }

    #[test]
    fn write_errors_are_reported() -> TestResult {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let catalog = Catalog::default();
        let price = Basket::new(&catalog).price(&OfferPackage::empty())?;

        assert!(matches!(
            write_receipt(&mut FailingWriter, &price),
            Err(ReceiptError::Io(_))
        ));

        Ok(())
    }
}
