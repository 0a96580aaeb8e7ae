//! Items

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Errors related to item identity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    /// The item name was empty once whitespace was removed.
    #[error("item name must not be blank")]
    InvalidItem,
}

/// Normalised item identity.
///
/// Names are split on runs of whitespace, upper-cased and joined with single spaces, so
/// `"  sugar   cane"` and `"SUGAR CANE"` identify the same item. Equality, hashing and ordering
/// all follow the normalised form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    /// Create an item id from a raw item name.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::InvalidItem`] if the name is blank.
    pub fn new(name: &str) -> Result<Self, ItemError> {
        Self::from_fragments([name])
    }

    /// Create an item id from name fragments, e.g. the leading tokens of a catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::InvalidItem`] if the fragments contain no non-whitespace text.
    pub fn from_fragments<'s>(
        fragments: impl IntoIterator<Item = &'s str>,
    ) -> Result<Self, ItemError> {
        let normalized = fragments
            .into_iter()
            .flat_map(str::split_whitespace)
            .map(str::to_uppercase)
            .collect::<Vec<_>>()
            .join(" ");

        if normalized.is_empty() {
            return Err(ItemError::InvalidItem);
        }

        Ok(Self(normalized))
    }

    /// Return the normalised name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the name with every word capitalised (`"SUGAR CANE"` becomes `"Sugar Cane"`).
    pub fn display_name(&self) -> String {
        self.0
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();

                chars
                    .next()
                    .map(|first| {
                        first
                            .to_uppercase()
                            .chain(chars.flat_map(char::to_lowercase))
                            .collect::<String>()
                    })
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ItemId {
    type Err = ItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_normalises_whitespace_and_case() -> TestResult {
        let id = ItemId::new("  sugar \t  cane\n")?;

        assert_eq!(id.as_str(), "SUGAR CANE");

        Ok(())
    }

    #[test]
    fn names_differing_in_case_and_spacing_are_equal() -> TestResult {
        assert_eq!(ItemId::new("Sugar Cane")?, ItemId::new("SUGAR   cane")?);
        assert_ne!(ItemId::new("Sugar Cane")?, ItemId::new("SugarCane")?);

        Ok(())
    }

    #[test]
    fn blank_names_are_rejected() {
        for name in ["", " ", "\t\t", "  \n  "] {
            assert_eq!(ItemId::new(name), Err(ItemError::InvalidItem), "{name:?}");
        }
    }

    #[test]
    fn from_fragments_joins_with_single_spaces() -> TestResult {
        let id = ItemId::from_fragments(["green", " apples ", "XL"])?;

        assert_eq!(id.to_string(), "GREEN APPLES XL");

        Ok(())
    }

    #[test]
    fn from_fragments_without_text_is_invalid() {
        assert_eq!(
            ItemId::from_fragments(["", "  "]),
            Err(ItemError::InvalidItem)
        );
    }

    #[test]
    fn display_name_capitalises_each_word() -> TestResult {
        for (name, expected) in [
            ("apples", "Apples"),
            ("ApPlEs", "Apples"),
            ("sugar cane", "Sugar Cane"),
            ("SUGAR Cane", "Sugar Cane"),
        ] {
            assert_eq!(ItemId::new(name)?.display_name(), expected);
        }

        Ok(())
    }

    #[test]
    fn parses_from_str() -> TestResult {
        let id: ItemId = "milk".parse()?;

        assert_eq!(id.as_ref(), "MILK");

        Ok(())
    }
}
