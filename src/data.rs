//! Data files
//!
//! Line sources for the catalog and offer data files. A data file missing from the data
//! directory is created from the default contents bundled with the crate before it is read.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, warn};

/// Name of the catalog data file.
pub const CATALOG_FILE: &str = "catalog.list";

/// Name of the special offers data file.
pub const OFFERS_FILE: &str = "offers.list";

const DEFAULT_CATALOG: &str = include_str!("../data/catalog.list");
const DEFAULT_OFFERS: &str = include_str!("../data/offers.list");

/// Errors raised while reading data files.
#[derive(Debug, Error)]
pub enum DataError {
    /// The data file could not be read or created.
    #[error("failed to access data file {}: {source}", path.display())]
    Io {
        /// Path of the data file.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The data file doesn't exist and there is no bundled default for it.
    #[error("data file {0} doesn't exist and has no default contents")]
    UnknownResource(String),
}

/// Reads data files relative to a base directory.
#[derive(Debug, Clone)]
pub struct DataReader {
    base_path: PathBuf,
}

impl DataReader {
    /// Create a reader for data files in `base_path`.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Return the directory data files are read from.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Read every line of the named data file.
    ///
    /// When the file doesn't exist it is first written with the bundled default contents, so the
    /// defaults can be edited in place afterwards.
    ///
    /// # Errors
    ///
    /// - [`DataError::UnknownResource`]: the file is missing and has no bundled default.
    /// - [`DataError::Io`]: the file could not be created or read.
    pub fn read_lines(&self, name: &str) -> Result<Vec<String>, DataError> {
        let path = self.base_path.join(name);

        if !path.exists() {
            let contents =
                default_contents(name).ok_or_else(|| DataError::UnknownResource(name.to_owned()))?;

            warn!(path = %path.display(), "data file not found, writing default contents");

            write_file(&path, contents)?;
        }

        let contents = fs::read_to_string(&path).map_err(|source| DataError::Io {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), "read data file");

        Ok(contents.lines().map(str::to_owned).collect())
    }
}

impl Default for DataReader {
    fn default() -> Self {
        Self::new(".")
    }
}

/// Return the bundled default contents for a data file, if there are any.
pub fn default_contents(name: &str) -> Option<&'static str> {
    match name {
        CATALOG_FILE => Some(DEFAULT_CATALOG),
        OFFERS_FILE => Some(DEFAULT_OFFERS),
        _ => None,
    }
}

/// Iterate over the entry lines of a data source, numbered from 1.
///
/// Blank lines and lines whose first non-whitespace character is `#` are skipped. Entries are
/// yielded trimmed, paired with their line number in the source.
pub fn entries<I>(lines: I) -> impl Iterator<Item = (usize, String)>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines.into_iter().enumerate().filter_map(|(index, line)| {
        let entry = line.as_ref().trim();

        (!entry.is_empty() && !entry.starts_with('#')).then(|| (index + 1, entry.to_owned()))
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), DataError> {
    let io_error = |source| DataError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    fs::write(path, contents).map_err(io_error)
}
