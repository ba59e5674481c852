//! Airport code catalog
//!
//! The ordered list of valid codes. Guesses are checked for membership here and
//! the daily solution is picked by index, so the order of the source matters.

mod embedded;
pub mod loader;

pub use embedded::{AIRPORT_CODES, AIRPORT_CODES_LINES};

use crate::core::Code;
use crate::error::CatalogError;
use rustc_hash::FxHashSet;
use std::path::Path;
use tracing::debug;

/// A non-empty, ordered catalog of airport codes
#[derive(Debug, Clone)]
pub struct Catalog {
    codes: Vec<Code>,
    index: FxHashSet<Code>,
}

impl Catalog {
    /// Build a catalog from already parsed codes
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` if `codes` is empty, since no daily
    /// solution could ever be selected.
    pub fn new(codes: Vec<Code>) -> Result<Self, CatalogError> {
        if codes.is_empty() {
            return Err(CatalogError::Empty);
        }

        let index = codes.iter().copied().collect();
        debug!(codes = codes.len(), "catalog loaded");

        Ok(Self { codes, index })
    }

    /// Parse a catalog from newline-delimited text
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` if no line holds a valid code.
    ///
    /// # Examples
    /// ```
    /// use airport_wordle::catalog::Catalog;
    ///
    /// let catalog = Catalog::parse("AAA\nBBB\nnot a code\nCCC").unwrap();
    /// assert_eq!(catalog.len(), 3);
    /// assert!(Catalog::parse("header only").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        Self::new(loader::parse_codes(text))
    }

    /// Load a catalog from a file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read and
    /// `CatalogError::Empty` if it holds no valid code.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let codes = loader::load_from_file(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(codes)
    }

    /// The catalog bundled into the binary
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` if the bundled resource holds no valid code.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::new(loader::codes_from_slice(AIRPORT_CODES))
    }

    /// Check if a code is part of the catalog
    #[inline]
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.index.contains(code)
    }

    /// Number of entries, duplicates included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always false; an empty catalog cannot be constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Code at a position in catalog order
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Code> {
        self.codes.get(index)
    }

    /// All codes in catalog order
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_line_count_matches_const() {
        assert_eq!(AIRPORT_CODES.len(), AIRPORT_CODES_LINES);
    }

    #[test]
    fn embedded_catalog_is_usable() {
        let catalog = Catalog::embedded().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.len() <= AIRPORT_CODES_LINES);
        assert!(catalog.contains(&Code::new("SFO").unwrap()));
        assert!(catalog.contains(&Code::new("SEA").unwrap()));
    }

    #[test]
    fn embedded_catalog_skips_header() {
        assert_eq!(AIRPORT_CODES[0], "code");
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.len(), AIRPORT_CODES_LINES - 1);
    }

    #[test]
    fn empty_catalog_rejected() {
        assert!(matches!(Catalog::new(Vec::new()), Err(CatalogError::Empty)));
        assert!(matches!(Catalog::parse("code\n\n--\n"), Err(CatalogError::Empty)));
    }

    #[test]
    fn membership_and_order() {
        let catalog = Catalog::parse("CCC\nAAA\nBBB").unwrap();
        assert!(catalog.contains(&Code::new("AAA").unwrap()));
        assert!(!catalog.contains(&Code::new("DDD").unwrap()));
        assert_eq!(catalog.get(0).map(Code::as_str), Some("CCC"));
        assert_eq!(catalog.get(2).map(Code::as_str), Some("BBB"));
        assert_eq!(catalog.get(3), None);
    }

    #[test]
    fn duplicates_count_towards_length() {
        let catalog = Catalog::parse("AAA\nAAA\nBBB").unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn from_file_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = Catalog::from_file(dir.path().join("nope.csv"));
        assert!(matches!(missing, Err(CatalogError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "airport").unwrap();
        assert!(matches!(
            Catalog::from_file(file.path()),
            Err(CatalogError::Empty)
        ));
    }
}
