//! Fixed character catalog: ordered rows (sectors) of equal length.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

const DEFAULT_ROWS: [&str; 8] = [
    "ABCDE", "FGHIJ", "KLMNO", "PQRST", "UVWXY", "Z0123", "45678", "9.,!?",
];

/// Reasons a catalog cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No rows at all.
    Empty,
    /// Row at this index has no characters.
    EmptyRow(usize),
    /// Row at `row` has `found` characters where `expected` were required.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "catalog has no rows"),
            CatalogError::EmptyRow(row) => write!(f, "catalog row {row} is empty"),
            CatalogError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "catalog row {row} has {found} characters, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for CatalogError {}

/// On-disk catalog layout: one string per row, one character per cell.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    rows: Vec<String>,
}

/// Immutable row → character table. Every row has the same non-zero length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionCatalog {
    rows: Vec<Vec<char>>,
}

impl SelectionCatalog {
    pub fn new(rows: Vec<Vec<char>>) -> Result<Self, CatalogError> {
        let Some(first) = rows.first() else {
            return Err(CatalogError::Empty);
        };
        let expected = first.len();
        for (index, row) in rows.iter().enumerate() {
            if row.is_empty() {
                return Err(CatalogError::EmptyRow(index));
            }
            if row.len() != expected {
                return Err(CatalogError::RaggedRow {
                    row: index,
                    expected,
                    found: row.len(),
                });
            }
        }
        Ok(Self { rows })
    }

    /// Build from strings, splitting each one into its characters.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            rows.into_iter()
                .map(|row| row.as_ref().chars().collect())
                .collect(),
        )
    }

    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let file: CatalogFile =
            serde_yaml::from_str(source).context("catalog is not valid YAML")?;
        Ok(Self::from_rows(file.rows)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        Self::from_yaml_str(&source).with_context(|| format!("invalid catalog {}", path.display()))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row_len(&self) -> usize {
        self.rows[0].len()
    }

    pub fn row(&self, index: usize) -> Option<&[char]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn get(&self, row: usize, column: usize) -> Option<char> {
        self.rows.get(row)?.get(column).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

impl Default for SelectionCatalog {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS
                .iter()
                .map(|row| row.chars().collect())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_eight_rows_of_five() {
        let catalog = SelectionCatalog::default();
        assert_eq!(catalog.row_count(), 8);
        assert_eq!(catalog.row_len(), 5);
        assert_eq!(catalog.get(1, 2), Some('H'));
        assert_eq!(catalog.get(7, 4), Some('?'));
        assert_eq!(catalog.get(8, 0), None);
    }

    #[test]
    fn rejects_empty_and_ragged_catalogs() {
        assert_eq!(SelectionCatalog::new(Vec::new()), Err(CatalogError::Empty));
        assert_eq!(
            SelectionCatalog::from_rows(["AB", ""]),
            Err(CatalogError::EmptyRow(1))
        );
        assert_eq!(
            SelectionCatalog::from_rows(["AB", "CDE"]),
            Err(CatalogError::RaggedRow {
                row: 1,
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn yaml_rows_split_into_characters() {
        let catalog = SelectionCatalog::from_yaml_str("rows:\n  - \"äbc\"\n  - \"123\"\n")
            .expect("valid catalog");
        assert_eq!(catalog.row(0), Some(&['ä', 'b', 'c'][..]));
        assert_eq!(catalog.get(1, 0), Some('1'));
    }

    #[test]
    fn yaml_with_ragged_rows_is_rejected() {
        let err = SelectionCatalog::from_yaml_str("rows: [\"AB\", \"C\"]").unwrap_err();
        assert!(format!("{err:#}").contains("expected 2"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SelectionCatalog::load(Path::new("/nonexistent/hemikey-catalog.yaml"))
            .unwrap_err();
        assert!(format!("{err:#}").contains("hemikey-catalog.yaml"));
    }
}
