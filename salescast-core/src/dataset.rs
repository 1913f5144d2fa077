//! Historical sales dataset used for the comparison histogram.

use log::debug;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use crate::catalog::{Category, Genre};
use crate::constants::{GENRE_COLUMN_NAME, SALES_COLUMN_NAME};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset is missing required column {0:?}")]
    MissingColumn(&'static str),
    #[error("dataset row {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("dataset header could not be read: {0}")]
    Header(#[source] csv::Error),
}

/// One historical release. Columns other than genre and sales are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SalesRecord {
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Global_Sales", deserialize_with = "csv::invalid_option")]
    pub global_sales: Option<f64>,
}

/// Read-only table of historical releases, loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesDataset {
    records: Vec<SalesRecord>,
}

impl SalesDataset {
    /// Parse a CSV document with a header row.
    ///
    /// # Errors
    ///
    /// Returns an error if a required column is missing or a row is malformed.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers().map_err(DatasetError::Header)?;
        for required in [GENRE_COLUMN_NAME, SALES_COLUMN_NAME] {
            if !headers.iter().any(|h| h == required) {
                return Err(DatasetError::MissingColumn(required));
            }
        }

        let mut records = Vec::new();
        let mut skipped = 0_usize;
        for result in csv_reader.deserialize::<SalesRecord>() {
            let record = result.map_err(|source| DatasetError::Row {
                line: source.position().map_or(0, csv::Position::line),
                source,
            })?;
            if record.global_sales.is_some_and(f64::is_finite) {
                records.push(record);
            } else {
                skipped += 1;
            }
        }
        debug!(
            "loaded {} sales records ({skipped} without a sales figure)",
            records.len()
        );
        Ok(Self { records })
    }

    /// Parse an in-memory CSV document.
    ///
    /// # Errors
    ///
    /// See [`SalesDataset::from_reader`].
    pub fn from_csv_str(csv: &str) -> Result<Self, DatasetError> {
        Self::from_reader(csv.as_bytes())
    }

    /// Load a CSV file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Io`] if the file cannot be opened, otherwise
    /// see [`SalesDataset::from_reader`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    /// Sales figures of every release in `genre`; empty when no genre is chosen.
    #[must_use]
    pub fn sales_for(&self, genre: Option<Genre>) -> Vec<f64> {
        let Some(genre) = genre else {
            return Vec::new();
        };
        let wanted = genre.value();
        self.records
            .iter()
            .filter(|record| record.genre == wanted)
            .filter_map(|record| record.global_sales)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Name,Genre,Platform,Global_Sales
Alpha,Action,PS4,1.25
Beta,Shooter,PC,0.40
Gamma,Action,XOne,
Delta,Action,NS,3.10
";

    #[test]
    fn loads_required_columns_and_skips_blank_sales() {
        let data = SalesDataset::from_csv_str(SAMPLE).unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data.records()[0].genre, "Action");
    }

    #[test]
    fn filters_sales_by_genre() {
        let data = SalesDataset::from_csv_str(SAMPLE).unwrap();
        assert_eq!(data.sales_for(Some(Genre::Action)), vec![1.25, 3.10]);
        assert_eq!(data.sales_for(Some(Genre::Shooter)), vec![0.40]);
        assert!(data.sales_for(Some(Genre::Puzzle)).is_empty());
        assert!(data.sales_for(None).is_empty());
    }

    #[test]
    fn missing_sales_column_is_reported() {
        let err = SalesDataset::from_csv_str("Name,Genre\nAlpha,Action\n").unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn("Global_Sales")));
    }

    #[test]
    fn malformed_sales_value_becomes_missing() {
        let data = SalesDataset::from_csv_str("Genre,Global_Sales\nAction,lots\nAction,2.0\n")
            .unwrap();
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SalesDataset::from_path("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }
}
