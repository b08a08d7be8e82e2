mod client;
mod fallback;
mod loader;
mod normalizer;
mod parser;
mod values;

use crate::workflows::candidates::CandidateRecord;
use std::io::Read;
use std::path::Path;

pub use client::{SheetClient, SheetsApiClient, SheetsCsvClient};
pub use fallback::{ConfiguredFallback, CsvFileFallback, EmbeddedSample, FallbackDataset};
pub use loader::{DashboardLoader, DataSource, DataUnavailable, LoadedDataset, SheetSource};

#[derive(Debug, thiserror::Error)]
pub enum SheetImportError {
    #[error("failed to read sheet export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid sheet CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid sheet value range: {0}")]
    Values(#[from] serde_json::Error),
    #[error("sheet request failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("sheet request returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("sheet header is missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<&'static str>),
    #[error("no sheet configured")]
    NotConfigured,
}

/// Entry points turning raw sheet content into candidate records.
pub struct SheetImporter;

impl SheetImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CandidateRecord>, SheetImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<CandidateRecord>, SheetImportError> {
        parser::parse_records(reader)
    }

    pub fn from_values_json(body: &str) -> Result<Vec<CandidateRecord>, SheetImportError> {
        values::parse_value_range(body)
    }
}
