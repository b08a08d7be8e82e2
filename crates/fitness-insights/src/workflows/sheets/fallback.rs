use super::{SheetImportError, SheetImporter};
use crate::config::SheetsConfig;
use crate::workflows::candidates::{sample_records, CandidateRecord};
use std::path::PathBuf;

/// Dataset served when the live sheet cannot be read.
pub trait FallbackDataset: Send + Sync {
    fn records(&self) -> Result<Vec<CandidateRecord>, SheetImportError>;
}

/// The built-in development dataset.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedSample;

impl FallbackDataset for EmbeddedSample {
    fn records(&self) -> Result<Vec<CandidateRecord>, SheetImportError> {
        Ok(sample_records())
    }
}

/// A CSV snapshot on disk, read on every fallback.
#[derive(Debug, Clone)]
pub struct CsvFileFallback {
    path: PathBuf,
}

impl CsvFileFallback {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FallbackDataset for CsvFileFallback {
    fn records(&self) -> Result<Vec<CandidateRecord>, SheetImportError> {
        SheetImporter::from_path(&self.path)
    }
}

#[derive(Debug, Clone)]
pub enum ConfiguredFallback {
    Embedded(EmbeddedSample),
    CsvFile(CsvFileFallback),
}

impl ConfiguredFallback {
    pub fn from_config(config: &SheetsConfig) -> Self {
        match &config.fallback_csv {
            Some(path) => Self::CsvFile(CsvFileFallback::new(path.clone())),
            None => Self::Embedded(EmbeddedSample),
        }
    }
}

impl FallbackDataset for ConfiguredFallback {
    fn records(&self) -> Result<Vec<CandidateRecord>, SheetImportError> {
        match self {
            Self::Embedded(sample) => sample.records(),
            Self::CsvFile(file) => file.records(),
        }
    }
}
