use super::fallback::FallbackDataset;
use super::SheetImportError;
use crate::workflows::candidates::CandidateRecord;
use serde::Serialize;
use std::future::Future;
use tracing::{error, info, warn};

/// Remote origin of candidate rows.
pub trait SheetSource: Send + Sync {
    /// Human-readable origin for logs; must not leak credentials.
    fn describe(&self) -> String;

    fn fetch_records(
        &self,
    ) -> impl Future<Output = Result<Vec<CandidateRecord>, SheetImportError>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Sheet,
    Fallback,
    Supplied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDataset {
    pub records: Vec<CandidateRecord>,
    pub source: DataSource,
}

/// Both the sheet and its fallback failed; nothing can be shown.
#[derive(Debug, thiserror::Error)]
#[error("candidate data unavailable: {primary}; fallback dataset failed: {fallback}")]
pub struct DataUnavailable {
    pub primary: SheetImportError,
    #[source]
    pub fallback: SheetImportError,
}

/// Makes a single attempt against the sheet and substitutes the fallback
/// dataset on any failure, so callers never see a partially parsed sheet.
pub struct DashboardLoader<S, F> {
    source: S,
    fallback: F,
}

impl<S, F> DashboardLoader<S, F>
where
    S: SheetSource,
    F: FallbackDataset,
{
    pub fn new(source: S, fallback: F) -> Self {
        Self { source, fallback }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn load(&self) -> Result<LoadedDataset, DataUnavailable> {
        let origin = self.source.describe();
        info!(%origin, "fetching candidate rows");

        let primary = match self.source.fetch_records().await {
            Ok(records) => {
                info!(%origin, count = records.len(), "loaded candidate rows");
                return Ok(LoadedDataset {
                    records,
                    source: DataSource::Sheet,
                });
            }
            Err(err) => err,
        };

        warn!(%origin, error = %primary, "sheet import failed; using fallback dataset");
        match self.fallback.records() {
            Ok(records) => {
                info!(count = records.len(), "loaded fallback candidate rows");
                Ok(LoadedDataset {
                    records,
                    source: DataSource::Fallback,
                })
            }
            Err(fallback) => {
                error!(error = %fallback, "fallback dataset unavailable");
                Err(DataUnavailable { primary, fallback })
            }
        }
    }
}
