use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::domain::CandidateRecord;
use super::report::aggregate;
use super::report::views::{DashboardReport, MetricTile};
use crate::error::AppError;
use crate::workflows::sheets::{
    DashboardLoader, DataSource, FallbackDataset, SheetImporter, SheetSource,
};

/// Chart-ready payload: the aggregated datasets plus the metric tiles.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub data_source: DataSource,
    #[serde(flatten)]
    pub report: DashboardReport,
    pub tiles: Vec<MetricTile>,
}

impl DashboardResponse {
    pub fn new(data_source: DataSource, report: DashboardReport) -> Self {
        let tiles = report.tiles();
        Self {
            data_source,
            report,
            tiles,
        }
    }
}

/// Ad-hoc aggregation request. `csv` wins when both fields are present.
#[derive(Debug, Default, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub csv: Option<String>,
    #[serde(default)]
    pub records: Option<Vec<CandidateRow>>,
}

/// Loosely-typed row; rows missing a field are dropped like sheet rows.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CandidateRow {
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub status: String,
}

impl CandidateRow {
    fn into_record(self) -> Option<CandidateRecord> {
        CandidateRecord::from_fields(&self.branch, &self.gender, &self.status)
    }
}

/// Router builder exposing the dashboard datasets.
pub fn dashboard_router<S, F>(loader: Arc<DashboardLoader<S, F>>) -> Router
where
    S: SheetSource + 'static,
    F: FallbackDataset + 'static,
{
    Router::new()
        .route("/api/v1/dashboard", get(dashboard_handler::<S, F>))
        .route("/api/v1/dashboard/report", post(report_handler))
        .with_state(loader)
}

pub async fn dashboard_handler<S, F>(
    State(loader): State<Arc<DashboardLoader<S, F>>>,
) -> Result<Json<DashboardResponse>, AppError>
where
    S: SheetSource + 'static,
    F: FallbackDataset + 'static,
{
    let dataset = loader.load().await?;
    let report = aggregate(&dataset.records);
    Ok(Json(DashboardResponse::new(dataset.source, report)))
}

pub async fn report_handler(
    Json(request): Json<ReportRequest>,
) -> Result<Json<DashboardResponse>, AppError> {
    let records = match (request.csv, request.records) {
        (Some(csv), _) => SheetImporter::from_reader(csv.as_bytes())?,
        (None, Some(rows)) => rows
            .into_iter()
            .filter_map(CandidateRow::into_record)
            .collect(),
        (None, None) => {
            return Err(AppError::InvalidRequest(
                "request must include `csv` or `records`".to_string(),
            ))
        }
    };

    let report = aggregate(&records);
    Ok(Json(DashboardResponse::new(DataSource::Supplied, report)))
}
