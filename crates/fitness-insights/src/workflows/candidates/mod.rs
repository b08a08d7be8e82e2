pub mod domain;
pub mod report;
pub mod router;
mod sample;

pub use domain::{CandidateRecord, FitnessStatus, Gender};
pub use report::views::{
    BranchSummary, CategorySlice, DashboardReport, MetricTile, OverallStats,
};
pub use report::{aggregate, percentage};
pub use router::{dashboard_router, DashboardResponse};
pub use sample::sample_records;
