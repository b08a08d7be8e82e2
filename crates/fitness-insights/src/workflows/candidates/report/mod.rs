mod summary;
mod tiles;
pub mod views;

pub use summary::{aggregate, percentage};

use views::{DashboardReport, MetricTile};

impl DashboardReport {
    pub fn tiles(&self) -> Vec<MetricTile> {
        tiles::metric_tiles(self)
    }
}
