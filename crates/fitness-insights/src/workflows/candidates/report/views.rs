use serde::Serialize;

/// Per-branch counts feeding the stacked bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchSummary {
    pub name: String,
    pub male_fit: usize,
    pub female_fit: usize,
    pub male_unfit: usize,
    pub female_unfit: usize,
    pub total: usize,
}

impl BranchSummary {
    pub(crate) fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            male_fit: 0,
            female_fit: 0,
            male_unfit: 0,
            female_unfit: 0,
            total: 0,
        }
    }

    pub fn fit(&self) -> usize {
        self.male_fit + self.female_fit
    }

    pub fn unfit(&self) -> usize {
        self.male_unfit + self.female_unfit
    }
}

/// One pie slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySlice {
    pub name: &'static str,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub total_candidates: usize,
    pub male_count: usize,
    pub female_count: usize,
    pub fit_count: usize,
    pub tr_count: usize,
    pub pending_count: usize,
    pub fit_percentage: f64,
    pub female_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub branch_data: Vec<BranchSummary>,
    pub gender_data: Vec<CategorySlice>,
    pub status_data: Vec<CategorySlice>,
    pub analytics: OverallStats,
}

/// Scalar tile shown above the charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricTile {
    pub title: &'static str,
    pub value: usize,
    pub subtitle: String,
}
