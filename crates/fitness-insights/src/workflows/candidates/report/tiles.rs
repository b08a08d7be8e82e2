use super::summary::percentage;
use super::views::{DashboardReport, MetricTile};

pub(crate) fn metric_tiles(report: &DashboardReport) -> Vec<MetricTile> {
    let stats = &report.analytics;
    let total = stats.total_candidates;

    vec![
        MetricTile {
            title: "Total Candidates",
            value: total,
            subtitle: "All branches combined".to_string(),
        },
        MetricTile {
            title: "Male Candidates",
            value: stats.male_count,
            subtitle: format!("{:.1}% of total", percentage(stats.male_count, total)),
        },
        MetricTile {
            title: "Female Candidates",
            value: stats.female_count,
            subtitle: format!("{:.1}% of total", stats.female_percentage),
        },
        MetricTile {
            title: "Fit Candidates",
            value: stats.fit_count,
            subtitle: format!("{:.1}% success rate", stats.fit_percentage),
        },
        MetricTile {
            title: "Temporarily Rejected",
            value: stats.tr_count,
            subtitle: format!("{:.1}% of total", percentage(stats.tr_count, total)),
        },
        MetricTile {
            title: "Pending Review",
            value: stats.pending_count,
            subtitle: "Awaiting assessment".to_string(),
        },
        MetricTile {
            title: "Total Branches",
            value: report.branch_data.len(),
            subtitle: "Active departments".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::candidates::{aggregate, CandidateRecord};

    #[test]
    fn tiles_describe_shares_of_total() {
        let report = aggregate(&[
            CandidateRecord::new("ATC", "Female", "FIT"),
            CandidateRecord::new("Pilot", "Male", "TR"),
            CandidateRecord::new("Pilot", "Female", "FIT"),
        ]);

        let tiles = metric_tiles(&report);
        assert_eq!(tiles.len(), 7);
        assert_eq!(tiles[1].subtitle, "33.3% of total");
        assert_eq!(tiles[2].subtitle, "66.7% of total");
        assert_eq!(tiles[3].subtitle, "66.7% success rate");
        assert_eq!(tiles[4].value, 1);
        assert_eq!(tiles[6].value, 2);
    }

    #[test]
    fn tiles_for_empty_report_avoid_division_by_zero() {
        let tiles = metric_tiles(&aggregate(&[]));
        assert!(tiles.iter().all(|tile| tile.value == 0));
        assert_eq!(tiles[1].subtitle, "0.0% of total");
        assert_eq!(tiles[3].subtitle, "0.0% success rate");
    }
}
