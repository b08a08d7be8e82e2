use crate::infra::configured_loader;
use clap::Args;
use fitness_insights::config::AppConfig;
use fitness_insights::error::AppError;
use fitness_insights::telemetry;
use fitness_insights::workflows::candidates::{
    aggregate, sample_records, DashboardReport, DashboardResponse,
};
use fitness_insights::workflows::sheets::{DataSource, LoadedDataset, SheetImporter};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Aggregate a local CSV export instead of the configured sheet
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Aggregate the built-in sample dataset
    #[arg(long, conflicts_with = "csv")]
    pub(crate) sample: bool,
    /// Print the chart payload as JSON instead of tables
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs { csv, sample, json } = args;

    let dataset = if sample {
        LoadedDataset {
            records: sample_records(),
            source: DataSource::Fallback,
        }
    } else if let Some(path) = csv {
        LoadedDataset {
            records: SheetImporter::from_path(path)?,
            source: DataSource::Supplied,
        }
    } else {
        let config = AppConfig::load()?;
        telemetry::init(&config.telemetry)?;
        configured_loader(&config.sheets)?.load().await?
    };

    let response = DashboardResponse::new(dataset.source, aggregate(&dataset.records));
    if json {
        let payload = serde_json::to_string_pretty(&response)
            .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
        println!("{payload}");
    } else {
        println!("{}", render_dashboard(&response));
    }

    Ok(())
}

fn data_source_label(source: DataSource) -> &'static str {
    match source {
        DataSource::Sheet => "Live sheet",
        DataSource::Fallback => "Sample dataset (sheet unavailable or not requested)",
        DataSource::Supplied => "Local CSV export",
    }
}

pub(crate) fn render_dashboard(response: &DashboardResponse) -> String {
    let mut out = String::new();
    out.push_str("Candidate fitness dashboard\n");
    out.push_str(&format!(
        "Data source: {}\n",
        data_source_label(response.data_source)
    ));

    out.push_str("\nSummary\n");
    for tile in &response.tiles {
        out.push_str(&format!(
            "- {}: {} ({})\n",
            tile.title, tile.value, tile.subtitle
        ));
    }

    render_distributions(&response.report, &mut out);
    render_branches(&response.report, &mut out);
    out
}

fn render_distributions(report: &DashboardReport, out: &mut String) {
    out.push_str("\nGender distribution\n");
    for slice in &report.gender_data {
        out.push_str(&format!("- {}: {}\n", slice.name, slice.value));
    }

    if report.status_data.is_empty() {
        out.push_str("\nStatus distribution: none\n");
    } else {
        out.push_str("\nStatus distribution\n");
        for slice in &report.status_data {
            out.push_str(&format!("- {}: {}\n", slice.name, slice.value));
        }
    }
}

fn render_branches(report: &DashboardReport, out: &mut String) {
    if report.branch_data.is_empty() {
        out.push_str("\nBranches: none\n");
        return;
    }

    let width = report
        .branch_data
        .iter()
        .map(|branch| branch.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Branch".len());

    out.push_str("\nBranch breakdown\n");
    out.push_str(&format!(
        "{:<width$}  {:>8}  {:>10}  {:>10}  {:>12}  {:>3}  {:>5}  {:>5}\n",
        "Branch", "Male fit", "Female fit", "Male unfit", "Female unfit", "Fit", "Unfit", "Total"
    ));
    for branch in &report.branch_data {
        out.push_str(&format!(
            "{:<width$}  {:>8}  {:>10}  {:>10}  {:>12}  {:>3}  {:>5}  {:>5}\n",
            branch.name,
            branch.male_fit,
            branch.female_fit,
            branch.male_unfit,
            branch.female_unfit,
            branch.fit(),
            branch.unfit(),
            branch.total
        ));
    }
}
