use super::super::domain::{CandidateRecord, FitnessStatus, Gender};
use super::views::{BranchSummary, CategorySlice, DashboardReport, OverallStats};
use std::collections::HashMap;

#[derive(Debug, Default, Clone, Copy)]
struct GenderCounts {
    male: usize,
    female: usize,
}

#[derive(Debug, Default, Clone, Copy)]
struct StatusCounts {
    fit: usize,
    temporarily_rejected: usize,
    pending: usize,
}

impl StatusCounts {
    fn get(&self, status: FitnessStatus) -> usize {
        match status {
            FitnessStatus::Fit => self.fit,
            FitnessStatus::TemporarilyRejected => self.temporarily_rejected,
            FitnessStatus::Pending => self.pending,
            FitnessStatus::Unrecognized => 0,
        }
    }
}

/// Branch summaries in first-seen order, indexed by exact branch label.
#[derive(Debug, Default)]
struct BranchTally {
    index: HashMap<String, usize>,
    branches: Vec<BranchSummary>,
}

impl BranchTally {
    fn entry(&mut self, name: &str) -> &mut BranchSummary {
        let slot = match self.index.get(name) {
            Some(slot) => *slot,
            None => {
                let slot = self.branches.len();
                self.index.insert(name.to_string(), slot);
                self.branches.push(BranchSummary::empty(name));
                slot
            }
        };
        &mut self.branches[slot]
    }

    fn into_sorted(self) -> Vec<BranchSummary> {
        let mut branches = self.branches;
        // stable: equal totals keep first-seen order
        branches.sort_by(|a, b| b.total.cmp(&a.total));
        branches
    }
}

/// Derives every dashboard dataset from `records` in a single pass.
///
/// Records whose gender is neither `Male` nor `Female` count toward
/// `total_candidates` and the status tallies but are left out of the branch
/// breakdown, so `BranchSummary::total` is always the sum of its four buckets.
pub fn aggregate(records: &[CandidateRecord]) -> DashboardReport {
    let mut genders = GenderCounts::default();
    let mut statuses = StatusCounts::default();
    let mut tally = BranchTally::default();

    for record in records {
        let gender = record.gender_bucket();
        let status = record.fitness();

        match gender {
            Gender::Male => genders.male += 1,
            Gender::Female => genders.female += 1,
            Gender::Unrecognized => {}
        }

        match status {
            FitnessStatus::Fit => statuses.fit += 1,
            FitnessStatus::TemporarilyRejected => statuses.temporarily_rejected += 1,
            FitnessStatus::Pending => statuses.pending += 1,
            FitnessStatus::Unrecognized => {}
        }

        if gender == Gender::Unrecognized {
            continue;
        }

        tally_candidate(tally.entry(&record.branch), gender, status.is_fit());
    }

    let gender_data = Gender::ordered()
        .into_iter()
        .map(|gender| CategorySlice {
            name: gender.label(),
            value: match gender {
                Gender::Male => genders.male,
                Gender::Female => genders.female,
                Gender::Unrecognized => 0,
            },
        })
        .collect();

    let status_data = FitnessStatus::ordered()
        .into_iter()
        .map(|status| CategorySlice {
            name: status.label(),
            value: statuses.get(status),
        })
        .filter(|slice| slice.value > 0)
        .collect();

    let total_candidates = records.len();

    DashboardReport {
        branch_data: tally.into_sorted(),
        gender_data,
        status_data,
        analytics: OverallStats {
            total_candidates,
            male_count: genders.male,
            female_count: genders.female,
            fit_count: statuses.fit,
            tr_count: statuses.temporarily_rejected,
            pending_count: statuses.pending,
            fit_percentage: percentage(statuses.fit, total_candidates),
            female_percentage: percentage(genders.female, total_candidates),
        },
    }
}

fn tally_candidate(branch: &mut BranchSummary, gender: Gender, fit: bool) {
    let bucket = match (gender, fit) {
        (Gender::Male, true) => &mut branch.male_fit,
        (Gender::Male, false) => &mut branch.male_unfit,
        (Gender::Female, true) => &mut branch.female_fit,
        (Gender::Female, false) => &mut branch.female_unfit,
        (Gender::Unrecognized, _) => return,
    };
    *bucket += 1;
    branch.total += 1;
}

/// `count / total * 100` rounded to one decimal place; `0.0` when `total` is zero.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }

    (count as f64 * 1000.0 / total as f64).round() / 10.0
}
