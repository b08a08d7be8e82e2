use super::normalizer::{normalize_cell, normalize_header};
use super::SheetImportError;
use crate::workflows::candidates::CandidateRecord;
use std::io::Read;

pub(crate) const REQUIRED_COLUMNS: [&str; 3] = ["branch", "gender", "status"];

/// Positions of the columns a candidate row is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColumnIndex {
    branch: usize,
    gender: usize,
    status: usize,
}

impl ColumnIndex {
    /// Expects already-normalized header names. When a name repeats, the
    /// right-most column wins.
    pub(crate) fn from_header(headers: &[String]) -> Result<Self, SheetImportError> {
        let find = |name: &str| headers.iter().rposition(|header| header == name);

        match (find("branch"), find("gender"), find("status")) {
            (Some(branch), Some(gender), Some(status)) => Ok(Self {
                branch,
                gender,
                status,
            }),
            _ => Err(SheetImportError::MissingColumns(
                REQUIRED_COLUMNS
                    .into_iter()
                    .filter(|name| !headers.iter().any(|header| header == name))
                    .collect(),
            )),
        }
    }

    pub(crate) fn record<F>(&self, cell: F) -> Option<CandidateRecord>
    where
        F: Fn(usize) -> String,
    {
        CandidateRecord::from_fields(&cell(self.branch), &cell(self.gender), &cell(self.status))
    }
}

/// Reads a sheet export with a naive comma split: quotes are stripped, never
/// honored, so a quoted field containing a comma is split in two.
pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<CandidateRecord>, SheetImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut columns: Option<ColumnIndex> = None;
    let mut records = Vec::new();

    for row in csv_reader.records() {
        let row = row?;
        if row.len() == 1 && row[0].trim().is_empty() {
            continue;
        }

        let Some(index) = columns else {
            let headers: Vec<String> = row.iter().map(normalize_header).collect();
            columns = Some(ColumnIndex::from_header(&headers)?);
            continue;
        };

        let cell = |position: usize| row.get(position).map(normalize_cell).unwrap_or_default();
        if let Some(record) = index.record(cell) {
            records.push(record);
        }
    }

    Ok(records)
}
