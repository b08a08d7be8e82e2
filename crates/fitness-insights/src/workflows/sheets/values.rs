use super::parser::ColumnIndex;
use super::SheetImportError;
use crate::workflows::candidates::CandidateRecord;
use serde::Deserialize;

/// Body of `GET /v4/spreadsheets/{id}/values/{range}`.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// The first row holds the headers; trailing empty cells are omitted by the
/// API, so short rows read their missing cells as empty.
pub(crate) fn parse_value_range(body: &str) -> Result<Vec<CandidateRecord>, SheetImportError> {
    let range: ValueRange = serde_json::from_str(body)?;
    let mut rows = range.values.into_iter();

    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };
    let headers: Vec<String> = header
        .iter()
        .map(|value| value.trim().to_lowercase())
        .collect();
    let columns = ColumnIndex::from_header(&headers)?;

    Ok(rows
        .filter_map(|row| columns.record(|position| row.get(position).cloned().unwrap_or_default()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_range_maps_rows_by_header() {
        let body = r#"{
            "range": "Sheet1!A1:C4",
            "majorDimension": "ROWS",
            "values": [
                [" Branch ", "GENDER", "Status"],
                ["Pilot", "Male", "tr"],
                ["ATC", "Female"],
                ["NAOO", "Female", "FIT"]
            ]
        }"#;

        let records = parse_value_range(body).expect("parse");
        assert_eq!(
            records,
            vec![
                CandidateRecord::new("Pilot", "Male", "TR"),
                CandidateRecord::new("NAOO", "Female", "FIT"),
            ]
        );
    }

    #[test]
    fn missing_values_means_empty_sheet() {
        let records = parse_value_range(r#"{"range": "Sheet1!A:C"}"#).expect("parse");
        assert!(records.is_empty());
    }

    #[test]
    fn malformed_body_is_a_values_error() {
        let error = parse_value_range("<html>quota exceeded</html>").expect_err("invalid json");
        assert!(matches!(error, SheetImportError::Values(_)));
    }
}
