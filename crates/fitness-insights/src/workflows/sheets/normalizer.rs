/// Strips every double quote and surrounding whitespace from a CSV cell.
pub(crate) fn normalize_cell(value: &str) -> String {
    value.replace('"', "").trim().to_string()
}

/// Header cells additionally lose byte-order marks and are lower-cased.
pub(crate) fn normalize_header(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    normalize_cell(&cleaned).to_lowercase()
}
