//! Table names derived from uploaded file names.

/// File extensions stripped from upload names.
const KNOWN_EXTENSIONS: &[&str] = &[".xlsx", ".xls", ".csv", ".tsv", ".txt", ".json"];

/// Derive the registry key for an uploaded file.
///
/// The name is lowercased, spaces become dashes and a known spreadsheet
/// extension is stripped: `"Q3 Sales.xlsx"` becomes `"q3-sales"`.
pub fn table_key(filename: &str) -> String {
    let key = filename.to_lowercase().replace(' ', "-");
    KNOWN_EXTENSIONS
        .iter()
        .find_map(|ext| key.strip_suffix(ext))
        .map(str::to_string)
        .unwrap_or(key)
}
