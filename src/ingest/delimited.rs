//! Loader for delimited text exports (CSV, TSV).

use crate::error::{Error, Result};
use crate::ingest::TableSource;
use crate::tabular::table::{Table, TableBuilder};
use crate::tabular::value::Value;

/// Loads delimited text such as a spreadsheet's CSV export.
///
/// Fields may be quoted with `"`; a doubled quote inside a quoted field is a
/// literal quote. Lines end with LF or CRLF and blank lines are skipped.
/// Cell types are inferred: empty cells are null, `true`/`false` in any case
/// are booleans, then integers, then floats, otherwise strings.
#[derive(Debug, Clone, Copy)]
pub struct DelimitedSource {
    /// Field separator
    pub delimiter: char,

    /// Whether the first record names the columns
    pub has_header: bool,
}

impl Default for DelimitedSource {
    fn default() -> Self {
        DelimitedSource {
            delimiter: ',',
            has_header: true,
        }
    }
}

impl DelimitedSource {
    /// Create a source with the given delimiter and a header row.
    pub fn new(delimiter: char) -> Self {
        DelimitedSource {
            delimiter,
            has_header: true,
        }
    }

    /// Set whether the first record is a header.
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }
}

impl TableSource for DelimitedSource {
    fn load(&self, name: &str, bytes: &[u8]) -> Result<Table> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| Error::Parse(format!("input is not valid UTF-8: {}", e)))?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let mut records = split_records(text, self.delimiter)?.into_iter();

        let header = if self.has_header {
            records.next().unwrap_or_default()
        } else {
            Vec::new()
        };
        let rows: Vec<Vec<String>> = records.collect();

        let width = if self.has_header {
            header.len()
        } else {
            rows.iter().map(Vec::len).max().unwrap_or(0)
        };

        let mut builder = TableBuilder::new(name, column_names(&header, width))?;
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() > width {
                return Err(Error::Parse(format!(
                    "row {} has {} fields, but the header has {}",
                    i + 1,
                    row.len(),
                    width
                )));
            }

            let mut values: Vec<Value> = row.iter().map(|cell| infer_value(cell)).collect();
            values.resize(width, Value::Null);
            builder.add_row(values)?;
        }

        let table = builder.build()?;
        tracing::debug!(
            table = name,
            rows = table.row_count(),
            columns = table.schema().field_count(),
            "loaded delimited text"
        );
        Ok(table)
    }
}

/// Name every column, filling blanks and suffixing repeats with `.N`.
fn column_names(header: &[String], width: usize) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(width);
    for i in 0..width {
        let base = match header.get(i).map(|h| h.trim()) {
            Some(h) if !h.is_empty() => h.to_string(),
            _ => format!("column_{}", i),
        };

        let mut candidate = base.clone();
        let mut n = 1;
        while names.contains(&candidate) {
            candidate = format!("{}.{}", base, n);
            n += 1;
        }
        names.push(candidate);
    }
    names
}

/// Infer a typed value from one cell.
pub fn infer_value(cell: &str) -> Value {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if let Ok(v) = trimmed.parse::<i64>() {
        return Value::Int(v);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_nan() => return Value::Null,
        Ok(v) if v.is_finite() => return Value::Float(v),
        _ => {}
    }
    Value::String(cell.to_string())
}

/// Split text into records of raw fields.
fn split_records(text: &str, delimiter: char) -> Result<Vec<Vec<String>>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut line = 1;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => {
                in_quotes = true;
                quoted = true;
            }
            c if c == delimiter => record.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                line += 1;
                finish_record(&mut records, &mut record, &mut field, quoted);
                quoted = false;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(Error::Parse(format!(
            "unterminated quoted field ending at line {}",
            line
        )));
    }
    finish_record(&mut records, &mut record, &mut field, quoted);

    Ok(records)
}

/// Close the current record. A line with no characters at all is skipped; a
/// line holding only `""` is a record with one empty field.
fn finish_record(
    records: &mut Vec<Vec<String>>,
    record: &mut Vec<String>,
    field: &mut String,
    quoted: bool,
) {
    if record.is_empty() && field.is_empty() && !quoted {
        return;
    }
    record.push(std::mem::take(field));
    records.push(std::mem::take(record));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_cell_types() {
        assert_eq!(infer_value(""), Value::Null);
        assert_eq!(infer_value("TRUE"), Value::Bool(true));
        assert_eq!(infer_value(" 42 "), Value::Int(42));
        assert_eq!(infer_value("2.50"), Value::Float(2.5));
        assert_eq!(infer_value("NaN"), Value::Null);
        assert_eq!(infer_value("Inf"), Value::String("Inf".into()));
        assert_eq!(infer_value("-infinity"), Value::String("-infinity".into()));
        assert_eq!(infer_value("Ann"), Value::String("Ann".into()));
    }

    #[test]
    fn splits_quoted_fields() {
        let records = split_records("a,\"b,c\",\"say \"\"hi\"\"\"\r\n\n1,2,3", ',').unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], vec!["a", "b,c", "say \"hi\""]);
        assert_eq!(records[1], vec!["1", "2", "3"]);
    }

    #[test]
    fn rejects_unterminated_quotes() {
        assert!(split_records("a,\"b", ',').is_err());
    }

    #[test]
    fn names_blank_and_repeated_headers() {
        let header = vec!["id".to_string(), "".to_string(), "id".to_string()];
        assert_eq!(column_names(&header, 4), vec!["id", "column_1", "id.1", "column_3"]);
    }
}
