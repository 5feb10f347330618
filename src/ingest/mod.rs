//! Turning uploaded files into tables.
//!
//! Parsing is pluggable through [`TableSource`]. The store only needs a
//! [`Table`] back; how the bytes were laid out is the source's concern.

pub mod naming;
pub mod json;
pub mod delimited;

use std::path::Path;

use crate::error::Result;
use crate::tabular::table::Table;

pub use naming::table_key;
pub use json::JsonRecordsSource;
pub use delimited::DelimitedSource;

/// Something that can turn raw file bytes into a table.
pub trait TableSource: Send + Sync {
    /// Parse `bytes` into a table called `name`.
    fn load(&self, name: &str, bytes: &[u8]) -> Result<Table>;

    /// Read a file and parse it.
    fn load_path(&self, name: &str, path: &Path) -> Result<Table> {
        let bytes = std::fs::read(path)?;
        self.load(name, &bytes)
    }
}

/// Pick a source from a file name's extension.
///
/// `.json` files are JSON records, `.tsv` files are tab-separated and `.csv`
/// or `.txt` files use `delimiter`. Returns `None` for anything else.
pub fn source_for(filename: &str, delimiter: char) -> Option<Box<dyn TableSource>> {
    let extension = Path::new(filename)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();

    let source: Box<dyn TableSource> = match extension.as_str() {
        "json" => Box::new(JsonRecordsSource),
        "tsv" => Box::new(DelimitedSource::new('\t')),
        "csv" | "txt" => Box::new(DelimitedSource::new(delimiter)),
        _ => return None,
    };
    Some(source)
}
