use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::error::{ConvertError, Result};
use crate::flatten;
use crate::io::{csv_write, encoding, json_read};

/// Options controlling a single conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Explicit column order. Disables inference when present and non-empty.
    pub fields: Option<Vec<String>>,
    /// Text encoding label used for both reading and writing.
    pub encoding: String,
    /// Field separator for the output table.
    pub delimiter: char,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            fields: None,
            encoding: "utf-8".to_string(),
            delimiter: ',',
        }
    }
}

/// Outcome of a conversion run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvertSummary {
    /// Path of the written table.
    pub output: PathBuf,
    /// Number of data rows written.
    pub rows: usize,
    /// Number of columns in the header.
    pub columns: usize,
}

/// Converts a JSON document into a delimited text table.
///
/// When `output` is omitted the table is written alongside the input with a
/// `.csv` extension. An input with no records succeeds and produces an empty
/// output file.
#[instrument(level = "info", skip_all, fields(input = %input.display()))]
pub fn json_to_csv(
    input: &Path,
    output: Option<&Path>,
    options: &ConvertOptions,
) -> Result<ConvertSummary> {
    validate_options(input, options)?;
    if !input.exists() {
        return Err(ConvertError::MissingInput(input.to_path_buf()));
    }
    let text_encoding = encoding::resolve(&options.encoding)?;
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => input.with_extension("csv"),
    };

    debug!(encoding = text_encoding.name(), "reading JSON input");
    let bytes = fs::read(input)?;
    let text = encoding::decode(&bytes, text_encoding);
    let records = json_read::parse_document(&text)?;
    info!(record_count = records.len(), "normalised records from JSON source");

    let columns = flatten::resolve_columns(&records, options.fields.as_deref());
    if columns.is_empty() {
        warn!("no columns resolved; writing an empty table");
    }
    let table = flatten::build_table(&records, columns)?;
    debug!(column_count = table.columns.len(), "table constructed");

    let rows = csv_write::write_table(&output, &table, options.delimiter as u8, text_encoding)?;
    info!(
        rows,
        columns = table.columns.len(),
        output = %output.display(),
        "table written"
    );

    Ok(ConvertSummary {
        output,
        rows,
        columns: table.columns.len(),
    })
}

fn validate_options(input: &Path, options: &ConvertOptions) -> Result<()> {
    if input.as_os_str().is_empty() {
        return Err(ConvertError::Usage("input path must not be empty".into()));
    }
    if !options.delimiter.is_ascii() {
        return Err(ConvertError::Usage(format!(
            "delimiter must be a single ASCII character, got '{}'",
            options.delimiter
        )));
    }
    if let Some(fields) = &options.fields {
        if fields.iter().any(|name| name.trim().is_empty()) {
            return Err(ConvertError::Usage("field names must not be empty".into()));
        }
    }
    Ok(())
}
