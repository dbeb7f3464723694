use std::fs;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};

use crate::error::Result;
use crate::flatten::Table;
use crate::io::encoding;

/// Serialises the table to the given path as delimited text.
///
/// Quoting follows RFC 4180: a cell containing the delimiter, a quote, or a
/// newline is quoted and embedded quotes are doubled. The writer owns its
/// `\n` line terminators, so platform newline translation never introduces
/// blank interstitial lines. Returns the number of data rows written.
///
/// The table is rendered in memory and written in one call; a failed write
/// can leave a partial file behind.
pub fn write_table(
    path: &Path,
    table: &Table,
    delimiter: u8,
    output_encoding: &'static Encoding,
) -> Result<usize> {
    if table.columns.is_empty() {
        fs::write(path, "")?;
        return Ok(0);
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    let buffer = writer.into_inner().map_err(|error| error.into_error())?;

    if output_encoding == UTF_8 {
        fs::write(path, &buffer)?;
    } else {
        let text = String::from_utf8_lossy(&buffer);
        fs::write(path, encoding::encode(&text, output_encoding))?;
    }

    Ok(table.rows.len())
}
