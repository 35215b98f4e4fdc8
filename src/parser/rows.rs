//! Row-level parsing: table cells to color records.

use crate::config::{HeaderPolicy, LoaderConfig};
use crate::error::{CatalogError, Result};
use crate::model::{Catalog, ColorRecord, HexColor};
use tracing::{debug, info, warn};

/// Column positions in the source table.
pub const COL_NAME: usize = 0;
pub const COL_ALTERNATIVE_NAMES: usize = 1;
pub const COL_DESCRIPTION: usize = 2;
pub const COL_HEX: usize = 3;
pub const COL_RGB: usize = 4;
pub const COL_PANTONE: usize = 5;
pub const COL_SIMILAR: usize = 6;
pub const COL_USED_WITH: usize = 7;
pub const COL_ENGLISH_NAME: usize = 8;

/// Outcome of a load: the catalog plus the rows that were skipped.
#[derive(Debug)]
pub struct LoadReport {
    pub catalog: Catalog,
    /// One `MalformedRecord` per rejected row.
    pub skipped: Vec<CatalogError>,
    /// Whether row 0 was treated as a header.
    pub header_skipped: bool,
}

/// Get a trimmed cell; missing cells read as empty.
pub fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(|s| s.trim()).unwrap_or("")
}

/// Get a trimmed cell, `None` when empty.
pub fn optional_cell(row: &[String], index: usize) -> Option<String> {
    let value = cell(row, index);
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Split a multi-valued cell. Entries are trimmed and empty entries dropped.
pub fn split_list(value: &str, delimiter: char) -> Vec<String> {
    value
        .split(delimiter)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Check whether every cell in a row is blank.
pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|c| c.trim().is_empty())
}

/// Check whether a row looks like a column header.
pub fn is_header_row(row: &[String]) -> bool {
    let hex = cell(row, COL_HEX);
    !HexColor::is_valid(hex) && hex.to_lowercase().contains("hex")
}

/// Parse one data row. `id` is provisional; the catalog renumbers.
pub fn parse_row(row: &[String], row_index: usize, delimiter: char) -> Result<ColorRecord> {
    let hex_text = cell(row, COL_HEX);
    let hex_code = HexColor::parse(hex_text).map_err(|_| CatalogError::MalformedRecord {
        row: row_index,
        value: hex_text.to_string(),
    })?;

    let mut record = ColorRecord::new(row_index, cell(row, COL_NAME), hex_code);
    record.source_row = row_index;
    record.english_name = optional_cell(row, COL_ENGLISH_NAME);
    record.alternative_names = split_list(cell(row, COL_ALTERNATIVE_NAMES), delimiter);
    record.description = cell(row, COL_DESCRIPTION).to_string();
    record.rgb_code = cell(row, COL_RGB).to_string();
    record.pantone_code = optional_cell(row, COL_PANTONE);
    record.similar_colors = split_list(cell(row, COL_SIMILAR), delimiter);
    record.used_with = split_list(cell(row, COL_USED_WITH), delimiter);

    Ok(record)
}

/// Parse a whole table into a catalog.
///
/// Malformed rows are skipped and reported; they never fail the load.
pub fn parse_rows(rows: &[Vec<String>], config: &LoaderConfig) -> LoadReport {
    let header_skipped = match config.header {
        HeaderPolicy::Present => !rows.is_empty(),
        HeaderPolicy::Absent => false,
        HeaderPolicy::Detect => rows.first().is_some_and(|r| is_header_row(r)),
    };
    let first_data_row = usize::from(header_skipped);
    if header_skipped {
        debug!("Treating row 0 as header");
    }

    let limit = config.row_limit.unwrap_or(usize::MAX);
    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for (row_index, row) in rows.iter().enumerate().skip(first_data_row).take(limit) {
        if is_blank_row(row) {
            continue;
        }
        match parse_row(row, row_index, config.list_delimiter) {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!("Skipping row {}: {}", row_index, err);
                skipped.push(err);
            }
        }
    }

    let catalog = Catalog::from_records(records);
    info!(
        "Loaded {} color(s), skipped {} malformed row(s)",
        catalog.len(),
        skipped.len()
    );

    LoadReport {
        catalog,
        skipped,
        header_skipped,
    }
}
