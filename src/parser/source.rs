//! Dataset readers: file formats to rows of string cells.

use crate::config::LoaderConfig;
use crate::error::{CatalogError, Result};
use serde_json::Value;
use std::path::Path;

use super::rows::{parse_rows, LoadReport};

/// Supported dataset encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Comma-separated values.
    Csv,
    /// Tab-separated values.
    Tsv,
    /// A JSON array of row arrays, as produced by a sheet-to-rows export.
    Json,
}

impl SourceFormat {
    /// Pick a format from a file extension.
    pub fn from_extension(extension: &str) -> Result<Self> {
        match extension.to_lowercase().as_str() {
            "csv" => Ok(SourceFormat::Csv),
            "tsv" | "tab" => Ok(SourceFormat::Tsv),
            "json" => Ok(SourceFormat::Json),
            other => Err(CatalogError::UnsupportedFormat {
                extension: other.to_string(),
            }),
        }
    }

    /// Pick a format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(extension)
    }
}

/// Split dataset text into rows of cells.
pub fn read_rows(content: &str, format: SourceFormat) -> Result<Vec<Vec<String>>> {
    let content = content.trim_start_matches('\u{feff}');
    match format {
        SourceFormat::Csv => read_delimited(content, b','),
        SourceFormat::Tsv => read_delimited(content, b'\t'),
        SourceFormat::Json => read_json(content),
    }
}

fn read_delimited(content: &str, delimiter: u8) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

fn read_json(content: &str) -> Result<Vec<Vec<String>>> {
    let value: Value = serde_json::from_str(content)?;
    let Value::Array(rows) = value else {
        return Err(CatalogError::ParseError {
            row: 0,
            message: "expected a JSON array of rows".to_string(),
        });
    };

    rows.into_iter()
        .enumerate()
        .map(|(row_index, row)| match row {
            Value::Array(cells) => cells
                .into_iter()
                .map(|c| json_cell(c, row_index))
                .collect::<Result<Vec<String>>>(),
            _ => Err(CatalogError::ParseError {
                row: row_index,
                message: "expected an array of cells".to_string(),
            }),
        })
        .collect()
}

fn json_cell(value: Value, row_index: usize) -> Result<String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Array(_) | Value::Object(_) => Err(CatalogError::ParseError {
            row: row_index,
            message: "nested values are not valid cells".to_string(),
        }),
    }
}

/// Parse dataset text into a catalog.
pub fn parse_catalog_str(
    content: &str,
    format: SourceFormat,
    config: &LoaderConfig,
) -> Result<LoadReport> {
    let rows = read_rows(content, format)?;
    Ok(parse_rows(&rows, config))
}

/// Parse a dataset file into a catalog.
pub fn parse_catalog_file(path: &Path, config: &LoaderConfig) -> Result<LoadReport> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let format = SourceFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(CatalogError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    parse_catalog_str(&content, format, config)
}
