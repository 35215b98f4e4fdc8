//! Error types for catalog loading, queries and palette export.

use std::path::PathBuf;
use thiserror::Error;

/// Error categories, used by front ends to decide how to surface a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Dataset unreachable or unparseable (-1). Fatal to dependent views.
    DataSource = -1,
    /// A row failed the hex-format check and was skipped (-2).
    MalformedRecord = -2,
    /// Export requested with nothing selected (100).
    EmptySelection = 100,
    /// User input could not be interpreted (101).
    InvalidInput = 101,
    /// Palette or chip image could not be produced (200).
    Render = 200,
}

/// Main error type for the catalog engine.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Dataset not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty dataset: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Unsupported dataset format '{extension}' (expected csv, tsv or json)")]
    UnsupportedFormat { extension: String },

    #[error("Parse error at row {row}: {message}")]
    ParseError { row: usize, message: String },

    #[error("Malformed record at row {row}: invalid hex code '{value}'")]
    MalformedRecord { row: usize, value: String },

    #[error("Invalid hex color '{value}': expected #RRGGBB")]
    InvalidHex { value: String },

    #[error("No color with id {id}")]
    UnknownColor { id: usize },

    #[error("Palette is empty: select at least one color before exporting")]
    EmptySelection,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Font error: {0}")]
    Font(#[from] ab_glyph::InvalidFont),
}

impl CatalogError {
    /// Get the error category for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::FileNotFound { .. } => ErrorCode::DataSource,
            CatalogError::EmptyFile { .. } => ErrorCode::DataSource,
            CatalogError::UnsupportedFormat { .. } => ErrorCode::DataSource,
            CatalogError::ParseError { .. } => ErrorCode::DataSource,
            CatalogError::MalformedRecord { .. } => ErrorCode::MalformedRecord,
            CatalogError::InvalidHex { .. } => ErrorCode::InvalidInput,
            CatalogError::UnknownColor { .. } => ErrorCode::InvalidInput,
            CatalogError::EmptySelection => ErrorCode::EmptySelection,
            CatalogError::Io(_) => ErrorCode::DataSource,
            CatalogError::Csv(_) => ErrorCode::DataSource,
            CatalogError::Json(_) => ErrorCode::DataSource,
            CatalogError::Image(_) => ErrorCode::Render,
            CatalogError::Font(_) => ErrorCode::Render,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }

    /// Whether this error means the dataset itself is unusable.
    pub fn is_data_source(&self) -> bool {
        self.code() == ErrorCode::DataSource
    }
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_source_classification() {
        let err = CatalogError::FileNotFound {
            path: PathBuf::from("Colors.csv"),
        };
        assert!(err.is_data_source());
        assert_eq!(err.code_value(), -1);

        let err = CatalogError::MalformedRecord {
            row: 3,
            value: "#12".into(),
        };
        assert!(!err.is_data_source());
        assert_eq!(err.code(), ErrorCode::MalformedRecord);
    }

    #[test]
    fn test_empty_selection_message() {
        let err = CatalogError::EmptySelection;
        assert_eq!(err.code_value(), 100);
        assert!(err.to_string().contains("Palette is empty"));
    }

    #[test]
    fn test_font_error_is_render() {
        let err: CatalogError = ab_glyph::FontRef::try_from_slice(&[0u8; 4])
            .unwrap_err()
            .into();
        assert_eq!(err.code(), ErrorCode::Render);
        assert!(!err.is_data_source());
    }
}
