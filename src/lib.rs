//! kortone-catalog - Traditional Korean color catalog engine.
//!
//! Loads a tabular color dataset once and serves name search, RGB
//! similarity ranking, a relationship graph, a palette builder and the
//! detail/catalog/chip views of the KORtone color site.
//!
//! # Example
//!
//! ```no_run
//! use kortone_catalog::{CatalogConfig, Session};
//! use std::path::Path;
//!
//! let mut session = Session::open(Path::new("Colors.csv"), CatalogConfig::default()).unwrap();
//! for item in session.submit_search("red").unwrap() {
//!     println!("{} {}", item.hex, item.name);
//! }
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod model;
pub mod palette;
pub mod parser;
pub mod query;
pub mod session;
pub mod validation;
pub mod view;

// Re-exports for convenience
pub use config::{CatalogConfig, GraphOptions, HeaderPolicy, Language, LoaderConfig};
pub use error::{CatalogError, ErrorCode, Result};
pub use graph::{build_graph, ColorGraph};
pub use model::{Catalog, ColorRecord, HexColor, RelationKind, Rgb};
pub use palette::{ColorChip, Palette, PaletteChange, PaletteExport};
pub use parser::{parse_catalog_file, parse_catalog_str, LoadReport, SourceFormat};
pub use query::{Match, Query};
pub use session::{PendingQuery, QueryTicket, Session};
pub use validation::{validate_catalog, validate_load, ValidationResult};

/// Load a dataset file into a catalog.
///
/// Malformed rows are skipped (and logged); any failure to read or parse
/// the source is returned as a data-source error.
///
/// # Arguments
///
/// * `path` - Path to a `.csv`, `.tsv` or `.json` dataset
/// * `config` - Loader settings (row limit, header handling, list delimiter)
pub fn load_catalog(path: &std::path::Path, config: &LoaderConfig) -> Result<Catalog> {
    let report = parse_catalog_file(path, config)?;

    let validation = validate_load(&report);
    for warning in &validation.warnings {
        tracing::debug!("{}", warning);
    }

    Ok(report.catalog)
}
