//! Color dataset loader.

mod rows;
mod source;

pub use rows::*;
pub use source::{parse_catalog_file, parse_catalog_str, read_rows, SourceFormat};
