//! Data model types for the color catalog.

mod catalog;
mod color;
mod record;

pub use catalog::{Catalog, DuplicateName, RelationKind, UnresolvedReference};
pub use color::{HexColor, Rgb};
pub use record::ColorRecord;
