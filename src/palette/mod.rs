//! Palette assembler and image export.

mod export;
mod selection;

pub use export::{ColorChip, PaletteExport};
pub use selection::{Palette, PaletteChange};
