//! Palette - The user's ordered, deduplicated color selection.

use super::export::PaletteExport;
use crate::error::{CatalogError, Result};
use crate::model::{Catalog, HexColor};
use serde::Serialize;
use tracing::debug;

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaletteChange {
    Added,
    Removed,
}

/// Ordered set of selected colors, unique by exact hex text.
///
/// Re-add policy: a color that is removed and added again is appended at
/// the end, it does not return to its earlier position.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Palette {
    colors: Vec<HexColor>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the color if selected, otherwise append it.
    pub fn toggle(&mut self, color: HexColor) -> PaletteChange {
        if self.remove(&color) {
            PaletteChange::Removed
        } else {
            debug!("Palette: add {}", color);
            self.colors.push(color);
            PaletteChange::Added
        }
    }

    /// Append the color unless already selected. Returns whether it was added.
    pub fn add_if_absent(&mut self, color: HexColor) -> bool {
        if self.contains(&color) {
            return false;
        }
        debug!("Palette: add {}", color);
        self.colors.push(color);
        true
    }

    /// Remove the color if selected. Returns whether it was present.
    pub fn remove(&mut self, color: &HexColor) -> bool {
        match self.colors.iter().position(|c| c == color) {
            Some(index) => {
                debug!("Palette: remove {}", color);
                self.colors.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, color: &HexColor) -> bool {
        self.colors.contains(color)
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Selected colors in display order.
    pub fn colors(&self) -> &[HexColor] {
        &self.colors
    }

    /// Reorder by catalog record order. Colors unknown to the catalog follow,
    /// in their current relative order.
    pub fn sort_by_catalog(&mut self, catalog: &Catalog) {
        self.colors.sort_by_key(|c| {
            catalog
                .find_by_hex(c)
                .map(|r| r.id)
                .unwrap_or(usize::MAX)
        });
    }

    /// Describe the export image. Fails with `EmptySelection` when nothing is
    /// selected.
    pub fn export_plan(&self) -> Result<PaletteExport> {
        if self.is_empty() {
            return Err(CatalogError::EmptySelection);
        }
        Ok(PaletteExport::new(self.colors.clone()))
    }
}
