//! ColorRecord - One catalog entry.

use super::{HexColor, RelationKind};
use crate::config::Language;
use serde::{Deserialize, Serialize};

/// One named color and its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRecord {
    /// Position among accepted records (0-based, contiguous).
    pub id: usize,
    /// Row index in the source table.
    pub source_row: usize,
    /// Primary display name.
    pub name: String,
    /// English display name, when the dataset carries one.
    pub english_name: Option<String>,
    /// Other names the color is known by.
    pub alternative_names: Vec<String>,
    /// Free-text description.
    pub description: String,
    /// Authoritative color value.
    pub hex_code: HexColor,
    /// Human-readable RGB text (display only).
    pub rgb_code: String,
    /// Pantone reference.
    pub pantone_code: Option<String>,
    /// Names of similar colors, as written in the source.
    pub similar_colors: Vec<String>,
    /// Names of colors this one is used with, as written in the source.
    pub used_with: Vec<String>,
    /// Resolved ids for `similar_colors`.
    pub similar_ids: Vec<usize>,
    /// Resolved ids for `used_with`.
    pub used_with_ids: Vec<usize>,
}

impl ColorRecord {
    /// Create a record with only the required fields set.
    pub fn new(id: usize, name: impl Into<String>, hex_code: HexColor) -> Self {
        Self {
            id,
            source_row: id,
            name: name.into(),
            english_name: None,
            alternative_names: Vec::new(),
            description: String::new(),
            hex_code,
            rgb_code: String::new(),
            pantone_code: None,
            similar_colors: Vec::new(),
            used_with: Vec::new(),
            similar_ids: Vec::new(),
            used_with_ids: Vec::new(),
        }
    }

    /// Name to show for the given language; falls back to the primary name.
    pub fn display_name(&self, language: Language) -> &str {
        match (language, &self.english_name) {
            (Language::English, Some(name)) => name,
            _ => &self.name,
        }
    }

    /// Case-insensitive substring match on the name or any alternative name.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_term(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .alternative_names
                .iter()
                .any(|alt| alt.to_lowercase().contains(needle))
    }

    /// Resolved ids for one relation.
    pub fn related_ids(&self, relation: RelationKind) -> &[usize] {
        match relation {
            RelationKind::Similar => &self.similar_ids,
            RelationKind::UsedWith => &self.used_with_ids,
        }
    }

    /// Pantone code for display, empty when absent.
    pub fn pantone_display(&self) -> &str {
        self.pantone_code.as_deref().unwrap_or("")
    }
}
