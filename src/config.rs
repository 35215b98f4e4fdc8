//! Configuration constants and settings for the catalog engine.

use serde::{Deserialize, Serialize};

/// Number of records returned by a similarity ranking.
pub const DEFAULT_TOP_N: usize = 10;

/// Separator inside multi-valued cells (alternative names, relations).
pub const LIST_DELIMITER: char = ';';

/// Attribution stamped on exported palettes.
pub const PALETTE_WATERMARK: &str = "KORtone - https://gomchiiii.github.io/KORtone_DHS207/";

/// Attribution stamped on color chips.
pub const CHIP_WATERMARK: &str = "https://gomchiiii.github.io/KORtone_DHS207/";

/// Default file name for an exported palette image.
pub const PALETTE_FILE_NAME: &str = "color_palette_result.png";

/// Side of one palette swatch, before scaling.
pub const PALETTE_SWATCH_SIZE: u32 = 50;

/// Padding around the palette swatches, before scaling.
pub const PALETTE_PADDING: u32 = 20;

/// Render scale for palette export.
pub const PALETTE_SCALE: u32 = 2;

/// Color chip swatch width.
pub const CHIP_WIDTH: u32 = 240;

/// Color chip swatch height.
pub const CHIP_HEIGHT: u32 = 240;

/// Height of the white text band under a color chip swatch.
pub const CHIP_TEXT_HEIGHT: u32 = 150;

/// Left and right margin of the chip label band.
pub const CHIP_TEXT_PADDING: u32 = 10;

/// Chip text sizes in pixels: name, label lines, watermark.
pub const CHIP_NAME_SIZE: f32 = 18.0;
pub const CHIP_LABEL_SIZE: f32 = 14.0;
pub const CHIP_WATERMARK_SIZE: f32 = 10.0;

/// Baseline offsets below the swatch: name, then one per label line.
pub const CHIP_NAME_BASELINE: u32 = 25;
pub const CHIP_LABEL_BASELINES: [u32; 3] = [40, 55, 70];

/// Palette watermark size in pixels, before scaling.
pub const PALETTE_WATERMARK_SIZE: f32 = 14.0;

/// Distance of a watermark from the bottom-right corner, before scaling.
pub const WATERMARK_MARGIN: u32 = 5;

/// Display language for color names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    Korean,
    English,
}

impl Language {
    /// Parse a language from its code (`ko`, `en`).
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ko" | "kr" | "korean" => Some(Language::Korean),
            "en" | "english" => Some(Language::English),
            _ => None,
        }
    }

    /// Two-letter language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Korean => "ko",
            Language::English => "en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// How the first row of a dataset is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeaderPolicy {
    /// Row 0 is a header when its hex cell is not a color and mentions "hex".
    #[default]
    Detect,
    /// Row 0 is always a header.
    Present,
    /// Every row is data.
    Absent,
}

impl HeaderPolicy {
    /// Parse a policy from its CLI spelling.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "detect" | "auto" => Some(HeaderPolicy::Detect),
            "present" | "yes" => Some(HeaderPolicy::Present),
            "absent" | "no" | "none" => Some(HeaderPolicy::Absent),
            _ => None,
        }
    }
}

/// Catalog loader settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Maximum number of data rows to read; `None` reads all rows.
    pub row_limit: Option<usize>,
    /// Header row handling.
    pub header: HeaderPolicy,
    /// Separator inside multi-valued cells.
    pub list_delimiter: char,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            row_limit: None,
            header: HeaderPolicy::Detect,
            list_delimiter: LIST_DELIMITER,
        }
    }
}

impl LoaderConfig {
    /// Loader settings capped at `limit` data rows.
    pub fn with_row_limit(limit: usize) -> Self {
        Self {
            row_limit: Some(limit),
            ..Default::default()
        }
    }
}

/// Which relations become graph edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphOptions {
    /// Emit an edge for every resolved `used with` entry.
    pub used_with: bool,
    /// Emit an edge for every resolved `similar to` entry.
    pub similar: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            used_with: true,
            similar: false,
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// Loader settings.
    pub loader: LoaderConfig,
    /// Similarity ranking size; zero falls back to [`DEFAULT_TOP_N`].
    pub top_n: usize,
    /// Graph edge selection.
    pub graph: GraphOptions,
    /// Initial display language.
    pub language: Language,
}

impl CatalogConfig {
    /// Create a configuration with the given loader settings.
    pub fn new(loader: LoaderConfig) -> Self {
        Self {
            loader,
            top_n: DEFAULT_TOP_N,
            ..Default::default()
        }
    }

    /// Effective similarity ranking size.
    pub fn effective_top_n(&self) -> usize {
        if self.top_n == 0 {
            DEFAULT_TOP_N
        } else {
            self.top_n
        }
    }
}
