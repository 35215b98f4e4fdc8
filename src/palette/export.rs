//! Palette and color chip image export.
//!
//! Plans describe the image; `render` paints swatches and stamps the label
//! and watermark text with the bundled DejaVu Sans face.

use crate::config::{
    Language, CHIP_HEIGHT, CHIP_LABEL_BASELINES, CHIP_LABEL_SIZE, CHIP_NAME_BASELINE,
    CHIP_NAME_SIZE, CHIP_TEXT_HEIGHT, CHIP_TEXT_PADDING, CHIP_WATERMARK, CHIP_WATERMARK_SIZE,
    CHIP_WIDTH, PALETTE_FILE_NAME, PALETTE_PADDING, PALETTE_SCALE, PALETTE_SWATCH_SIZE,
    PALETTE_WATERMARK, PALETTE_WATERMARK_SIZE, WATERMARK_MARGIN,
};
use crate::error::Result;
use crate::model::{ColorRecord, HexColor};
use ab_glyph::{Font, FontRef, PxScale, ScaleFont};
use image::{ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};
use serde::Serialize;
use std::path::Path;
use tracing::info;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

// DejaVu Sans has no Hangul; Korean names draw as the font's missing-glyph box.
static LABEL_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// Exported palette image description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteExport {
    /// Selected colors, left to right.
    pub colors: Vec<HexColor>,
    /// Attribution line, stamped bottom right.
    pub watermark: String,
    /// Swatch side before scaling.
    pub swatch_size: u32,
    /// Border before scaling.
    pub padding: u32,
    pub scale: u32,
    /// Suggested download name.
    pub file_name: String,
}

impl PaletteExport {
    pub fn new(colors: Vec<HexColor>) -> Self {
        Self {
            colors,
            watermark: PALETTE_WATERMARK.to_string(),
            swatch_size: PALETTE_SWATCH_SIZE,
            padding: PALETTE_PADDING,
            scale: PALETTE_SCALE,
            file_name: PALETTE_FILE_NAME.to_string(),
        }
    }

    /// Output size in pixels, scale applied.
    pub fn dimensions(&self) -> (u32, u32) {
        let count = self.colors.len() as u32;
        let width = self.padding * 2 + self.swatch_size * count;
        let height = self.padding * 2 + self.swatch_size;
        (width * self.scale, height * self.scale)
    }

    /// Paint the swatches on a transparent canvas and stamp the watermark
    /// in the bottom padding.
    pub fn render(&self) -> Result<RgbaImage> {
        let font = label_font()?;
        let (width, height) = self.dimensions();
        let mut img = RgbaImage::from_pixel(width, height, TRANSPARENT);

        let side = self.swatch_size * self.scale;
        let top = self.padding * self.scale;
        for (i, color) in self.colors.iter().enumerate() {
            let left = top + side * i as u32;
            fill_rect(&mut img, left, top, side, side, Rgba(color.rgb().to_rgba()));
        }

        let size = PALETTE_WATERMARK_SIZE * self.scale as f32;
        let margin = (WATERMARK_MARGIN * self.scale) as i32;
        let bottom = height as i32 - margin;
        draw_right(
            &mut img,
            &font,
            size,
            width as i32 - margin,
            baseline_above(&font, size, bottom),
            &self.watermark,
        );
        Ok(img)
    }

    /// Write the PNG to `path`.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.render()?.save_with_format(path, ImageFormat::Png)?;
        info!("Saved palette with {} color(s) to {}", self.colors.len(), path.display());
        Ok(())
    }
}

/// Downloadable color chip: a swatch above a white label band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorChip {
    pub name: String,
    pub hex: HexColor,
    pub rgb_code: String,
    pub pantone_code: String,
    pub watermark: String,
    pub width: u32,
    pub swatch_height: u32,
    pub text_height: u32,
}

impl ColorChip {
    /// Chip for a catalog record, named in the given language.
    pub fn for_record(record: &ColorRecord, language: Language) -> Self {
        Self {
            name: record.display_name(language).to_string(),
            hex: record.hex_code.clone(),
            rgb_code: record.rgb_code.clone(),
            pantone_code: record.pantone_display().to_string(),
            watermark: CHIP_WATERMARK.to_string(),
            width: CHIP_WIDTH,
            swatch_height: CHIP_HEIGHT,
            text_height: CHIP_TEXT_HEIGHT,
        }
    }

    /// Label lines under the name, top to bottom.
    pub fn label_lines(&self) -> Vec<String> {
        vec![
            format!("RGB: {}", self.rgb_code),
            format!("HEX: {}", self.hex),
            format!("Pantone: {}", self.pantone_code),
        ]
    }

    /// Suggested download name, with path separators replaced.
    pub fn file_name(&self) -> String {
        let safe: String = self
            .name
            .chars()
            .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
            .collect();
        format!("{}_color_chip.png", safe)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.swatch_height + self.text_height)
    }

    /// Paint the swatch, then write the name, label lines and watermark
    /// into the band below it.
    pub fn render(&self) -> Result<RgbaImage> {
        let font = label_font()?;
        let (width, height) = self.dimensions();
        let mut img = RgbaImage::from_pixel(width, height, WHITE);
        fill_rect(
            &mut img,
            0,
            0,
            self.width,
            self.swatch_height,
            Rgba(self.hex.rgb().to_rgba()),
        );

        let left = CHIP_TEXT_PADDING as i32;
        let band = self.swatch_height as i32;
        draw_left(
            &mut img,
            &font,
            CHIP_NAME_SIZE,
            left,
            band + CHIP_NAME_BASELINE as i32,
            &self.name,
        );
        for (line, offset) in self.label_lines().iter().zip(CHIP_LABEL_BASELINES) {
            draw_left(&mut img, &font, CHIP_LABEL_SIZE, left, band + offset as i32, line);
        }
        draw_right(
            &mut img,
            &font,
            CHIP_WATERMARK_SIZE,
            (self.width - CHIP_TEXT_PADDING) as i32,
            height as i32 - WATERMARK_MARGIN as i32,
            &self.watermark,
        );
        Ok(img)
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.render()?.save_with_format(path, ImageFormat::Png)?;
        info!("Saved color chip '{}' to {}", self.name, path.display());
        Ok(())
    }
}

fn label_font() -> Result<FontRef<'static>> {
    Ok(FontRef::try_from_slice(LABEL_FONT)?)
}

fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, color: Rgba<u8>) {
    let x_end = (x + w).min(img.width());
    let y_end = (y + h).min(img.height());
    for py in y..y_end {
        for px in x..x_end {
            img.put_pixel(px, py, color);
        }
    }
}

/// Baseline that keeps descenders just above `bottom`.
fn baseline_above(font: &FontRef<'_>, size: f32, bottom: i32) -> i32 {
    bottom + font.as_scaled(PxScale::from(size)).descent().round() as i32
}

/// Draw `text` starting at `x`, sitting on `baseline`.
fn draw_left(img: &mut RgbaImage, font: &FontRef<'_>, size: f32, x: i32, baseline: i32, text: &str) {
    let scale = PxScale::from(size);
    // imageproc positions text by the top of its line box
    let top = baseline - font.as_scaled(scale).ascent().round() as i32;
    draw_text_mut(img, BLACK, x, top, scale, font, text);
}

/// Draw `text` ending at `right`, sitting on `baseline`. Text wider than the
/// canvas is clipped on the left.
fn draw_right(
    img: &mut RgbaImage,
    font: &FontRef<'_>,
    size: f32,
    right: i32,
    baseline: i32,
    text: &str,
) {
    let (text_width, _) = text_size(PxScale::from(size), font, text);
    draw_left(img, font, size, right - text_width as i32, baseline, text);
}
