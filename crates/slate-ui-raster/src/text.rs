//! Text measurement and rasterization seam.
//!
//! Font shaping is an external concern: the widget layer only needs to know
//! how big a string will be and to obtain a glyph surface for it. Both go
//! through the [`TextEngine`] trait so a real shaping backend can be plugged
//! in without touching widget code.
//!
//! The crate ships [`MonoTextEngine`], a deterministic fixed-advance engine
//! that draws each glyph as a filled cell. It exists so the incremental
//! repaint machinery can be exercised and byte-compared in tests; it is not
//! a typesetter.

use crate::surface::Surface;
use crate::types::{Color, Rect, Size};

/// Typeface family selector.
///
/// Engines that do not distinguish families may ignore this.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    /// The engine's default sans-serif face.
    #[default]
    SansSerif,
    /// The engine's default serif face.
    Serif,
    /// The engine's default monospace face.
    Monospace,
    /// A named face resolved by the engine.
    Named(String),
}

/// A font handle: typeface plus rendering flags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontSpec {
    /// Typeface family.
    pub family: FontFamily,
    /// Nominal glyph height in pixels.
    pub size_px: u32,
    /// Render a heavier face.
    pub bold: bool,
    /// Draw an underline across the rendered text.
    pub underline: bool,
}

impl FontSpec {
    /// Create a font handle with the given pixel size.
    pub fn new(family: FontFamily, size_px: u32) -> Self {
        Self {
            family,
            size_px,
            bold: false,
            underline: false,
        }
    }

    /// Set the bold flag using builder pattern.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set the underline flag using builder pattern.
    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(FontFamily::SansSerif, 20)
    }
}

/// Measures and rasterizes text.
///
/// Implementations must be consistent: the surface returned by
/// [`render`](Self::render) has exactly the dimensions reported by
/// [`measure`](Self::measure) (clamped to at least one pixel each way), for
/// the same font and string. The widget layer relies on this to erase old
/// glyphs by their measured bounding box.
pub trait TextEngine: Send + Sync {
    /// Bounding box of `text` rendered with `font`.
    fn measure(&self, font: &FontSpec, text: &str) -> Size;

    /// Rasterize `text` into a transparent-background RGBA surface.
    fn render(&self, font: &FontSpec, text: &str, color: Color) -> Surface;
}

/// Deterministic fixed-advance text engine.
///
/// Every glyph occupies a fixed-width cell; printable glyphs are drawn as
/// filled blocks with a one-pixel gap, whitespace advances without ink, and
/// the underline flag fills the bottom row. Output depends only on the font
/// spec and the string, which makes renders byte-comparable.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonoTextEngine;

impl MonoTextEngine {
    /// Horizontal advance per glyph cell.
    fn advance(font: &FontSpec) -> u32 {
        let base = (font.size_px * 3 / 5).max(2);
        if font.bold { base + 1 } else { base }
    }
}

impl TextEngine for MonoTextEngine {
    fn measure(&self, font: &FontSpec, text: &str) -> Size {
        let glyphs = text.chars().count() as u32;
        if glyphs == 0 {
            return Size::ZERO;
        }
        Size::new(glyphs * Self::advance(font), font.size_px)
    }

    fn render(&self, font: &FontSpec, text: &str, color: Color) -> Surface {
        let measured = self.measure(font, text);
        let mut surf = Surface::new(measured.width.max(1), measured.height.max(1))
            .expect("clamped dimensions are non-zero");

        let advance = Self::advance(font);
        let body_height = font.size_px.saturating_sub(2);
        for (index, glyph) in text.chars().enumerate() {
            if glyph.is_whitespace() {
                continue;
            }
            let x = index as u32 * advance;
            surf.fill_rect(
                Rect::new(x as i32, 0, advance.saturating_sub(1).max(1), body_height),
                color,
            );
        }

        if font.underline && measured.height > 0 {
            surf.fill_rect(
                Rect::new(0, measured.height as i32 - 1, measured.width, 1),
                color,
            );
        }

        surf
    }
}
