//! CPU pixel surfaces and blit operations.
//!
//! This module provides [`Surface`], an owned pixel buffer backed by the
//! `image` crate. Surfaces are what widgets draw into and what a frame loop
//! composites onto the screen: they can be allocated blank, filled with a
//! color, decoded from a file or from memory, scaled, and blitted onto one
//! another with optional sub-rectangle sources.
//!
//! # Pixel Formats
//!
//! A surface is either [`PixelFormat::Rgb`] (opaque, preferred when
//! transparency is not needed) or [`PixelFormat::Rgba`] (alpha-capable, at a
//! small per-pixel cost). Blits from an RGBA source alpha-blend by default;
//! blits from an RGB source copy pixels directly.
//!
//! # Example
//!
//! ```
//! use slate_ui_raster::{Color, PixelFormat, Point, Surface};
//!
//! let mut dst = Surface::from_color(64, 32, Color::WHITE, PixelFormat::Rgb).unwrap();
//! let badge = Surface::from_color(8, 8, Color::RED, PixelFormat::Rgba).unwrap();
//! dst.blit(&badge, Point::new(4, 4));
//! assert_eq!(dst.pixel(5, 5), Some(Color::RED));
//! ```

use std::path::Path;

use image::imageops;
use image::{DynamicImage, GenericImage, GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};

use crate::error::{RasterError, RasterResult};
use crate::types::{Color, Point, Rect, Size};

/// Backing pixel format of a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Opaque 24-bit RGB.
    Rgb,
    /// Alpha-capable 32-bit RGBA.
    Rgba,
}

/// Resampling filter for scale operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeFilter {
    /// Nearest neighbor interpolation. Fast but pixelated.
    Nearest,
    /// Bilinear interpolation. Balanced speed and quality.
    #[default]
    Triangle,
    /// Lanczos interpolation with window size 3. High quality.
    Lanczos3,
}

impl ResizeFilter {
    fn to_image_filter(self) -> imageops::FilterType {
        match self {
            ResizeFilter::Nearest => imageops::FilterType::Nearest,
            ResizeFilter::Triangle => imageops::FilterType::Triangle,
            ResizeFilter::Lanczos3 => imageops::FilterType::Lanczos3,
        }
    }
}

/// How source pixels combine with destination pixels during a blit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Alpha blending for RGBA sources, direct copy for RGB sources.
    #[default]
    Normal,
    /// Direct replacement including the alpha channel, ignoring destination.
    Replace,
}

/// An owned pixel buffer.
///
/// The backing store is always one of the two [`PixelFormat`]s; decoded
/// images are normalized on construction. All operations clip against the
/// surface bounds rather than erroring, mirroring how a blit primitive is
/// expected to behave at screen edges.
#[derive(Clone)]
pub struct Surface {
    inner: DynamicImage,
}

impl Surface {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a new fully transparent RGBA surface.
    pub fn new(width: u32, height: u32) -> RasterResult<Self> {
        ensure_nonzero(width, height)?;
        Ok(Self {
            inner: DynamicImage::ImageRgba8(RgbaImage::new(width, height)),
        })
    }

    /// Create a surface filled with a solid color in the given format.
    pub fn from_color(
        width: u32,
        height: u32,
        color: Color,
        format: PixelFormat,
    ) -> RasterResult<Self> {
        ensure_nonzero(width, height)?;
        let inner = match format {
            PixelFormat::Rgb => {
                DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, rgb(color)))
            }
            PixelFormat::Rgba => {
                DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, rgba(color)))
            }
        };
        Ok(Self { inner })
    }

    /// Decode an image file into a surface of the requested format.
    pub fn from_file(path: impl AsRef<Path>, format: PixelFormat) -> RasterResult<Self> {
        let img = image::open(path.as_ref())
            .map_err(|e| RasterError::ImageLoad(e.to_string()))?;
        tracing::trace!(
            target: "slate_raster::surface",
            path = %path.as_ref().display(),
            width = img.width(),
            height = img.height(),
            "decoded image"
        );
        Ok(Self::from_dynamic(img, format))
    }

    /// Decode an in-memory image into a surface of the requested format.
    pub fn from_bytes(bytes: &[u8], format: PixelFormat) -> RasterResult<Self> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| RasterError::ImageLoad(e.to_string()))?;
        Ok(Self::from_dynamic(img, format))
    }

    fn from_dynamic(img: DynamicImage, format: PixelFormat) -> Self {
        let inner = match format {
            PixelFormat::Rgb => DynamicImage::ImageRgb8(img.to_rgb8()),
            PixelFormat::Rgba => DynamicImage::ImageRgba8(img.to_rgba8()),
        };
        Self { inner }
    }

    // ========================================================================
    // Properties
    // ========================================================================

    /// Width of the surface in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Height of the surface in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Size of the surface.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Backing pixel format.
    pub fn format(&self) -> PixelFormat {
        match self.inner {
            DynamicImage::ImageRgb8(_) => PixelFormat::Rgb,
            _ => PixelFormat::Rgba,
        }
    }

    /// Check if the surface can represent transparency.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.format() == PixelFormat::Rgba
    }

    /// Read a single pixel, or `None` if out of bounds.
    ///
    /// RGB surfaces report full alpha.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let Rgba([r, g, b, a]) = self.inner.get_pixel(x, y);
        Some(Color::from_rgba8(r, g, b, a))
    }

    /// Raw pixel bytes in the backing format's layout.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }

    // ========================================================================
    // Transforms
    // ========================================================================

    /// Return a copy converted to the given pixel format.
    ///
    /// Converting RGBA to RGB discards the alpha channel.
    #[must_use]
    pub fn convert(&self, format: PixelFormat) -> Self {
        if self.format() == format {
            return self.clone();
        }
        Self::from_dynamic(self.inner.clone(), format)
    }

    /// Return a copy scaled to exactly the given dimensions.
    ///
    /// The aspect ratio is not preserved.
    pub fn scaled(&self, width: u32, height: u32, filter: ResizeFilter) -> RasterResult<Self> {
        ensure_nonzero(width, height)?;
        Ok(Self {
            inner: self.inner.resize_exact(width, height, filter.to_image_filter()),
        })
    }

    /// Fill the entire surface with a color, preserving the pixel format.
    pub fn fill(&mut self, color: Color) {
        let (width, height) = (self.width(), self.height());
        self.inner = match self.format() {
            PixelFormat::Rgb => {
                DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, rgb(color)))
            }
            PixelFormat::Rgba => {
                DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, rgba(color)))
            }
        };
    }

    /// Fill a rectangular region with a color, clipped to the surface.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let bounds = Rect::from_size(self.size());
        let Some(region) = rect.intersect(&bounds) else {
            return;
        };
        let pixel = rgba(color);
        for y in region.top()..region.bottom() {
            for x in region.left()..region.right() {
                self.inner.put_pixel(x as u32, y as u32, pixel);
            }
        }
    }

    // ========================================================================
    // Blitting
    // ========================================================================

    /// Blit an entire source surface at `dest`.
    ///
    /// Equivalent to [`blit_with`](Self::blit_with) with no source rectangle
    /// and [`BlendMode::Normal`].
    pub fn blit(&mut self, src: &Surface, dest: Point) {
        self.blit_with(src, dest, None, BlendMode::Normal);
    }

    /// Blit a sub-rectangle of a source surface at `dest`.
    pub fn blit_rect(&mut self, src: &Surface, dest: Point, src_rect: Rect) {
        self.blit_with(src, dest, Some(src_rect), BlendMode::Normal);
    }

    /// Blit with full control over the source region and blending.
    ///
    /// The source rectangle is clipped against the source bounds and the
    /// destination placement is clipped against this surface; out-of-range
    /// regions are silently dropped.
    pub fn blit_with(
        &mut self,
        src: &Surface,
        dest: Point,
        src_rect: Option<Rect>,
        mode: BlendMode,
    ) {
        let src_bounds = Rect::from_size(src.size());
        let region = match src_rect {
            Some(rect) => match rect.intersect(&src_bounds) {
                Some(clipped) => clipped,
                None => return,
            },
            None => src_bounds,
        };
        if region.is_empty() {
            return;
        }

        let top = src.inner.crop_imm(
            region.left() as u32,
            region.top() as u32,
            region.width(),
            region.height(),
        );

        match mode {
            BlendMode::Normal if src.has_alpha() => {
                imageops::overlay(&mut self.inner, &top, dest.x as i64, dest.y as i64);
            }
            _ => {
                imageops::replace(&mut self.inner, &top, dest.x as i64, dest.y as i64);
            }
        }
    }
}

impl PartialEq for Surface {
    fn eq(&self, other: &Self) -> bool {
        self.format() == other.format()
            && self.size() == other.size()
            && self.as_bytes() == other.as_bytes()
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("format", &self.format())
            .finish()
    }
}

fn ensure_nonzero(width: u32, height: u32) -> RasterResult<()> {
    if width == 0 || height == 0 {
        return Err(RasterError::InvalidDimensions { width, height });
    }
    Ok(())
}

#[inline]
fn rgba(color: Color) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, color.a])
}

#[inline]
fn rgb(color: Color) -> Rgb<u8> {
    Rgb([color.r, color.g, color.b])
}
