//! CPU raster surface layer for the Slate widget toolkit.
//!
//! This crate provides the drawing primitives the widget layer composes
//! with:
//!
//! - **Geometry and color**: [`Point`], [`Size`], [`Rect`], [`Color`]
//! - **Surfaces**: [`Surface`], an owned pixel buffer with fill, scale, and
//!   clipped blit operations in two pixel formats
//! - **Text seam**: [`TextEngine`] for measurement and glyph rasterization,
//!   with the deterministic [`MonoTextEngine`] built in
//!
//! Everything here is synchronous pixel manipulation; there is no GPU, no
//! window, and no event loop.
//!
//! # Example
//!
//! ```
//! use slate_ui_raster::{Color, PixelFormat, Point, Surface};
//!
//! let mut frame = Surface::from_color(320, 240, Color::WHITE, PixelFormat::Rgb)?;
//! let sprite = Surface::from_color(16, 16, Color::BLUE, PixelFormat::Rgba)?;
//! frame.blit(&sprite, Point::new(100, 80));
//! # Ok::<(), slate_ui_raster::RasterError>(())
//! ```

mod error;
mod surface;
mod text;
mod types;

pub use error::{RasterError, RasterResult};
pub use surface::{BlendMode, PixelFormat, ResizeFilter, Surface};
pub use text::{FontFamily, FontSpec, MonoTextEngine, TextEngine};
pub use types::{Color, Point, Rect, Size};
