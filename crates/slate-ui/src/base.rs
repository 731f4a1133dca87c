//! Widget base implementation.
//!
//! This module provides [`WidgetBase`], the state every widget carries:
//! fixed dimensions, the owned pixel surface, the hover flag, and the dirty
//! flag that drives incremental repaint. Concrete widgets embed a
//! `WidgetBase` and delegate common operations to it.

use slate_ui_raster::{Color, PixelFormat, Size, Surface};
use std::path::PathBuf;

use crate::error::{WidgetError, WidgetResult};
use crate::events::WidgetId;
use crate::signal::Signal;

/// The state shared by all widgets.
///
/// A widget's dimensions are fixed at construction; the surface may be
/// replaced or patched in place but never resized. The dirty flag starts
/// true so the first read always produces a freshly composed surface.
pub struct WidgetBase {
    /// Process-unique identity, the event dispatch key.
    id: WidgetId,

    /// Fixed width in pixels.
    width: u32,

    /// Fixed height in pixels.
    height: u32,

    /// Whether the pointer is currently over this widget. Set by the
    /// external pointer-tracking step, never by the widget itself.
    hovered: bool,

    /// Whether the surface no longer reflects the widget's logical state.
    changed: bool,

    /// The widget's owned pixel surface.
    surface: Surface,

    /// Signal emitted when the hover state changes.
    pub hover_changed: Signal<bool>,
}

impl WidgetBase {
    /// Start building a widget base with fixed dimensions.
    pub fn builder(width: u32, height: u32) -> WidgetBuilder {
        WidgetBuilder::new(width, height)
    }

    // =========================================================================
    // Identity and Geometry
    // =========================================================================

    /// The widget's unique identity.
    #[inline]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// The widget's width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The widget's height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    // =========================================================================
    // Hover State
    // =========================================================================

    /// Check if the pointer is currently over this widget.
    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Set the hover state (called by the external pointer-tracking step).
    pub fn set_hovered(&mut self, hovered: bool) {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.hover_changed.emit(hovered);
        }
    }

    // =========================================================================
    // Dirty Flag
    // =========================================================================

    /// Check if the surface is stale relative to the widget's state.
    #[inline]
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Mark the surface stale.
    pub fn mark_changed(&mut self) {
        self.changed = true;
    }

    /// Clear the dirty flag (called once the refreshed surface is consumed).
    pub fn clear_changed(&mut self) {
        self.changed = false;
    }

    // =========================================================================
    // Surface
    // =========================================================================

    /// The widget's current surface.
    #[inline]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Mutable access to the surface for in-place patching.
    #[inline]
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// Replace the surface wholesale and mark the widget stale.
    pub fn replace_surface(&mut self, surface: Surface) {
        self.surface = surface;
        self.changed = true;
    }
}

/// Builder for [`WidgetBase`].
///
/// A widget draws its pixels from exactly one source: an explicit surface,
/// an image decoded from disk, or an internally allocated fill. Supplying
/// both a surface and an image path is a construction error.
pub struct WidgetBuilder {
    width: u32,
    height: u32,
    surface: Option<Surface>,
    image: Option<PathBuf>,
    alpha: bool,
}

impl WidgetBuilder {
    /// Start a builder for a widget of the given fixed dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            surface: None,
            image: None,
            alpha: true,
        }
    }

    /// Supply an explicit surface.
    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Load the surface from an image file.
    pub fn with_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.image = Some(path.into());
        self
    }

    /// Whether the widget needs transparency support.
    ///
    /// Alpha-capable surfaces trade a small per-pixel cost for
    /// transparency; opaque surfaces are preferred when it is not needed.
    /// Applies to image decoding and to the internally allocated fallback.
    pub fn with_alpha(mut self, alpha: bool) -> Self {
        self.alpha = alpha;
        self
    }

    /// Build the widget base.
    ///
    /// # Errors
    ///
    /// - [`WidgetError::ArgumentConflict`] if both a surface and an image
    ///   path were supplied.
    /// - [`WidgetError::Raster`] for zero dimensions or image decode
    ///   failures.
    pub fn build(self) -> WidgetResult<WidgetBase> {
        if self.width == 0 || self.height == 0 {
            return Err(slate_ui_raster::RasterError::InvalidDimensions {
                width: self.width,
                height: self.height,
            }
            .into());
        }

        let format = if self.alpha {
            PixelFormat::Rgba
        } else {
            PixelFormat::Rgb
        };

        let surface = match (self.surface, self.image) {
            (Some(_), Some(_)) => return Err(WidgetError::ArgumentConflict),
            (Some(surface), None) => surface,
            (None, Some(path)) => Surface::from_file(&path, format)?,
            (None, None) => {
                if self.alpha {
                    Surface::new(self.width, self.height)?
                } else {
                    Surface::from_color(self.width, self.height, Color::WHITE, PixelFormat::Rgb)?
                }
            }
        };

        Ok(WidgetBase {
            id: WidgetId::next(),
            width: self.width,
            height: self.height,
            hovered: false,
            changed: true,
            surface,
            hover_changed: Signal::new(),
        })
    }
}

static_assertions::assert_impl_all!(WidgetBase: Send);
