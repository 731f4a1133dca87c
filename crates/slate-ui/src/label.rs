//! Label widget with incremental text compositing.
//!
//! A label owns two surfaces: an immutable background composed once at
//! construction, and the working surface that is patched in place as the
//! text changes. Changing the text does not repaint the whole widget.
//! The old glyphs are erased by restoring only their centered
//! sub-rectangle of the background, and the new glyphs are blitted at
//! their own centered offset. The repaint cost per change is bounded by
//! the two glyph bounding boxes instead of the full `w * h` surface,
//! which is what keeps many text widgets cheap to update per frame.
//!
//! # Example
//!
//! ```
//! use slate_ui::{Label, Renderable};
//! use slate_ui_raster::Color;
//!
//! let mut label = Label::builder(200, 50)
//!     .with_background_color(Color::WHITE)
//!     .with_text("Ready")
//!     .build()?;
//!
//! let frame_buffer = label.render().clone();
//! label.set_text("Done")?;
//! assert!(slate_ui::Widget::is_changed(&label));
//! # Ok::<(), slate_ui::WidgetError>(())
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use slate_ui_raster::{
    BlendMode, Color, FontSpec, MonoTextEngine, PixelFormat, Point, Rect, ResizeFilter, Size,
    Surface, TextEngine,
};

use crate::base::{WidgetBase, WidgetBuilder};
use crate::error::{WidgetError, WidgetResult};
use crate::signal::Signal;
use crate::traits::{Renderable, Widget};

/// An image to use as a widget background.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// An already-decoded surface.
    Surface(Surface),
    /// A file to decode.
    Path(PathBuf),
}

impl From<Surface> for ImageSource {
    fn from(surface: Surface) -> Self {
        Self::Surface(surface)
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&std::path::Path> for ImageSource {
    fn from(path: &std::path::Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<&str> for ImageSource {
    fn from(path: &str) -> Self {
        Self::Path(PathBuf::from(path))
    }
}

impl ImageSource {
    /// Decode into an opaque surface.
    fn load(self) -> WidgetResult<Surface> {
        match self {
            Self::Surface(surface) => Ok(surface.convert(PixelFormat::Rgb)),
            Self::Path(path) => Ok(Surface::from_file(path, PixelFormat::Rgb)?),
        }
    }
}

/// The resolved background of a label.
///
/// Exactly one of these is chosen at construction and never mutated
/// afterwards; the corresponding pixels live in the label's background
/// surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    /// A solid fill.
    Color(Color),
    /// An image scaled to the widget's dimensions.
    Image,
    /// A fully transparent fill.
    Transparent,
}

/// A widget that displays a centered line of text over a fixed background.
///
/// The text is exposed as a property: reading returns the current string,
/// writing re-measures it against the widget's fixed bounds and marks the
/// surface stale. The surface itself is recomposed lazily, when the frame
/// loop consumes it through [`Renderable::render`].
pub struct Label {
    /// Widget base: dimensions, surface, hover and dirty flags.
    base: WidgetBase,

    /// The current text.
    text: String,

    /// The text currently on the surface, used to erase its glyph box on
    /// the next recompose. `None` until the first compose.
    painted: Option<String>,

    /// Text color.
    fg: Color,

    /// Font handle used for measuring and rendering.
    font: FontSpec,

    /// The measuring/rasterizing backend.
    engine: Arc<dyn TextEngine>,

    /// Which background source was chosen at construction.
    background: Background,

    /// The background pixels, computed once at construction.
    bgsurf: Surface,

    /// Cached glyph render for the current text.
    text_render: Option<Surface>,

    /// Signal emitted when the text changes.
    pub text_changed: Signal<String>,
}

impl Label {
    /// Start building a label of the given fixed dimensions.
    pub fn builder(width: u32, height: u32) -> LabelBuilder {
        LabelBuilder::new(width, height)
    }

    // =========================================================================
    // Text Property
    // =========================================================================

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the text to display.
    ///
    /// The new text is measured first; if its bounding box exceeds the
    /// widget's dimensions the assignment fails with
    /// [`WidgetError::TextOversize`] and the previous text and surface are
    /// left fully intact. On success the widget is marked stale; the
    /// surface is patched on the next [`render`](Renderable::render), which
    /// erases only the previous text's sub-rectangle.
    pub fn set_text(&mut self, text: impl Into<String>) -> WidgetResult<()> {
        let text = text.into();
        if text == self.text {
            return Ok(());
        }

        let measured = self.engine.measure(&self.font, &text);
        if !measured.fits_within(self.base.size()) {
            return Err(WidgetError::TextOversize {
                text_size: measured,
                bounds: self.base.size(),
            });
        }

        self.text = text;
        self.text_render = None;
        self.base.mark_changed();
        self.text_changed.emit(self.text.clone());
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The font used for measuring and rendering.
    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    /// The text color.
    pub fn text_color(&self) -> Color {
        self.fg
    }

    /// Which background source this label was built with.
    pub fn background(&self) -> Background {
        self.background
    }

    /// The immutable background surface.
    pub fn background_surface(&self) -> &Surface {
        &self.bgsurf
    }

    /// Centered placement for a glyph box of the given size.
    ///
    /// Integer division throughout: erase and redraw of the same string
    /// always land on identical pixels.
    fn text_origin(&self, text_size: Size) -> Point {
        let bounds = self.base.size();
        Point::new(
            (bounds.width.saturating_sub(text_size.width) / 2) as i32,
            (bounds.height.saturating_sub(text_size.height) / 2) as i32,
        )
    }
}

impl Widget for Label {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }
}

impl Renderable for Label {
    fn recompose(&mut self) {
        if !self.base.is_changed() {
            return;
        }

        match self.painted.take() {
            None => {
                // First compose: full background repaint.
                self.base.surface_mut().blit_with(
                    &self.bgsurf,
                    Point::ZERO,
                    None,
                    BlendMode::Replace,
                );
            }
            Some(old) if !old.is_empty() => {
                // Erase the old glyphs by restoring only their centered
                // sub-rectangle of the background.
                let old_size = self.engine.measure(&self.font, &old);
                let origin = self.text_origin(old_size);
                self.base.surface_mut().blit_with(
                    &self.bgsurf,
                    origin,
                    Some(Rect {
                        origin,
                        size: old_size,
                    }),
                    BlendMode::Replace,
                );
            }
            Some(_) => {}
        }

        if !self.text.is_empty() {
            let text_size = self.engine.measure(&self.font, &self.text);
            let origin = self.text_origin(text_size);

            let engine = &self.engine;
            let font = &self.font;
            let text = &self.text;
            let fg = self.fg;
            let glyphs = self
                .text_render
                .get_or_insert_with(|| engine.render(font, text, fg));
            self.base.surface_mut().blit(glyphs, origin);
        }

        tracing::trace!(
            target: "slate_ui::label",
            widget = ?self.base.id(),
            text = %self.text,
            "recomposed"
        );
        self.painted = Some(self.text.clone());
        self.base.clear_changed();
    }
}

static_assertions::assert_impl_all!(Label: Send);

/// Builder for [`Label`].
///
/// Exactly one background source must be supplied: a fill color, an image,
/// or an explicit transparency request. A fill color and an image together
/// are a configuration error; no source at all is one too.
pub struct LabelBuilder {
    width: u32,
    height: u32,
    text: String,
    fg: Color,
    bgcolor: Option<Color>,
    bgimage: Option<ImageSource>,
    transparent: bool,
    font: FontSpec,
    engine: Option<Arc<dyn TextEngine>>,
}

impl LabelBuilder {
    /// Start a builder for a label of the given fixed dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            text: String::new(),
            fg: Color::BLACK,
            bgcolor: None,
            bgimage: None,
            transparent: false,
            font: FontSpec::default(),
            engine: None,
        }
    }

    /// Start a builder whose dimensions are adopted from a background image.
    ///
    /// The image is decoded immediately so its size is known; the label
    /// will be exactly as large as the image.
    pub fn from_background(source: impl Into<ImageSource>) -> WidgetResult<Self> {
        let surface = source.into().load()?;
        let size = surface.size();
        Ok(Self::new(size.width, size.height).with_background_image(surface))
    }

    /// Set the initial text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the text color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    /// Use a solid fill color as the background.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.bgcolor = Some(color);
        self
    }

    /// Use an image as the background, scaled to the widget's dimensions.
    pub fn with_background_image(mut self, source: impl Into<ImageSource>) -> Self {
        self.bgimage = Some(source.into());
        self
    }

    /// Use a fully transparent background.
    pub fn with_transparent_background(mut self) -> Self {
        self.transparent = true;
        self
    }

    /// Set the font.
    pub fn with_font(mut self, font: FontSpec) -> Self {
        self.font = font;
        self
    }

    /// Set the text measuring/rasterizing backend.
    ///
    /// Defaults to the deterministic [`MonoTextEngine`].
    pub fn with_text_engine(mut self, engine: Arc<dyn TextEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Build the label.
    ///
    /// # Errors
    ///
    /// - [`WidgetError::BackgroundConflict`] if both a fill color and a
    ///   background image were supplied.
    /// - [`WidgetError::MissingBackground`] if no background source was
    ///   supplied at all.
    /// - [`WidgetError::TextOversize`] if the initial text does not fit.
    /// - [`WidgetError::Raster`] for zero dimensions or decode failures.
    pub fn build(self) -> WidgetResult<Label> {
        let bounds = Size::new(self.width, self.height);

        let (background, bgsurf) = match (self.bgcolor, self.bgimage) {
            (Some(_), Some(_)) => return Err(WidgetError::BackgroundConflict),
            (Some(color), None) => (
                Background::Color(color),
                Surface::from_color(self.width, self.height, color, PixelFormat::Rgb)?,
            ),
            (None, Some(source)) => {
                let decoded = source.load()?;
                let scaled = if decoded.size() == bounds {
                    decoded
                } else {
                    decoded.scaled(self.width, self.height, ResizeFilter::Triangle)?
                };
                (Background::Image, scaled)
            }
            (None, None) if self.transparent => (
                Background::Transparent,
                Surface::new(self.width, self.height)?,
            ),
            (None, None) => return Err(WidgetError::MissingBackground),
        };

        let engine = self
            .engine
            .unwrap_or_else(|| Arc::new(MonoTextEngine) as Arc<dyn TextEngine>);

        let measured = engine.measure(&self.font, &self.text);
        if !measured.fits_within(bounds) {
            return Err(WidgetError::TextOversize {
                text_size: measured,
                bounds,
            });
        }

        // The working surface starts as a copy of the background.
        let base = WidgetBuilder::new(self.width, self.height)
            .with_surface(bgsurf.clone())
            .build()?;

        Ok(Label {
            base,
            text: self.text,
            painted: None,
            fg: self.fg,
            font: self.font,
            engine,
            background,
            bgsurf,
            text_render: None,
            text_changed: Signal::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_conflict() {
        let surface = Surface::from_color(8, 8, Color::RED, PixelFormat::Rgb).unwrap();
        let result = Label::builder(8, 8)
            .with_background_color(Color::WHITE)
            .with_background_image(surface)
            .build();
        assert!(matches!(result, Err(WidgetError::BackgroundConflict)));
    }

    #[test]
    fn test_missing_background() {
        let result = Label::builder(8, 8).build();
        assert!(matches!(result, Err(WidgetError::MissingBackground)));
    }

    #[test]
    fn test_transparent_background() {
        let label = Label::builder(8, 8)
            .with_transparent_background()
            .build()
            .unwrap();
        assert_eq!(label.background(), Background::Transparent);
        assert!(label.background_surface().has_alpha());
        assert_eq!(
            label.background_surface().pixel(0, 0),
            Some(Color::TRANSPARENT)
        );
    }

    #[test]
    fn test_color_background_is_opaque_fill() {
        let label = Label::builder(6, 4)
            .with_background_color(Color::BLUE)
            .build()
            .unwrap();
        assert_eq!(label.background(), Background::Color(Color::BLUE));
        assert_eq!(label.background_surface().format(), PixelFormat::Rgb);
        assert_eq!(label.background_surface().pixel(5, 3), Some(Color::BLUE));
    }

    #[test]
    fn test_image_background_scaled_to_bounds() {
        let tiny = Surface::from_color(2, 2, Color::GREEN, PixelFormat::Rgb).unwrap();
        let label = Label::builder(10, 6)
            .with_background_image(tiny)
            .build()
            .unwrap();
        assert_eq!(label.background(), Background::Image);
        assert_eq!(label.background_surface().size(), Size::new(10, 6));
    }

    #[test]
    fn test_from_background_adopts_dimensions() {
        let image = Surface::from_color(12, 7, Color::RED, PixelFormat::Rgb).unwrap();
        let label = LabelBuilder::from_background(image).unwrap().build().unwrap();
        assert_eq!(Widget::size(&label), Size::new(12, 7));
        assert_eq!(label.background(), Background::Image);
    }

    #[test]
    fn test_initial_text_oversize_rejected() {
        let result = Label::builder(4, 4)
            .with_background_color(Color::WHITE)
            .with_text("far too long")
            .build();
        assert!(matches!(result, Err(WidgetError::TextOversize { .. })));
    }

    #[test]
    fn test_text_round_trip() {
        let mut label = Label::builder(200, 40)
            .with_background_color(Color::WHITE)
            .build()
            .unwrap();
        label.set_text("hello").unwrap();
        assert_eq!(label.text(), "hello");
    }

    #[test]
    fn test_text_changed_signal() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        let mut label = Label::builder(200, 40)
            .with_background_color(Color::WHITE)
            .build()
            .unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&calls);
        label.text_changed.connect(move |_| {
            sink.fetch_add(1, Ordering::SeqCst);
        });

        label.set_text("a").unwrap();
        label.set_text("a").unwrap(); // unchanged, no emission
        label.set_text("b").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_centering_uses_floor_division() {
        let label = Label::builder(11, 9)
            .with_background_color(Color::WHITE)
            .build()
            .unwrap();
        // 11 - 4 = 7, floor(7 / 2) = 3; 9 - 4 = 5, floor(5 / 2) = 2.
        assert_eq!(label.text_origin(Size::new(4, 4)), Point::new(3, 2));
    }
}
