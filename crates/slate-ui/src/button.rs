//! Button widgets: hover-gated activation from the frame event snapshot.
//!
//! Buttons do not hit-test. The external pointer-tracking step maintains
//! each widget's hover flag, and the frame loop records raw input events
//! into the per-frame snapshot; a button only checks that it was hovered
//! and that one of its trigger events landed on it this frame, and invokes
//! its action when both hold. This keeps the dispatcher a plain per-frame
//! multimap instead of a hit-testing engine.
//!
//! Two concrete widgets are provided:
//!
//! - [`AbstractButton`]: a bare reactive surface (image or blank), the
//!   base for click behavior without text
//! - [`TextButton`]: a [`Label`] that is simultaneously a button, on one
//!   shared widget state

use std::path::PathBuf;

use slate_ui_raster::{Color, FontSpec, Surface, TextEngine};
use std::sync::Arc;

use crate::base::{WidgetBase, WidgetBuilder};
use crate::error::WidgetResult;
use crate::events::{FrameEvents, InputEvent, PointerButton};
use crate::label::{ImageSource, Label, LabelBuilder};
use crate::signal::Signal;
use crate::traits::{Reactive, Renderable, Widget};

type Action = Box<dyn FnMut() + Send>;

/// The reactive state of a button: its trigger set, its optional action,
/// and the activation signal.
///
/// This is a capability, not a widget; button types embed it next to
/// whatever render state they carry and feed it events through
/// [`Reactive`].
pub struct ButtonBehavior {
    /// Invoked on activation, if set. A button without an action is valid;
    /// activation is then signal-only.
    action: Option<Action>,

    /// The event kinds that activate the button.
    triggers: Vec<InputEvent>,

    /// Signal emitted on every activation.
    pub activated: Signal<()>,
}

impl ButtonBehavior {
    /// Create a behavior triggered by a left pointer-button release.
    pub fn new() -> Self {
        Self {
            action: None,
            triggers: vec![InputEvent::ButtonReleased(PointerButton::Left)],
            activated: Signal::new(),
        }
    }

    /// Set the action invoked on activation.
    pub fn set_action(&mut self, action: impl FnMut() + Send + 'static) {
        self.action = Some(Box::new(action));
    }

    /// Remove the action; activation becomes signal-only.
    pub fn clear_action(&mut self) {
        self.action = None;
    }

    /// Check if an action is set.
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// The event kinds that activate the button.
    pub fn triggers(&self) -> &[InputEvent] {
        &self.triggers
    }

    /// Replace the trigger set.
    pub fn set_triggers(&mut self, triggers: Vec<InputEvent>) {
        self.triggers = triggers;
    }

    /// Emit the activation signal and invoke the action, if any.
    pub fn activate(&mut self) {
        tracing::debug!(target: "slate_ui::button", "activated");
        self.activated.emit(());
        if let Some(action) = self.action.as_mut() {
            action();
        }
    }
}

impl Default for ButtonBehavior {
    fn default() -> Self {
        Self::new()
    }
}

/// A clickable widget with no text of its own.
///
/// Its surface comes from the usual widget sources (explicit surface,
/// image file, or internal fill); its reaction comes from an embedded
/// [`ButtonBehavior`].
pub struct AbstractButton {
    base: WidgetBase,
    behavior: ButtonBehavior,
}

impl AbstractButton {
    /// Start building a button of the given fixed dimensions.
    pub fn builder(width: u32, height: u32) -> AbstractButtonBuilder {
        AbstractButtonBuilder {
            inner: WidgetBuilder::new(width, height),
            behavior: ButtonBehavior::new(),
        }
    }

    /// Signal emitted on every activation.
    pub fn activated(&self) -> &Signal<()> {
        &self.behavior.activated
    }

    /// The button's reactive state.
    pub fn behavior(&self) -> &ButtonBehavior {
        &self.behavior
    }

    /// Mutable access to the button's reactive state.
    pub fn behavior_mut(&mut self) -> &mut ButtonBehavior {
        &mut self.behavior
    }
}

impl Widget for AbstractButton {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn update(&mut self, frame: &FrameEvents) {
        self.react(frame);
    }
}

impl Renderable for AbstractButton {
    fn recompose(&mut self) {
        // The surface is static; composing is just consuming the flag.
        self.base.clear_changed();
    }
}

impl Reactive for AbstractButton {
    fn trigger_events(&self) -> &[InputEvent] {
        self.behavior.triggers()
    }

    fn activate(&mut self) {
        self.behavior.activate();
    }
}

/// Builder for [`AbstractButton`].
pub struct AbstractButtonBuilder {
    inner: WidgetBuilder,
    behavior: ButtonBehavior,
}

impl AbstractButtonBuilder {
    /// Supply an explicit surface.
    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.inner = self.inner.with_surface(surface);
        self
    }

    /// Load the surface from an image file.
    pub fn with_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.inner = self.inner.with_image(path);
        self
    }

    /// Whether the widget needs transparency support.
    pub fn with_alpha(mut self, alpha: bool) -> Self {
        self.inner = self.inner.with_alpha(alpha);
        self
    }

    /// Set the action invoked on activation.
    pub fn with_action(mut self, action: impl FnMut() + Send + 'static) -> Self {
        self.behavior.set_action(action);
        self
    }

    /// Replace the default trigger set.
    pub fn with_triggers(mut self, triggers: Vec<InputEvent>) -> Self {
        self.behavior.set_triggers(triggers);
        self
    }

    /// Build the button.
    pub fn build(self) -> WidgetResult<AbstractButton> {
        Ok(AbstractButton {
            base: self.inner.build()?,
            behavior: self.behavior,
        })
    }
}

/// A button that is simultaneously a label.
///
/// Both capability facets share one underlying widget state: the label
/// owns the base, and the button behavior reacts against that same
/// identity. There is exactly one surface and one set of hover and dirty
/// flags, so text rendering and click reaction cannot disagree about them.
///
/// # Example
///
/// ```
/// use slate_ui::{FrameEvents, InputEvent, PointerButton, TextButton, Widget};
/// use slate_ui_raster::Color;
///
/// let mut button = TextButton::builder(120, 32)
///     .with_background_color(Color::WHITE)
///     .with_text("OK")
///     .build()?;
///
/// let mut frame = FrameEvents::new();
/// frame.record(button.id(), InputEvent::ButtonReleased(PointerButton::Left));
/// button.set_hovered(true);
/// button.update(&frame); // activates
/// # Ok::<(), slate_ui::WidgetError>(())
/// ```
pub struct TextButton {
    label: Label,
    behavior: ButtonBehavior,
}

impl TextButton {
    /// Start building a text button of the given fixed dimensions.
    pub fn builder(width: u32, height: u32) -> TextButtonBuilder {
        TextButtonBuilder {
            label: LabelBuilder::new(width, height),
            behavior: ButtonBehavior::new(),
        }
    }

    /// The current text.
    pub fn text(&self) -> &str {
        self.label.text()
    }

    /// Set the text to display. See [`Label::set_text`].
    pub fn set_text(&mut self, text: impl Into<String>) -> WidgetResult<()> {
        self.label.set_text(text)
    }

    /// The label facet.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Mutable access to the label facet.
    pub fn label_mut(&mut self) -> &mut Label {
        &mut self.label
    }

    /// Signal emitted on every activation.
    pub fn activated(&self) -> &Signal<()> {
        &self.behavior.activated
    }

    /// The button's reactive state.
    pub fn behavior(&self) -> &ButtonBehavior {
        &self.behavior
    }

    /// Mutable access to the button's reactive state.
    pub fn behavior_mut(&mut self) -> &mut ButtonBehavior {
        &mut self.behavior
    }
}

impl Widget for TextButton {
    fn base(&self) -> &WidgetBase {
        self.label.base()
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        self.label.base_mut()
    }

    fn update(&mut self, frame: &FrameEvents) {
        self.react(frame);
    }
}

impl Renderable for TextButton {
    fn recompose(&mut self) {
        self.label.recompose();
    }
}

impl Reactive for TextButton {
    fn trigger_events(&self) -> &[InputEvent] {
        self.behavior.triggers()
    }

    fn activate(&mut self) {
        self.behavior.activate();
    }
}

/// Builder for [`TextButton`], combining the label and behavior options.
pub struct TextButtonBuilder {
    label: LabelBuilder,
    behavior: ButtonBehavior,
}

impl TextButtonBuilder {
    /// Set the initial text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.label = self.label.with_text(text);
        self
    }

    /// Set the text color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.label = self.label.with_text_color(color);
        self
    }

    /// Use a solid fill color as the background.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.label = self.label.with_background_color(color);
        self
    }

    /// Use an image as the background, scaled to the widget's dimensions.
    pub fn with_background_image(mut self, source: impl Into<ImageSource>) -> Self {
        self.label = self.label.with_background_image(source);
        self
    }

    /// Use a fully transparent background.
    pub fn with_transparent_background(mut self) -> Self {
        self.label = self.label.with_transparent_background();
        self
    }

    /// Set the font.
    pub fn with_font(mut self, font: FontSpec) -> Self {
        self.label = self.label.with_font(font);
        self
    }

    /// Set the text measuring/rasterizing backend.
    pub fn with_text_engine(mut self, engine: Arc<dyn TextEngine>) -> Self {
        self.label = self.label.with_text_engine(engine);
        self
    }

    /// Set the action invoked on activation.
    pub fn with_action(mut self, action: impl FnMut() + Send + 'static) -> Self {
        self.behavior.set_action(action);
        self
    }

    /// Replace the default trigger set.
    pub fn with_triggers(mut self, triggers: Vec<InputEvent>) -> Self {
        self.behavior.set_triggers(triggers);
        self
    }

    /// Build the text button.
    pub fn build(self) -> WidgetResult<TextButton> {
        Ok(TextButton {
            label: self.label.build()?,
            behavior: self.behavior,
        })
    }
}

static_assertions::assert_impl_all!(AbstractButton: Send);
static_assertions::assert_impl_all!(TextButton: Send);
