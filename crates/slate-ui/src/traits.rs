//! Core widget trait definitions.
//!
//! Three contracts cover the widget surface area:
//!
//! - [`Widget`]: the uniform interface a container driver calls, giving
//!   base state access and the per-frame [`update`](Widget::update) hook.
//! - [`Renderable`]: the widget produces a pixel surface and tracks its
//!   staleness; [`render`](Renderable::render) recomposes on demand.
//! - [`Reactive`]: the widget consumes dispatcher events and may invoke
//!   an action in response.
//!
//! A type that both renders and reacts (a clickable label, say) implements
//! all three against one shared [`WidgetBase`] rather than duplicating
//! surface or dirty state per capability.

use slate_ui_raster::{Size, Surface};

use crate::base::WidgetBase;
use crate::events::{FrameEvents, InputEvent, WidgetId};

/// The uniform contract every widget exposes to a container driver.
///
/// The driver treats widgets polymorphically: once per frame it calls
/// [`update`](Self::update) with that frame's event snapshot, and re-blits
/// any widget whose dirty flag is set.
pub trait Widget: Send {
    /// Get a reference to the widget's base state.
    fn base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget's base state.
    fn base_mut(&mut self) -> &mut WidgetBase;

    /// Per-frame hook called by the container driver.
    ///
    /// The default implementation does nothing. Widgets that react to
    /// input override this; the frame snapshot is read-only.
    fn update(&mut self, _frame: &FrameEvents) {}

    // =========================================================================
    // Provided accessors (delegate to WidgetBase)
    // =========================================================================

    /// The widget's unique identity.
    fn id(&self) -> WidgetId {
        self.base().id()
    }

    /// The widget's width in pixels.
    fn width(&self) -> u32 {
        self.base().width()
    }

    /// The widget's height in pixels.
    fn height(&self) -> u32 {
        self.base().height()
    }

    /// The widget's size.
    fn size(&self) -> Size {
        self.base().size()
    }

    /// Check if the pointer is currently over this widget.
    fn is_hovered(&self) -> bool {
        self.base().is_hovered()
    }

    /// Set the hover state (called by the external pointer-tracking step).
    fn set_hovered(&mut self, hovered: bool) {
        self.base_mut().set_hovered(hovered);
    }

    /// Check if the widget's surface is stale.
    fn is_changed(&self) -> bool {
        self.base().is_changed()
    }
}

/// A widget that composes a pixel surface from its logical state.
pub trait Renderable: Widget {
    /// Bring the surface up to date with the widget's logical state.
    ///
    /// Idempotent: when the widget is not dirty this is a no-op, and the
    /// dirty flag is cleared as a side effect of composing, so calling it
    /// twice in succession produces a byte-identical surface.
    fn recompose(&mut self);

    /// Recompose if needed and hand out the up-to-date surface.
    fn render(&mut self) -> &Surface {
        self.recompose();
        self.base().surface()
    }
}

/// A widget that reacts to dispatcher events observed against it.
pub trait Reactive: Widget {
    /// The event kinds that trigger this widget.
    fn trigger_events(&self) -> &[InputEvent];

    /// Perform the widget's reaction.
    fn activate(&mut self);

    /// Consult the frame snapshot and activate if appropriate.
    ///
    /// A widget only reacts while hovered; hover itself is maintained by
    /// the external pointer-tracking step. When any of this widget's
    /// trigger events appears in its dispatcher entry, [`activate`]
    /// runs exactly once for this call.
    ///
    /// [`activate`]: Self::activate
    fn react(&mut self, frame: &FrameEvents) {
        if !self.is_hovered() {
            return;
        }
        let observed = frame.events_for(self.id());
        let fire = observed
            .iter()
            .any(|event| self.trigger_events().contains(event));
        if fire {
            self.activate();
        }
    }
}
