//! Retained-mode widgets with incremental dirty-region repaint.
//!
//! Slate is a small widget toolkit built around two ideas:
//!
//! - **Dirty tracking**: every widget owns a pixel surface and a `changed`
//!   flag. The flag starts true, is set whenever the widget's logical
//!   state diverges from its pixels, and is cleared when the refreshed
//!   surface is consumed. A frame loop re-blits only widgets whose flag is
//!   set.
//! - **Incremental recompose**: a [`Label`] does not repaint its whole
//!   surface when its text changes. It erases the previous text's centered
//!   bounding box by restoring that sub-rectangle of its background, then
//!   blits the new glyphs, bounding the repaint cost by the two glyph
//!   boxes instead of the widget area.
//!
//! Input dispatch is deliberately dumb: the frame loop records raw events
//! against widget identities in a per-frame [`FrameEvents`] snapshot and
//! maintains each widget's hover flag; a button reacts only when it is
//! hovered *and* one of its trigger events landed on it this frame.
//!
//! # Capabilities, not hierarchies
//!
//! Widgets compose three contracts: [`Widget`] (uniform container-facing
//! state access plus the per-frame `update` hook), [`Renderable`]
//! (produces a surface and tracks its dirtiness), and [`Reactive`]
//! (consumes dispatcher events and may invoke an action). A [`TextButton`]
//! implements all three over one shared [`WidgetBase`], with a single
//! surface and a single pair of hover and dirty flags, instead of
//! inheriting from two parents.
//!
//! # Frame loop contract
//!
//! Once per frame, in order: poll input devices, populate the
//! [`FrameEvents`] table, set each widget's hover flag from the pointer
//! position, call `update()` on each widget, then re-blit every widget
//! whose `changed` flag is set. Everything is synchronous; call order, not
//! concurrency, enforces that a button's action runs after its hover and
//! event state are final and that a label recomposes before its surface is
//! read.
//!
//! # Example
//!
//! ```
//! use slate_ui::prelude::*;
//!
//! let mut button = TextButton::builder(120, 32)
//!     .with_background_color(Color::WHITE)
//!     .with_text("Start")
//!     .build()?;
//!
//! // Frame loop (normally driven by a container):
//! let mut frame = FrameEvents::new();
//! frame.record(button.id(), InputEvent::ButtonReleased(PointerButton::Left));
//! button.set_hovered(true);
//! button.update(&frame);
//!
//! if button.is_changed() {
//!     let surface = button.render();
//!     // blit `surface` onto the frame buffer here
//! }
//! # Ok::<(), slate_ui::WidgetError>(())
//! ```
//!
//! # Logging
//!
//! Slate instruments its state transitions with the `tracing` crate under
//! the `slate_ui::*` targets. Install a subscriber (e.g.
//! `tracing_subscriber::fmt::init()`) to see them.

mod base;
mod button;
mod error;
mod events;
mod label;
mod signal;
mod tests;
mod traits;

pub use base::{WidgetBase, WidgetBuilder};
pub use button::{
    AbstractButton, AbstractButtonBuilder, ButtonBehavior, TextButton, TextButtonBuilder,
};
pub use error::{WidgetError, WidgetResult};
pub use events::{FrameEvents, InputEvent, PointerButton, WidgetId};
pub use label::{Background, ImageSource, Label, LabelBuilder};
pub use signal::{ConnectionId, Signal};
pub use traits::{Reactive, Renderable, Widget};

/// Re-export of the raster layer this crate composes with.
pub use slate_ui_raster as raster;

/// Commonly used items, for glob import.
pub mod prelude {
    pub use crate::{
        AbstractButton, FrameEvents, InputEvent, Label, PointerButton, Reactive, Renderable,
        Signal, TextButton, Widget, WidgetError, WidgetResult,
    };
    pub use slate_ui_raster::{Color, FontSpec, Point, Rect, Size, Surface};
}
