//! Widget identity, input events, and the per-frame event snapshot.
//!
//! The frame loop owns event delivery: once per frame it polls input
//! devices, records what happened against which widget into a
//! [`FrameEvents`] table, and hands that table to every widget's
//! `update()` call by shared reference. Widgets read their own entry and
//! nothing else; only the frame loop writes or clears the table. Passing
//! the snapshot explicitly keeps the dispatch state out of globals while
//! preserving its read-only-from-widgets invariant.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-unique widget identity.
///
/// This is the key the event dispatch table is indexed by. Identities are
/// minted at widget construction and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Mint the next unique identity.
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A pointer device button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

/// An input event observed against a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// A pointer button was pressed over the widget.
    ButtonPressed(PointerButton),
    /// A pointer button was released over the widget.
    ButtonReleased(PointerButton),
}

/// The events observed this frame, keyed by widget identity.
///
/// Each entry is a set: recording the same event twice in one frame is a
/// no-op. The external polling step populates the table and clears it at
/// the frame boundary; widgets receive `&FrameEvents` and can only read.
///
/// # Example
///
/// ```
/// use slate_ui::{FrameEvents, InputEvent, PointerButton};
/// # use slate_ui::Label;
/// # use slate_ui_raster::Color;
/// # let label = Label::builder(100, 40).with_background_color(Color::WHITE).build().unwrap();
/// # let id = slate_ui::Widget::id(&label);
///
/// let mut frame = FrameEvents::new();
/// frame.record(id, InputEvent::ButtonReleased(PointerButton::Left));
/// assert!(frame.contains(id, InputEvent::ButtonReleased(PointerButton::Left)));
/// frame.clear();
/// assert!(frame.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct FrameEvents {
    entries: HashMap<WidgetId, Vec<InputEvent>>,
}

impl FrameEvents {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event against a widget.
    pub fn record(&mut self, id: WidgetId, event: InputEvent) {
        let events = self.entries.entry(id).or_default();
        if !events.contains(&event) {
            tracing::trace!(target: "slate_ui::events", widget = ?id, ?event, "recorded");
            events.push(event);
        }
    }

    /// The events observed against a widget this frame.
    ///
    /// Widgets with no entry get an empty slice.
    pub fn events_for(&self, id: WidgetId) -> &[InputEvent] {
        self.entries.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check whether a specific event was observed against a widget.
    pub fn contains(&self, id: WidgetId, event: InputEvent) -> bool {
        self.events_for(id).contains(&event)
    }

    /// Number of widgets with at least one event this frame.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no events were recorded this frame.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries. Called by the frame loop at the poll boundary.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
