//! Signal/slot notifications for widgets.
//!
//! A reduced, direct-invocation form of the signal/slot pattern: slots are
//! invoked synchronously on the emitting thread, in connection order. There
//! is no event loop in this toolkit, so there are no queued or cross-thread
//! connection types.
//!
//! # Example
//!
//! ```
//! use slate_ui::Signal;
//!
//! let text_changed = Signal::<String>::new();
//!
//! let conn_id = text_changed.connect(|text| {
//!     println!("text changed to: {text}");
//! });
//!
//! text_changed.emit("Hello".to_string());
//! text_changed.disconnect(conn_id);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via
    /// [`Signal::disconnect`].
    pub struct ConnectionId;
}

type BoxedSlot<Args> = Box<dyn FnMut(Args) + Send>;

/// A signal that notifies connected slots when emitted.
///
/// Cloning a signal produces another handle to the same connection set.
///
/// Slots are invoked with the connection table locked; a slot must not
/// connect to, disconnect from, or emit the signal it is running under.
pub struct Signal<Args> {
    slots: Arc<Mutex<SlotMap<ConnectionId, BoxedSlot<Args>>>>,
}

impl<Args: Clone> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            slots: Arc::new(Mutex::new(SlotMap::with_key())),
        }
    }

    /// Connect a slot to this signal.
    ///
    /// Returns a [`ConnectionId`] that can be used to disconnect later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: FnMut(Args) + Send + 'static,
    {
        self.slots.lock().insert(Box::new(slot))
    }

    /// Disconnect a previously connected slot.
    ///
    /// Returns `true` if the connection existed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.slots.lock().remove(id).is_some()
    }

    /// Disconnect all slots.
    pub fn disconnect_all(&self) {
        self.slots.lock().clear();
    }

    /// Number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.slots.lock().len()
    }

    /// Emit the signal, invoking every connected slot with a clone of `args`.
    pub fn emit(&self, args: Args) {
        let mut slots = self.slots.lock();
        for (_, slot) in slots.iter_mut() {
            slot(args.clone());
        }
    }
}

impl<Args: Clone> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Clone for Signal<Args> {
    fn clone(&self) -> Self {
        Self {
            slots: Arc::clone(&self.slots),
        }
    }
}
