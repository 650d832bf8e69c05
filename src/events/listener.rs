//! # Listener handles, callback shapes, and reserved channel names.
//!
//! Rust closures have no reference identity, so registration returns a
//! [`ListenerId`] and removal takes it back; the id is the "remove this
//! exact listener" handle.
//!
//! Two callback shapes share the registry storage and the dispatch path:
//! - payload listeners ([`ListenerFn`]) registered with `on`/`once`;
//! - registry observers ([`ObserverFn`]) registered on the reserved
//!   [`NEW_LISTENER`] / [`REMOVE_LISTENER`] channels.

use std::sync::Arc;

use crate::events::emitter::EventEmitter;

/// Reserved channel name: fires before a listener lands in the registry.
///
/// Observers registered through
/// [`observe_new_listeners`](EventEmitter::observe_new_listeners) receive
/// the affected event name and the new listener's id. Because the
/// notification precedes the append, an observer never sees the listener
/// it is being told about.
pub const NEW_LISTENER: &str = "newListener";

/// Reserved channel name: fires after a listener leaves the registry.
///
/// Fired by [`off`](EventEmitter::off) and by the self-removal a one-shot
/// listener performs during dispatch. Bulk removal
/// ([`remove_all_listeners`](EventEmitter::remove_all_listeners)) is a
/// wipe, not a sequence of removals, and fires nothing.
pub const REMOVE_LISTENER: &str = "removeListener";

/// Reserved channel name for error delivery.
///
/// Emitting here with no listener registered fails loudly (see
/// [`EmitError::Unhandled`](crate::EmitError::Unhandled)) unless the
/// emitter was configured with `raise_unhandled_error = false`.
pub const ERROR_EVENT: &str = "error";

/// Identity of a registered listener.
///
/// Returned by registration ([`on`](EventEmitter::on),
/// [`once`](EventEmitter::once), the registry-observer methods) and
/// consumed by removal ([`off`](EventEmitter::off)). Ids are allocated from
/// a per-emitter monotonic counter and never reused, so a stale id is a
/// harmless no-op to remove.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

/// Closure type for payload listeners.
///
/// Listeners receive the emitter itself (the invocation context, enabling
/// re-entrant `on`/`off`/`emit` calls) and a shared reference to the
/// emitted payload.
pub type ListenerFn<T> = dyn Fn(&EventEmitter<T>, &T) + Send + Sync;

/// Closure type for registry observers on the reserved channels.
///
/// Observers receive the emitter, the event name the change concerns, and
/// the affected listener's id.
pub type ObserverFn<T> = dyn Fn(&EventEmitter<T>, &str, ListenerId) + Send + Sync;

/// A registered callback: payload listener or registry observer.
pub(crate) enum Callback<T> {
    Payload(Arc<ListenerFn<T>>),
    Registry(Arc<ObserverFn<T>>),
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        match self {
            Callback::Payload(f) => Callback::Payload(Arc::clone(f)),
            Callback::Registry(f) => Callback::Registry(Arc::clone(f)),
        }
    }
}

/// One slot in a channel's ordered entry list.
pub(crate) struct Entry<T> {
    pub(crate) id: ListenerId,
    pub(crate) once: bool,
    pub(crate) callback: Callback<T>,
}

impl<T> Clone for Entry<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            once: self.once,
            callback: self.callback.clone(),
        }
    }
}

/// Per-event-name state: the ordered entries plus the leak-warning latch.
///
/// A channel only exists while it has entries; emptied channels are
/// dropped from the map so "absent" and "empty" are indistinguishable to
/// lookups. Dropping the channel also resets `warned`.
pub(crate) struct Channel<T> {
    pub(crate) entries: Vec<Entry<T>>,
    pub(crate) warned: bool,
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            warned: false,
        }
    }
}
