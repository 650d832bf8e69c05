//! # Named-event registry and synchronous dispatch.
//!
//! [`EventEmitter`] owns a map from event name to an ordered listener list
//! and fans emissions out synchronously, in the caller's thread.
//!
//! ## Architecture
//! ```text
//! on("net.up", f)          once("net.up", g)
//!      │                        │
//!      ▼                        ▼
//! ┌───────────────────────────────────────────────┐
//! │ EventEmitter<T>                               │
//! │   "net.up"      ─► [f, g*]      (* one-shot)  │
//! │   "newListener" ─► [observers]                │
//! │   max_listeners   (soft limit, warn only)     │
//! └───────────────────────┬───────────────────────┘
//!                         │ emit("net.up", payload)
//!                         ▼ snapshot, most-recent first
//!              g(&emitter, &payload)   then   f(&emitter, &payload)
//! ```
//!
//! ## Rules
//! - **Snapshot-on-emit**: the listener list is copied before any callback
//!   runs. A listener removed during emission still fires in that pass; a
//!   listener added during emission waits for the next pass.
//! - **Reverse dispatch order**: the most recently added listener fires
//!   first. `listeners()` still reports registration order.
//! - **Re-entrancy**: the internal lock is never held while a callback
//!   runs, so listeners may freely call `on`/`off`/`emit` on the emitter
//!   they were invoked from.
//! - **Fail-fast**: a panicking listener propagates out of `emit`
//!   immediately; the rest of the pass is abandoned.
//! - **Soft limit**: exceeding `max_listeners` never blocks registration;
//!   it logs one warning per event name.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::config::EmitterConfig;
use crate::error::EmitError;
use crate::events::listener::{
    Callback, Channel, Entry, ListenerFn, ListenerId, ObserverFn, ERROR_EVENT, NEW_LISTENER,
    REMOVE_LISTENER,
};

/// Registry state behind the emitter's lock.
struct Inner<T> {
    channels: HashMap<Arc<str>, Channel<T>>,
    max_listeners: usize,
}

/// Synchronous named-event emitter.
///
/// `T` is the payload type delivered to listeners by shared reference. All
/// methods take `&self` (interior mutability behind a `parking_lot::Mutex`
/// that is released before any callback runs), so the emitter can be
/// embedded in other types and re-entered from its own listeners.
///
/// ### Properties
/// - **Synchronous**: `emit` returns only after every snapshotted listener
///   has returned.
/// - **Exact-name matching**: no wildcards; event names compare by equality.
/// - **Duplicates allowed**: registering the same closure twice creates two
///   independent entries with distinct ids.
///
/// ## Example
/// ```
/// use std::sync::{Arc, Mutex};
/// use herald::EventEmitter;
///
/// let emitter: EventEmitter<u32> = EventEmitter::new();
/// let seen = Arc::new(Mutex::new(Vec::new()));
///
/// let sink = Arc::clone(&seen);
/// emitter.on("progress", move |_, pct| sink.lock().unwrap().push(*pct));
///
/// emitter.emit("progress", 40).unwrap();
/// emitter.emit("progress", 100).unwrap();
/// assert_eq!(*seen.lock().unwrap(), vec![40, 100]);
/// ```
pub struct EventEmitter<T> {
    inner: Mutex<Inner<T>>,
    raise_unhandled_error: bool,
    next_id: AtomicU64,
}

impl<T> EventEmitter<T> {
    /// Creates an empty emitter with [`EmitterConfig::default`] settings.
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    /// Creates an empty emitter with the given configuration.
    pub fn with_config(config: EmitterConfig) -> Self {
        Self {
            inner: Mutex::new(Inner {
                channels: HashMap::new(),
                max_listeners: config.max_listeners,
            }),
            raise_unhandled_error: config.raise_unhandled_error,
            next_id: AtomicU64::new(1),
        }
    }

    /// Registers `listener` for `event` and returns its removal handle.
    ///
    /// The reserved [`NEW_LISTENER`] notification fires synchronously
    /// *before* the listener lands in the registry, so observers never see
    /// the listener being added. If the channel then exceeds the soft
    /// listener limit, a one-time `log::warn!` diagnostic is emitted for
    /// that event name; registration itself is never blocked.
    ///
    /// ## Example
    /// ```
    /// use std::sync::{Arc, Mutex};
    /// use herald::EventEmitter;
    ///
    /// let emitter: EventEmitter<()> = EventEmitter::new();
    /// let order = Arc::new(Mutex::new(Vec::new()));
    ///
    /// let log = Arc::clone(&order);
    /// emitter.on("tick", move |_, _| log.lock().unwrap().push("first"));
    /// let log = Arc::clone(&order);
    /// emitter.on("tick", move |_, _| log.lock().unwrap().push("second"));
    ///
    /// emitter.emit("tick", ()).unwrap();
    /// // Most recently added fires first.
    /// assert_eq!(*order.lock().unwrap(), vec!["second", "first"]);
    /// ```
    pub fn on(
        &self,
        event: &str,
        listener: impl Fn(&Self, &T) + Send + Sync + 'static,
    ) -> ListenerId {
        self.add(event, false, Callback::Payload(Arc::new(listener)))
    }

    /// Alias for [`on`](Self::on).
    pub fn add_listener(
        &self,
        event: &str,
        listener: impl Fn(&Self, &T) + Send + Sync + 'static,
    ) -> ListenerId {
        self.on(event, listener)
    }

    /// Registers `listener` to fire at most once, then remove itself.
    ///
    /// Registration goes through the same path as [`on`](Self::on)
    /// (the [`NEW_LISTENER`] notification fires). During dispatch the entry
    /// is removed from the registry first (firing [`REMOVE_LISTENER`]) and
    /// then invoked, so a re-entrant emission of the same event from
    /// inside any listener can never run it a second time.
    ///
    /// ## Example
    /// ```
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::sync::Arc;
    /// use herald::EventEmitter;
    ///
    /// let emitter: EventEmitter<()> = EventEmitter::new();
    /// let hits = Arc::new(AtomicUsize::new(0));
    ///
    /// let count = Arc::clone(&hits);
    /// emitter.once("ready", move |_, _| {
    ///     count.fetch_add(1, Ordering::Relaxed);
    /// });
    ///
    /// emitter.emit("ready", ()).unwrap();
    /// emitter.emit("ready", ()).unwrap();
    /// assert_eq!(hits.load(Ordering::Relaxed), 1);
    /// ```
    pub fn once(
        &self,
        event: &str,
        listener: impl Fn(&Self, &T) + Send + Sync + 'static,
    ) -> ListenerId {
        self.add(event, true, Callback::Payload(Arc::new(listener)))
    }

    /// Removes the listener identified by `id` from `event`.
    ///
    /// Removes at most the single entry carrying `id`, then fires the
    /// reserved [`REMOVE_LISTENER`] notification. Unknown event names and
    /// stale ids are no-ops. Returns whether an entry was removed.
    pub fn off(&self, event: &str, id: ListenerId) -> bool {
        let mut removed = false;
        {
            let mut inner = self.inner.lock();
            let now_empty = match inner.channels.get_mut(event) {
                Some(channel) => {
                    let before = channel.entries.len();
                    channel.entries.retain(|entry| entry.id != id);
                    removed = channel.entries.len() != before;
                    channel.entries.is_empty()
                }
                None => false,
            };
            if now_empty {
                inner.channels.remove(event);
            }
        }
        if removed {
            self.notify(REMOVE_LISTENER, event, id);
        }
        removed
    }

    /// Alias for [`off`](Self::off).
    pub fn remove_listener(&self, event: &str, id: ListenerId) -> bool {
        self.off(event, id)
    }

    /// Registers an observer on the reserved [`NEW_LISTENER`] channel.
    ///
    /// The observer receives the event name a listener is being added to
    /// and the new listener's id, before the entry lands in the registry.
    /// Observers live in the same registry as ordinary listeners: they can
    /// be removed with [`off`](Self::off) under the [`NEW_LISTENER`] name,
    /// are wiped by [`remove_all_listeners`](Self::remove_all_listeners),
    /// and count against the soft listener limit.
    pub fn observe_new_listeners(
        &self,
        observer: impl Fn(&Self, &str, ListenerId) + Send + Sync + 'static,
    ) -> ListenerId {
        self.add(NEW_LISTENER, false, Callback::Registry(Arc::new(observer)))
    }

    /// Registers an observer on the reserved [`REMOVE_LISTENER`] channel.
    ///
    /// Fires after an entry has been removed by [`off`](Self::off) or by a
    /// one-shot listener's self-removal. Bulk wipes fire nothing.
    pub fn observe_removed_listeners(
        &self,
        observer: impl Fn(&Self, &str, ListenerId) + Send + Sync + 'static,
    ) -> ListenerId {
        self.add(
            REMOVE_LISTENER,
            false,
            Callback::Registry(Arc::new(observer)),
        )
    }

    /// Sets the soft per-event listener limit.
    ///
    /// `0` disables the diagnostic. Channels that already warned stay
    /// latched. The unsigned parameter makes the "non-negative" contract a
    /// compile-time fact.
    pub fn set_max_listeners(&self, n: usize) -> &Self {
        self.inner.lock().max_listeners = n;
        self
    }

    /// Returns the current soft per-event listener limit.
    pub fn max_listeners(&self) -> usize {
        self.inner.lock().max_listeners
    }

    /// Removes every listener for `event`, or for all events when `None`.
    ///
    /// This is a bulk wipe: no [`REMOVE_LISTENER`] notifications fire, and
    /// with `None` the reserved channels (including any registry
    /// observers) are cleared as well.
    pub fn remove_all_listeners(&self, event: Option<&str>) -> &Self {
        let mut inner = self.inner.lock();
        match event {
            Some(name) => {
                inner.channels.remove(name);
            }
            None => inner.channels.clear(),
        }
        self
    }

    /// Returns a detached copy of the listener handles for `event`, in
    /// registration order.
    ///
    /// Mutating the returned vector has no effect on the registry. Unknown
    /// events yield an empty vector.
    pub fn listeners(&self, event: &str) -> Vec<ListenerId> {
        let inner = self.inner.lock();
        inner
            .channels
            .get(event)
            .map(|channel| channel.entries.iter().map(|entry| entry.id).collect())
            .unwrap_or_default()
    }

    /// Returns the number of listeners currently registered for `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        let inner = self.inner.lock();
        inner
            .channels
            .get(event)
            .map_or(0, |channel| channel.entries.len())
    }

    /// Emits `payload` to every listener currently registered for `event`.
    ///
    /// Takes a snapshot of the channel, then dispatches in reverse
    /// registration order (most recently added first), passing the emitter
    /// and a shared reference to the payload. Listener mutations affect
    /// only subsequent emissions.
    ///
    /// Returns `Ok(true)` if at least one listener was dispatched and
    /// `Ok(false)` for an event nobody listens to. The exception is the
    /// reserved [`ERROR_EVENT`] channel, where an unheard emission returns
    /// [`EmitError::Unhandled`] carrying the payload back (unless the
    /// emitter was configured with `raise_unhandled_error = false`).
    ///
    /// Panics raised by listeners are not caught.
    ///
    /// ## Example
    /// ```
    /// use herald::{EmitError, EventEmitter, ERROR_EVENT};
    ///
    /// let emitter: EventEmitter<String> = EventEmitter::new();
    ///
    /// assert!(!emitter.emit("idle", "nobody home".to_string()).unwrap());
    ///
    /// let err = emitter.emit(ERROR_EVENT, "boom".to_string()).unwrap_err();
    /// match err {
    ///     EmitError::Unhandled { payload } => assert_eq!(payload, "boom"),
    ///     _ => unreachable!(),
    /// }
    /// ```
    pub fn emit(&self, event: &str, payload: T) -> Result<bool, EmitError<T>>
    where
        T: fmt::Debug,
    {
        let snapshot: Vec<(ListenerId, bool, Arc<ListenerFn<T>>)> = {
            let inner = self.inner.lock();
            match inner.channels.get(event) {
                Some(channel) => channel
                    .entries
                    .iter()
                    .filter_map(|entry| match &entry.callback {
                        Callback::Payload(f) => Some((entry.id, entry.once, Arc::clone(f))),
                        Callback::Registry(_) => None,
                    })
                    .collect(),
                None => Vec::new(),
            }
        };

        if snapshot.is_empty() {
            if event == ERROR_EVENT && self.raise_unhandled_error {
                return Err(EmitError::Unhandled { payload });
            }
            return Ok(false);
        }

        for (id, once, listener) in snapshot.iter().rev() {
            if *once && !self.off(event, *id) {
                // A re-entrant pass already consumed this one-shot entry.
                continue;
            }
            listener(self, &payload);
        }
        Ok(true)
    }

    /// Shared registration path for listeners and registry observers.
    fn add(&self, event: &str, once: bool, callback: Callback<T>) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.notify(NEW_LISTENER, event, id);

        let exceeded = {
            let mut inner = self.inner.lock();
            let max = inner.max_listeners;
            let channel = inner.channels.entry(Arc::from(event)).or_default();
            channel.entries.push(Entry { id, once, callback });
            if max > 0 && channel.entries.len() > max && !channel.warned {
                channel.warned = true;
                Some((channel.entries.len(), max))
            } else {
                None
            }
        };
        if let Some((count, max)) = exceeded {
            log::warn!(
                "possible listener leak on \"{event}\": {count} listeners registered, \
                 soft limit is {max}; raise it with set_max_listeners()"
            );
        }
        id
    }

    /// Dispatches a registry notification through the snapshot machinery.
    fn notify(&self, reserved: &str, event: &str, id: ListenerId) {
        let snapshot: Vec<Arc<ObserverFn<T>>> = {
            let inner = self.inner.lock();
            match inner.channels.get(reserved) {
                Some(channel) => channel
                    .entries
                    .iter()
                    .filter_map(|entry| match &entry.callback {
                        Callback::Registry(f) => Some(Arc::clone(f)),
                        Callback::Payload(_) => None,
                    })
                    .collect(),
                None => Vec::new(),
            }
        };
        for observer in snapshot.iter().rev() {
            observer(self, event, id);
        }
    }
}

impl<T> Default for EventEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventEmitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("EventEmitter")
            .field("events", &inner.channels.len())
            .field("max_listeners", &inner.max_listeners)
            .finish()
    }
}
