//! # herald
//!
//! **Herald** is a lightweight synchronous event emitter for Rust.
//!
//! It provides a named-event listener registry with synchronous fan-out:
//! register listeners under string event names, emit a payload later, and
//! every registered listener runs before `emit` returns. The crate is
//! designed as a building block for types that want publish/subscribe
//! behavior without adopting a base-class hierarchy.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   on("net.up", f)     once("net.up", g)     observe_new_listeners(o)
//!        │                    │                      │
//!        ▼                    ▼                      ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  EventEmitter<T>                                             │
//! │  - channels: event name ─► ordered listener entries          │
//! │  - reserved channels: "newListener" / "removeListener"       │
//! │  - max_listeners (soft limit, diagnostic only)               │
//! └───────────────────────────┬──────────────────────────────────┘
//!                             │ emit("net.up", payload)
//!                             ▼
//!                   snapshot the channel,
//!                   dispatch most-recent first:
//!              g(&emitter, &payload) ─► f(&emitter, &payload)
//! ```
//!
//! ### Dispatch pass
//! ```text
//! emit(event, payload)
//!   ├─► snapshot current entries (lock released before callbacks)
//!   ├─► empty?
//!   │     ├─ event == "error" ─► Err(EmitError::Unhandled { payload })
//!   │     └─ otherwise        ─► Ok(false)
//!   └─► for each entry, most recently added first:
//!         ├─ one-shot? remove from registry first (fires
//!         │  "removeListener"), skip if a re-entrant pass beat us
//!         └─ listener(&emitter, &payload)   // panics propagate
//! ```
//!
//! ## Features
//! | Area              | Description                                               | Key types / functions                  |
//! |-------------------|-----------------------------------------------------------|----------------------------------------|
//! | **Registration**  | Add, remove, and enumerate listeners under event names.   | [`EventEmitter`], [`ListenerId`]       |
//! | **One-shot**      | Listeners that remove themselves after their first call.  | [`EventEmitter::once`]                 |
//! | **Dispatch**      | Synchronous fan-out, most recently added listener first.  | [`EventEmitter::emit`]                 |
//! | **Registry hooks**| Observe registrations/removals on reserved channels.      | [`NEW_LISTENER`], [`REMOVE_LISTENER`]  |
//! | **Errors**        | Loud failure for an unheard `"error"` emission.           | [`EmitError`], [`ERROR_EVENT`]         |
//! | **Composition**   | Grant any type the operation set by embedding an emitter. | [`Emits`], [`listener_count`]          |
//! | **Configuration** | Soft listener limit and error-channel strictness.         | [`EmitterConfig`]                      |
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use herald::EventEmitter;
//!
//! let emitter: EventEmitter<String> = EventEmitter::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = Arc::clone(&seen);
//! emitter.on("message", move |_, text| {
//!     sink.lock().unwrap().push(text.clone());
//! });
//!
//! let delivered = emitter.emit("message", "hello".to_string()).unwrap();
//! assert!(delivered);
//! assert_eq!(seen.lock().unwrap().clone(), vec!["hello".to_string()]);
//! ```
//!
//! ## Guarantees
//! - Emission is synchronous and in-process; there is no queue, no worker,
//!   no deferred delivery.
//! - A snapshot is taken before dispatch, so listeners may re-enter the
//!   emitter (`on`/`off`/`emit`) without affecting the pass in flight.
//! - A panicking listener aborts the rest of its pass (fail-fast); the
//!   emitter never catches or wraps listener panics.
//! - Exceeding the listener limit logs one `warn` per event name through
//!   the [`log`] facade and never blocks registration.

mod config;
mod error;
mod events;

// ---- Public re-exports ----

pub use config::EmitterConfig;
pub use error::EmitError;
pub use events::{
    listener_count, Emits, EventEmitter, ListenerFn, ListenerId, ObserverFn, ERROR_EVENT,
    NEW_LISTENER, REMOVE_LISTENER,
};
