//! # Emitter capability as a composition trait.
//!
//! [`Emits`] grants any type the emitter operation set by composition:
//! embed an [`EventEmitter`] in your type, point the one required accessor
//! at it, and the full operation set arrives as provided methods delegating
//! to the embedded registry. No base-class hierarchy, no method copying.
//!
//! ## Example
//! ```
//! use herald::{listener_count, Emits, EventEmitter};
//!
//! struct Downloader {
//!     events: EventEmitter<u64>,
//! }
//!
//! impl Emits<u64> for Downloader {
//!     fn events(&self) -> &EventEmitter<u64> {
//!         &self.events
//!     }
//! }
//!
//! let downloader = Downloader { events: EventEmitter::new() };
//! downloader.on("progress", |_, bytes| println!("{bytes} bytes"));
//! downloader.emit("progress", 1024).unwrap();
//! assert_eq!(listener_count(&downloader, "progress"), 1);
//! ```

use std::fmt;

use crate::error::EmitError;
use crate::events::emitter::EventEmitter;
use crate::events::listener::ListenerId;

/// Grants a type the emitter operation set by delegation.
///
/// Implementors supply [`events`](Emits::events); every other method has a
/// default body that forwards to the embedded emitter. [`EventEmitter`]
/// implements the trait over itself, so helpers written against
/// `impl Emits<T>` accept bare emitters and embedding types alike.
pub trait Emits<T> {
    /// The embedded listener registry that backs the other operations.
    fn events(&self) -> &EventEmitter<T>;

    /// Delegates to [`EventEmitter::on`].
    fn on<F>(&self, event: &str, listener: F) -> ListenerId
    where
        F: Fn(&EventEmitter<T>, &T) + Send + Sync + 'static,
    {
        self.events().on(event, listener)
    }

    /// Delegates to [`EventEmitter::add_listener`].
    fn add_listener<F>(&self, event: &str, listener: F) -> ListenerId
    where
        F: Fn(&EventEmitter<T>, &T) + Send + Sync + 'static,
    {
        self.events().add_listener(event, listener)
    }

    /// Delegates to [`EventEmitter::once`].
    fn once<F>(&self, event: &str, listener: F) -> ListenerId
    where
        F: Fn(&EventEmitter<T>, &T) + Send + Sync + 'static,
    {
        self.events().once(event, listener)
    }

    /// Delegates to [`EventEmitter::off`].
    fn off(&self, event: &str, id: ListenerId) -> bool {
        self.events().off(event, id)
    }

    /// Delegates to [`EventEmitter::remove_listener`].
    fn remove_listener(&self, event: &str, id: ListenerId) -> bool {
        self.events().remove_listener(event, id)
    }

    /// Delegates to [`EventEmitter::emit`].
    fn emit(&self, event: &str, payload: T) -> Result<bool, EmitError<T>>
    where
        T: fmt::Debug,
    {
        self.events().emit(event, payload)
    }

    /// Delegates to [`EventEmitter::listeners`].
    fn listeners(&self, event: &str) -> Vec<ListenerId> {
        self.events().listeners(event)
    }

    /// Delegates to [`EventEmitter::listener_count`].
    fn listener_count(&self, event: &str) -> usize {
        self.events().listener_count(event)
    }

    /// Delegates to [`EventEmitter::set_max_listeners`].
    fn set_max_listeners(&self, n: usize) -> &EventEmitter<T> {
        self.events().set_max_listeners(n)
    }

    /// Delegates to [`EventEmitter::remove_all_listeners`].
    fn remove_all_listeners(&self, event: Option<&str>) -> &EventEmitter<T> {
        self.events().remove_all_listeners(event)
    }
}

impl<T> Emits<T> for EventEmitter<T> {
    fn events(&self) -> &EventEmitter<T> {
        self
    }
}

/// Counts the listeners any [`Emits`] implementor has for `event`.
///
/// Convenience equal to `source.listeners(event).len()`.
///
/// # Example
/// ```
/// use herald::{listener_count, EventEmitter};
///
/// let emitter: EventEmitter<()> = EventEmitter::new();
/// emitter.on("tick", |_, _| {});
/// assert_eq!(listener_count(&emitter, "tick"), 1);
/// ```
pub fn listener_count<T>(source: &impl Emits<T>, event: &str) -> usize {
    source.events().listener_count(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Transfer {
        events: EventEmitter<u64>,
    }

    impl Emits<u64> for Transfer {
        fn events(&self) -> &EventEmitter<u64> {
            &self.events
        }
    }

    #[test]
    fn test_embedding_type_gains_the_operation_set() {
        let transfer = Transfer {
            events: EventEmitter::new(),
        };
        let total = Arc::new(AtomicUsize::new(0));

        let sum = Arc::clone(&total);
        let id = transfer.on("chunk", move |_, bytes| {
            sum.fetch_add(*bytes as usize, Ordering::Relaxed);
        });

        assert!(transfer.emit("chunk", 512).unwrap());
        assert!(transfer.emit("chunk", 256).unwrap());
        assert_eq!(total.load(Ordering::Relaxed), 768);

        assert_eq!(transfer.listeners("chunk"), vec![id]);
        assert!(transfer.off("chunk", id));
        assert!(!transfer.emit("chunk", 128).unwrap());
    }

    #[test]
    fn test_once_and_bulk_removal_through_the_trait() {
        let transfer = Transfer {
            events: EventEmitter::new(),
        };
        let hits = Arc::new(AtomicUsize::new(0));

        let count = Arc::clone(&hits);
        transfer.once("done", move |_, _| {
            count.fetch_add(1, Ordering::Relaxed);
        });
        transfer.on("done", |_, _| {});

        assert!(transfer.emit("done", 0).unwrap());
        assert!(transfer.emit("done", 0).unwrap());
        assert_eq!(hits.load(Ordering::Relaxed), 1);

        transfer.remove_all_listeners(None);
        assert_eq!(transfer.listener_count("done"), 0);
    }

    #[test]
    fn test_free_listener_count_accepts_emitters_and_embedders() {
        let emitter: EventEmitter<u64> = EventEmitter::new();
        emitter.on("tick", |_, _| {});
        emitter.on("tick", |_, _| {});
        assert_eq!(listener_count(&emitter, "tick"), 2);

        let transfer = Transfer {
            events: EventEmitter::new(),
        };
        assert_eq!(listener_count(&transfer, "tick"), 0);
    }
}
