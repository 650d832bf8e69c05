//! Error types used by the emitter.
//!
//! This module defines one error enum:
//!
//! - [`EmitError`] — returned by `emit` when the reserved `"error"` channel
//!   fires with nobody listening.
//!
//! There is no invalid-argument error: listener parameters are typed as
//! callables and the listener limit is unsigned, so a non-invocable
//! listener or a negative limit does not compile.

use std::fmt;

use thiserror::Error;

/// # Errors produced by event emission.
///
/// The only fallible operation is emitting on the reserved `"error"`
/// channel (see [`ERROR_EVENT`](crate::ERROR_EVENT)) while no listener is
/// registered for it. Every other emission reports delivery through the
/// `Ok(bool)` side.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum EmitError<T>
where
    T: fmt::Debug,
{
    /// An `"error"` event was emitted with no listener registered for it.
    ///
    /// The payload is handed back unchanged so the caller can inspect,
    /// rethrow, or log the exact value that went unheard.
    #[error("uncaught, unspecified \"error\" event")]
    Unhandled {
        /// The payload originally passed to `emit`.
        payload: T,
    },
}

impl<T> EmitError<T>
where
    T: fmt::Debug,
{
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use herald::EmitError;
    ///
    /// let err: EmitError<&str> = EmitError::Unhandled { payload: "boom" };
    /// assert_eq!(err.as_label(), "unhandled_error_event");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EmitError::Unhandled { .. } => "unhandled_error_event",
        }
    }

    /// Consumes the error and returns the payload that went unheard.
    ///
    /// # Example
    /// ```
    /// use herald::{EventEmitter, ERROR_EVENT};
    ///
    /// let emitter: EventEmitter<String> = EventEmitter::new();
    /// let err = emitter.emit(ERROR_EVENT, "boom".to_string()).unwrap_err();
    /// assert_eq!(err.into_payload(), "boom");
    /// ```
    pub fn into_payload(self) -> T {
        match self {
            EmitError::Unhandled { payload } => payload,
        }
    }
}
