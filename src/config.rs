//! # Emitter configuration.
//!
//! Provides [`EmitterConfig`] centralized settings for an emitter instance.
//!
//! Config is used in one place: [`EventEmitter::with_config`]. The plain
//! constructor ([`EventEmitter::new`]) is equivalent to
//! `EventEmitter::with_config(EmitterConfig::default())`.
//!
//! ## Sentinel values
//! - `max_listeners = 0` → the listener-leak diagnostic is disabled
//! - `raise_unhandled_error = false` → legacy behavior: an unhandled
//!   `"error"` emission reports "no listeners" instead of failing
//!
//! [`EventEmitter::with_config`]: crate::EventEmitter::with_config
//! [`EventEmitter::new`]: crate::EventEmitter::new

/// Configuration for a single [`EventEmitter`](crate::EventEmitter).
///
/// Defines:
/// - **Leak diagnostic**: the soft per-event listener limit
/// - **Error-channel behavior**: strict vs legacy handling of an unhandled
///   `"error"` emission
///
/// ## Field semantics
/// - `max_listeners`: soft limit per event name (`0` = never warn)
/// - `raise_unhandled_error`: `true` = emitting `"error"` with no listener
///   returns [`EmitError::Unhandled`](crate::EmitError::Unhandled);
///   `false` = it is treated like any other unheard event
///
/// ## Notes
/// Both fields are public for flexibility. The listener limit can also be
/// changed later through
/// [`set_max_listeners`](crate::EventEmitter::set_max_listeners); the
/// error-channel behavior is fixed at construction.
#[derive(Clone, Copy, Debug)]
pub struct EmitterConfig {
    /// Soft limit on listeners registered for a single event name.
    ///
    /// Exceeding the limit never blocks registration; it only emits a
    /// one-time `log::warn!` diagnostic for that event name. `0` disables
    /// the diagnostic entirely.
    pub max_listeners: usize,

    /// Whether an unhandled `"error"` emission fails loudly.
    ///
    /// - `true` (canonical): `emit("error", payload)` with no registered
    ///   listener returns `Err(EmitError::Unhandled { payload })`, handing
    ///   the payload back unchanged.
    /// - `false` (legacy): the emission reports `Ok(false)` like any other
    ///   event nobody listens to.
    pub raise_unhandled_error: bool,
}

impl EmitterConfig {
    /// Returns the listener limit as an `Option`.
    ///
    /// - `None` → diagnostic disabled
    /// - `Some(n)` → warn once per event name when `n` is exceeded
    #[inline]
    pub fn listener_limit(&self) -> Option<usize> {
        if self.max_listeners == 0 {
            None
        } else {
            Some(self.max_listeners)
        }
    }
}

impl Default for EmitterConfig {
    /// Default configuration:
    ///
    /// - `max_listeners = 10` (conventional soft limit)
    /// - `raise_unhandled_error = true` (strict error channel)
    fn default() -> Self {
        Self {
            max_listeners: 10,
            raise_unhandled_error: true,
        }
    }
}
