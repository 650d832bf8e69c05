//! # Error Channel Example
//!
//! Shows both behaviors of the reserved `"error"` channel:
//! - handled: the listener receives the payload like any other event;
//! - unhandled (strict, the default): `emit` fails loudly and hands the
//!   payload back unchanged;
//! - unhandled (legacy config): the emission reports "no listeners".
//!
//! ## Run
//! ```bash
//! cargo run --example error_channel
//! ```

use std::fmt;

use herald::{EmitError, EmitterConfig, EventEmitter, ERROR_EVENT};

#[derive(Debug)]
struct TransferError {
    reason: &'static str,
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transfer failed: {}", self.reason)
    }
}

impl std::error::Error for TransferError {}

fn main() {
    // Handled: the error flows to the listener.
    let emitter: EventEmitter<TransferError> = EventEmitter::new();
    emitter.on(ERROR_EVENT, |_, err| println!(" ├─► handled: {err}"));
    emitter
        .emit(ERROR_EVENT, TransferError { reason: "connection reset" })
        .unwrap();

    // Unhandled, strict: the payload comes back to the caller.
    let strict: EventEmitter<TransferError> = EventEmitter::new();
    match strict.emit(ERROR_EVENT, TransferError { reason: "disk full" }) {
        Ok(_) => unreachable!("strict emitters fail loudly"),
        Err(err @ EmitError::Unhandled { .. }) => {
            println!(" ├─► unhandled ({}): {}", err.as_label(), err.into_payload());
        }
        Err(_) => unreachable!(),
    }

    // Unhandled, legacy: behaves like any other unheard event.
    let legacy: EventEmitter<TransferError> = EventEmitter::with_config(EmitterConfig {
        raise_unhandled_error: false,
        ..EmitterConfig::default()
    });
    let delivered = legacy
        .emit(ERROR_EVENT, TransferError { reason: "timeout" })
        .unwrap();
    println!(" └─► legacy emitter delivered to {delivered} listeners");
}
