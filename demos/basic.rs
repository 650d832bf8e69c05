//! # Basic Emitter Example
//!
//! Shows the core registry operations: register listeners, emit payloads,
//! one-shot registration, and removal by handle.
//!
//! The demo also drops the soft listener limit to 1 so the leak diagnostic
//! is visible (run with `RUST_LOG=warn`).
//!
//! ## Run
//! ```bash
//! RUST_LOG=warn cargo run --example basic
//! ```

use herald::EventEmitter;

fn main() {
    env_logger::init();

    let emitter: EventEmitter<String> = EventEmitter::new();

    // Two listeners on the same channel; the one added last fires first.
    emitter.on("chat", |_, text| println!(" ├─► [fires second] {text}"));
    let newer = emitter.on("chat", |_, text| println!(" ├─► [fires first]  {text}"));

    // One-shot: fires on the next emission, then removes itself.
    emitter.once("chat", |_, text| println!(" ├─► [once]  {text}"));

    println!("First emission:");
    emitter.emit("chat", "hello".to_string()).unwrap();

    println!("Second emission (one-shot is gone):");
    emitter.emit("chat", "hello again".to_string()).unwrap();

    emitter.off("chat", newer);
    println!("Third emission (one listener left):");
    emitter.emit("chat", "still here".to_string()).unwrap();

    println!(
        " └─► {} listener(s) remain on \"chat\"",
        emitter.listener_count("chat")
    );

    // Exceeding the soft limit warns (once per channel) but never blocks.
    emitter.set_max_listeners(1);
    emitter.on("busy", |_, _| {});
    emitter.on("busy", |_, _| {});
    println!(
        "Registered {} listeners on \"busy\" past the soft limit",
        emitter.listener_count("busy")
    );
}
