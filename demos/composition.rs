//! # Composition Example
//!
//! Shows how an ordinary type gains the emitter operation set by embedding
//! an [`EventEmitter`] and implementing [`Emits`], plus registry observers
//! watching registrations come and go.
//!
//! ## Run
//! ```bash
//! cargo run --example composition
//! ```

use herald::{listener_count, Emits, EventEmitter, ListenerId};

/// A download job that publishes progress to whoever is interested.
struct Download {
    url: &'static str,
    events: EventEmitter<u64>,
}

impl Download {
    fn new(url: &'static str) -> Self {
        Self {
            url,
            events: EventEmitter::new(),
        }
    }

    fn run(&self) {
        for received in [256u64, 512, 1024] {
            self.emit("progress", received).unwrap();
        }
        self.emit("done", 1792).unwrap();
    }
}

impl Emits<u64> for Download {
    fn events(&self) -> &EventEmitter<u64> {
        &self.events
    }
}

fn main() {
    let download = Download::new("https://example.com/archive.tar.gz");

    // Watch the registry itself: every registration is announced before
    // the listener lands.
    download
        .events()
        .observe_new_listeners(|_, event: &str, id: ListenerId| {
            println!(" ├─► registered {id:?} on \"{event}\"");
        });

    let url = download.url;
    download.on("progress", move |_, bytes| {
        println!(" ├─► {url}: {bytes} bytes received");
    });
    download.once("done", |_, total| {
        println!(" └─► finished with {total} bytes");
    });

    println!(
        "Listeners: progress={}, done={}",
        listener_count(&download, "progress"),
        listener_count(&download, "done"),
    );

    download.run();
}
