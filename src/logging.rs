//! Log output setup.
//!
//! Library code only emits `tracing` events. `init` installs a plain fmt
//! subscriber: the browser console on wasm32, stderr elsewhere. Timestamps
//! are off because `SystemTime` is unavailable in the browser.

use std::sync::Once;

use tracing::Level;

static INIT: Once = Once::new();

/// Install the global subscriber. Later calls are ignored.
pub fn init(level: Level) {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .without_time()
            .with_ansi(false)
            .with_target(false)
            .with_writer(make_writer())
            .try_init();
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn make_writer() -> fn() -> std::io::Stderr {
    std::io::stderr
}

#[cfg(target_arch = "wasm32")]
fn make_writer() -> fn() -> console::ConsoleWriter {
    console::ConsoleWriter::default
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    /// Buffers one formatted event and hands it to `console.log` on drop.
    #[derive(Default)]
    pub struct ConsoleWriter {
        buf: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            if self.buf.is_empty() {
                return;
            }
            let line = String::from_utf8_lossy(&self.buf);
            web_sys::console::log_1(&line.trim_end().into());
        }
    }
}
