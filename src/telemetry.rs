//! Logging setup.
//!
//! A `tracing-subscriber` fmt layer without timestamps (the wasm target has no
//! system clock for it). In the browser each formatted event goes to the
//! developer console; elsewhere to stderr.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_DIRECTIVE: &str = "finance_tracker=debug";

/// Installs the global subscriber. Returns false if one was already installed.
pub fn init(directive: &str) -> bool {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .with_writer(make_writer)
        .try_init()
        .is_ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn make_writer() -> std::io::Stderr {
    std::io::stderr()
}

#[cfg(target_arch = "wasm32")]
fn make_writer() -> ConsoleWriter {
    ConsoleWriter::default()
}

/// Buffers one formatted event and logs it to the browser console on drop.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
struct ConsoleWriter {
    buf: Vec<u8>,
}

#[cfg(target_arch = "wasm32")]
impl std::io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        web_sys::console::log_1(&line.trim_end().into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_refused() {
        // another test may already have installed it
        let _ = init(DEFAULT_DIRECTIVE);
        assert!(!init("info"));
    }
}
