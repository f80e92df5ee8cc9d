//! Console Logger
//!
//! `tracing-subscriber` fmt output routed to the browser console, with the
//! most recent lines kept in memory for in-app diagnostics.
//!
//! On non-wasm targets lines go to stderr instead, so the same setup works
//! under `cargo test`.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Default number of lines kept by [`init`].
pub const DEFAULT_CAPACITY: usize = 200;

static RECENT: OnceLock<Arc<RecentLines>> = OnceLock::new();

/// Circular buffer of formatted log lines.
#[derive(Debug)]
pub struct RecentLines {
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RecentLines {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Append a line, dropping the oldest when full
    pub fn push(&self, line: String) {
        let Ok(mut lines) = self.lines.lock() else { return };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Snapshot, oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// `MakeWriter` that hands each event to a [`ConsoleWriter`].
#[derive(Clone, Debug)]
pub struct ConsoleMakeWriter {
    recent: Arc<RecentLines>,
}

impl ConsoleMakeWriter {
    pub fn new(recent: Arc<RecentLines>) -> Self {
        Self { recent }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO, self.recent.clone())
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level(), self.recent.clone())
    }
}

/// Buffers one formatted event and emits it on drop.
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
    recent: Arc<RecentLines>,
}

impl ConsoleWriter {
    fn new(level: Level, recent: Arc<RecentLines>) -> Self {
        Self { level, buf: Vec::new(), recent }
    }
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
        let line = String::from_utf8_lossy(&self.buf).trim_end().to_string();
        if line.is_empty() {
            return;
        }
        emit(self.level, &line);
        self.recent.push(line);
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::DEBUG | Level::TRACE => web_sys::console::debug_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}

/// Install the global subscriber.
///
/// Calling it twice is harmless: the second call reports the error from
/// `try_init` and leaves the first subscriber in place.
pub fn init(level: Level, capacity: usize) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let recent = RECENT
        .get_or_init(|| Arc::new(RecentLines::new(capacity)))
        .clone();

    tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter::new(recent))
        .with_max_level(level)
        .without_time()
        .with_target(false)
        .try_init()
}

/// Lines captured since [`init`], oldest first
pub fn recent_lines() -> Vec<String> {
    RECENT.get().map(|r| r.snapshot()).unwrap_or_default()
}
