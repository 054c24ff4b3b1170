//! Tracing output for the browser.
//!
//! The fmt subscriber formats each event into a [`ConsoleWriter`]; the writer
//! forwards the finished line to `console.error`/`warn`/`info`/`debug` when it
//! is dropped, so the browser's own level filter keeps working.

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;
use wasm_bindgen::JsValue;
use web_sys::console;

pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buffer);
        let line = text.trim_end();
        if line.is_empty() {
            return;
        }
        let value = JsValue::from_str(line);
        if self.level == Level::ERROR {
            console::error_1(&value);
        } else if self.level == Level::WARN {
            console::warn_1(&value);
        } else if self.level == Level::INFO {
            console::info_1(&value);
        } else {
            console::debug_1(&value);
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Install the global subscriber and route panics to `console.error`.
pub fn init() {
    // No process environment in the browser, so this falls back to "info".
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .init();

    std::panic::set_hook(Box::new(|info| {
        console::error_1(&format!("panic: {}", info).into());
    }));
}
