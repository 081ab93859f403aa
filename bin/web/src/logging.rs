//! Tracing setup for the browser.
//!
//! Events are formatted by `tracing-subscriber` and written to the browser
//! console, one console call per event, at the console level matching the
//! event level.

use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wasm_bindgen::JsValue;

/// Builds the filter, falling back to `info` for malformed directives.
pub fn filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|e| {
        web_log(Level::WARN, &format!("invalid log filter '{directives}': {e}"));
        EnvFilter::new("info")
    })
}

/// Installs the global subscriber.
pub fn init(directives: &str) {
    tracing_subscriber::registry()
        .with(filter(directives))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_ansi(false)
                .with_writer(ConsoleMakeWriter),
        )
        .init();
}

fn web_log(level: Level, line: &str) {
    let line = JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&line),
        Level::WARN => web_sys::console::warn_1(&line),
        Level::INFO => web_sys::console::info_1(&line),
        _ => web_sys::console::debug_1(&line),
    }
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and flushes it to the console on drop.
struct ConsoleWriter {
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

    /// Takes the buffered event as one line, leaving the buffer empty.
    /// Returns `None` if nothing but whitespace was written.
    fn take_line(&mut self) -> Option<String> {
        let bytes = std::mem::take(&mut self.buffer);
        let line = String::from_utf8_lossy(&bytes).trim_end().to_string();
        (!line.trim().is_empty()).then_some(line)
    }
}

impl io::Write for ConsoleWriter {
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
        if let Some(line) = self.take_line() {
            web_log(self.level, &line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn valid_directives_are_kept() {
        let filter = filter("warn,ballotbox_web=debug");
        assert!(filter.to_string().contains("ballotbox_web=debug"));
    }

    #[test]
    fn writes_are_joined_into_one_line() {
        let mut writer = ConsoleWriter::new(Level::DEBUG);
        writer.write_all(b"  INFO ballotbox_web: hello ").expect("write");
        writer.write_all(b"world\n").expect("write");

        assert_eq!(
            writer.take_line().as_deref(),
            Some("  INFO ballotbox_web: hello world")
        );
        assert!(writer.buffer.is_empty());
        assert_eq!(writer.take_line(), None);
    }

    #[test]
    fn blank_output_yields_no_line() {
        let mut writer = ConsoleWriter::new(Level::INFO);
        writer.write_all(b" \n").expect("write");
        assert_eq!(writer.take_line(), None);
    }

    #[test]
    fn untargeted_writer_logs_at_info() {
        assert_eq!(ConsoleMakeWriter.make_writer().level, Level::INFO);
    }
}
