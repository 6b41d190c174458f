use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Installs a `tracing` subscriber that prints to the browser console.
pub fn init(level: Level) {
    let result = tracing_subscriber::fmt()
        .with_writer(ConsoleWriter::default())
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init();
    if let Err(e) = result {
        web_sys::console::error_1(&format!("Failed to install logger: {}", e).into());
    }
}

/// Buffers one formatted event and hands it to `console` on drop.
#[derive(Debug, Default)]
pub struct ConsoleWriter {
    buf: Vec<u8>,
    level: Option<Level>,
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
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }
        let js = JsValue::from_str(line);
        match self.level {
            Some(level) if level == Level::ERROR => web_sys::console::error_1(&js),
            Some(level) if level == Level::WARN => web_sys::console::warn_1(&js),
            Some(level) if level > Level::INFO => web_sys::console::debug_1(&js),
            _ => web_sys::console::log_1(&js),
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::default()
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            buf: Vec::new(),
            level: Some(*meta.level()),
        }
    }
}
