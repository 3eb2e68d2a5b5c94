//! Log subscriber for the page. In the browser every formatted event is routed
//! to the console method matching its level, so errors still show up red in
//! devtools the way `console.error` calls would.

use tracing_subscriber::EnvFilter;

use super::config::DEFAULT_LOG_LEVEL;

/// Builds the level filter, falling back to the default when the configured
/// directive does not parse.
pub fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive.trim()).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

#[cfg(target_arch = "wasm32")]
pub use console::init;

#[cfg(target_arch = "wasm32")]
mod console {
    use super::env_filter;
    use crate::common::errors::SetupError;
    use std::io;
    use tracing::{Level, Metadata};
    use tracing_subscriber::{fmt, fmt::MakeWriter, layer::SubscriberExt, Registry};
    use wasm_bindgen::JsValue;

    /// Installs the global subscriber; fails if one is already set.
    pub fn init(directive: &str) -> Result<(), SetupError> {
        let fmt_layer = fmt::layer()
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .with_writer(ConsoleMakeWriter);

        let subscriber = Registry::default()
            .with(fmt_layer)
            .with(env_filter(directive));

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|err| SetupError::Telemetry(err.to_string()))
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

    /// Buffers one formatted event and emits it on drop.
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
            if self.buffer.is_empty() {
                return;
            }
            let line = String::from_utf8_lossy(&self.buffer);
            let value = JsValue::from_str(line.trim_end());
            match self.level {
                Level::ERROR => web_sys::console::error_1(&value),
                Level::WARN => web_sys::console::warn_1(&value),
                Level::INFO => web_sys::console::log_1(&value),
                _ => web_sys::console::debug_1(&value),
            }
        }
    }
}
