//! Renderer module
//!
//! Two output shapes:
//! - the whole index as one JSON object, laid out as `{"word": [0, 4]}`
//!   with non-ASCII characters escaped
//! - one `"<word> <count>"` line per pair, written through a `LineSink`
//!   that notices when the consumer has gone away

use serde::Serialize;
use serde_json::ser::Formatter;
use std::io::{self, ErrorKind, Write};

use tracing::debug;

use crate::core::model::{Index, WordCount};

/// Render configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub pretty: bool,
}

impl RenderConfig {
    pub fn with_pretty(pretty: bool) -> Self {
        Self { pretty }
    }
}

/// Single-line JSON with `", "` and `": "` separators and `\uXXXX`
/// escapes for everything outside ASCII
struct InterchangeFormatter;

impl Formatter for InterchangeFormatter {
    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (offset, c) in fragment.char_indices() {
            if c.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..offset].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = offset + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Render the index as a single JSON object
pub fn render_index(index: &Index, config: RenderConfig) -> serde_json::Result<String> {
    if config.pretty {
        return serde_json::to_string_pretty(index);
    }

    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, InterchangeFormatter);
    index.serialize(&mut serializer)?;
    // the formatter only emits ASCII
    Ok(String::from_utf8(out)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
}

/// Line writer that turns a closed consumer into an observable state
/// instead of an error.
pub struct LineSink<W: Write> {
    writer: W,
    closed: bool,
}

impl<W: Write> LineSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            closed: false,
        }
    }

    /// Whether the consumer has stopped reading
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Write one line. Once the consumer has closed this is a no-op.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        let written = self
            .writer
            .write_all(line.as_bytes())
            .and_then(|_| self.writer.write_all(b"\n"));
        self.observe(written)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        let flushed = self.writer.flush();
        self.observe(flushed)
    }

    fn observe(&mut self, result: io::Result<()>) -> io::Result<()> {
        match result {
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                debug!("output consumer closed");
                self.closed = true;
                Ok(())
            }
            other => other,
        }
    }
}

/// How line emission ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    Completed,
    ConsumerClosed,
}

/// Emit each pair as `"<word> <count>"`, stopping as soon as the sink closes
pub fn emit_counts<W: Write>(
    sink: &mut LineSink<W>,
    pairs: &[WordCount],
) -> io::Result<Emission> {
    for pair in pairs {
        if sink.is_closed() {
            return Ok(Emission::ConsumerClosed);
        }
        sink.write_line(&pair.to_string())?;
    }
    sink.flush()?;

    if sink.is_closed() {
        Ok(Emission::ConsumerClosed)
    } else {
        Ok(Emission::Completed)
    }
}
