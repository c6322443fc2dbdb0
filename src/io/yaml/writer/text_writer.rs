//! Block-style YAML text emitter

use std::io::Write;

use crate::error::{NetplanError, Result};

use super::stream_writer::YamlStreamWriter;

const INDENT_WIDTH: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StreamState {
    Idle,
    Open,
    Ended,
}

/// One open mapping on the nesting stack.
struct Mapping {
    /// Formatted key of this mapping in its parent; `None` for the
    /// document root mapping.
    key: Option<String>,
    /// Whether the `key:` header line has been written. Deferred until
    /// the first entry so an empty mapping can be rendered in flow form
    /// (`key: {}`) on its own key line.
    header_written: bool,
    entries: usize,
}

/// Streaming block-style YAML writer over any [`Write`] sink.
///
/// Indents two spaces per nesting level, renders empty mappings as `{}`
/// and double-quotes scalars on request, escaping `\` and `"`. Structural
/// misuse (unbalanced mappings, a scalar outside any mapping, a key left
/// without a value, events after the stream ended) fails with
/// [`NetplanError::Emitter`]; I/O failures fail with [`NetplanError::Io`]
/// and no further writes are attempted.
pub struct YamlTextWriter<W: Write> {
    writer: W,
    state: StreamState,
    stack: Vec<Mapping>,
    pending_key: Option<String>,
}

impl<W: Write> YamlTextWriter<W> {
    /// Create a new writer emitting into `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            state: StreamState::Idle,
            stack: Vec::new(),
            pending_key: None,
        }
    }

    /// Get the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn check_open(&self) -> Result<()> {
        match self.state {
            StreamState::Open => Ok(()),
            StreamState::Idle => Err(NetplanError::Emitter("stream not started".into())),
            StreamState::Ended => Err(NetplanError::Emitter("stream already ended".into())),
        }
    }

    /// Write the deferred `key:` header lines of any mapping that has
    /// not produced output yet. Unwritten headers always form a suffix
    /// of the stack, so a single in-order pass suffices.
    fn flush_headers(&mut self) -> Result<()> {
        for depth in 0..self.stack.len() {
            if self.stack[depth].header_written {
                continue;
            }
            let indent = (depth - 1) * INDENT_WIDTH;
            let key = self.stack[depth].key.as_deref().unwrap_or_default();
            writeln!(self.writer, "{:indent$}{}:", "", key, indent = indent)?;
            self.stack[depth].header_written = true;
        }
        Ok(())
    }

    fn scalar(&mut self, formatted: String) -> Result<()> {
        self.check_open()?;
        if self.stack.is_empty() {
            return Err(NetplanError::Emitter("scalar outside of mapping".into()));
        }
        match self.pending_key.take() {
            // First scalar of an entry is its key; held back until we
            // know whether the value is a scalar or a nested mapping.
            None => {
                self.pending_key = Some(formatted);
            }
            Some(key) => {
                self.flush_headers()?;
                let indent = (self.stack.len() - 1) * INDENT_WIDTH;
                writeln!(self.writer, "{:indent$}{}: {}", "", key, formatted, indent = indent)?;
                if let Some(top) = self.stack.last_mut() {
                    top.entries += 1;
                }
            }
        }
        Ok(())
    }

    fn quote(value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);
        out.push('"');
        for c in value.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '"' => out.push_str("\\\""),
                c => out.push(c),
            }
        }
        out.push('"');
        out
    }
}

impl<W: Write> YamlStreamWriter for YamlTextWriter<W> {
    fn start_stream(&mut self) -> Result<()> {
        if self.state != StreamState::Idle {
            return Err(NetplanError::Emitter("stream already started".into()));
        }
        self.state = StreamState::Open;
        Ok(())
    }

    fn end_stream(&mut self) -> Result<()> {
        self.check_open()?;
        if !self.stack.is_empty() {
            return Err(NetplanError::Emitter("unclosed mapping at end of stream".into()));
        }
        if self.pending_key.is_some() {
            return Err(NetplanError::Emitter("dangling key at end of stream".into()));
        }
        self.state = StreamState::Ended;
        self.writer.flush()?;
        Ok(())
    }

    fn mapping_start(&mut self) -> Result<()> {
        self.check_open()?;
        if self.stack.is_empty() {
            // Document root mapping; produces no output of its own.
            if self.pending_key.is_some() {
                return Err(NetplanError::Emitter("key before document root mapping".into()));
            }
            self.stack.push(Mapping {
                key: None,
                header_written: true,
                entries: 0,
            });
            return Ok(());
        }
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| NetplanError::Emitter("nested mapping requires a key".into()))?;
        if let Some(top) = self.stack.last_mut() {
            top.entries += 1;
        }
        self.stack.push(Mapping {
            key: Some(key),
            header_written: false,
            entries: 0,
        });
        Ok(())
    }

    fn mapping_end(&mut self) -> Result<()> {
        self.check_open()?;
        if self.pending_key.is_some() {
            return Err(NetplanError::Emitter("mapping closed with dangling key".into()));
        }
        let mapping = self
            .stack
            .pop()
            .ok_or_else(|| NetplanError::Emitter("mapping_end without mapping_start".into()))?;
        if let Some(key) = mapping.key {
            if mapping.entries == 0 {
                // Empty mapping collapses to flow form on the key line.
                self.flush_headers()?;
                let indent = (self.stack.len() - 1) * INDENT_WIDTH;
                writeln!(self.writer, "{:indent$}{}: {{}}", "", key, indent = indent)?;
            }
        }
        Ok(())
    }

    fn scalar_plain(&mut self, value: &str) -> Result<()> {
        self.scalar(value.to_string())
    }

    fn scalar_quoted(&mut self, value: &str) -> Result<()> {
        self.scalar(Self::quote(value))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
