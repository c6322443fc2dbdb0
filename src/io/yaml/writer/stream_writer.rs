//! YAML stream writer trait and convenience combinators

use crate::error::Result;

/// Trait for emitting a YAML document as a forward-only sequence of
/// structural events.
///
/// Operations must nest correctly: every `mapping_start` is balanced by
/// exactly one `mapping_end` in last-opened-first-closed order, scalars
/// alternate key/value inside an open mapping, and no event is valid
/// after `end_stream`. Violations are structural errors, not silently
/// repaired.
///
/// Quoting decisions are made here and nowhere else: callers declare
/// plain or quoted intent per scalar. Plain form is for identifiers and
/// keywords; quoted form is for values that must not be YAML-reinterpreted
/// (free-text names, SSIDs that could parse as numbers or booleans).
pub trait YamlStreamWriter {
    /// Begin the document stream.
    fn start_stream(&mut self) -> Result<()>;

    /// Finalize the document; all mappings must already be closed.
    fn end_stream(&mut self) -> Result<()>;

    /// Open a mapping. At the top level this opens the document root;
    /// inside a mapping it consumes the preceding key scalar.
    fn mapping_start(&mut self) -> Result<()>;

    /// Close the most recently opened mapping.
    fn mapping_end(&mut self) -> Result<()>;

    /// Emit a scalar in plain form.
    fn scalar_plain(&mut self, value: &str) -> Result<()>;

    /// Emit a scalar in double-quoted form.
    fn scalar_quoted(&mut self, value: &str) -> Result<()>;

    /// Flush any buffered output.
    fn flush(&mut self) -> Result<()>;
}

/// Extension trait for common key/value emission patterns.
pub trait YamlStreamWriterExt: YamlStreamWriter {
    /// Write `key: value` with both scalars in plain form.
    fn write_pair_plain(&mut self, key: &str, value: &str) -> Result<()> {
        self.scalar_plain(key)?;
        self.scalar_plain(value)
    }

    /// Write `key: "value"` with a plain key and a quoted value.
    fn write_pair_quoted(&mut self, key: &str, value: &str) -> Result<()> {
        self.scalar_plain(key)?;
        self.scalar_quoted(value)
    }

    /// Write `key: "value"` only when the value is present.
    fn write_optional_quoted(&mut self, key: &str, value: Option<&str>) -> Result<()> {
        match value {
            Some(v) => self.write_pair_quoted(key, v),
            None => Ok(()),
        }
    }

    /// Write `key: true` only when the flag is set; absence means false.
    fn write_flag(&mut self, key: &str, set: bool) -> Result<()> {
        if set {
            self.write_pair_plain(key, "true")
        } else {
            Ok(())
        }
    }
}

// Auto-implement the extension trait for all stream writers
impl<T: YamlStreamWriter + ?Sized> YamlStreamWriterExt for T {}
