//! Netplan YAML writer module

mod section_writer;
mod stream_writer;
mod text_writer;

pub use section_writer::SectionWriter;
pub use stream_writer::{YamlStreamWriter, YamlStreamWriterExt};
pub use text_writer::YamlTextWriter;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{NetplanError, Result};
use crate::netdef::NetworkDefinition;
use crate::notification::NotificationCollection;

/// Directory below the root where generated files land.
const CONF_SUBDIR: &str = "etc/netplan";

/// High-priority file prefix for NetworkManager connection profiles.
const NM_PREFIX: &str = "90-NM";

/// Low-priority file prefix for generic definitions.
const NETPLAN_PREFIX: &str = "10-netplan";

/// Netplan definition file writer
///
/// The single public entry point of the serializer: takes one
/// [`NetworkDefinition`], computes the output path and priority prefix,
/// and writes one YAML file. One-shot per call, synchronous, no state
/// shared across calls. A failure after partial output can leave a
/// truncated file at the target path; concurrent calls racing on the
/// same derived path are the caller's responsibility.
pub struct NetdefWriter<'a> {
    netdef: &'a NetworkDefinition,
    rootdir: PathBuf,
    /// Non-fatal diagnostics of the most recent write call.
    pub notifications: NotificationCollection,
}

impl<'a> NetdefWriter<'a> {
    /// Create a writer targeting the filesystem root.
    pub fn new(netdef: &'a NetworkDefinition) -> Self {
        Self::with_rootdir(netdef, "/")
    }

    /// Create a writer targeting a different root directory (supports
    /// sandboxed/test invocations).
    pub fn with_rootdir(netdef: &'a NetworkDefinition, rootdir: impl Into<PathBuf>) -> Self {
        Self {
            netdef,
            rootdir: rootdir.into(),
            notifications: NotificationCollection::new(),
        }
    }

    /// Compute the output file name.
    ///
    /// A definition carrying a NetworkManager uuid is written one file
    /// per connection profile under the high-priority prefix
    /// (`90-NM-<uuid>.yaml`); anything else gets the generic
    /// `10-netplan-<id>.yaml`. Lower prefixes are overridden by higher
    /// ones when the downstream merger sees the same setting twice.
    pub fn file_name(&self) -> String {
        match self.netdef.backend_settings.uuid.as_deref() {
            Some(uuid) => format!("{}-{}.yaml", NM_PREFIX, uuid),
            None => format!("{}-{}.yaml", NETPLAN_PREFIX, self.netdef.id),
        }
    }

    /// Full path of the file this writer produces:
    /// `<rootdir>/etc/netplan/<file_name>`.
    pub fn conf_path(&self) -> PathBuf {
        self.rootdir.join(CONF_SUBDIR).join(self.file_name())
    }

    /// Serialize the definition into its configuration file
    /// (truncate-or-create) and return the written path.
    ///
    /// Parent directories are not created; a missing `etc/netplan`
    /// directory fails with [`NetplanError::OutputOpen`].
    pub fn write(&mut self) -> Result<PathBuf> {
        let path = self.conf_path();
        let file = File::create(&path).map_err(|source| NetplanError::OutputOpen {
            path: path.clone(),
            source,
        })?;
        self.write_to_writer(BufWriter::new(file))?;
        Ok(path)
    }

    /// Serialize the definition into any writer.
    pub fn write_to_writer<W: Write>(&mut self, writer: W) -> Result<()> {
        self.notifications.clear();
        let mut stream_writer = YamlTextWriter::new(writer);
        self.write_yaml(&mut stream_writer)?;
        stream_writer.flush()
    }

    /// Serialize the definition into a byte vector (useful for testing).
    pub fn write_to_vec(&mut self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_to_writer(&mut buffer)?;
        Ok(buffer)
    }

    /// Emit the document skeleton and delegate the conditional sections.
    fn write_yaml<S: YamlStreamWriter>(&mut self, writer: &mut S) -> Result<()> {
        writer.start_stream()?;
        writer.mapping_start()?;
        writer.scalar_plain("network")?;
        writer.mapping_start()?;
        writer.write_pair_plain("version", "2")?;
        writer.scalar_plain(self.netdef.def_type.group_name())?;
        writer.mapping_start()?;
        writer.scalar_plain(&self.netdef.id)?;
        writer.mapping_start()?;
        // renderer always comes first
        writer.write_pair_plain("renderer", self.netdef.backend.name())?;

        SectionWriter::new(writer, &mut self.notifications).write_body(self.netdef)?;

        writer.mapping_end()?; // id
        writer.mapping_end()?; // type group
        writer.mapping_end()?; // network
        writer.mapping_end()?; // document root
        writer.end_stream()
    }
}

/// Convenience function to write one definition below `rootdir`.
pub fn write_netdef(netdef: &NetworkDefinition, rootdir: impl AsRef<Path>) -> Result<PathBuf> {
    let mut writer = NetdefWriter::with_rootdir(netdef, rootdir.as_ref());
    writer.write()
}
