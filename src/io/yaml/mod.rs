//! YAML serialization support

pub mod writer;

pub use writer::{write_netdef, NetdefWriter, YamlStreamWriter, YamlStreamWriterExt, YamlTextWriter};
