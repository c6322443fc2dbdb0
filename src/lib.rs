//! # netplan-render
//!
//! A pure Rust library for serializing in-memory network definitions
//! into netplan YAML configuration files, as consumed by the
//! NetworkManager and systemd-networkd backends.
//!
//! The crate is write-only: one [`NetworkDefinition`] in, one file out.
//! Parsing YAML into definitions, validating them and applying the
//! generated files to the running network stack are the jobs of
//! external collaborators.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use netplan_render::{Backend, DefType, NetworkDefinition, NetdefWriter};
//!
//! let mut nd = NetworkDefinition::new("eth0", DefType::Ethernet, Backend::Networkd);
//! nd.wake_on_lan = true;
//!
//! // Writes <rootdir>/etc/netplan/10-netplan-eth0.yaml
//! let path = NetdefWriter::with_rootdir(&nd, "/tmp/sandbox").write()?;
//! # Ok::<(), netplan_render::NetplanError>(())
//! ```
//!
//! ## Architecture
//!
//! The serializer is layered bottom-up:
//!
//! - `YamlStreamWriter` - forward-only structural events with
//!   integrated error propagation; the sole place quoting decisions
//!   are made
//! - `YamlTextWriter` - block-style text emitter over any `Write`
//! - `SectionWriter` - the match clause, backend settings (including
//!   the opaque passthrough map) and wifi access-point sections
//! - `NetdefWriter` - the public entry point: file naming with the
//!   priority prefix contract, path composition, document skeleton
//!
//! ## File naming
//!
//! Definitions carrying a NetworkManager connection profile uuid are
//! written as `90-NM-<uuid>.yaml`; everything else becomes
//! `10-netplan-<id>.yaml`. The numeric prefix is the override order
//! consumed by whatever tool merges the generated files downstream.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod io;
pub mod netdef;
pub mod notification;
pub mod types;

// Re-export commonly used types
pub use error::{NetplanError, Result};
pub use netdef::{AccessPoint, BackendSettings, MatchClause, ModemParams, NetworkDefinition};
pub use notification::{Notification, NotificationCollection, NotificationType};
pub use types::{Backend, DefType, WifiMode};

// Re-export I/O types
pub use io::yaml::{write_netdef, NetdefWriter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
