//! Network definition types

use std::fmt;

/// Canonical YAML group names, indexed by `DefType as usize`.
static DEF_TYPE_NAMES: [&str; 8] = [
    "ethernets",
    "wifis",
    "modems",
    "bridges",
    "bonds",
    "vlans",
    "tunnels",
    "others",
];

/// The kind of network interface/connection a definition describes.
///
/// `Other` marks an opaque connection type netplan does not interpret:
/// such definitions are preserved verbatim through backend settings
/// passthrough instead of being reinterpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DefType {
    #[default]
    Ethernet,
    Wifi,
    Modem,
    Bridge,
    Bond,
    Vlan,
    Tunnel,
    Other,
}

impl DefType {
    /// The plural group name under which definitions of this type are
    /// nested in the document (e.g. `wifis`, `modems`).
    pub fn group_name(&self) -> &'static str {
        DEF_TYPE_NAMES[*self as usize]
    }

    /// Whether this is the opaque/unknown connection type.
    pub fn is_other(&self) -> bool {
        matches!(self, DefType::Other)
    }
}

impl fmt::Display for DefType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.group_name())
    }
}
