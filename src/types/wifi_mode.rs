//! WiFi access point modes

use std::fmt;

/// Canonical mode strings, indexed by `WifiMode as usize`.
static WIFI_MODE_NAMES: [&str; 3] = ["infrastructure", "ap", "adhoc"];

/// Operating mode of a wireless access point.
///
/// `Other` is the sentinel for modes netplan does not support; the
/// writer emits `infrastructure` as a lossy fallback for it and raises
/// a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WifiMode {
    /// Client of an access point (the default)
    #[default]
    Infrastructure,
    /// Act as an access point
    Ap,
    /// Ad-hoc / peer-to-peer network
    Adhoc,
    /// Unsupported mode sentinel
    Other,
}

impl WifiMode {
    /// The canonical string for a supported mode, `None` for `Other`.
    pub fn canonical_str(&self) -> Option<&'static str> {
        match self {
            WifiMode::Other => None,
            m => Some(WIFI_MODE_NAMES[*m as usize]),
        }
    }

    /// Whether netplan supports this mode natively.
    pub fn is_supported(&self) -> bool {
        !matches!(self, WifiMode::Other)
    }
}

impl fmt::Display for WifiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.canonical_str() {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "other"),
        }
    }
}
