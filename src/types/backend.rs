//! Network management backends

use std::fmt;

/// Renderer names, indexed by `Backend as usize`.
static BACKEND_NAMES: [&str; 2] = ["networkd", "NetworkManager"];

/// The downstream daemon that renders/applies a generated file.
///
/// Serialized as the `renderer` value of the definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Backend {
    /// systemd-networkd
    #[default]
    Networkd,
    /// NetworkManager
    NetworkManager,
}

impl Backend {
    /// The canonical renderer name emitted into the document.
    pub fn name(&self) -> &'static str {
        BACKEND_NAMES[*self as usize]
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
