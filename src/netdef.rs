//! In-memory network definition model
//!
//! These structures are produced by an external parsing subsystem and are
//! read-only to the writers in this crate: one [`NetworkDefinition`] in,
//! one YAML file out.

use indexmap::IndexMap;

use crate::types::{Backend, DefType, WifiMode};

/// One network interface/connection's complete configuration.
#[derive(Debug, Clone, Default)]
pub struct NetworkDefinition {
    /// Unique identifier; used for file naming and as the YAML mapping key.
    pub id: String,
    /// Connection type; `DefType::Other` is opaque to netplan.
    pub def_type: DefType,
    /// Which network manager renders this definition.
    pub backend: Backend,
    /// Optional structural device-matching clause.
    pub match_clause: Option<MatchClause>,
    /// Wake-on-LAN flag; emitted only when true.
    pub wake_on_lan: bool,
    /// Modem (GSM/CDMA) parameters; fields emitted only when present.
    pub modem_params: ModemParams,
    /// Wireless access points keyed by SSID (keys unique).
    pub access_points: IndexMap<String, AccessPoint>,
    /// NetworkManager-specific settings and passthrough.
    pub backend_settings: BackendSettings,
}

impl NetworkDefinition {
    /// Create a new definition with the given identity; all optional
    /// fields start out empty.
    pub fn new(id: impl Into<String>, def_type: DefType, backend: Backend) -> Self {
        Self {
            id: id.into(),
            def_type,
            backend,
            ..Default::default()
        }
    }
}

/// Device-matching criteria.
///
/// Presence of the clause itself is meaningful: netplan defines a
/// connection per interface while NetworkManager profiles apply to any
/// interface of matching type, so an empty clause is still emitted (as
/// `match: {}`) to keep the renderer from forcing the definition id as
/// the interface name.
#[derive(Debug, Clone, Default)]
pub struct MatchClause {
    /// The originally matched device name, if any.
    pub original_name: Option<String>,
}

/// Modem parameters used to auto-detect GSM vs CDMA connections.
#[derive(Debug, Clone, Default)]
pub struct ModemParams {
    pub auto_config: bool,
    pub apn: Option<String>,
    pub device_id: Option<String>,
    pub network_id: Option<String>,
    pub pin: Option<String>,
    pub sim_id: Option<String>,
    pub sim_operator_id: Option<String>,
}

/// One wireless network a wifi-type definition may connect to.
///
/// The SSID is the key of the access point in
/// [`NetworkDefinition::access_points`].
#[derive(Debug, Clone, Default)]
pub struct AccessPoint {
    /// Hidden-SSID flag; emitted only when true.
    pub hidden: bool,
    /// Operating mode; always emitted.
    pub mode: WifiMode,
    /// NetworkManager-specific settings scoped to this access point.
    pub backend_settings: BackendSettings,
}

impl AccessPoint {
    /// Create an access point in the given mode.
    pub fn new(mode: WifiMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }
}

/// NetworkManager-specific backend settings.
///
/// The passthrough map carries settings netplan does not interpret:
/// opaque string key/value pairs handed through to the backend verbatim.
/// `IndexMap` preserves insertion order, so repeated writes of the same
/// definition produce byte-identical output.
#[derive(Debug, Clone, Default)]
pub struct BackendSettings {
    /// NetworkManager connection profile UUID.
    pub uuid: Option<String>,
    /// Connection profile display name (may contain arbitrary characters).
    pub name: Option<String>,
    /// Uninterpreted backend settings, key → value.
    pub passthrough: IndexMap<String, String>,
}

impl BackendSettings {
    /// True when nothing is set; empty settings emit no `networkmanager`
    /// mapping at all.
    pub fn is_empty(&self) -> bool {
        self.uuid.is_none() && self.name.is_none() && self.passthrough.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_definition_defaults() {
        let nd = NetworkDefinition::new("eth0", DefType::Ethernet, Backend::Networkd);
        assert_eq!(nd.id, "eth0");
        assert_eq!(nd.def_type, DefType::Ethernet);
        assert_eq!(nd.backend, Backend::Networkd);
        assert!(nd.match_clause.is_none());
        assert!(!nd.wake_on_lan);
        assert!(nd.access_points.is_empty());
        assert!(nd.backend_settings.is_empty());
    }

    #[test]
    fn test_backend_settings_is_empty() {
        let mut s = BackendSettings::default();
        assert!(s.is_empty());

        s.name = Some("profile".into());
        assert!(!s.is_empty());

        let mut s = BackendSettings::default();
        s.passthrough.insert("ipv4.method".into(), "auto".into());
        assert!(!s.is_empty());
    }

    #[test]
    fn test_access_point_keyed_by_ssid() {
        let mut nd = NetworkDefinition::new("wlan0", DefType::Wifi, Backend::NetworkManager);
        nd.access_points
            .insert("MyWifi".into(), AccessPoint::new(WifiMode::Infrastructure));
        nd.access_points
            .insert("MyWifi".into(), AccessPoint::new(WifiMode::Adhoc));

        // SSID keys are unique within one definition
        assert_eq!(nd.access_points.len(), 1);
        assert_eq!(nd.access_points["MyWifi"].mode, WifiMode::Adhoc);
    }
}
