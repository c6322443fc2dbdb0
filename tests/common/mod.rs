//! Shared test utilities for netplan-render integration tests.
//!
//! Provides sandboxed root directories (via `tempfile`) and builders for
//! the sample definitions the blackbox tests serialize.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use netplan_render::{
    AccessPoint, Backend, BackendSettings, DefType, MatchClause, NetworkDefinition, WifiMode,
};
use tempfile::TempDir;

/// Create a sandbox root with an existing `etc/netplan` directory.
pub fn sandbox_root() -> TempDir {
    let root = TempDir::new().expect("create sandbox root");
    fs::create_dir_all(root.path().join("etc/netplan")).expect("create etc/netplan");
    root
}

/// Path of the configuration directory below a sandbox root.
pub fn confdir(root: &Path) -> PathBuf {
    root.join("etc/netplan")
}

/// Read a generated file back as a string.
pub fn read_conf(path: &Path) -> String {
    fs::read_to_string(path).expect("read generated file")
}

/// A plain ethernet definition rendered by networkd.
pub fn ethernet_netdef(id: &str) -> NetworkDefinition {
    let mut nd = NetworkDefinition::new(id, DefType::Ethernet, Backend::Networkd);
    nd.match_clause = Some(MatchClause {
        original_name: Some("eth42".into()),
    });
    nd
}

/// A wifi definition with one access point, NetworkManager-rendered.
pub fn wifi_netdef(id: &str, ssid: &str, mode: WifiMode) -> NetworkDefinition {
    let mut nd = NetworkDefinition::new(id, DefType::Wifi, Backend::NetworkManager);
    nd.access_points.insert(ssid.into(), AccessPoint::new(mode));
    nd
}

/// NetworkManager backend settings with uuid, display name and one
/// passthrough entry.
pub fn nm_settings(uuid: &str, name: &str) -> BackendSettings {
    let mut settings = BackendSettings::default();
    settings.uuid = Some(uuid.into());
    settings.name = Some(name.into());
    settings
        .passthrough
        .insert("ipv4.method".into(), "auto".into());
    settings
}
