//! Blackbox tests of the netplan definition writer.
//!
//! These mirror the behavior contract end to end: one definition in,
//! one file below `<root>/etc/netplan/` out, with deterministic
//! naming, priority prefixes and document structure.

mod common;

use common::*;
use netplan_render::{
    write_netdef, Backend, DefType, MatchClause, NetdefWriter, NetplanError, NetworkDefinition,
    WifiMode,
};

#[test]
fn writes_generic_definition_under_low_priority_name() {
    let root = sandbox_root();
    let nd = ethernet_netdef("some-netplan-id");

    let path = write_netdef(&nd, root.path()).unwrap();

    assert_eq!(
        path,
        confdir(root.path()).join("10-netplan-some-netplan-id.yaml")
    );
    assert_eq!(
        read_conf(&path),
        "network:\n\
        \x20 version: 2\n\
        \x20 ethernets:\n\
        \x20   some-netplan-id:\n\
        \x20     renderer: networkd\n\
        \x20     match:\n\
        \x20       name: eth42\n"
    );
}

#[test]
fn uuid_definition_gets_high_priority_connection_profile_name() {
    let root = sandbox_root();
    let uuid = "87749f1d-334f-40b2-98d4-55db58965f5f";
    let mut nd = NetworkDefinition::new("mybr", DefType::Bridge, Backend::NetworkManager);
    nd.backend_settings = nm_settings(uuid, "renamed netplan bridge");

    let path = write_netdef(&nd, root.path()).unwrap();

    assert_eq!(path, confdir(root.path()).join(format!("90-NM-{uuid}.yaml")));
    assert_eq!(
        read_conf(&path),
        format!(
            "network:\n\
            \x20 version: 2\n\
            \x20 bridges:\n\
            \x20   mybr:\n\
            \x20     renderer: NetworkManager\n\
            \x20     networkmanager:\n\
            \x20       uuid: {uuid}\n\
            \x20       name: \"renamed netplan bridge\"\n\
            \x20       passthrough:\n\
            \x20         ipv4.method: \"auto\"\n"
        )
    );
}

#[test]
fn serializes_modem_definition_with_quoted_parameters() {
    let root = sandbox_root();
    let uuid = "a08c5805-7cf5-43f7-afb9-12cb30f6eca3";
    let mut nd = NetworkDefinition::new(format!("NM-{uuid}"), DefType::Modem, Backend::NetworkManager);
    nd.match_clause = Some(MatchClause::default());
    nd.modem_params.apn = Some("internet2.voicestream.com".into());
    nd.modem_params.network_id = Some("254098".into());
    nd.modem_params.pin = Some("123456".into());
    nd.modem_params.sim_operator_id = Some("310260".into());
    nd.backend_settings.uuid = Some(uuid.into());
    nd.backend_settings.name = Some("T-Mobile Funkadelic 2".into());
    nd.backend_settings
        .passthrough
        .insert("gsm.home-only".into(), "true".into());
    nd.backend_settings
        .passthrough
        .insert("ipv6.dns-search".into(), "".into());

    let path = write_netdef(&nd, root.path()).unwrap();

    assert_eq!(
        read_conf(&path),
        format!(
            "network:\n\
            \x20 version: 2\n\
            \x20 modems:\n\
            \x20   NM-{uuid}:\n\
            \x20     renderer: NetworkManager\n\
            \x20     match: {{}}\n\
            \x20     apn: \"internet2.voicestream.com\"\n\
            \x20     network-id: \"254098\"\n\
            \x20     pin: \"123456\"\n\
            \x20     sim-operator-id: \"310260\"\n\
            \x20     networkmanager:\n\
            \x20       uuid: {uuid}\n\
            \x20       name: \"T-Mobile Funkadelic 2\"\n\
            \x20       passthrough:\n\
            \x20         gsm.home-only: \"true\"\n\
            \x20         ipv6.dns-search: \"\"\n"
        )
    );
}

#[test]
fn serializes_wifi_access_points_with_nested_settings() {
    let root = sandbox_root();
    let mut nd = wifi_netdef("myid", "SOME-SSID", WifiMode::Infrastructure);
    let ap = nd.access_points.get_mut("SOME-SSID").unwrap();
    ap.hidden = true;
    ap.backend_settings.uuid = Some("some-uuid".into());
    ap.backend_settings.name = Some("Some NM name with spaces".into());
    ap.backend_settings
        .passthrough
        .insert("wifi.mode".into(), "mesh".into());

    let path = write_netdef(&nd, root.path()).unwrap();

    assert_eq!(path, confdir(root.path()).join("10-netplan-myid.yaml"));
    assert_eq!(
        read_conf(&path),
        "network:\n\
        \x20 version: 2\n\
        \x20 wifis:\n\
        \x20   myid:\n\
        \x20     renderer: NetworkManager\n\
        \x20     access-points:\n\
        \x20       \"SOME-SSID\":\n\
        \x20         hidden: true\n\
        \x20         mode: infrastructure\n\
        \x20         networkmanager:\n\
        \x20           uuid: some-uuid\n\
        \x20           name: \"Some NM name with spaces\"\n\
        \x20           passthrough:\n\
        \x20             wifi.mode: \"mesh\"\n"
    );
}

#[test]
fn opaque_definition_preserves_only_backend_settings() {
    let root = sandbox_root();
    let uuid = "a08c5805-7cf5-43f7-afb9-12cb30f6eca3";
    let mut nd = NetworkDefinition::new(format!("NM-{uuid}"), DefType::Other, Backend::NetworkManager);
    nd.wake_on_lan = true;
    nd.match_clause = Some(MatchClause::default());
    nd.backend_settings.uuid = Some(uuid.into());
    nd.backend_settings
        .passthrough
        .insert("connection.type".into(), "bluetooth".into());

    let path = write_netdef(&nd, root.path()).unwrap();
    let content = read_conf(&path);

    assert_eq!(
        content,
        format!(
            "network:\n\
            \x20 version: 2\n\
            \x20 others:\n\
            \x20   NM-{uuid}:\n\
            \x20     renderer: NetworkManager\n\
            \x20     networkmanager:\n\
            \x20       uuid: {uuid}\n\
            \x20       passthrough:\n\
            \x20         connection.type: \"bluetooth\"\n"
        )
    );
    assert!(!content.contains("match"));
    assert!(!content.contains("wakeonlan"));
}

#[test]
fn writing_twice_is_byte_identical() {
    let root = sandbox_root();
    let mut nd = wifi_netdef("wlan0", "MyWifi", WifiMode::Infrastructure);
    nd.backend_settings
        .passthrough
        .insert("wifi-security.key-mgmt".into(), "wpa-psk".into());
    nd.backend_settings
        .passthrough
        .insert("wifi-security.psk".into(), "s3cret".into());

    let first_path = write_netdef(&nd, root.path()).unwrap();
    let first = read_conf(&first_path);
    let second_path = write_netdef(&nd, root.path()).unwrap();
    let second = read_conf(&second_path);

    assert_eq!(first_path, second_path);
    assert_eq!(first, second);
}

#[test]
fn unsupported_ap_mode_warns_and_falls_back() {
    let root = sandbox_root();
    let nd = wifi_netdef("wlan0", "guest", WifiMode::Other);

    let mut writer = NetdefWriter::with_rootdir(&nd, root.path());
    let path = writer.write().unwrap();

    assert!(read_conf(&path).contains("mode: infrastructure"));
    assert_eq!(writer.notifications.len(), 1);
    let warning = writer.notifications.iter().next().unwrap();
    assert!(warning.message.contains("wlan0"));
    assert!(warning.message.contains("guest"));
}

#[test]
fn missing_confdir_reports_output_open_failure() {
    let root = tempfile::TempDir::new().unwrap();
    // no etc/netplan below the root
    let nd = ethernet_netdef("eth0");

    let err = write_netdef(&nd, root.path()).unwrap_err();
    match err {
        NetplanError::OutputOpen { path, .. } => {
            assert_eq!(path, confdir(root.path()).join("10-netplan-eth0.yaml"));
        }
        other => panic!("expected OutputOpen, got {other:?}"),
    }
    assert!(!confdir(root.path()).exists());
}

#[test]
fn truncates_previous_content_at_the_same_path() {
    let root = sandbox_root();
    let nd = ethernet_netdef("eth0");

    let path = write_netdef(&nd, root.path()).unwrap();
    std::fs::write(&path, "stale content that is much longer than the real document\n".repeat(20))
        .unwrap();
    let rewritten = write_netdef(&nd, root.path()).unwrap();

    assert_eq!(rewritten, path);
    assert!(read_conf(&path).starts_with("network:\n"));
    assert!(!read_conf(&path).contains("stale"));
}
