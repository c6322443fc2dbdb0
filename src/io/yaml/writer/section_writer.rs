//! Netplan section writers
//!
//! This module contains writers for the conditional sections of a
//! definition document: the match clause, the wake-on-lan and modem
//! fields, the wifi access-points mapping and the NetworkManager
//! backend-settings mapping.

use crate::error::Result;
use crate::netdef::{BackendSettings, NetworkDefinition};
use crate::notification::{NotificationCollection, NotificationType};
use crate::types::DefType;

use super::stream_writer::{YamlStreamWriter, YamlStreamWriterExt};

/// Writes the per-definition sections nested under `<type>/<id>`.
pub struct SectionWriter<'a, W: YamlStreamWriter> {
    writer: &'a mut W,
    notifications: &'a mut NotificationCollection,
}

impl<'a, W: YamlStreamWriter> SectionWriter<'a, W> {
    /// Create a new section writer.
    pub fn new(writer: &'a mut W, notifications: &'a mut NotificationCollection) -> Self {
        Self {
            writer,
            notifications,
        }
    }

    /// Write every field of the definition that follows the `renderer`
    /// key, honoring the opaque-type rule: an `Other`-typed definition
    /// gets backend settings only, never the typed fields.
    pub fn write_body(&mut self, netdef: &NetworkDefinition) -> Result<()> {
        if !netdef.def_type.is_other() {
            if netdef.match_clause.is_some() {
                self.write_match(netdef)?;
            }
            self.writer.write_flag("wakeonlan", netdef.wake_on_lan)?;
            self.write_modem_params(netdef)?;
            if netdef.def_type == DefType::Wifi && !netdef.access_points.is_empty() {
                self.write_access_points(netdef)?;
            }
        }
        self.write_backend_settings(&netdef.backend_settings)
    }

    /// Write the `match` mapping with the originally matched device name.
    ///
    /// An empty clause still emits `match: {}`.
    pub fn write_match(&mut self, netdef: &NetworkDefinition) -> Result<()> {
        let clause = match &netdef.match_clause {
            Some(clause) => clause,
            None => return Ok(()),
        };
        self.writer.scalar_plain("match")?;
        self.writer.mapping_start()?;
        if let Some(name) = clause.original_name.as_deref() {
            // Device names are simple tokens
            self.writer.write_pair_plain("name", name)?;
        }
        self.writer.mapping_end()
    }

    fn write_modem_params(&mut self, netdef: &NetworkDefinition) -> Result<()> {
        let params = &netdef.modem_params;
        self.writer.write_flag("auto-config", params.auto_config)?;
        self.writer.write_optional_quoted("apn", params.apn.as_deref())?;
        self.writer
            .write_optional_quoted("device-id", params.device_id.as_deref())?;
        self.writer
            .write_optional_quoted("network-id", params.network_id.as_deref())?;
        self.writer.write_optional_quoted("pin", params.pin.as_deref())?;
        self.writer
            .write_optional_quoted("sim-id", params.sim_id.as_deref())?;
        self.writer
            .write_optional_quoted("sim-operator-id", params.sim_operator_id.as_deref())?;
        Ok(())
    }

    /// Write the `access-points` mapping of a wifi definition.
    ///
    /// SSIDs are quoted keys since they may look numeric or contain
    /// reserved characters. An unsupported mode falls back to
    /// `infrastructure` with a warning; the write itself succeeds.
    pub fn write_access_points(&mut self, netdef: &NetworkDefinition) -> Result<()> {
        self.writer.scalar_plain("access-points")?;
        self.writer.mapping_start()?;
        for (ssid, ap) in &netdef.access_points {
            self.writer.scalar_quoted(ssid)?;
            self.writer.mapping_start()?;
            self.writer.write_flag("hidden", ap.hidden)?;
            self.writer.scalar_plain("mode")?;
            match ap.mode.canonical_str() {
                Some(mode) => self.writer.scalar_plain(mode)?,
                None => {
                    let message = format!(
                        "{} (SSID {}): unsupported access point mode, falling back to 'infrastructure'",
                        netdef.id, ssid
                    );
                    log::warn!("{}", message);
                    self.notifications.notify(NotificationType::Warning, message);
                    self.writer.scalar_plain("infrastructure")?;
                }
            }
            self.write_backend_settings(&ap.backend_settings)?;
            self.writer.mapping_end()?;
        }
        self.writer.mapping_end()
    }

    /// Write the `networkmanager` backend-settings mapping.
    ///
    /// Shared between the definition level and each access point.
    /// All-empty settings emit nothing and succeed.
    pub fn write_backend_settings(&mut self, settings: &BackendSettings) -> Result<()> {
        if settings.is_empty() {
            return Ok(());
        }
        self.writer.scalar_plain("networkmanager")?;
        self.writer.mapping_start()?;
        if let Some(uuid) = settings.uuid.as_deref() {
            self.writer.write_pair_plain("uuid", uuid)?;
        }
        self.writer
            .write_optional_quoted("name", settings.name.as_deref())?;
        if !settings.passthrough.is_empty() {
            self.writer.scalar_plain("passthrough")?;
            self.writer.mapping_start()?;
            for (key, value) in &settings.passthrough {
                // Values are opaque strings and always quoted, whatever
                // type they may look like.
                self.writer.write_pair_quoted(key, value)?;
            }
            self.writer.mapping_end()?;
        }
        self.writer.mapping_end()
    }
}
